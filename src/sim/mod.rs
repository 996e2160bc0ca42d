//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Lanes generated strictly in row order
//! - No rendering or platform dependencies

pub mod buffer;
pub mod camera;
pub mod collision;
pub mod generator;
pub mod lane;
pub mod motion;
pub mod state;
pub mod tick;

pub use buffer::LaneBuffer;
pub use camera::Camera;
pub use collision::{Contact, evaluate, fallen_behind, lethal_span, overlap};
pub use generator::LaneGenerator;
pub use lane::{Direction, Lane, LaneKind, Obstacle, ObstacleKind};
pub use motion::advance_lane;
pub use state::{DeathCause, GameEvent, GameState, Player, Snapshot};
pub use tick::{Step, apply_move, clamp_dt, reset, step, tick};
