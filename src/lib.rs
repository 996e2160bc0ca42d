//! Dungeon Escape - endless lane-crossing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lane generation, obstacles, collisions, camera)
//! - `tuning`: Data-driven game balance
//! - `best_score`: Best score persistence seam
//! - `session`: Frame driver tying the simulation to a score store
//!
//! Rendering, input devices and process bootstrap live outside this crate.
//! They read [`sim::Snapshot`] and call [`sim::apply_move`] / [`sim::reset`].

pub mod best_score;
pub mod session;
pub mod sim;
pub mod tuning;

pub use best_score::{MemoryStore, ScoreStore};
pub use session::Session;
pub use tuning::Tuning;

/// Fixed game rules (not tunable)
pub mod consts {
    /// Largest time step a single tick may simulate (seconds)
    pub const MAX_DT: f32 = 0.05;

    /// Player start column (tiles)
    pub const START_COLUMN: f32 = 7.0;
    /// Player footprint width (tiles)
    pub const PLAYER_SIZE: f32 = 0.8;

    /// Rows at the start of the world that are always grass
    pub const GRASS_PREFIX_ROWS: u32 = 3;
    /// Consecutive land lanes required before a river run may start
    pub const MIN_LAND_BEFORE_RIVER: u32 = 3;
}
