//! Game state and core simulation types
//!
//! `GameState` owns everything a run needs: player, camera, lane window and
//! the lane generator with its RNG. Components receive pieces of it by
//! reference; none of them keep state of their own between calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::buffer::LaneBuffer;
use super::camera::Camera;
use super::generator::LaneGenerator;
use super::lane::{Lane, ObstacleKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// The player token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// `x` = column (tiles), `y` = row
    pub pos: Vec2,
    /// Footprint width (tiles)
    pub size: f32,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(START_COLUMN, 0.0),
            size: PLAYER_SIZE,
            alive: true,
        }
    }
}

impl Player {
    #[inline]
    pub fn column(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn row(&self) -> f32 {
        self.pos.y
    }

    /// Row of the lane the player stands in
    #[inline]
    pub fn lane_row(&self) -> u32 {
        self.pos.y.max(0.0).floor() as u32
    }

    /// Horizontal extent `[column, column + size]`
    #[inline]
    pub fn footprint(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + self.size)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hit by a road creature
    Struck(ObstacleKind),
    /// Fell in the river
    Drowned,
    /// Dropped below the scroll front
    FellBehind,
}

/// Things the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score rose to a new value this run
    ScoreChanged { score: u32 },
    /// The player died
    Died { cause: DeathCause, score: u32 },
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub camera: Camera,
    pub player: Player,
    pub score: u32,
    /// Visible rows bottom to top; rows not held come back as grass
    pub lanes: Vec<Lane>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values
    pub tuning: Tuning,
    pub player: Player,
    pub camera: Camera,
    /// Highest `floor(row)` reached this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Generated lanes near the camera
    pub lanes: LaneBuffer,
    /// Pending events, drained by the caller
    pub events: Vec<GameEvent>,
    generator: LaneGenerator,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            tuning,
            player: Player::default(),
            camera: Camera::default(),
            score: 0,
            time_ticks: 0,
            lanes: LaneBuffer::new(),
            events: Vec::new(),
            generator: LaneGenerator::new(seed),
        };
        state.ensure_lanes();
        state
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Generate lanes up to `visible_rows + lookahead_rows` past the camera
    /// and drop lanes far behind it
    pub fn ensure_lanes(&mut self) {
        let base = self.camera.base_row();
        let target = base + self.tuning.visible_rows + self.tuning.lookahead_rows;
        while self.lanes.next_row() < target {
            let row = self.lanes.next_row();
            let lane = self.generator.generate_lane(row, self.score, &self.tuning);
            self.lanes.push(lane);
        }

        let horizon = base.saturating_sub(self.tuning.evict_margin_rows);
        let dropped = self.lanes.evict_below(horizon);
        if dropped > 0 {
            log::debug!("Evicted {} lanes below row {}", dropped, horizon);
        }
    }

    /// Discard all lanes and regenerate the initial window
    pub(crate) fn rebuild_lanes(&mut self) {
        self.lanes.clear();
        self.generator.restart();
        self.ensure_lanes();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Everything the renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        let base = self.camera.base_row();
        let lanes = (base..base + self.tuning.visible_rows)
            .map(|row| self.lanes.lane_or_grass(row))
            .collect();
        Snapshot {
            camera: self.camera,
            player: self.player,
            score: self.score,
            lanes,
        }
    }
}
