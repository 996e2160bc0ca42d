//! Lanes and the obstacles they carry

use serde::{Deserialize, Serialize};

/// Terrain of a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaneKind {
    /// Safe ground, never carries obstacles
    #[default]
    Grass,
    /// Traffic lane; touching a creature's lethal span kills
    Road,
    /// Water; the player must stand on a platform
    River,
}

/// Horizontal travel direction of a lane's obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Long road creature
    Bear,
    /// Short road creature
    Spider,
    /// Floating river platform the player can ride
    Platform,
}

/// An obstacle moving along its lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge, lane-relative (tiles)
    pub position: f32,
    /// Width (tiles)
    pub width: f32,
    /// Resolved speed (tiles/s), never inherited at simulation time
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, position: f32, width: f32, speed: f32) -> Self {
        Self {
            position,
            width,
            speed,
            kind,
        }
    }

    /// Horizontal center (tiles)
    #[inline]
    pub fn center(&self) -> f32 {
        self.position + self.width * 0.5
    }

    /// Signed displacement over `dt` seconds in `direction`
    #[inline]
    pub fn displacement(&self, direction: Direction, dt: f32) -> f32 {
        self.speed * direction.sign() * dt
    }
}

/// One row of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Absolute row index (0 = start)
    pub row: u32,
    pub kind: LaneKind,
    pub direction: Direction,
    /// Lane base speed (tiles/s), 0 for grass
    pub base_speed: f32,
    /// Part of a river crossing two or more lanes deep
    pub multi_lane: bool,
    pub obstacles: Vec<Obstacle>,
}

impl Lane {
    /// Empty grass lane (also used for rows that are not generated)
    pub fn grass(row: u32) -> Self {
        Self {
            row,
            kind: LaneKind::Grass,
            direction: Direction::Right,
            base_speed: 0.0,
            multi_lane: false,
            obstacles: Vec::new(),
        }
    }

    pub fn is_river(&self) -> bool {
        self.kind == LaneKind::River
    }
}
