//! Scrolling camera
//!
//! The camera sits still until the player first moves, then scrolls upward
//! faster the further the player pulls ahead of it.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Vertical scroll state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Scroll offset (rows); rows below this are behind the scroll front
    pub position: f32,
    /// Set by the first accepted player move
    pub has_started: bool,
}

impl Camera {
    /// First row of the visible window
    #[inline]
    pub fn base_row(&self) -> u32 {
        self.position.max(0.0).floor() as u32
    }

    /// Scroll speed (rows/s) for a player `lead` rows above the camera
    pub fn scroll_speed(lead: f32, tuning: &Tuning) -> f32 {
        let span = (tuning.visible_rows.saturating_sub(1)).max(1) as f32;
        let t = (lead.max(0.0) / span).min(1.0);
        tuning.scroll_base_speed + (tuning.scroll_max_speed - tuning.scroll_base_speed) * t
    }

    /// Advance the scroll by `dt` seconds with the player at `player_row`
    pub fn advance(&mut self, player_row: f32, dt: f32, tuning: &Tuning) {
        if !self.has_started {
            return;
        }
        let lead = player_row - self.position;
        self.position += Self::scroll_speed(lead, tuning) * dt;
    }
}
