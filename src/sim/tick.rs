//! Per-frame simulation tick
//!
//! Order within a tick is fixed: camera, obstacles, collision, score, lane
//! top-up. Moves and resets are applied between ticks, never during one.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, evaluate, fallen_behind};
use super::motion::advance_lane;
use super::state::{DeathCause, GameEvent, GameState, Player};
use crate::consts::MAX_DT;

/// Discrete player step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// `(column, row)` delta
    pub fn delta(self) -> IVec2 {
        match self {
            Step::Up => IVec2::new(0, 1),
            Step::Down => IVec2::new(0, -1),
            Step::Left => IVec2::new(-1, 0),
            Step::Right => IVec2::new(1, 0),
        }
    }
}

/// Clamp a frame delta into `[0, MAX_DT]`; non-finite deltas become 0
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_DT)
    } else {
        0.0
    }
}

/// Advance the game state by `dt` seconds (clamped to `MAX_DT`)
pub fn tick(state: &mut GameState, dt: f32) {
    // The world freezes once the run is over
    if !state.player.alive {
        return;
    }
    let dt = clamp_dt(dt);
    state.time_ticks += 1;

    state.camera.advance(state.player.row(), dt, &state.tuning);

    // Only lanes near the screen move
    let base = state.camera.base_row();
    let margin = state.tuning.sim_margin_rows;
    let first = base.saturating_sub(margin);
    let last = base + state.tuning.visible_rows + margin;
    let screen_width = state.tuning.screen_width_tiles;
    for lane in state.lanes.range_mut(first, last) {
        advance_lane(lane, dt, screen_width);
    }

    let contact = match state.lanes.get(state.player.lane_row()) {
        Some(lane) => evaluate(&state.player, lane, dt, &state.tuning),
        None => Contact::Safe,
    };
    match contact {
        Contact::Safe => {}
        Contact::Carried { delta } => state.player.pos.x += delta,
        Contact::Struck { kind } => kill(state, DeathCause::Struck(kind)),
        Contact::Drowned => kill(state, DeathCause::Drowned),
    }

    if state.player.alive && fallen_behind(&state.player, state.camera.position) {
        kill(state, DeathCause::FellBehind);
    }

    if state.player.alive {
        update_score(state);
    }

    state.ensure_lanes();
}

fn kill(state: &mut GameState, cause: DeathCause) {
    state.player.alive = false;
    log::info!(
        "Player died at row {:.2} ({:?}), score {}",
        state.player.row(),
        cause,
        state.score
    );
    state.events.push(GameEvent::Died {
        cause,
        score: state.score,
    });
}

fn update_score(state: &mut GameState) {
    let reached = state.player.row().max(0.0).floor() as u32;
    if reached > state.score {
        state.score = reached;
        state.events.push(GameEvent::ScoreChanged { score: reached });
    }
}

/// Apply a discrete move. Ignored while dead; the row never goes below 0.
/// Returns whether the move was accepted.
pub fn apply_move(state: &mut GameState, delta: IVec2) -> bool {
    if !state.player.alive {
        return false;
    }
    state.camera.has_started = true;
    state.player.pos += delta.as_vec2();
    state.player.pos.y = state.player.pos.y.max(0.0);
    true
}

/// Apply a [`Step`]
pub fn step(state: &mut GameState, step: Step) -> bool {
    apply_move(state, step.delta())
}

/// Start a fresh run: player back at the start, camera at the origin, lanes
/// regenerated from row 0
pub fn reset(state: &mut GameState) {
    log::info!("Reset (previous score {})", state.score);
    state.player = Player::default();
    state.camera = Default::default();
    state.score = 0;
    state.time_ticks = 0;
    state.events.clear();
    state.rebuild_lanes();
}
