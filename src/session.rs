//! Frame driver
//!
//! Glues a [`GameState`] to a [`ScoreStore`]: the host calls [`Session::frame`]
//! once per display refresh with the raw elapsed time, and forwards discrete
//! input through [`Session::step`] and [`Session::reset`].

use crate::best_score::ScoreStore;
use crate::sim::{self, GameEvent, GameState, Snapshot, Step};
use crate::tuning::Tuning;

/// A running game plus its best-score store
#[derive(Debug)]
pub struct Session<S: ScoreStore> {
    pub state: GameState,
    store: S,
    best: u32,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_tuning(seed, Tuning::default(), store)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, store: S) -> Self {
        let best = store.best();
        Self {
            state: GameState::with_tuning(seed, tuning),
            store,
            best,
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one tick for `elapsed` seconds of wall time (clamped to
    /// `MAX_DT`, non-finite treated as 0) and forward score changes to the
    /// store. Returns the events produced by the tick.
    pub fn frame(&mut self, elapsed: f32) -> Vec<GameEvent> {
        sim::tick(&mut self.state, sim::clamp_dt(elapsed));
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::ScoreChanged { score } = event {
                self.best = self.store.merge(*score);
            }
        }
        events
    }

    /// Apply a discrete move between frames
    pub fn step(&mut self, step: Step) -> bool {
        sim::step(&mut self.state, step)
    }

    /// Start a new run
    pub fn reset(&mut self) {
        sim::reset(&mut self.state);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}
