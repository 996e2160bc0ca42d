//! Procedural lane generation
//!
//! Lanes are produced one row at a time, strictly in increasing row order.
//! The generator carries two counters across calls:
//! - `pending_river_run`: river lanes still owed to the crossing in progress
//! - `land_streak`: consecutive non-river lanes emitted since the last river
//!
//! A river run only starts after `MIN_LAND_BEFORE_RIVER` land lanes and is
//! always emitted in full before normal selection resumes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::lane::{Direction, Lane, LaneKind, Obstacle, ObstacleKind};
use crate::consts::{GRASS_PREFIX_ROWS, MIN_LAND_BEFORE_RIVER};
use crate::tuning::Tuning;

/// Seeded lane generator
#[derive(Debug, Clone)]
pub struct LaneGenerator {
    seed: u64,
    rng: Pcg32,
    pending_river_run: u32,
    land_streak: u32,
    next_row: u32,
}

impl LaneGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            pending_river_run: 0,
            land_streak: 0,
            next_row: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Row the next call to [`generate_lane`](Self::generate_lane) must ask for
    pub fn next_row(&self) -> u32 {
        self.next_row
    }

    /// Forget lane history (new run). The RNG stream keeps advancing.
    pub fn restart(&mut self) {
        self.pending_river_run = 0;
        self.land_streak = 0;
        self.next_row = 0;
    }

    /// Produce the lane for `row` at the current `score`
    pub fn generate_lane(&mut self, row: u32, score: u32, tuning: &Tuning) -> Lane {
        debug_assert_eq!(row, self.next_row, "lanes must be generated in row order");
        self.next_row = row + 1;

        let (kind, multi_lane) = self.pick_kind(row, score, tuning);
        if kind == LaneKind::River {
            self.land_streak = 0;
        } else {
            self.land_streak += 1;
        }

        let direction = if self.rng.random_bool(0.5) {
            Direction::Left
        } else {
            Direction::Right
        };

        let base_speed = match kind {
            LaneKind::Grass => 0.0,
            LaneKind::Road => tuning.road_speed.sample(&mut self.rng),
            LaneKind::River => tuning.river_speed.sample(&mut self.rng),
        };

        let obstacles = self.populate(kind, base_speed, multi_lane, tuning);

        Lane {
            row,
            kind,
            direction,
            base_speed,
            multi_lane,
            obstacles,
        }
    }

    /// Decide terrain, returning `(kind, multi_lane)`
    fn pick_kind(&mut self, row: u32, score: u32, tuning: &Tuning) -> (LaneKind, bool) {
        if row < GRASS_PREFIX_ROWS {
            return (LaneKind::Grass, false);
        }

        if self.pending_river_run > 0 {
            self.pending_river_run -= 1;
            return (LaneKind::River, true);
        }

        let can_place_river = self.land_streak >= MIN_LAND_BEFORE_RIVER;
        if can_place_river && self.rng.random_bool(tuning.river_start_chance.clamp(0.0, 1.0)) {
            let run_len = self.roll_run_len(score, tuning);
            self.pending_river_run = run_len - 1;
            log::debug!(
                "River run at row {}: {} lanes (max {} at score {})",
                row,
                run_len,
                tuning.max_run_len(score),
                score
            );
            return (LaneKind::River, run_len >= 2);
        }

        if self.rng.random_bool(tuning.grass_chance.clamp(0.0, 1.0)) {
            (LaneKind::Grass, false)
        } else {
            (LaneKind::Road, false)
        }
    }

    /// Draw a river run length in `1..=max_run_len(score)`
    ///
    /// `u^bias` skews toward short runs while the bias exponent is above 1
    /// and flattens toward long runs as it drops with score.
    fn roll_run_len(&mut self, score: u32, tuning: &Tuning) -> u32 {
        let max_len = tuning.max_run_len(score);
        let bias = tuning.run_bias(score);
        let u: f32 = self.rng.random();
        let r = u.powf(bias);
        let len = (r * max_len as f32).floor() as u32 + 1;
        len.clamp(1, max_len)
    }

    fn populate(
        &mut self,
        kind: LaneKind,
        base_speed: f32,
        multi_lane: bool,
        tuning: &Tuning,
    ) -> Vec<Obstacle> {
        let density = match kind {
            LaneKind::Grass => return Vec::new(),
            LaneKind::Road => tuning.road_density.sample(&mut self.rng),
            LaneKind::River => tuning.river_density.sample(&mut self.rng),
        };

        let mut count = ((tuning.screen_width_tiles * density).floor() as usize).max(1);
        if kind == LaneKind::River && multi_lane {
            let boosted = (count as f32 * tuning.crossing_density_boost).ceil() as usize;
            count = (count + 1).max(boosted);
        }

        let mut obstacles = Vec::with_capacity(count);
        for _ in 0..count {
            let speed = base_speed * tuning.speed_factor.sample(&mut self.rng);
            let (obstacle_kind, width) = if kind == LaneKind::Road {
                if self.rng.random_bool(tuning.bear_chance.clamp(0.0, 1.0)) {
                    (ObstacleKind::Bear, tuning.bear_width.sample(&mut self.rng))
                } else {
                    (ObstacleKind::Spider, tuning.spider_width.sample(&mut self.rng))
                }
            } else {
                (ObstacleKind::Platform, tuning.platform_width.sample(&mut self.rng))
            };
            // Whole tiles wide, starting on whole tile columns
            let width = width.floor().max(1.0);
            let u: f32 = self.rng.random();
            let position = (u * tuning.screen_width_tiles).floor();
            obstacles.push(Obstacle::new(obstacle_kind, position, width, speed));
        }
        obstacles
    }
}
