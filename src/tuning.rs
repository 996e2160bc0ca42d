//! Game balance tuning
//!
//! Every number the generator, simulator and camera use lives here so a
//! partial JSON document can override individual values. Missing fields keep
//! their defaults.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open `[min, max)` range for uniform draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform draw from the span (degenerate spans return `min`)
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// Balance values for lane generation, motion, collision and scrolling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Screen width in tiles (obstacle wrap bounds, obstacle count)
    pub screen_width_tiles: f32,
    /// Rows visible on screen
    pub visible_rows: u32,
    /// Extra rows generated past the top of the screen
    pub lookahead_rows: u32,
    /// Rows simulated outside the visible window on each side
    pub sim_margin_rows: u32,
    /// Rows kept behind the camera before lanes are discarded
    pub evict_margin_rows: u32,

    // === Lane selection ===
    /// Chance to start a river run once the land streak allows it
    pub river_start_chance: f64,
    /// Chance a land lane is grass rather than road
    pub grass_chance: f64,
    /// Hard cap on river run length
    pub max_river_run: u32,
    /// Starting cap on river run length at score 0
    pub base_river_run: u32,
    /// Score points per +1 to the river run cap
    pub river_run_growth_score: u32,
    /// Run length bias exponent at score 0
    pub run_bias_start: f32,
    /// Run length bias exponent floor
    pub run_bias_floor: f32,
    /// Score over which the bias drops by 1.0
    pub run_bias_score_scale: f32,

    // === Lane contents ===
    pub road_speed: Span,
    pub river_speed: Span,
    pub road_density: Span,
    pub river_density: Span,
    /// Per-obstacle multiplier on lane base speed
    pub speed_factor: Span,
    /// Chance a road obstacle is a bear
    pub bear_chance: f64,
    pub bear_width: Span,
    pub spider_width: Span,
    pub platform_width: Span,
    /// Platform count multiplier for multi-lane river crossings
    pub crossing_density_boost: f32,

    // === Collision ===
    /// Minimum overlap (tiles) with a lethal span that kills
    pub road_lethal_overlap: f32,
    /// Minimum overlap (tiles) with a platform that carries
    pub river_carry_overlap: f32,
    pub bear_lethal_ratio: f32,
    pub bear_lethal_cap: f32,
    pub spider_lethal_ratio: f32,
    pub spider_lethal_cap: f32,

    // === Camera ===
    /// Scroll speed with the player level with the camera (rows/s)
    pub scroll_base_speed: f32,
    /// Scroll speed with the player a full screen ahead (rows/s)
    pub scroll_max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width_tiles: 15.0,
            visible_rows: 20,
            lookahead_rows: 5,
            sim_margin_rows: 2,
            evict_margin_rows: 3,

            river_start_chance: 0.25,
            grass_chance: 0.25,
            max_river_run: 10,
            base_river_run: 2,
            river_run_growth_score: 25,
            run_bias_start: 1.15,
            run_bias_floor: 0.8,
            run_bias_score_scale: 300.0,

            road_speed: Span::new(2.0, 4.0),
            river_speed: Span::new(1.2, 2.5),
            road_density: Span::new(0.12, 0.22),
            river_density: Span::new(0.10, 0.18),
            speed_factor: Span::new(0.7, 1.3),
            bear_chance: 0.35,
            bear_width: Span::new(2.0, 4.0),
            spider_width: Span::new(1.0, 2.0),
            platform_width: Span::new(1.0, 3.0),
            crossing_density_boost: 1.4,

            road_lethal_overlap: 0.02,
            river_carry_overlap: 0.0,
            bear_lethal_ratio: 0.5,
            bear_lethal_cap: 0.8,
            spider_lethal_ratio: 0.45,
            spider_lethal_cap: 0.6,

            scroll_base_speed: 0.1,
            scroll_max_speed: 0.95,
        }
    }
}

impl Tuning {
    /// Longest river run allowed at `score`
    pub fn max_run_len(&self, score: u32) -> u32 {
        let growth = score / self.river_run_growth_score.max(1);
        (self.base_river_run + growth).min(self.max_river_run).max(1)
    }

    /// Run length bias exponent at `score` (shrinks toward the floor)
    pub fn run_bias(&self, score: u32) -> f32 {
        (self.run_bias_start - score as f32 / self.run_bias_score_scale).max(self.run_bias_floor)
    }

    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a JSON tuning document, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Invalid tuning document ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dungeon_escape_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded tuning overrides from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_run_len_growth() {
        let tuning = Tuning::default();
        assert_eq!(tuning.max_run_len(0), 2);
        assert_eq!(tuning.max_run_len(24), 2);
        assert_eq!(tuning.max_run_len(25), 3);
        assert_eq!(tuning.max_run_len(100), 6);
        assert_eq!(tuning.max_run_len(200), 10);
        assert_eq!(tuning.max_run_len(10_000), 10);
    }

    #[test]
    fn test_run_bias_floor() {
        let tuning = Tuning::default();
        assert!((tuning.run_bias(0) - 1.15).abs() < 1e-6);
        assert!((tuning.run_bias(30) - 1.05).abs() < 1e-5);
        assert!((tuning.run_bias(105) - 0.8).abs() < 1e-5);
        assert_eq!(tuning.run_bias(1000), 0.8);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "visible_rows": 12, "grass_chance": 0.5 }"#).unwrap();
        assert_eq!(tuning.visible_rows, 12);
        assert_eq!(tuning.grass_chance, 0.5);
        assert_eq!(tuning.screen_width_tiles, 15.0);
        assert_eq!(tuning.road_speed, Span::new(2.0, 4.0));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert_eq!(Tuning::from_json_or_default("{ not json"), Tuning::default());
    }
}
