//! Player vs lane collision
//!
//! Roads and rivers use different overlap thresholds: a road
//! creature needs a small bite of overlap with its lethal span to kill, while
//! any touch of a river platform is enough to ride it.

use super::lane::{Lane, LaneKind, Obstacle, ObstacleKind};
use super::state::Player;
use crate::tuning::Tuning;

/// Outcome of the player's contact with their current lane for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Nothing happened
    Safe,
    /// Standing on a platform; shift the player column by `delta`
    Carried { delta: f32 },
    /// Hit by a road creature
    Struck { kind: ObstacleKind },
    /// In the river without a platform
    Drowned,
}

impl Contact {
    pub fn is_lethal(&self) -> bool {
        matches!(self, Contact::Struck { .. } | Contact::Drowned)
    }

    /// Horizontal carry applied to the player
    pub fn carry(&self) -> f32 {
        match self {
            Contact::Carried { delta } => *delta,
            _ => 0.0,
        }
    }
}

/// Overlap length of `[a0, a1]` and `[b0, b1]` (negative when apart)
#[inline]
pub fn overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    a1.min(b1) - a0.max(b0)
}

/// Lethal `[left, right]` span of a road creature
pub fn lethal_span(obstacle: &Obstacle, tuning: &Tuning) -> (f32, f32) {
    let half = match obstacle.kind {
        ObstacleKind::Bear => {
            (obstacle.width * tuning.bear_lethal_ratio).min(tuning.bear_lethal_cap)
        }
        ObstacleKind::Spider => {
            (obstacle.width * tuning.spider_lethal_ratio).min(tuning.spider_lethal_cap)
        }
        // Platforms never appear on roads; treat the full body as lethal
        ObstacleKind::Platform => obstacle.width * 0.5,
    };
    let center = obstacle.center();
    (center - half, center + half)
}

/// Evaluate the player against `lane` (a missing lane should be passed as
/// grass by the caller)
pub fn evaluate(player: &Player, lane: &Lane, dt: f32, tuning: &Tuning) -> Contact {
    let (left, right) = player.footprint();

    match lane.kind {
        LaneKind::Grass => Contact::Safe,

        LaneKind::Road => lane
            .obstacles
            .iter()
            .find(|o| {
                let (l0, l1) = lethal_span(o, tuning);
                overlap(left, right, l0, l1) >= tuning.road_lethal_overlap
            })
            .map_or(Contact::Safe, |o| Contact::Struck { kind: o.kind }),

        LaneKind::River => lane
            .obstacles
            .iter()
            .find(|o| {
                overlap(left, right, o.position, o.position + o.width) >= tuning.river_carry_overlap
            })
            .map_or(Contact::Drowned, |o| Contact::Carried {
                delta: o.displacement(lane.direction, dt),
            }),
    }
}

/// The player has dropped below the scroll front
#[inline]
pub fn fallen_behind(player: &Player, camera_position: f32) -> bool {
    player.row() < camera_position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lane::Direction;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(column: f32) -> Player {
        Player {
            pos: Vec2::new(column, 5.0),
            ..Default::default()
        }
    }

    fn lane(kind: LaneKind, direction: Direction, obstacles: Vec<Obstacle>) -> Lane {
        Lane {
            row: 5,
            kind,
            direction,
            base_speed: 2.0,
            multi_lane: false,
            obstacles,
        }
    }

    #[test]
    fn test_grass_is_safe() {
        let tuning = Tuning::default();
        assert_eq!(evaluate(&player_at(7.0), &Lane::grass(5), 0.016, &tuning), Contact::Safe);
    }

    #[test]
    fn test_spider_centered_on_player_kills() {
        let tuning = Tuning::default();
        // width 1 centered on column 7: lethal span [6.55, 7.45]
        let road = lane(
            LaneKind::Road,
            Direction::Right,
            vec![Obstacle::new(ObstacleKind::Spider, 6.5, 1.0, 2.0)],
        );
        let contact = evaluate(&player_at(7.0), &road, 0.016, &tuning);
        assert_eq!(contact, Contact::Struck { kind: ObstacleKind::Spider });
        assert!(contact.is_lethal());
    }

    #[test]
    fn test_bear_lethal_half_is_capped() {
        let tuning = Tuning::default();
        let bear = Obstacle::new(ObstacleKind::Bear, 0.0, 3.0, 2.0);
        let (l0, l1) = lethal_span(&bear, &tuning);
        assert!((l0 - 0.7).abs() < 1e-6);
        assert!((l1 - 2.3).abs() < 1e-6);

        // Inside the body but outside the lethal span: survives
        let road = lane(LaneKind::Road, Direction::Left, vec![bear]);
        assert_eq!(evaluate(&player_at(2.29), &road, 0.016, &tuning), Contact::Safe);
        assert!(evaluate(&player_at(2.2), &road, 0.016, &tuning).is_lethal());
    }

    #[test]
    fn test_road_graze_below_threshold_survives() {
        let tuning = Tuning::default();
        // Spider width 1 at 0: lethal [0.05, 0.95]; player [0.94, 1.74] overlaps 0.01
        let road = lane(
            LaneKind::Road,
            Direction::Right,
            vec![Obstacle::new(ObstacleKind::Spider, 0.0, 1.0, 2.0)],
        );
        assert_eq!(evaluate(&player_at(0.94), &road, 0.016, &tuning), Contact::Safe);
        assert!(evaluate(&player_at(0.92), &road, 0.016, &tuning).is_lethal());
    }

    #[test]
    fn test_platform_carries_player() {
        let tuning = Tuning::default();
        let river = lane(
            LaneKind::River,
            Direction::Right,
            vec![Obstacle::new(ObstacleKind::Platform, 6.5, 2.0, 1.5)],
        );
        let contact = evaluate(&player_at(7.0), &river, 0.02, &tuning);
        assert!(!contact.is_lethal());
        assert!((contact.carry() - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_first_platform_wins() {
        let tuning = Tuning::default();
        let river = lane(
            LaneKind::River,
            Direction::Left,
            vec![
                Obstacle::new(ObstacleKind::Platform, 6.0, 2.0, 1.0),
                Obstacle::new(ObstacleKind::Platform, 7.0, 2.0, 2.0),
            ],
        );
        let contact = evaluate(&player_at(7.0), &river, 0.05, &tuning);
        assert!((contact.carry() + 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_touching_platform_edge_saves() {
        let tuning = Tuning::default();
        // Platform ends exactly where the player starts: overlap 0
        let river = lane(
            LaneKind::River,
            Direction::Right,
            vec![Obstacle::new(ObstacleKind::Platform, 5.0, 2.0, 1.0)],
        );
        assert!(!evaluate(&player_at(7.0), &river, 0.016, &tuning).is_lethal());
    }

    #[test]
    fn test_open_water_drowns() {
        let tuning = Tuning::default();
        let river = lane(
            LaneKind::River,
            Direction::Right,
            vec![Obstacle::new(ObstacleKind::Platform, 1.0, 2.0, 1.0)],
        );
        assert_eq!(evaluate(&player_at(7.0), &river, 0.016, &tuning), Contact::Drowned);
    }

    #[test]
    fn test_fallen_behind() {
        let player = player_at(7.0);
        assert!(!fallen_behind(&player, 5.0));
        assert!(fallen_behind(&player, 5.01));
    }

    proptest! {
        #[test]
        fn prop_road_overlap_threshold(column in -2.0f32..17.0, pos in -2.0f32..16.0, width in 1.0f32..2.0) {
            let tuning = Tuning::default();
            let spider = Obstacle::new(ObstacleKind::Spider, pos, width, 2.0);
            let road = lane(LaneKind::Road, Direction::Right, vec![spider]);
            let player = player_at(column);
            let (p0, p1) = player.footprint();
            let (l0, l1) = lethal_span(&spider, &tuning);
            let expected = overlap(p0, p1, l0, l1) >= 0.02;
            prop_assert_eq!(evaluate(&player, &road, 0.016, &tuning).is_lethal(), expected);
        }

        #[test]
        fn prop_single_platform_carry_or_drown(column in -2.0f32..17.0, pos in -2.0f32..16.0, width in 1.0f32..3.0, speed in 0.5f32..3.0) {
            let tuning = Tuning::default();
            let platform = Obstacle::new(ObstacleKind::Platform, pos, width, speed);
            let river = lane(LaneKind::River, Direction::Left, vec![platform]);
            let player = player_at(column);
            let (p0, p1) = player.footprint();
            let contact = evaluate(&player, &river, 0.016, &tuning);
            if overlap(p0, p1, pos, pos + width) >= 0.0 {
                prop_assert_eq!(contact, Contact::Carried { delta: -speed * 0.016 });
            } else {
                prop_assert_eq!(contact, Contact::Drowned);
            }
        }
    }
}
