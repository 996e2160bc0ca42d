//! Obstacle motion
//!
//! Obstacles never leave their lane: once fully past a screen edge they wrap
//! to just beyond the opposite edge.

use super::lane::{Direction, Lane, LaneKind};

/// Advance every obstacle in `lane` by `dt` seconds, wrapping at the bounds of
/// a screen `screen_width` tiles wide
pub fn advance_lane(lane: &mut Lane, dt: f32, screen_width: f32) {
    if lane.kind == LaneKind::Grass {
        return;
    }

    let direction = lane.direction;
    for obstacle in &mut lane.obstacles {
        obstacle.position += obstacle.displacement(direction, dt);

        let hidden_left = -obstacle.width - 1.0;
        let hidden_right = screen_width + 2.0;
        match direction {
            Direction::Right if obstacle.position > hidden_right => {
                obstacle.position = hidden_left;
            }
            Direction::Left if obstacle.position < hidden_left => {
                obstacle.position = hidden_right;
            }
            _ => {}
        }
    }
}
