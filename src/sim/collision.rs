//! Player vs. platform collision response
//!
//! No solver: each overlapping platform is resolved on its own, in registry
//! order, against wherever earlier platforms left the player this frame.

use super::body::{Aabb, Body};
use crate::input::InputState;

/// How an overlap was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Bottom edge within the tolerance band of the top: stand on it
    Landed,
    /// Holding left: pushed out to the platform's right edge
    PushedRight,
    /// Holding right: pushed out to the platform's left edge
    PushedLeft,
    /// Side contact with no lateral input; the overlap is left alone
    Unresolved,
}

/// Resolve a single overlap. Returns `None` if the boxes don't overlap.
pub fn resolve(
    body: &mut Body,
    platform: &Aabb,
    input: &InputState,
    landing_tolerance: f32,
) -> Option<Resolution> {
    let rect = body.aabb();
    if !rect.overlaps(platform) {
        return None;
    }

    let resolution = if rect.bottom() < platform.top() + landing_tolerance {
        body.vel.y = 0.0;
        body.pos.y = platform.top() - body.size.y;
        Resolution::Landed
    } else if input.left {
        body.pos.x = platform.right();
        Resolution::PushedRight
    } else if input.right {
        body.pos.x = platform.left() - body.size.x;
        Resolution::PushedLeft
    } else {
        Resolution::Unresolved
    };
    Some(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const TOL: f32 = 15.0;

    fn player_at(x: f32, y: f32) -> Body {
        let mut body = Body::new(Vec2::new(x, y), Vec2::splat(30.0));
        body.vel.y = 3.0;
        body
    }

    fn platform() -> Aabb {
        Aabb::new(100.0, 100.0, 150.0, 25.0)
    }

    #[test]
    fn test_miss() {
        let mut body = player_at(0.0, 0.0);
        assert_eq!(resolve(&mut body, &platform(), &InputState::default(), TOL), None);
        assert_eq!(body.pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_landing_snaps_to_top() {
        // Bottom at 105, inside the band [100, 115)
        let mut body = player_at(150.0, 75.0);
        let r = resolve(&mut body, &platform(), &InputState::default(), TOL);
        assert_eq!(r, Some(Resolution::Landed));
        assert_eq!(body.pos.y, 70.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_landing_wins_over_lateral_input() {
        let mut body = player_at(150.0, 75.0);
        let input = InputState {
            left: true,
            ..Default::default()
        };
        let r = resolve(&mut body, &platform(), &input, TOL);
        assert_eq!(r, Some(Resolution::Landed));
        assert_eq!(body.pos.x, 150.0);
    }

    #[test]
    fn test_side_hit_holding_left() {
        // Bottom at 120, outside the band; overlapping the right end
        let mut body = player_at(240.0, 90.0);
        let input = InputState {
            left: true,
            ..Default::default()
        };
        let r = resolve(&mut body, &platform(), &input, TOL);
        assert_eq!(r, Some(Resolution::PushedRight));
        assert_eq!(body.pos.x, 250.0);
        assert_eq!(body.pos.y, 90.0);
        assert_eq!(body.vel.y, 3.0);
    }

    #[test]
    fn test_side_hit_holding_right() {
        let mut body = player_at(80.0, 90.0);
        let input = InputState {
            right: true,
            ..Default::default()
        };
        let r = resolve(&mut body, &platform(), &input, TOL);
        assert_eq!(r, Some(Resolution::PushedLeft));
        assert_eq!(body.pos.x, 70.0);
    }

    #[test]
    fn test_left_checked_before_right() {
        let mut body = player_at(80.0, 90.0);
        let input = InputState {
            left: true,
            right: true,
            ..Default::default()
        };
        let r = resolve(&mut body, &platform(), &input, TOL);
        assert_eq!(r, Some(Resolution::PushedRight));
        assert_eq!(body.pos.x, 250.0);
    }

    #[test]
    fn test_side_hit_without_input_is_left_overlapping() {
        let mut body = player_at(80.0, 90.0);
        let before = body;
        let r = resolve(&mut body, &platform(), &InputState::default(), TOL);
        assert_eq!(r, Some(Resolution::Unresolved));
        assert_eq!(body, before);
        assert!(body.aabb().overlaps(&platform()));
    }

    #[test]
    fn test_resting_is_stable() {
        // Resting exactly on top doesn't overlap; after gravity it lands again at the same y
        let mut body = player_at(150.0, 70.0);
        body.vel.y = 0.0;
        body.accel.y = 0.2;
        for _ in 0..10 {
            body.integrate();
            resolve(&mut body, &platform(), &InputState::default(), TOL);
            assert_eq!(body.pos.y, 70.0);
            assert_eq!(body.vel.y, 0.0);
        }
    }
}
