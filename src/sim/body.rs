//! Physics primitives shared by every moving thing
//!
//! Positions are top-left corners in world space (y grows downward).
//! Integration is per-frame Euler: acceleration -> velocity -> position.

use glam::Vec2;

/// Axis-aligned bounding box (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test; touching edges don't count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// A moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size,
        }
    }

    /// Advance one frame
    #[inline]
    pub fn integrate(&mut self) {
        self.vel += self.accel;
        self.pos += self.vel;
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Aabb::new(-5.0, 2.0, 30.0, 1.0)));
        // Shared edge is not an overlap
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(50.0, 50.0, 1.0, 1.0)));
    }

    #[test]
    fn test_integrate_order() {
        let mut body = Body::new(Vec2::new(0.0, 0.0), Vec2::splat(1.0));
        body.vel = Vec2::new(1.0, 1.0);
        body.accel = Vec2::new(0.0, 0.5);
        body.integrate();
        // Velocity is updated before position
        assert_eq!(body.vel, Vec2::new(1.0, 1.5));
        assert_eq!(body.pos, Vec2::new(1.0, 1.5));
    }
}
