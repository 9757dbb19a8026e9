//! Integer rectangle geometry for platforms, the player, and the door
//!
//! Coordinates grow downward (screen space): `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer position and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move so the right edge sits at `right`
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    /// Move so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Closest point inside the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left() as f32, self.right() as f32),
            p.y.clamp(self.top() as f32, self.bottom() as f32),
        )
    }
}

/// Circle vs rectangle overlap using the closest point on the rectangle
///
/// Touching counts as contact.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.closest_point(center);
    center.distance_squared(nearest) <= radius * radius
}
