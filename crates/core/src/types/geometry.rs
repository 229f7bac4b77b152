//! Watch-space geometry helpers

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Point or size in watch-face units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Check whether `point` lies inside the rectangle at `origin` with `size`
///
/// The rectangle is half-open: the top/left edges are inside, the
/// bottom/right edges are not. Empty or negative sizes contain nothing.
pub fn in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    let end = origin + size;
    point.x >= origin.x && point.x < end.x && point.y >= origin.y && point.y < end.y
}
