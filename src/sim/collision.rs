//! Collision detection against rectangles and arena walls
//!
//! Everything here is a pure query. Responses (velocity flips, block
//! removal) are applied by the tick.

use super::rect::Rect;

/// Check whether two rectangles intersect with positive area.
///
/// Separating-axis test with strict comparisons: rectangles that only share
/// an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Ball crossed the left or right arena wall
#[inline]
pub fn hits_side_wall(ball: &Rect, arena_width: f32) -> bool {
    ball.left() < 0.0 || ball.right() > arena_width
}

/// Ball crossed the ceiling
#[inline]
pub fn hits_ceiling(ball: &Rect) -> bool {
    ball.top() < 0.0
}

/// Ball fell past the arena floor
#[inline]
pub fn below_floor(ball: &Rect, arena_height: f32) -> bool {
    ball.bottom() > arena_height
}
