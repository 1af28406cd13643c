//! Axis-aligned collision primitives
//!
//! Everything in the playfield is a rectangle: actors, enemies, pickups, and
//! the solid parts of a pipe. The gap test is kept separate because its
//! boundaries are inclusive on the safe side — an actor whose span exactly
//! fills the gap is not a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (y grows downward, like the canvas)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test. Boxes that merely touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }

    /// Whether a point lies inside the box (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max().x && p.y >= self.min.y && p.y <= self.max().y
    }
}

/// Horizontal overlap between an actor span and a pipe span
#[inline]
pub fn spans_overlap_x(actor_x: f32, actor_w: f32, pipe_x: f32, pipe_w: f32) -> bool {
    actor_x + actor_w > pipe_x && actor_x < pipe_x + pipe_w
}

/// Whether a vertical span `[top, top + height]` pokes outside a pipe gap
/// `[gap_top, gap_top + gap]`.
///
/// Inclusive on the safe side: a span exactly filling the gap stays clear,
/// including a zero-height point sitting on the gap's bottom edge.
#[inline]
pub fn span_outside_gap(top: f32, height: f32, gap_top: f32, gap: f32) -> bool {
    top < gap_top || top + height > gap_top + gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_point() {
        let a = Aabb::new(Vec2::new(2.0, 3.0), Vec2::new(4.0, 4.0));
        assert!(a.contains_point(Vec2::new(2.0, 3.0)));
        assert!(a.contains_point(Vec2::new(6.0, 7.0)));
        assert!(!a.contains_point(Vec2::new(6.1, 7.0)));
    }

    #[test]
    fn test_span_outside_gap_boundaries() {
        // Gap spans y in [100, 300]
        assert!(!span_outside_gap(100.0, 200.0, 100.0, 200.0)); // exact fill
        assert!(!span_outside_gap(276.0, 24.0, 100.0, 200.0)); // bottom flush
        assert!(!span_outside_gap(300.0, 0.0, 100.0, 200.0)); // point on bottom edge
        assert!(span_outside_gap(99.9, 24.0, 100.0, 200.0)); // above
        assert!(span_outside_gap(276.1, 24.0, 100.0, 200.0)); // below
    }

    #[test]
    fn test_spans_overlap_x() {
        assert!(spans_overlap_x(50.0, 34.0, 50.0, 52.0));
        assert!(spans_overlap_x(20.0, 34.0, 50.0, 52.0)); // 54 > 50
        assert!(!spans_overlap_x(0.0, 34.0, 50.0, 52.0)); // touching at 34 < 50
        assert!(!spans_overlap_x(102.0, 34.0, 50.0, 52.0)); // just past
    }
}
