// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tail triangle derivation.

use kurbo::{Point, Size, Vec2};

use crate::types::{Edge, TailMetrics};

/// The tail triangle, in popover-local coordinates.
///
/// `base_start`, `tip`, and `base_end` describe the triangle as computed for
/// an unclamped body. `offset` is the correction applied at draw time:
/// whenever monitor clamping shifts the body, the opposite shift accumulates
/// here so the *drawn* tip keeps pointing at the anchor instead of riding
/// along with the window. The offset is owned by the popover and persists
/// across placement passes; [`clamp_to_monitor`](crate::clamp_to_monitor)
/// recomputes it each pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tail {
    /// Edge of the popover body the tail sits on.
    pub edge: Edge,
    /// One end of the triangle base.
    pub base_start: Point,
    /// The apex, pointing at the anchor.
    pub tip: Point,
    /// The other end of the triangle base.
    pub base_end: Point,
    /// Draw-time correction keeping the tip anchored under clamping.
    pub offset: Vec2,
}

impl Default for Tail {
    fn default() -> Self {
        Self {
            edge: Edge::Bottom,
            base_start: Point::ORIGIN,
            tip: Point::ORIGIN,
            base_end: Point::ORIGIN,
            offset: Vec2::ZERO,
        }
    }
}

impl Tail {
    /// The triangle with the offset applied, ready for a renderer.
    pub fn drawn(&self) -> [Point; 3] {
        [
            self.base_start + self.offset,
            self.tip + self.offset,
            self.base_end + self.offset,
        ]
    }

    /// The interval along the tail's edge where the body border must break
    /// so tail and body read as one outline. Horizontal edges report an x
    /// range, vertical edges a y range; offsets are already applied.
    pub fn frame_gap(&self) -> (f64, f64) {
        if self.edge.is_horizontal() {
            (
                self.base_start.x + self.offset.x,
                self.base_end.x + self.offset.x,
            )
        } else {
            (
                self.base_start.y + self.offset.y,
                self.base_end.y + self.offset.y,
            )
        }
    }
}

/// Derive the tail triangle for a popover of `size` with the tail on `edge`.
///
/// The tip sits at the midpoint of the edge, inset by the shadow margin; the
/// base lies one clearance further into the body, spanning one clearance to
/// each side of the midpoint. The returned offset is zero — callers that
/// carry a popover across placement passes restore the previous offset
/// before clamping.
pub fn tail_shape(size: Size, edge: Edge, metrics: &TailMetrics) -> Tail {
    let c = metrics.clearance();
    let s = metrics.shadow;
    let mid_x = size.width / 2.0;
    let mid_y = size.height / 2.0;

    let (base_start, tip, base_end) = match edge {
        Edge::Top => (
            Point::new(mid_x - c, s + c),
            Point::new(mid_x, s),
            Point::new(mid_x + c, s + c),
        ),
        Edge::Bottom => (
            Point::new(mid_x - c, size.height - s - c),
            Point::new(mid_x, size.height - s),
            Point::new(mid_x + c, size.height - s - c),
        ),
        Edge::Left => (
            Point::new(s + c, mid_y - c),
            Point::new(s, mid_y),
            Point::new(s + c, mid_y + c),
        ),
        Edge::Right => (
            Point::new(size.width - s - c, mid_y - c),
            Point::new(size.width - s, mid_y),
            Point::new(size.width - s - c, mid_y + c),
        ),
    };

    Tail {
        edge,
        base_start,
        tip,
        base_end,
        offset: Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: TailMetrics = TailMetrics {
        dimension: 16.0,
        shadow: 4.0,
        clamp_pad: 1.0,
    };

    #[test]
    fn top_tail_points_up_from_edge_midpoint() {
        let t = tail_shape(Size::new(200.0, 150.0), Edge::Top, &METRICS);
        assert_eq!(t.tip, Point::new(100.0, 4.0));
        assert_eq!(t.base_start, Point::new(92.0, 12.0));
        assert_eq!(t.base_end, Point::new(108.0, 12.0));
    }

    #[test]
    fn bottom_tail_mirrors_top() {
        let t = tail_shape(Size::new(200.0, 150.0), Edge::Bottom, &METRICS);
        assert_eq!(t.tip, Point::new(100.0, 146.0));
        assert_eq!(t.base_start, Point::new(92.0, 138.0));
        assert_eq!(t.base_end, Point::new(108.0, 138.0));
    }

    #[test]
    fn side_tails_center_vertically() {
        let l = tail_shape(Size::new(200.0, 150.0), Edge::Left, &METRICS);
        assert_eq!(l.tip, Point::new(4.0, 75.0));
        assert_eq!(l.base_start, Point::new(12.0, 67.0));
        assert_eq!(l.base_end, Point::new(12.0, 83.0));

        let r = tail_shape(Size::new(200.0, 150.0), Edge::Right, &METRICS);
        assert_eq!(r.tip, Point::new(196.0, 75.0));
        assert_eq!(r.base_start, Point::new(188.0, 67.0));
        assert_eq!(r.base_end, Point::new(188.0, 83.0));
    }

    #[test]
    fn drawn_applies_offset_to_all_points() {
        let mut t = tail_shape(Size::new(200.0, 150.0), Edge::Top, &METRICS);
        t.offset = Vec2::new(-30.0, 2.0);
        let [a, b, c] = t.drawn();
        assert_eq!(b, Point::new(70.0, 6.0));
        assert_eq!(a, Point::new(62.0, 14.0));
        assert_eq!(c, Point::new(78.0, 14.0));
    }

    #[test]
    fn frame_gap_spans_the_base() {
        let t = tail_shape(Size::new(200.0, 150.0), Edge::Top, &METRICS);
        assert_eq!(t.frame_gap(), (92.0, 108.0));

        let mut side = tail_shape(Size::new(200.0, 150.0), Edge::Right, &METRICS);
        side.offset = Vec2::new(0.0, -10.0);
        assert_eq!(side.frame_gap(), (57.0, 73.0));
    }
}
