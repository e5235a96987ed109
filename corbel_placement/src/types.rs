// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared placement types: edges, policies, metrics.

use kurbo::{Point, Rect};

/// The popover edge that carries the tail, i.e. the edge facing the anchor.
///
/// Naming follows the tail, not the body: `Edge::Top` means the tail sits on
/// the popover's top edge pointing up at the anchor, so the body renders
/// *below* the anchor. `Edge::Left` puts the body to the anchor's right, and
/// so on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Tail on the top edge; body below the anchor.
    Top,
    /// Tail on the bottom edge; body above the anchor.
    Bottom,
    /// Tail on the left edge; body to the anchor's right.
    Left,
    /// Tail on the right edge; body to the anchor's left.
    Right,
}

impl Edge {
    /// The direction marker a themable host can attach to the popover
    /// window so styling can follow the tail.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Whether the tail sits on a horizontal edge (top or bottom).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Screen edge a panel-style toplevel is docked against.
///
/// Read from the anchor's toplevel by hosts that support dock hints; feeds
/// [`edge_for_dock`](crate::edge_for_dock) in
/// [`PositionPolicy::ToplevelHint`] mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DockEdge {
    /// Panel along the top of the screen.
    Top,
    /// Panel along the bottom of the screen.
    Bottom,
    /// Panel along the left side.
    Left,
    /// Panel along the right side.
    Right,
}

/// Strategy for choosing which edge the popover appears against.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PositionPolicy {
    /// Pick the edge from available screen real estate, preferring below,
    /// then above, then the side with more room.
    #[default]
    Automatic,
    /// Derive the edge from the dock hint on the anchor's toplevel window.
    /// The tail points toward the edge the panel is docked against.
    ToplevelHint,
}

/// Pixel metrics governing tail and clamp arithmetic.
///
/// A parameter struct rather than module constants so that a popover can be
/// restyled per instance and so placement stays referentially transparent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TailMetrics {
    /// Width of the tail base; the tail protrudes half of this.
    pub dimension: f64,
    /// Margin reserved around the body for the drop shadow.
    pub shadow: f64,
    /// Padding kept between the clamped body and the monitor bounds.
    pub clamp_pad: f64,
}

impl Default for TailMetrics {
    fn default() -> Self {
        Self {
            dimension: 16.0,
            shadow: 4.0,
            clamp_pad: 1.0,
        }
    }
}

impl TailMetrics {
    /// How far the tail protrudes from the body: half its base width.
    pub fn clearance(&self) -> f64 {
        self.dimension / 2.0
    }

    /// Minimum distance the drawn tip keeps from the monitor's vertical edges.
    pub fn tip_margin_x(&self) -> f64 {
        self.dimension * 1.25
    }

    /// Minimum distance the drawn tip keeps from the monitor's horizontal edges.
    pub fn tip_margin_y(&self) -> f64 {
        self.dimension * 1.75
    }
}

/// Point-in-rect test with inclusive edges on all four sides.
///
/// Window and trigger hit-tests treat boundary coordinates as inside, which
/// differs from [`Rect::contains`]'s half-open convention.
pub fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_css_classes() {
        assert_eq!(Edge::Top.css_class(), "top");
        assert_eq!(Edge::Bottom.css_class(), "bottom");
        assert_eq!(Edge::Left.css_class(), "left");
        assert_eq!(Edge::Right.css_class(), "right");
    }

    #[test]
    fn default_metrics_derive_from_the_tail_dimension() {
        let m = TailMetrics::default();
        assert_eq!(m.clearance(), 8.0, "half of the 16px tail base");
        assert_eq!(m.tip_margin_x(), 20.0, "1.25x tail dimension");
        assert_eq!(m.tip_margin_y(), 28.0, "1.75x tail dimension");
    }

    #[test]
    fn inclusive_containment_includes_all_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(contains_inclusive(r, Point::new(10.0, 10.0)));
        assert!(contains_inclusive(r, Point::new(20.0, 20.0)));
        assert!(contains_inclusive(r, Point::new(15.0, 20.0)));
        assert!(!contains_inclusive(r, Point::new(20.1, 15.0)));
    }
}
