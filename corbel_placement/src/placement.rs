// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor geometry, edge selection, and ideal positioning.

use kurbo::{Point, Rect, Size};

use crate::types::{DockEdge, Edge, TailMetrics};

/// Compose an anchor widget's absolute screen rectangle.
///
/// `frame` is the widget's bounding box in its toplevel's coordinate space;
/// `toplevel_origin` is that toplevel's screen position. Either being absent
/// means the widget has no display surface yet, and the result degenerates
/// to [`Rect::ZERO`] — callers must treat that as "geometry not available"
/// and retry on a later event rather than trusting the zero rectangle.
pub fn anchor_rect(frame: Option<Rect>, toplevel_origin: Option<Point>) -> Rect {
    match (frame, toplevel_origin) {
        (Some(frame), Some(origin)) => Rect::from_origin_size(
            Point::new(origin.x + frame.x0, origin.y + frame.y0),
            frame.size(),
        ),
        _ => Rect::ZERO,
    }
}

/// Map a toplevel dock hint to the popover edge.
///
/// The tail points toward the screen edge the panel is docked against: a
/// panel along the top of the screen gets popovers whose tail sits on the
/// top edge (body hanging below), and so on. Anything unrecognized falls
/// back to [`Edge::Bottom`], the classic popover-above-the-widget shape.
pub fn edge_for_dock(dock: Option<DockEdge>) -> Edge {
    match dock {
        Some(DockEdge::Top) => Edge::Top,
        Some(DockEdge::Left) => Edge::Left,
        Some(DockEdge::Right) => Edge::Right,
        Some(DockEdge::Bottom) | None => Edge::Bottom,
    }
}

/// Choose an edge from available screen real estate.
///
/// Strict priority, not best-fit: below the anchor if the body plus tail
/// clearance fits above the monitor's bottom edge; otherwise above if that
/// fits; otherwise whichever side has more horizontal room. The first two
/// checks reserve [`TailMetrics::clearance`] between anchor and body.
pub fn select_edge_automatic(
    anchor: Rect,
    popover: Size,
    monitor: Rect,
    metrics: &TailMetrics,
) -> Edge {
    let clearance = metrics.clearance();

    // Below the anchor first.
    if anchor.y1 + clearance + popover.height <= monitor.y1 {
        return Edge::Top;
    }

    // Then above.
    if anchor.y0 - clearance - popover.height >= monitor.y0 {
        return Edge::Bottom;
    }

    // Estate-limited top and bottom: fall over to whichever side is roomier.
    let room_right = monitor.x1 - anchor.x1;
    let room_left = anchor.x0 - monitor.x0;
    if room_left > room_right {
        Edge::Right
    } else {
        Edge::Left
    }
}

/// The ideal window origin for a chosen edge, before monitor clamping.
///
/// Centered on the anchor along the perpendicular axis; along the primary
/// axis the body sits tail-clearance plus shadow away from the anchor so the
/// tail triangle has room to bridge the gap.
pub fn position_for_edge(anchor: Rect, popover: Size, edge: Edge, metrics: &TailMetrics) -> Point {
    let gap = metrics.clearance() + metrics.shadow;
    let center = anchor.center();
    match edge {
        Edge::Top => Point::new(center.x - popover.width / 2.0, anchor.y1 + gap),
        Edge::Bottom => Point::new(center.x - popover.width / 2.0, anchor.y0 - popover.height - gap),
        Edge::Left => Point::new(anchor.x1 + gap, center.y - popover.height / 2.0),
        Edge::Right => Point::new(anchor.x0 - popover.width - gap, center.y - popover.height / 2.0),
    }
}
