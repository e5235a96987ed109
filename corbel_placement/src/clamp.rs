// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monitor clamping: keep the body on-screen and the tail on-anchor.

use kurbo::{Point, Rect, Size, Vec2};

use crate::tail::Tail;
use crate::types::TailMetrics;

/// Clamp a computed window origin to the monitor, updating the tail offset.
///
/// Two corrections run in order:
///
/// 1. **Body pass** — if the popover rectangle would extend past any monitor
///    edge (less `clamp_pad`), shift it inward by the minimal amount. The
///    equal-and-opposite delta becomes the tail offset, so the drawn tip
///    still points at the spot the unclamped placement aimed at rather than
///    sliding along with the body.
/// 2. **Tip pass** — the drawn tip itself is then kept at least a
///    tail-dimension-dependent margin away from every monitor edge by
///    adjusting the offset alone. This runs whether or not the body moved.
///
/// The pass is a fixed point: re-running it with unchanged inputs returns
/// the same origin and leaves the offset untouched, and an origin already in
/// bounds (with a comfortably interior tip) comes back identical with a zero
/// offset. When the monitor is smaller than the popover the leading (top or
/// left) edge wins.
pub fn clamp_to_monitor(
    ideal: Point,
    size: Size,
    monitor: Rect,
    tail: &mut Tail,
    metrics: &TailMetrics,
) -> Point {
    let pad = metrics.clamp_pad;
    let mut origin = ideal;

    // Body pass.
    if origin.x + size.width > monitor.x1 - pad {
        origin.x = monitor.x1 - pad - size.width;
    }
    if origin.x < monitor.x0 + pad {
        origin.x = monitor.x0 + pad;
    }
    if origin.y + size.height > monitor.y1 - pad {
        origin.y = monitor.y1 - pad - size.height;
    }
    if origin.y < monitor.y0 + pad {
        origin.y = monitor.y0 + pad;
    }

    let mut offset = Vec2::new(ideal.x - origin.x, ideal.y - origin.y);

    // Tip pass: the drawn tip in screen coordinates.
    let tip_x = origin.x + tail.tip.x + offset.x;
    let tip_y = origin.y + tail.tip.y + offset.y;
    let margin_x = metrics.tip_margin_x();
    let margin_y = metrics.tip_margin_y();

    if tip_x < monitor.x0 + margin_x {
        offset.x += (monitor.x0 + margin_x) - tip_x;
    } else if tip_x > monitor.x1 - margin_x {
        offset.x -= tip_x - (monitor.x1 - margin_x);
    }
    if tip_y < monitor.y0 + margin_y {
        offset.y += (monitor.y0 + margin_y) - tip_y;
    } else if tip_y > monitor.y1 - margin_y {
        offset.y -= tip_y - (monitor.y1 - margin_y);
    }

    tail.offset = offset;
    origin
}
