// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tour of the placement pipeline, without any popover state.
//!
//! Walks three anchors through edge selection, ideal positioning, and
//! monitor clamping, printing each intermediate result.
//!
//! Run:
//! - `cargo run -p corbel_demos --example placement_walkthrough`

use corbel_placement::{
    Edge, TailMetrics, clamp_to_monitor, position_for_edge, select_edge_automatic, tail_shape,
};
use kurbo::{Rect, Size, Vec2};

fn place(name: &str, anchor: Rect, size: Size, monitor: Rect) {
    let metrics = TailMetrics::default();

    let edge = select_edge_automatic(anchor, size, monitor, &metrics);
    let ideal = position_for_edge(anchor, size, edge, &metrics);
    let mut tail = tail_shape(size, edge, &metrics);
    let origin = clamp_to_monitor(ideal, size, monitor, &mut tail, &metrics);

    println!("== {name} ==");
    println!("  anchor {anchor:?}");
    println!("  edge   {edge:?}");
    println!("  ideal  {ideal:?}");
    println!("  origin {origin:?} (offset {:?})", tail.offset);
    println!("  tail   {:?}", tail.drawn());
}

fn main() {
    let monitor = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let size = Size::new(200.0, 150.0);
    let metrics = TailMetrics::default();

    // Mid-screen: the popover drops below its anchor.
    let comfy = Rect::new(100.0, 780.0, 140.0, 810.0);
    assert_eq!(
        select_edge_automatic(comfy, size, monitor, &metrics),
        Edge::Top
    );
    place("comfortable", comfy, size, monitor);

    // Bottom of the screen: below no longer fits, so it flips above.
    let low = Rect::new(100.0, 1000.0, 140.0, 1030.0);
    assert_eq!(
        select_edge_automatic(low, size, monitor, &metrics),
        Edge::Bottom
    );
    place("near the bottom", low, size, monitor);

    // Hugging the left edge: the body clamps inward and the tail offset
    // compensates so the tip stays over the anchor.
    let cornered = Rect::new(0.0, 780.0, 40.0, 810.0);
    let edge = select_edge_automatic(cornered, size, monitor, &metrics);
    let ideal = position_for_edge(cornered, size, edge, &metrics);
    let mut tail = tail_shape(size, edge, &metrics);
    let origin = clamp_to_monitor(ideal, size, monitor, &mut tail, &metrics);
    assert!(origin.x > ideal.x, "body must shift off the screen edge");
    assert_ne!(tail.offset, Vec2::ZERO, "tail compensates for the shift");
    place("cornered", cornered, size, monitor);
}
