// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corbel Placement: pure geometry for anchored, arrow-tailed popovers.
//!
//! ## Overview
//!
//! This crate computes *where* a popover window goes and *what shape* its
//! tail takes, given the anchor widget's on-screen rectangle, the popover's
//! own size, and the geometry of the monitor it must stay on. It holds no
//! toolkit state: every function is a plain computation over [`kurbo`]
//! values, so a host shim can call it from any windowing layer.
//!
//! ## Pipeline
//!
//! A full placement pass is four steps:
//!
//! 1) [`anchor_rect`] — compose the anchor's frame within its toplevel with
//!    the toplevel's screen origin into an absolute rectangle.
//! 2) [`select_edge_automatic`] or [`edge_for_dock`] — pick the popover
//!    [`Edge`] that carries the tail (and thereby which side of the anchor
//!    the body renders on).
//! 3) [`position_for_edge`] — the ideal window origin: centered on the
//!    anchor along the perpendicular axis, pushed out by the tail clearance
//!    plus shadow along the primary axis.
//! 4) [`tail_shape`] + [`clamp_to_monitor`] — derive the tail triangle, then
//!    nudge the body inside the monitor while counter-shifting the tail
//!    offset so the drawn tip keeps pointing at the anchor.
//!
//! Edge choice and clamping are deliberately separate passes: clamping only
//! ever nudges the origin, it never flips the popover to another edge.
//!
//! ## Example
//!
//! ```
//! use corbel_placement::{
//!     Edge, TailMetrics, clamp_to_monitor, position_for_edge, select_edge_automatic, tail_shape,
//! };
//! use kurbo::{Rect, Size};
//!
//! let metrics = TailMetrics::default();
//! let monitor = Rect::new(0.0, 0.0, 1920.0, 1080.0);
//! let anchor = Rect::new(100.0, 780.0, 140.0, 810.0);
//! let size = Size::new(200.0, 150.0);
//!
//! // Plenty of room underneath: tail on the top edge, body below the anchor.
//! let edge = select_edge_automatic(anchor, size, monitor, &metrics);
//! assert_eq!(edge, Edge::Top);
//!
//! let ideal = position_for_edge(anchor, size, edge, &metrics);
//! let mut tail = tail_shape(size, edge, &metrics);
//! let origin = clamp_to_monitor(ideal, size, monitor, &mut tail, &metrics);
//!
//! // Nothing spilled off-screen, so the ideal position survives unchanged.
//! assert_eq!(origin, ideal);
//! assert_eq!(tail.offset, kurbo::Vec2::ZERO);
//! ```
//!
//! This crate is `no_std` compatible (enable the `libm` feature instead of
//! the default `std`).

#![cfg_attr(not(feature = "std"), no_std)]

mod clamp;
mod frame;
mod placement;
mod tail;
mod types;

pub use clamp::clamp_to_monitor;
pub use frame::{ContentMargins, body_insets, content_margins};
pub use placement::{anchor_rect, edge_for_dock, position_for_edge, select_edge_automatic};
pub use tail::{Tail, tail_shape};
pub use types::{DockEdge, Edge, PositionPolicy, TailMetrics, contains_inclusive};
