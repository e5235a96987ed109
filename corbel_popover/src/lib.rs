// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corbel Popover: transient, arrow-tailed overlay entities for a host
//! toolkit.
//!
//! ## Overview
//!
//! A popover is a borderless window anchored to a widget, dismissed by
//! clicking outside it or pressing Escape. This crate owns everything about
//! that behavior *except* the toolkit itself: placement comes from
//! [`corbel_placement`], and windowing, input, and style queries go through
//! the capability traits [`AnchorHost`], [`PopoverWindow`], and [`Seat`].
//!
//! Entities live in a [`Popovers`] arena and are addressed by generational
//! [`PopoverId`]s, so holding an id never extends a popover's lifetime and a
//! stale id is always detected. Hosts forward their toolkit's events
//! (`configure`, button and key presses, grab-broken/grab-notify, widget
//! destruction) to the arena, call [`Popovers::run_idle`] once per idle
//! loop iteration to fire deferred dismissals, and collect
//! [`LifecycleEvent`]s with [`Popovers::drain_events`].
//!
//! ## Example
//!
//! ```
//! use corbel_popover::{AnchorHost, Key, PopoverWindow, Popovers, Seat, SeatCapabilities};
//! use corbel_placement::DockEdge;
//! use kurbo::{Point, Rect, Size};
//!
//! // A miniature host: one 40x28 button near the origin of a 1920x1080 screen.
//! struct Host;
//! impl AnchorHost for Host {
//!     type Widget = u32;
//!     fn frame_in_toplevel(&self, _w: u32) -> Option<Rect> {
//!         Some(Rect::new(100.0, 2.0, 140.0, 30.0))
//!     }
//!     fn toplevel_origin(&self, _w: u32) -> Option<Point> {
//!         Some(Point::ORIGIN)
//!     }
//!     fn monitor_rect(&self, _w: u32) -> Rect {
//!         Rect::new(0.0, 0.0, 1920.0, 1080.0)
//!     }
//!     fn dock_edge(&self, _w: u32) -> Option<DockEdge> {
//!         Some(DockEdge::Top)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Window {
//!     origin: Point,
//! }
//! impl PopoverWindow for Window {
//!     fn size(&self) -> Size {
//!         Size::new(200.0, 120.0)
//!     }
//!     fn position(&self) -> Point {
//!         self.origin
//!     }
//!     fn move_to(&mut self, origin: Point) {
//!         self.origin = origin;
//!     }
//!     fn focus(&mut self) {}
//!     fn present(&mut self) {}
//!     fn hide(&mut self) {}
//!     fn close(&mut self) {}
//! }
//!
//! struct GenerousSeat;
//! impl Seat for GenerousSeat {
//!     fn acquire(&mut self, _caps: SeatCapabilities) -> bool {
//!         true
//!     }
//!     fn release(&mut self) {}
//! }
//!
//! let mut popovers = Popovers::new();
//! let mut seat = GenerousSeat;
//! let id = popovers.create(7_u32, Window::default());
//!
//! popovers.show(id, &Host, &mut seat);
//! assert!(popovers.is_visible(id));
//! assert!(popovers.is_grabbed(id));
//!
//! // Escape dismisses immediately.
//! assert!(popovers.on_key_press(id, Key::Escape, &mut seat));
//! assert!(!popovers.is_visible(id));
//! ```

pub mod defer;
mod grab;
mod host;
mod popover;

pub use defer::{IdleQueue, TaskToken};
pub use grab::GrabState;
pub use host::{AnchorHost, Key, PopoverWindow, Seat, SeatCapabilities};
pub use popover::{LifecycleEvent, PopoverId, Popovers};
