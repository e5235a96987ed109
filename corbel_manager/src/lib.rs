// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corbel Manager: the popover registry for panel and dock contexts.
//!
//! ## Overview
//!
//! A panel hosts many trigger widgets, each with its own popover, and users
//! expect roll-over behavior: while one popover is open, sweeping the
//! pointer across a sibling trigger closes the open popover and opens the
//! sibling's, with no intervening click. [`Registry`] implements that on top
//! of [`corbel_popover`]:
//!
//! - [`Registry::register`] associates a trigger with a [`PopoverId`] and
//!   forces the popover onto the toplevel-hint placement policy (a managed
//!   popover is by definition in a panel).
//! - [`Registry::on_pointer_enter`] is the hand-off: hit-test the pointer
//!   against every registered trigger (registration order, first match
//!   wins), hide the active popover, and schedule the match to show at the
//!   next idle tick.
//! - [`Registry::apply_events`] consumes the arena's drained
//!   [`LifecycleEvent`]s to keep the at-most-one-active invariant and to
//!   drop entries whose popovers died.
//!
//! The registry never owns a popover or a trigger; both sides are weak
//! (generational ids and host widget identities), so destruction on either
//! side is detected instead of dangling.
//!
//! ## Example
//!
//! ```
//! use corbel_manager::Registry;
//! use corbel_popover::{AnchorHost, PopoverWindow, Popovers, Seat, SeatCapabilities};
//! use corbel_placement::DockEdge;
//! use kurbo::{Point, Rect, Size};
//!
//! // Host shim: two buttons on a panel docked at the top of the screen.
//! struct Panel;
//! impl AnchorHost for Panel {
//!     type Widget = u32;
//!     fn frame_in_toplevel(&self, w: u32) -> Option<Rect> {
//!         match w {
//!             1 => Some(Rect::new(100.0, 0.0, 140.0, 30.0)),
//!             2 => Some(Rect::new(160.0, 0.0, 200.0, 30.0)),
//!             _ => None,
//!         }
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
//!         Size::new(200.0, 150.0)
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
//! let mut registry = Registry::new();
//! let mut seat = GenerousSeat;
//!
//! let a = popovers.create(1_u32, Window::default());
//! let b = popovers.create(2_u32, Window::default());
//! registry.register(1, a, &mut popovers).unwrap();
//! registry.register(2, b, &mut popovers).unwrap();
//!
//! // Click opens the first popover.
//! registry.show(1, &mut popovers, &Panel, &mut seat).unwrap();
//! registry.apply_events(&popovers.drain_events());
//! assert_eq!(registry.active(), Some(a));
//!
//! // Sweeping over the second trigger hands the popover off.
//! registry.on_pointer_enter(Point::new(170.0, 10.0), &mut popovers, &Panel, &mut seat);
//! registry.run_idle(&mut popovers, &Panel, &mut seat);
//! registry.apply_events(&popovers.drain_events());
//! assert_eq!(registry.active(), Some(b));
//! assert!(!popovers.is_visible(a));
//! ```

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::Registry;

// Re-exported so hosts depending on the manager alone can name the arena types.
pub use corbel_popover::{LifecycleEvent, PopoverId, Popovers};
