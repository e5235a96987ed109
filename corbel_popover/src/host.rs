// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-toolkit capability surface.
//!
//! Corbel never talks to a windowing system directly. A host shim implements
//! these traits over whatever toolkit it runs on and forwards that toolkit's
//! events into [`Popovers`](crate::Popovers). The traits are deliberately
//! narrow: geometry and style queries ([`AnchorHost`]), control of one
//! borderless overlay window ([`PopoverWindow`]), and the systemwide
//! exclusive input capture ([`Seat`]).

use corbel_placement::DockEdge;
use kurbo::{Point, Rect, Size};

bitflags::bitflags! {
    /// Input domains an exclusive seat grab captures.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SeatCapabilities: u8 {
        /// Pointer devices.
        const POINTER  = 0b0000_0001;
        /// Keyboards.
        const KEYBOARD = 0b0000_0010;
        /// Touch surfaces.
        const TOUCH    = 0b0000_0100;
        /// Everything the seat can deliver.
        const ALL = Self::POINTER.bits() | Self::KEYBOARD.bits() | Self::TOUCH.bits();
    }
}

/// Read-only geometry and style queries about anchor widgets.
///
/// `Widget` is the host's widget identity; it is compared, copied, and
/// logged, never dereferenced. A widget that has no display surface yet
/// answers `None` from the two frame queries.
pub trait AnchorHost {
    /// Host-side widget identity.
    type Widget: Copy + Eq + core::fmt::Debug;

    /// The widget's bounding box in its toplevel's coordinate space, or
    /// `None` while unrealized.
    fn frame_in_toplevel(&self, widget: Self::Widget) -> Option<Rect>;

    /// Screen position of the widget's toplevel window, or `None` while
    /// unrealized.
    fn toplevel_origin(&self, widget: Self::Widget) -> Option<Point>;

    /// Geometry of the monitor the widget lives on.
    fn monitor_rect(&self, widget: Self::Widget) -> Rect;

    /// Dock hint on the widget's toplevel, if its style declares one.
    fn dock_edge(&self, widget: Self::Widget) -> Option<DockEdge>;
}

/// Handle to the borderless host window backing one popover.
pub trait PopoverWindow {
    /// Current window size.
    fn size(&self) -> Size;
    /// Current window origin in screen coordinates.
    fn position(&self) -> Point;
    /// Move the window to a screen position.
    fn move_to(&mut self, origin: Point);
    /// Forcibly request input focus.
    fn focus(&mut self);
    /// Map and raise the window.
    fn present(&mut self);
    /// Unmap the window.
    fn hide(&mut self);
    /// Destroy the window; the handle is dropped right after.
    fn close(&mut self);
}

/// The seat: a single systemwide exclusive input capture.
pub trait Seat {
    /// Try to capture the given input domains. Returns whether the display
    /// system granted the grab.
    fn acquire(&mut self, caps: SeatCapabilities) -> bool;
    /// Release a previously granted capture.
    fn release(&mut self);
}

/// Key presses the popover reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// The Escape key; dismisses a visible popover.
    Escape,
    /// Any other key, carried as the host's keysym.
    Other(u32),
}
