// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seat-grab state machine.
//!
//! Tracks whether one popover currently holds the exclusive input capture.
//! Two states, `Released` and `Grabbed`; transitions are driven by the
//! popover lifecycle (map/unmap) and by the host's grab-broken and
//! grab-notify signals. Acquisition failure is not fatal — the popover still
//! shows, it just loses click-outside-to-dismiss until a later transition
//! re-acquires.

use tracing::warn;

use crate::host::{Seat, SeatCapabilities};

/// Per-popover grab bookkeeping.
///
/// The machine is the sole mutator of its flag; everything runs on the UI
/// event loop, so no synchronization is involved.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GrabState {
    grabbed: bool,
}

impl GrabState {
    /// A fresh, released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the capture is currently held.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Request the exclusive capture. A no-op when already held, so repeated
    /// calls in the defensive re-grab sequence are harmless. Returns whether
    /// the capture is held afterwards.
    pub fn acquire(&mut self, seat: &mut impl Seat) -> bool {
        if self.grabbed {
            return true;
        }
        if seat.acquire(SeatCapabilities::ALL) {
            self.grabbed = true;
        } else {
            warn!("seat refused the grab; outside-click dismissal will be unreliable");
        }
        self.grabbed
    }

    /// Release the capture if held.
    pub fn release(&mut self, seat: &mut impl Seat) {
        if !self.grabbed {
            return;
        }
        seat.release();
        self.grabbed = false;
    }

    /// An external actor stole the capture. Record the loss; recovery waits
    /// for the unshadow notification.
    pub fn on_broken(&mut self) {
        self.grabbed = false;
    }

    /// Grab ownership changed elsewhere in the application.
    ///
    /// Only the unshadow notification (`was_grabbed` true: the previous
    /// holder let go) matters, and only while the popover is still showing.
    /// The re-grab runs the release/acquire cycle twice to beat grab-ordering
    /// races in the display protocol; with acquire idempotent the double
    /// cycle is safe.
    pub fn on_grab_notify(&mut self, seat: &mut impl Seat, was_grabbed: bool, visible: bool) {
        if !was_grabbed {
            return;
        }
        self.release(seat);
        if !visible {
            return;
        }
        self.acquire(seat);
        self.release(seat);
        self.acquire(seat);
    }
}
