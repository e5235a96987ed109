// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover entities and their lifecycle.
//!
//! [`Popovers`] is an arena of transient overlay entities. Each entity ties
//! together an anchor widget identity, the host window backing the overlay,
//! the persistent tail geometry, and a [`GrabState`]. Entities are addressed
//! by generational [`PopoverId`]s: a destroyed popover's id goes stale and
//! every operation on it degrades to a logged no-op, never a dangling
//! access.
//!
//! Lifecycle notifications (`Mapped`/`Unmapped`/`Destroyed`) accumulate in
//! the arena and are collected with [`Popovers::drain_events`]; the registry
//! layer feeds on them to maintain its single-active invariant.

use kurbo::{Point, Rect};
use tracing::{debug, warn};

use corbel_placement::{
    PositionPolicy, Tail, TailMetrics, anchor_rect, clamp_to_monitor, contains_inclusive,
    edge_for_dock, position_for_edge, select_edge_automatic, tail_shape,
};

use crate::defer::IdleQueue;
use crate::grab::GrabState;
use crate::host::{AnchorHost, Key, PopoverWindow, Seat};

/// Generational handle to a popover in a [`Popovers`] arena.
///
/// Slot index plus generation; ids from freed slots never alias the slot's
/// next occupant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PopoverId(u32, u32);

impl PopoverId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Popover ids are intentionally 32-bit; higher bits are truncated by design."
    )]
    pub(crate) const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Lifecycle notifications reported by [`Popovers::drain_events`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LifecycleEvent {
    /// The popover became visible.
    Mapped,
    /// The popover was hidden.
    Unmapped,
    /// The popover was destroyed (its window is gone).
    Destroyed,
}

struct Entry<W, N> {
    generation: u32,
    anchor: W,
    window: N,
    policy: PositionPolicy,
    metrics: TailMetrics,
    tail: Tail,
    grab: GrabState,
    visible: bool,
}

impl<W: Copy + Eq + core::fmt::Debug, N: PopoverWindow> Entry<W, N> {
    /// Run a full placement pass: anchor rect, edge, ideal position, tail,
    /// monitor clamp. Returns the window origin to move to.
    ///
    /// Tail offsets carry over from the previous pass before clamping
    /// recomputes them, so a clamped popover does not wobble between
    /// recomputations.
    fn place<H: AnchorHost<Widget = W>>(&mut self, host: &H) -> Point {
        let anchor = anchor_rect(
            host.frame_in_toplevel(self.anchor),
            host.toplevel_origin(self.anchor),
        );
        if anchor == Rect::ZERO {
            warn!(anchor = ?self.anchor, "placement requested before the anchor is realized");
        }

        let size = self.window.size();
        let monitor = host.monitor_rect(self.anchor);
        let edge = match self.policy {
            PositionPolicy::ToplevelHint => edge_for_dock(host.dock_edge(self.anchor)),
            PositionPolicy::Automatic => select_edge_automatic(anchor, size, monitor, &self.metrics),
        };

        let ideal = position_for_edge(anchor, size, edge, &self.metrics);
        let mut tail = tail_shape(size, edge, &self.metrics);
        tail.offset = self.tail.offset;
        let origin = clamp_to_monitor(ideal, size, monitor, &mut tail, &self.metrics);
        self.tail = tail;
        origin
    }
}

/// Arena of popover entities.
///
/// `W` is the host's widget identity, `N` its window handle. All mutation
/// happens on the UI event loop; the arena is not `Sync` and does not try to
/// be.
pub struct Popovers<W, N> {
    slots: Vec<Option<Entry<W, N>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    pending_hides: IdleQueue<PopoverId>,
    events: Vec<(PopoverId, LifecycleEvent)>,
}

impl<W, N> core::fmt::Debug for Popovers<W, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Popovers")
            .field("alive", &alive)
            .field("slots", &self.slots.len())
            .field("pending_hides", &self.pending_hides.len())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<W, N> Default for Popovers<W, N>
where
    W: Copy + Eq + core::fmt::Debug,
    N: PopoverWindow,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W, N> Popovers<W, N>
where
    W: Copy + Eq + core::fmt::Debug,
    N: PopoverWindow,
{
    /// An empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            pending_hides: IdleQueue::new(),
            events: Vec::new(),
        }
    }

    /// Create a popover anchored to `anchor`, backed by `window`.
    ///
    /// Starts hidden, policy [`PositionPolicy::Automatic`], default metrics.
    pub fn create(&mut self, anchor: W, window: N) -> PopoverId {
        let entry = |generation| Entry {
            generation,
            anchor,
            window,
            policy: PositionPolicy::default(),
            metrics: TailMetrics::default(),
            tail: Tail::default(),
            grab: GrabState::new(),
            visible: false,
        };
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(entry(generation));
            PopoverId::new(idx, generation)
        } else {
            self.slots.push(Some(entry(1)));
            self.generations.push(1);
            PopoverId::new(self.slots.len() - 1, 1)
        }
    }

    /// Whether `id` still refers to a live popover.
    pub fn is_alive(&self, id: PopoverId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of live popovers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the arena holds no live popovers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the placement policy.
    pub fn set_position_policy(&mut self, id: PopoverId, policy: PositionPolicy) {
        match self.entry_mut(id) {
            Some(e) => e.policy = policy,
            None => warn!(?id, "set_position_policy: stale popover id"),
        }
    }

    /// The placement policy, or `None` for a stale id.
    pub fn position_policy(&self, id: PopoverId) -> Option<PositionPolicy> {
        self.entry(id).map(|e| e.policy)
    }

    /// Override the tail metrics for one popover.
    pub fn set_tail_metrics(&mut self, id: PopoverId, metrics: TailMetrics) {
        match self.entry_mut(id) {
            Some(e) => e.metrics = metrics,
            None => warn!(?id, "set_tail_metrics: stale popover id"),
        }
    }

    /// The anchor widget, or `None` for a stale id.
    pub fn anchor(&self, id: PopoverId) -> Option<W> {
        self.entry(id).map(|e| e.anchor)
    }

    /// Whether the popover is currently visible.
    pub fn is_visible(&self, id: PopoverId) -> bool {
        self.entry(id).is_some_and(|e| e.visible)
    }

    /// Whether the popover currently holds the seat grab.
    pub fn is_grabbed(&self, id: PopoverId) -> bool {
        self.entry(id).is_some_and(|e| e.grab.is_grabbed())
    }

    /// The current tail geometry, for renderers.
    pub fn tail(&self, id: PopoverId) -> Option<&Tail> {
        self.entry(id).map(|e| &e.tail)
    }

    /// Borrow the host window handle.
    pub fn window(&self, id: PopoverId) -> Option<&N> {
        self.entry(id).map(|e| &e.window)
    }

    /// The popover window's current screen rectangle.
    pub fn window_rect(&self, id: PopoverId) -> Option<Rect> {
        self.entry(id)
            .map(|e| Rect::from_origin_size(e.window.position(), e.window.size()))
    }

    /// Show the popover: place it, move and present its window, then run the
    /// grab sequence. Stale ids degrade to a logged no-op.
    pub fn show<H, S>(&mut self, id: PopoverId, host: &H, seat: &mut S)
    where
        H: AnchorHost<Widget = W>,
        S: Seat,
    {
        let Some(entry) = self.entry_mut(id) else {
            warn!(?id, "show: stale popover id");
            return;
        };
        let origin = entry.place(host);
        entry.window.move_to(origin);
        entry.window.focus();
        entry.window.present();
        let was_visible = entry.visible;
        entry.visible = true;
        entry.grab.acquire(seat);
        if !was_visible {
            self.events.push((id, LifecycleEvent::Mapped));
        }
    }

    /// Hide the popover and release its grab. Hiding a hidden popover is a
    /// silent no-op.
    pub fn hide<S: Seat>(&mut self, id: PopoverId, seat: &mut S) {
        let Some(entry) = self.entry_mut(id) else {
            warn!(?id, "hide: stale popover id");
            return;
        };
        if !entry.visible {
            return;
        }
        entry.window.hide();
        entry.grab.release(seat);
        entry.visible = false;
        self.events.push((id, LifecycleEvent::Unmapped));
    }

    /// Destroy the popover outright: release the grab, close the window,
    /// withdraw pending deferred actions, free the slot. There is no
    /// intermediate hide.
    pub fn destroy<S: Seat>(&mut self, id: PopoverId, seat: &mut S) {
        let Some(entry) = self.entry_mut(id) else {
            debug!(?id, "destroy: already gone");
            return;
        };
        entry.grab.release(seat);
        entry.window.close();
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.pending_hides.cancel_value(&id);
        self.events.push((id, LifecycleEvent::Destroyed));
    }

    /// The host window was unmapped by someone else (session change, a
    /// compositor whim): release the grab unconditionally and record the
    /// popover hidden. Unlike [`Popovers::hide`] this does not touch the
    /// window itself.
    pub fn on_window_unmapped<S: Seat>(&mut self, id: PopoverId, seat: &mut S) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.visible {
            return;
        }
        entry.grab.release(seat);
        entry.visible = false;
        self.events.push((id, LifecycleEvent::Unmapped));
    }

    /// The window was resized or moved while visible: recompute placement so
    /// body and tail stay anchored. No lifecycle change.
    pub fn on_configure<H>(&mut self, id: PopoverId, host: &H)
    where
        H: AnchorHost<Widget = W>,
    {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.visible {
            return;
        }
        let origin = entry.place(host);
        entry.window.move_to(origin);
    }

    /// A button press arrived while this popover holds the grab. Presses
    /// inside the window pass through; a press outside schedules dismissal
    /// for the next idle tick, so the same click can still reach the
    /// anchor's own press handler first.
    pub fn on_button_press(&mut self, id: PopoverId, root: Point) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.visible {
            return;
        }
        let rect = Rect::from_origin_size(entry.window.position(), entry.window.size());
        if contains_inclusive(rect, root) {
            return;
        }
        self.pending_hides.schedule(id);
    }

    /// A key press arrived. Escape dismisses immediately; returns whether
    /// the key was consumed.
    pub fn on_key_press<S: Seat>(&mut self, id: PopoverId, key: Key, seat: &mut S) -> bool {
        if key != Key::Escape || !self.is_visible(id) {
            return false;
        }
        self.hide(id, seat);
        true
    }

    /// The host reports the popover's grab was stolen by another surface.
    pub fn on_grab_broken(&mut self, id: PopoverId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.grab.on_broken();
        }
    }

    /// The host reports a grab-ownership change within the application.
    pub fn on_grab_notify<S: Seat>(&mut self, id: PopoverId, was_grabbed: bool, seat: &mut S) {
        if let Some(entry) = self.entry_mut(id) {
            let visible = entry.visible;
            entry.grab.on_grab_notify(seat, was_grabbed, visible);
        }
    }

    /// The anchor widget died: destroy every popover anchored to it.
    pub fn on_anchor_destroyed<S: Seat>(&mut self, anchor: W, seat: &mut S) {
        let doomed: Vec<PopoverId> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| {
                slot.as_ref()
                    .filter(|e| e.anchor == anchor)
                    .map(|e| PopoverId::new(idx, e.generation))
            })
            .collect();
        for id in doomed {
            self.destroy(id, seat);
        }
    }

    /// Run deferred actions scheduled for this idle tick. Liveness is
    /// revalidated per task: a popover destroyed after scheduling simply
    /// drops its pending hide.
    pub fn run_idle<S: Seat>(&mut self, seat: &mut S) {
        for id in self.pending_hides.drain() {
            if self.is_alive(id) {
                self.hide(id, seat);
            }
        }
    }

    /// Collect lifecycle events accumulated since the previous drain.
    pub fn drain_events(&mut self) -> Vec<(PopoverId, LifecycleEvent)> {
        core::mem::take(&mut self.events)
    }

    fn entry(&self, id: PopoverId) -> Option<&Entry<W, N>> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|e| e.generation == id.1)
    }

    fn entry_mut(&mut self, id: PopoverId) -> Option<&mut Entry<W, N>> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|e| e.generation == id.1)
    }
}
