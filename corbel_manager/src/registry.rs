// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover registry: trigger association and hover hand-off.

use kurbo::Point;
use tracing::warn;

use corbel_placement::{PositionPolicy, anchor_rect, contains_inclusive};
use corbel_popover::{
    AnchorHost, IdleQueue, LifecycleEvent, PopoverId, PopoverWindow, Popovers, Seat,
};

use crate::error::RegistryError;

struct RegistryEntry<W> {
    trigger: W,
    popover: PopoverId,
}

/// Tracks which popover belongs to which trigger widget in a panel, and
/// enforces that at most one of them is active at a time.
///
/// The registry never owns popovers: it stores [`PopoverId`]s into a
/// [`Popovers`] arena the caller passes to each operation, and stale ids are
/// detected rather than dereferenced. Entries iterate in registration order,
/// which makes the hand-off hit-test deterministic when trigger rectangles
/// overlap: the earliest registration wins.
pub struct Registry<W> {
    entries: Vec<RegistryEntry<W>>,
    active: Option<PopoverId>,
    pending_show: IdleQueue<PopoverId>,
}

impl<W> core::fmt::Debug for Registry<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .field("active", &self.active)
            .field("pending_show", &self.pending_show.len())
            .finish_non_exhaustive()
    }
}

impl<W> Default for Registry<W>
where
    W: Copy + Eq + core::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Registry<W>
where
    W: Copy + Eq + core::fmt::Debug,
{
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            pending_show: IdleQueue::new(),
        }
    }

    /// Number of registered triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no triggers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The popover currently marked active, if any.
    pub fn active(&self) -> Option<PopoverId> {
        self.active
    }

    /// The popover registered for `trigger`, if any.
    pub fn popover_for(&self, trigger: W) -> Option<PopoverId> {
        self.entries
            .iter()
            .find(|e| e.trigger == trigger)
            .map(|e| e.popover)
    }

    /// Associate `popover` with `trigger`.
    ///
    /// Registration implies a panel context, so the popover's policy is
    /// forced to [`PositionPolicy::ToplevelHint`]. Registering a trigger
    /// twice is refused and leaves the prior association untouched.
    pub fn register<N: PopoverWindow>(
        &mut self,
        trigger: W,
        popover: PopoverId,
        popovers: &mut Popovers<W, N>,
    ) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.trigger == trigger) {
            warn!(?trigger, "register: trigger is already registered");
            return Err(RegistryError::AlreadyRegistered);
        }
        if !popovers.is_alive(popover) {
            warn!(?trigger, ?popover, "register: popover id is stale");
            return Err(RegistryError::StalePopover);
        }

        popovers.set_position_policy(popover, PositionPolicy::ToplevelHint);
        self.entries.push(RegistryEntry { trigger, popover });
        Ok(())
    }

    /// Drop the association for `trigger`.
    pub fn unregister(&mut self, trigger: W) -> Result<(), RegistryError> {
        let Some(idx) = self.entries.iter().position(|e| e.trigger == trigger) else {
            warn!(?trigger, "unregister: trigger is unknown");
            return Err(RegistryError::UnknownTrigger);
        };
        let entry = self.entries.remove(idx);
        self.pending_show.cancel_value(&entry.popover);
        Ok(())
    }

    /// Show the popover registered for `trigger`.
    pub fn show<N, H, S>(
        &self,
        trigger: W,
        popovers: &mut Popovers<W, N>,
        host: &H,
        seat: &mut S,
    ) -> Result<(), RegistryError>
    where
        N: PopoverWindow,
        H: AnchorHost<Widget = W>,
        S: Seat,
    {
        let Some(popover) = self.popover_for(trigger) else {
            warn!(?trigger, "show: trigger is unknown");
            return Err(RegistryError::UnknownTrigger);
        };
        popovers.show(popover, host, seat);
        Ok(())
    }

    /// Pointer entered a popover's host window at screen position `at`:
    /// decide whether to roll the active popover over to a sibling trigger.
    ///
    /// Hosts forward enter events only for popover toplevels (crossing
    /// events on child widgets inside the popover are not window entries).
    /// Nothing happens unless a popover is active; re-entering the active
    /// popover's own rectangle is a no-op, as is pointing at the trigger of
    /// the already-active popover. Otherwise the active popover hides now
    /// and the matched one is scheduled to show at the next idle tick.
    pub fn on_pointer_enter<N, H, S>(
        &mut self,
        at: Point,
        popovers: &mut Popovers<W, N>,
        host: &H,
        seat: &mut S,
    ) where
        N: PopoverWindow,
        H: AnchorHost<Widget = W>,
        S: Seat,
    {
        let Some(active) = self.active else {
            return;
        };

        // Still inside the visible popover: the pointer just wandered home.
        if let Some(rect) = popovers.window_rect(active)
            && popovers.is_visible(active)
            && contains_inclusive(rect, at)
        {
            return;
        }

        let Some(target) = self.trigger_popover_at(at, host) else {
            return;
        };
        if target == active {
            return;
        }

        popovers.hide(active, seat);
        self.active = None;
        self.pending_show.schedule(target);
    }

    /// Consume lifecycle events drained from the arena, keeping the
    /// active-popover bookkeeping and the entry table in sync.
    pub fn apply_events(&mut self, events: &[(PopoverId, LifecycleEvent)]) {
        for &(id, event) in events {
            match event {
                LifecycleEvent::Mapped => {
                    // Only popovers we manage can become "the active one".
                    if self.entries.iter().any(|e| e.popover == id) {
                        self.active = Some(id);
                    }
                }
                LifecycleEvent::Unmapped => {
                    if self.active == Some(id) {
                        self.active = None;
                    }
                }
                LifecycleEvent::Destroyed => {
                    self.entries.retain(|e| e.popover != id);
                    self.pending_show.cancel_value(&id);
                    if self.active == Some(id) {
                        self.active = None;
                    }
                }
            }
        }
    }

    /// A registered trigger widget died: drop its entry so later lookups
    /// cannot go stale. Unknown triggers are ignored (the widget may have
    /// been unregistered already).
    pub fn on_trigger_destroyed(&mut self, trigger: W) {
        if let Some(idx) = self.entries.iter().position(|e| e.trigger == trigger) {
            let entry = self.entries.remove(idx);
            self.pending_show.cancel_value(&entry.popover);
        }
    }

    /// Fire hand-off shows scheduled for this idle tick. Each target is
    /// revalidated: it must still be alive and still registered.
    pub fn run_idle<N, H, S>(&mut self, popovers: &mut Popovers<W, N>, host: &H, seat: &mut S)
    where
        N: PopoverWindow,
        H: AnchorHost<Widget = W>,
        S: Seat,
    {
        for id in self.pending_show.drain() {
            if popovers.is_alive(id) && self.entries.iter().any(|e| e.popover == id) {
                popovers.show(id, host, seat);
            }
        }
    }

    /// Hit-test `at` against every registered trigger's screen rectangle,
    /// in registration order; first match wins.
    fn trigger_popover_at<H>(&self, at: Point, host: &H) -> Option<PopoverId>
    where
        H: AnchorHost<Widget = W>,
    {
        self.entries
            .iter()
            .find(|e| {
                let rect = anchor_rect(
                    host.frame_in_toplevel(e.trigger),
                    host.toplevel_origin(e.trigger),
                );
                // Unrealized triggers yield a degenerate rect; never a match.
                rect.area() > 0.0 && contains_inclusive(rect, at)
            })
            .map(|e| e.popover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corbel_placement::DockEdge;
    use corbel_popover::SeatCapabilities;
    use kurbo::{Rect, Size};
    use std::collections::HashMap;

    struct TestHost {
        frames: HashMap<u32, Rect>,
        dock: Option<DockEdge>,
    }

    impl TestHost {
        /// Two 40px-wide triggers sitting side by side on a top panel.
        fn panel() -> Self {
            let mut frames = HashMap::new();
            frames.insert(1, Rect::new(100.0, 0.0, 140.0, 30.0));
            frames.insert(2, Rect::new(160.0, 0.0, 200.0, 30.0));
            Self {
                frames,
                dock: Some(DockEdge::Top),
            }
        }
    }

    impl AnchorHost for TestHost {
        type Widget = u32;

        fn frame_in_toplevel(&self, widget: u32) -> Option<Rect> {
            self.frames.get(&widget).copied()
        }

        fn toplevel_origin(&self, _widget: u32) -> Option<Point> {
            Some(Point::ORIGIN)
        }

        fn monitor_rect(&self, _widget: u32) -> Rect {
            Rect::new(0.0, 0.0, 1920.0, 1080.0)
        }

        fn dock_edge(&self, _widget: u32) -> Option<DockEdge> {
            self.dock
        }
    }

    #[derive(Default)]
    struct TestWindow {
        origin: Point,
    }

    impl PopoverWindow for TestWindow {
        fn size(&self) -> Size {
            Size::new(200.0, 150.0)
        }

        fn position(&self) -> Point {
            self.origin
        }

        fn move_to(&mut self, origin: Point) {
            self.origin = origin;
        }

        fn focus(&mut self) {}
        fn present(&mut self) {}
        fn hide(&mut self) {}
        fn close(&mut self) {}
    }

    struct TestSeat;

    impl Seat for TestSeat {
        fn acquire(&mut self, _caps: SeatCapabilities) -> bool {
            true
        }

        fn release(&mut self) {}
    }

    struct Fixture {
        registry: Registry<u32>,
        popovers: Popovers<u32, TestWindow>,
        seat: TestSeat,
        a: PopoverId,
        b: PopoverId,
    }

    fn fixture() -> Fixture {
        let mut popovers = Popovers::new();
        let a = popovers.create(1, TestWindow::default());
        let b = popovers.create(2, TestWindow::default());
        let mut registry = Registry::new();
        registry.register(1, a, &mut popovers).unwrap();
        registry.register(2, b, &mut popovers).unwrap();
        Fixture {
            registry,
            popovers,
            seat: TestSeat,
            a,
            b,
        }
    }

    /// Drain arena events into the registry, as the host loop would.
    fn sync(f: &mut Fixture) {
        let events = f.popovers.drain_events();
        f.registry.apply_events(&events);
    }

    #[test]
    fn register_forces_toplevel_hint_policy() {
        let f = fixture();
        assert_eq!(
            f.popovers.position_policy(f.a),
            Some(PositionPolicy::ToplevelHint)
        );
    }

    #[test]
    fn duplicate_registration_keeps_the_original() {
        let mut f = fixture();
        let other = f.popovers.create(9, TestWindow::default());
        assert_eq!(
            f.registry.register(1, other, &mut f.popovers),
            Err(RegistryError::AlreadyRegistered)
        );
        assert_eq!(f.registry.popover_for(1), Some(f.a));
        assert_eq!(f.registry.len(), 2);
    }

    #[test]
    fn stale_popover_is_refused() {
        let mut f = fixture();
        let doomed = f.popovers.create(9, TestWindow::default());
        f.popovers.destroy(doomed, &mut f.seat);
        assert_eq!(
            f.registry.register(9, doomed, &mut f.popovers),
            Err(RegistryError::StalePopover)
        );
    }

    #[test]
    fn unknown_trigger_operations_are_no_ops() {
        let mut f = fixture();
        assert_eq!(
            f.registry.unregister(42),
            Err(RegistryError::UnknownTrigger)
        );
        assert_eq!(
            f.registry
                .show(42, &mut f.popovers, &TestHost::panel(), &mut f.seat),
            Err(RegistryError::UnknownTrigger)
        );
    }

    #[test]
    fn show_maps_and_becomes_active() {
        let mut f = fixture();
        f.registry
            .show(1, &mut f.popovers, &TestHost::panel(), &mut f.seat)
            .unwrap();
        sync(&mut f);
        assert!(f.popovers.is_visible(f.a));
        assert_eq!(f.registry.active(), Some(f.a));
    }

    #[test]
    fn handoff_hides_now_and_shows_at_idle() {
        let mut f = fixture();
        f.registry
            .show(1, &mut f.popovers, &TestHost::panel(), &mut f.seat)
            .unwrap();
        sync(&mut f);

        // Pointer rolls over trigger 2's rectangle.
        let host = TestHost::panel();
        f.registry
            .on_pointer_enter(Point::new(170.0, 10.0), &mut f.popovers, &host, &mut f.seat);

        assert!(!f.popovers.is_visible(f.a), "old popover hides synchronously");
        assert!(!f.popovers.is_visible(f.b), "new popover waits for idle");
        sync(&mut f);
        assert_eq!(f.registry.active(), None);

        f.registry.run_idle(&mut f.popovers, &host, &mut f.seat);
        sync(&mut f);
        assert!(f.popovers.is_visible(f.b));
        assert_eq!(f.registry.active(), Some(f.b));
        assert!(
            !(f.popovers.is_visible(f.a) && f.popovers.is_visible(f.b)),
            "never both visible"
        );
    }

    #[test]
    fn reentering_the_visible_popover_is_a_no_op() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .show(1, &mut f.popovers, &host, &mut f.seat)
            .unwrap();
        sync(&mut f);

        let inside = f.popovers.window_rect(f.a).unwrap().center();
        f.registry
            .on_pointer_enter(inside, &mut f.popovers, &host, &mut f.seat);
        assert!(f.popovers.is_visible(f.a));
        assert_eq!(f.registry.active(), Some(f.a));
    }

    #[test]
    fn entering_the_active_trigger_is_a_no_op() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .show(1, &mut f.popovers, &host, &mut f.seat)
            .unwrap();
        sync(&mut f);

        f.registry
            .on_pointer_enter(Point::new(120.0, 10.0), &mut f.popovers, &host, &mut f.seat);
        assert!(f.popovers.is_visible(f.a));
        f.registry.run_idle(&mut f.popovers, &host, &mut f.seat);
        sync(&mut f);
        assert_eq!(f.registry.active(), Some(f.a));
    }

    #[test]
    fn miss_does_nothing() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .show(1, &mut f.popovers, &host, &mut f.seat)
            .unwrap();
        sync(&mut f);

        f.registry.on_pointer_enter(
            Point::new(1000.0, 500.0),
            &mut f.popovers,
            &host,
            &mut f.seat,
        );
        assert!(f.popovers.is_visible(f.a));
        assert_eq!(f.registry.active(), Some(f.a));
    }

    #[test]
    fn no_handoff_without_an_active_popover() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .on_pointer_enter(Point::new(170.0, 10.0), &mut f.popovers, &host, &mut f.seat);
        f.registry.run_idle(&mut f.popovers, &host, &mut f.seat);
        assert!(!f.popovers.is_visible(f.b));
    }

    #[test]
    fn overlapping_triggers_resolve_in_registration_order() {
        let mut popovers: Popovers<u32, TestWindow> = Popovers::new();
        let first = popovers.create(1, TestWindow::default());
        let second = popovers.create(2, TestWindow::default());
        let mut registry = Registry::new();

        let mut host = TestHost::panel();
        // Both triggers cover the same rectangle.
        host.frames.insert(1, Rect::new(100.0, 0.0, 140.0, 30.0));
        host.frames.insert(2, Rect::new(100.0, 0.0, 140.0, 30.0));

        registry.register(1, first, &mut popovers).unwrap();
        registry.register(2, second, &mut popovers).unwrap();

        let mut seat = TestSeat;
        registry
            .show(2, &mut popovers, &host, &mut seat)
            .unwrap();
        registry.apply_events(&popovers.drain_events());

        // The overlap point matches trigger 1 first, so popover 2 rolls over
        // to popover 1.
        registry.on_pointer_enter(Point::new(120.0, 10.0), &mut popovers, &host, &mut seat);
        registry.run_idle(&mut popovers, &host, &mut seat);
        registry.apply_events(&popovers.drain_events());
        assert_eq!(registry.active(), Some(first));
    }

    #[test]
    fn destroyed_trigger_cleans_up() {
        let mut f = fixture();
        f.registry.on_trigger_destroyed(1);
        assert_eq!(f.registry.popover_for(1), None);
        assert_eq!(
            f.registry.unregister(1),
            Err(RegistryError::UnknownTrigger),
            "later unregister is a logged no-op"
        );
        assert_eq!(
            f.registry
                .show(1, &mut f.popovers, &TestHost::panel(), &mut f.seat),
            Err(RegistryError::UnknownTrigger),
            "later show is a logged no-op"
        );
    }

    #[test]
    fn popover_destroyed_before_idle_show_is_skipped() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .show(1, &mut f.popovers, &host, &mut f.seat)
            .unwrap();
        sync(&mut f);

        f.registry
            .on_pointer_enter(Point::new(170.0, 10.0), &mut f.popovers, &host, &mut f.seat);
        f.popovers.destroy(f.b, &mut f.seat);
        sync(&mut f);

        f.registry.run_idle(&mut f.popovers, &host, &mut f.seat);
        sync(&mut f);
        assert_eq!(f.registry.active(), None);
        assert_eq!(f.registry.popover_for(2), None, "dead entry dropped");
    }

    #[test]
    fn at_most_one_active_across_arbitrary_handoffs() {
        let mut f = fixture();
        let host = TestHost::panel();
        f.registry
            .show(1, &mut f.popovers, &host, &mut f.seat)
            .unwrap();
        sync(&mut f);

        let wiggle = [
            Point::new(170.0, 10.0), // trigger 2
            Point::new(120.0, 10.0), // trigger 1
            Point::new(170.0, 10.0), // trigger 2 again
        ];
        for at in wiggle {
            f.registry
                .on_pointer_enter(at, &mut f.popovers, &host, &mut f.seat);
            sync(&mut f);
            f.registry.run_idle(&mut f.popovers, &host, &mut f.seat);
            sync(&mut f);

            let visible = [f.a, f.b]
                .iter()
                .filter(|&&id| f.popovers.is_visible(id))
                .count();
            assert!(visible <= 1, "at most one visible popover");
        }
        assert_eq!(f.registry.active(), Some(f.b));
    }

    #[test]
    fn mapped_event_for_unmanaged_popover_is_ignored() {
        let mut f = fixture();
        let stray = f.popovers.create(9, TestWindow::default());
        f.popovers.show(stray, &TestHost::panel(), &mut f.seat);
        sync(&mut f);
        assert_eq!(f.registry.active(), None);
    }
}
