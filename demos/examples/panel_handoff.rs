// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roll-over hand-off between two panel triggers, against an in-memory host.
//!
//! Simulates the life of a top-docked panel: click the first button, sweep
//! the pointer over the second, and watch the registry hide one popover and
//! schedule the other; then dismiss with Escape.
//!
//! Run:
//! - `cargo run -p corbel_demos --example panel_handoff`

use corbel_manager::Registry;
use corbel_placement::DockEdge;
use corbel_popover::{AnchorHost, Key, PopoverWindow, Popovers, Seat, SeatCapabilities};
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;

/// A panel docked along the top of a 1920x1080 screen.
struct Panel {
    buttons: HashMap<u32, Rect>,
}

impl Panel {
    fn new() -> Self {
        let mut buttons = HashMap::new();
        buttons.insert(1, Rect::new(100.0, 0.0, 140.0, 30.0));
        buttons.insert(2, Rect::new(160.0, 0.0, 200.0, 30.0));
        Self { buttons }
    }
}

impl AnchorHost for Panel {
    type Widget = u32;

    fn frame_in_toplevel(&self, widget: u32) -> Option<Rect> {
        self.buttons.get(&widget).copied()
    }

    fn toplevel_origin(&self, _widget: u32) -> Option<Point> {
        Some(Point::ORIGIN)
    }

    fn monitor_rect(&self, _widget: u32) -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    fn dock_edge(&self, _widget: u32) -> Option<DockEdge> {
        Some(DockEdge::Top)
    }
}

/// A pretend borderless window that just remembers where it was put.
struct SimWindow {
    label: &'static str,
    origin: Point,
    mapped: bool,
}

impl SimWindow {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            origin: Point::ORIGIN,
            mapped: false,
        }
    }
}

impl PopoverWindow for SimWindow {
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

    fn present(&mut self) {
        self.mapped = true;
        println!("  [{}] presented at {:?}", self.label, self.origin);
    }

    fn hide(&mut self) {
        self.mapped = false;
        println!("  [{}] hidden", self.label);
    }

    fn close(&mut self) {
        println!("  [{}] closed", self.label);
    }
}

/// One systemwide grab, always granted.
struct SimSeat {
    held: bool,
}

impl Seat for SimSeat {
    fn acquire(&mut self, _caps: SeatCapabilities) -> bool {
        self.held = true;
        true
    }

    fn release(&mut self) {
        self.held = false;
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let panel = Panel::new();
    let mut popovers = Popovers::new();
    let mut registry = Registry::new();
    let mut seat = SimSeat { held: false };

    let calendar = popovers.create(1_u32, SimWindow::new("calendar"));
    let sound = popovers.create(2_u32, SimWindow::new("sound"));
    registry.register(1, calendar, &mut popovers).unwrap();
    registry.register(2, sound, &mut popovers).unwrap();

    println!("click button 1:");
    registry.show(1, &mut popovers, &panel, &mut seat).unwrap();
    registry.apply_events(&popovers.drain_events());
    assert_eq!(registry.active(), Some(calendar));
    assert!(seat.held, "visible popover holds the seat grab");

    println!("sweep the pointer over button 2:");
    registry.on_pointer_enter(Point::new(170.0, 10.0), &mut popovers, &panel, &mut seat);
    registry.apply_events(&popovers.drain_events());
    assert!(!popovers.is_visible(calendar));
    assert!(!popovers.is_visible(sound), "show waits for the idle tick");

    println!("idle tick:");
    popovers.run_idle(&mut seat);
    registry.run_idle(&mut popovers, &panel, &mut seat);
    registry.apply_events(&popovers.drain_events());
    assert_eq!(registry.active(), Some(sound));
    assert!(popovers.window(sound).unwrap().mapped);

    println!("press Escape:");
    assert!(popovers.on_key_press(sound, Key::Escape, &mut seat));
    registry.apply_events(&popovers.drain_events());
    assert_eq!(registry.active(), None);
    assert!(!seat.held, "grab released with the last popover");

    println!("done.");
}
