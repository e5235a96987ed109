// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};

use corbel_manager::Registry;
use corbel_placement::DockEdge;
use corbel_popover::{AnchorHost, PopoverWindow, Popovers, Seat, SeatCapabilities};

/// A wide panel with `n` equally spaced 40px triggers.
struct StripPanel {
    n: usize,
}

impl AnchorHost for StripPanel {
    type Widget = u32;

    fn frame_in_toplevel(&self, widget: u32) -> Option<Rect> {
        let idx = widget as usize;
        if idx >= self.n {
            return None;
        }
        let x = idx as f64 * 48.0;
        Some(Rect::new(x, 0.0, x + 40.0, 30.0))
    }

    fn toplevel_origin(&self, _widget: u32) -> Option<Point> {
        Some(Point::ORIGIN)
    }

    fn monitor_rect(&self, _widget: u32) -> Rect {
        Rect::new(0.0, 0.0, 30720.0, 1080.0)
    }

    fn dock_edge(&self, _widget: u32) -> Option<DockEdge> {
        Some(DockEdge::Top)
    }
}

struct NullWindow;

impl PopoverWindow for NullWindow {
    fn size(&self) -> Size {
        Size::new(200.0, 150.0)
    }

    fn position(&self) -> Point {
        Point::ORIGIN
    }

    fn move_to(&mut self, _origin: Point) {}
    fn focus(&mut self) {}
    fn present(&mut self) {}
    fn hide(&mut self) {}
    fn close(&mut self) {}
}

struct NullSeat;

impl Seat for NullSeat {
    fn acquire(&mut self, _caps: SeatCapabilities) -> bool {
        true
    }

    fn release(&mut self) {}
}

fn build(n: usize) -> (Registry<u32>, Popovers<u32, NullWindow>) {
    let mut popovers = Popovers::new();
    let mut registry = Registry::new();
    for w in 0..n {
        #[allow(clippy::cast_possible_truncation)]
        let w = w as u32;
        let id = popovers.create(w, NullWindow);
        registry.register(w, id, &mut popovers).unwrap();
    }
    (registry, popovers)
}

fn bench_handoff_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("handoff_scan");
    for n in [16_usize, 64, 256] {
        let panel = StripPanel { n };
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("enter_scan_{n}_triggers"), |b| {
            b.iter_batched(
                || {
                    let (mut registry, mut popovers) = build(n);
                    let mut seat = NullSeat;
                    // Activate the first popover so every enter runs the scan.
                    registry.show(0, &mut popovers, &panel, &mut seat).unwrap();
                    registry.apply_events(&popovers.drain_events());
                    (registry, popovers)
                },
                |(mut registry, mut popovers)| {
                    let mut seat = NullSeat;
                    // Land on the last trigger: worst case for the ordered scan.
                    let at = Point::new((n - 1) as f64 * 48.0 + 20.0, 10.0);
                    registry.on_pointer_enter(black_box(at), &mut popovers, &panel, &mut seat);
                    black_box((registry, popovers));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_handoff_scan);
criterion_main!(benches);
