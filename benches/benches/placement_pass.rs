// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

use corbel_placement::{
    TailMetrics, clamp_to_monitor, position_for_edge, select_edge_automatic, tail_shape,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

fn gen_anchors(count: usize, monitor: Rect) -> Vec<Rect> {
    let mut rng = Rng::new(0x5eed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = monitor.x0 + rng.next_f64() * monitor.width();
        let y = monitor.y0 + rng.next_f64() * monitor.height();
        out.push(Rect::new(x, y, x + 40.0, y + 30.0));
    }
    out
}

fn bench_placement_pass(c: &mut Criterion) {
    let metrics = TailMetrics::default();
    let monitor = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let size = Size::new(280.0, 320.0);
    let anchors = gen_anchors(1024, monitor);

    let mut group = c.benchmark_group("placement_pass");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                let edge = select_edge_automatic(anchor, size, monitor, &metrics);
                let ideal = position_for_edge(anchor, size, edge, &metrics);
                let mut tail = tail_shape(size, edge, &metrics);
                let origin = clamp_to_monitor(ideal, size, monitor, &mut tail, &metrics);
                black_box((origin, tail));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_placement_pass);
criterion_main!(benches);
