// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementRequest, Space, Variant, resolve_position};

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
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn gen_targets(count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 16.0 + rng.next_f64() * 120.0;
        let h = 16.0 + rng.next_f64() * 40.0;
        let x0 = rng.next_f64() * (VIEWPORT.width - w);
        let y0 = rng.next_f64() * (VIEWPORT.height - h);
        out.push(Rect::new(x0, y0, x0 + w, y0 + h));
    }
    out
}

fn bench_auto(c: &mut Criterion) {
    let targets = gen_targets(4096, 0xCAFE_F00D_DEAD_BEEF);
    let mut group = c.benchmark_group("resolve_auto");
    group.throughput(Throughput::Elements(targets.len() as u64));
    for (name, variant, popup) in [
        ("plain", Variant::Plain, Size::new(120.0, 24.0)),
        ("rich", Variant::Rich, Size::new(312.0, 140.0)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &t in &targets {
                    black_box(resolve_position(
                        black_box(t),
                        popup,
                        PlacementRequest::Auto,
                        VIEWPORT,
                        variant,
                    ));
                }
            });
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let targets = gen_targets(4096, 0xBADC_F00D_1234_5678);
    let mut group = c.benchmark_group("resolve_exact");
    group.throughput(Throughput::Elements(
        (targets.len() * Placement::ALL.len()) as u64,
    ));
    group.bench_function("all_placements", |b| {
        b.iter(|| {
            for &t in &targets {
                for p in Placement::ALL {
                    black_box(resolve_position(
                        black_box(t),
                        Size::new(120.0, 24.0),
                        PlacementRequest::Exact(p),
                        VIEWPORT,
                        Variant::Plain,
                    ));
                }
            }
        });
    });
    group.finish();
}

fn bench_space(c: &mut Criterion) {
    let targets = gen_targets(4096, 0xFACE_FEED_CAFE_BABE);
    let margins = understory_placement::Margins::for_variant(Variant::Rich);
    c.bench_function("space_measure", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(Space::measure(
                    black_box(t),
                    Size::new(312.0, 140.0),
                    VIEWPORT,
                    margins,
                ));
            }
        });
    });
}

criterion_group!(benches, bench_auto, bench_exact, bench_space);
criterion_main!(benches);
