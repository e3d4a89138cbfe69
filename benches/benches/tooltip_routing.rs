// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::Position;
use understory_tooltip::motion::Animation;
use understory_tooltip::{
    NoParent, Surface, TooltipConfig, TooltipEvent, TooltipId, TooltipInput, TooltipNodes,
    Tooltips,
};

/// Layout for `n` tooltips in a row; discards every effect.
struct Row;

impl Surface<u32> for Row {
    fn bounds(&self, node: &u32) -> Option<Rect> {
        let i = f64::from(node / 4);
        match node % 4 {
            2 => Some(Rect::new(i * 50.0, 300.0, i * 50.0 + 40.0, 320.0)),
            3 => Some(Rect::new(0.0, 0.0, 120.0, 24.0)),
            _ => None,
        }
    }
    fn viewport(&self) -> Size {
        Size::new(1280.0, 800.0)
    }
    fn dispatch(&mut self, _: TooltipId, _: TooltipEvent) -> bool {
        true
    }
    fn set_hidden(&mut self, _: TooltipId, _: bool) {}
    fn place(&mut self, _: TooltipId, _: &Position) {}
    fn play(&mut self, _: TooltipId, _: &Animation) {}
    fn stop_animations(&mut self, _: TooltipId) {}
    fn request_frame(&mut self, _: TooltipId) {}
}

// Tooltip `i` uses root `4i + 1`, target `4i + 2`, popup `4i + 3`.
fn build(n: u32) -> (Tooltips<u32>, Vec<TooltipId>) {
    let mut tooltips = Tooltips::new();
    let mut host = Row;
    let ids: Vec<_> = (0..n)
        .map(|i| {
            let id = tooltips.attach(
                TooltipConfig::default().open_delay(0),
                TooltipNodes {
                    root: 4 * i + 1,
                    target: Some(4 * i + 2),
                    popup: 4 * i + 3,
                },
                &NoParent,
            );
            tooltips.first_updated(id, &mut host);
            id
        })
        .collect();
    (tooltips, ids)
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_sweep");
    for n in [16_u32, 128] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("n{}", n), |b| {
            b.iter_batched(
                || build(n),
                |(mut tooltips, ids)| {
                    let mut host = Row;
                    // Sweep the pointer across every target; each enter opens and
                    // force-closes the previous plain tooltip.
                    for (i, &id) in ids.iter().enumerate() {
                        let i = i as u32;
                        let path = [0, 4 * i + 1, 4 * i + 2];
                        let now = u64::from(i) * 16;
                        black_box(tooltips.broadcast(
                            TooltipInput::PointerMove { path: &path },
                            now,
                            &mut host,
                        ));
                        black_box(tooltips.handle(id, TooltipInput::TargetResized, now, &mut host));
                    }
                    tooltips
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_idle_128", |b| {
        let (mut tooltips, _) = build(128);
        let mut host = Row;
        let mut now = 0_u64;
        b.iter(|| {
            now += 16;
            tooltips.advance(black_box(now), &mut host);
        });
    });
}

criterion_group!(benches, bench_sweep, bench_advance);
criterion_main!(benches);
