// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the gesture-to-transform pipeline.

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};

use loupe::{GestureSignal, Loupe};
use loupe_motion::{FlingTask, ScrollEnvelope};
use loupe_transform::TransformStack;

const VIEWPORT: Size = Size::new(1080.0, 1920.0);
const PHOTO: Size = Size::new(4000.0, 3000.0);
const CENTER: Point = Point::new(540.0, 960.0);

/// A portrait phone screen showing a 4:3 photo zoomed to 2.5x.
fn zoomed_photo() -> Loupe {
    let mut loupe = Loupe::new(VIEWPORT);
    loupe.set_content(PHOTO);
    loupe.set_scale(2.5, CENTER, false, Duration::ZERO).unwrap();
    loupe
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    group.bench_function("translate_and_clamp", |b| {
        let mut stack = TransformStack::new(VIEWPORT);
        stack.set_content(PHOTO);
        stack.apply_scale(2.5, CENTER);
        stack.clamp();
        b.iter(|| {
            stack.apply_translate(black_box(Vec2::new(3.0, -2.0)));
            black_box(stack.clamp());
        })
    });

    group.bench_function("effective_transform", |b| {
        let mut stack = TransformStack::new(VIEWPORT);
        stack.set_content(PHOTO);
        stack.apply_scale(2.5, CENTER);
        stack.clamp();
        b.iter(|| black_box(stack.effective_transform()))
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    group.bench_function("drag_signal", |b| {
        let mut loupe = zoomed_photo();
        loupe.handle_signal(GestureSignal::PointerDown, Duration::ZERO);
        // Net-zero movement keeps the content mid-range across iterations.
        b.iter(|| {
            black_box(loupe.handle_signal(
                GestureSignal::Drag {
                    delta: Vec2::new(2.0, -1.0),
                },
                Duration::ZERO,
            ));
            black_box(loupe.handle_signal(
                GestureSignal::Drag {
                    delta: Vec2::new(-2.0, 1.0),
                },
                Duration::ZERO,
            ));
        })
    });

    group.bench_function("pinch_signal", |b| {
        let mut loupe = zoomed_photo();
        loupe.handle_signal(GestureSignal::PointerDown, Duration::ZERO);
        b.iter(|| {
            black_box(loupe.handle_signal(
                GestureSignal::Pinch {
                    factor: 1.01,
                    focal: CENTER,
                },
                Duration::ZERO,
            ));
            black_box(loupe.handle_signal(
                GestureSignal::Pinch {
                    factor: 1.0 / 1.01,
                    focal: CENTER,
                },
                Duration::ZERO,
            ));
        })
    });

    group.bench_function("double_tap_settle", |b| {
        b.iter_batched(
            || {
                let mut loupe = Loupe::new(VIEWPORT);
                loupe.set_content(PHOTO);
                loupe
            },
            |mut loupe| {
                loupe.handle_signal(
                    GestureSignal::DoubleTap { position: CENTER },
                    Duration::ZERO,
                );
                let mut now = Duration::ZERO;
                while loupe.tick(now) {
                    now += Duration::from_millis(16);
                }
                black_box(loupe.scale());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fling");

    let rect = Rect::new(-1000.0, -500.0, 3000.0, 2500.0);
    let envelope = ScrollEnvelope::from_display_rect(rect, VIEWPORT);

    group.bench_function("single_step", |b| {
        b.iter_batched(
            || FlingTask::new(envelope, Vec2::new(-2400.0, 900.0), Duration::ZERO),
            |mut fling| black_box(fling.step(Duration::from_millis(16))),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("run_to_rest", |b| {
        b.iter_batched(
            || FlingTask::new(envelope, Vec2::new(-2400.0, 900.0), Duration::ZERO),
            |mut fling| {
                let mut now = Duration::ZERO;
                while let Some(delta) = fling.step(now) {
                    black_box(delta);
                    now += Duration::from_millis(16);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_transform, bench_controller, bench_fling);
criterion_main!(benches);
