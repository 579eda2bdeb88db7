// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size};
use loupe_zoom::{
    DisplayMode, PointerAction, PointerEvent, PointerId, Viewport, ZoomController, ZoomHost,
};

/// Host that only counts what it is asked to do.
#[derive(Default)]
struct CountingHost {
    transforms: usize,
}

impl ZoomHost for CountingHost {
    fn set_display_mode(&mut self, _: DisplayMode) {}

    fn apply_transform(&mut self, matrix: Affine) {
        black_box(matrix);
        self.transforms += 1;
    }

    fn request_parent_gesture_lock(&mut self, _: bool) {}
}

fn controller() -> ZoomController {
    let mut zoom = ZoomController::default();
    zoom.set_viewport(Viewport::new(Size::new(1080.0, 1920.0)));
    zoom.set_content_size(Some(Size::new(4000.0, 3000.0)));
    zoom
}

/// A pinch that opens and closes `steps` times around the screen center.
fn pinch_series(steps: usize) -> Vec<PointerEvent> {
    let center = Point::new(540.0, 960.0);
    let two = |action: PointerAction, gap: f64, t: u64| {
        PointerEvent::new(action, t)
            .with_pointer(PointerId(0), Point::new(center.x - gap / 2.0, center.y))
            .with_pointer(PointerId(1), Point::new(center.x + gap / 2.0, center.y + 3.0))
    };

    let mut events = Vec::with_capacity(steps + 5);
    events.push(PointerEvent::single(
        PointerAction::Down,
        PointerId(0),
        Point::new(center.x - 100.0, center.y),
        0,
    ));
    events.push(two(PointerAction::PointerDown { index: 1 }, 200.0, 1));
    events.push(two(PointerAction::Move, 200.0, 2));
    for i in 0..steps {
        // Oscillate between 1.5x and 2.5x so the pinch never resets.
        let phase = (i % 64) as f64 / 64.0;
        let gap = 400.0 - 100.0 * (phase * core::f64::consts::TAU).cos();
        events.push(two(PointerAction::Move, gap, 3 + i as u64));
    }
    events.push(two(PointerAction::PointerUp { index: 1 }, 300.0, steps as u64 + 3));
    events.push(PointerEvent::single(
        PointerAction::Up,
        PointerId(0),
        center,
        steps as u64 + 4,
    ));
    events
}

/// A single-pointer drag across zoomed content.
fn pan_series(steps: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(steps + 2);
    let at = |i: usize| Point::new(200.0 + (i % 400) as f64 * 2.0, 900.0 + (i % 50) as f64);
    events.push(PointerEvent::single(PointerAction::Down, PointerId(0), at(0), 0));
    for i in 1..=steps {
        events.push(PointerEvent::single(PointerAction::Move, PointerId(0), at(i), i as u64));
    }
    events.push(PointerEvent::single(
        PointerAction::Up,
        PointerId(0),
        at(steps),
        steps as u64 + 1,
    ));
    events
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pinch_series");
    for steps in [16_usize, 256, 4_096] {
        let events = pinch_series(steps);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &events, |b, events| {
            b.iter_batched(
                || (controller(), CountingHost::default()),
                |(mut zoom, mut host)| {
                    for ev in events {
                        black_box(zoom.on_touch_event(ev, &mut host));
                    }
                    black_box(host.transforms);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pan_series");
    for steps in [16_usize, 256, 4_096] {
        let events = pan_series(steps);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut zoom = controller();
                    let mut host = CountingHost::default();
                    let focus = Point::new(540.0, 960.0);
                    zoom.on_scale_begin(focus);
                    zoom.on_scale_update(focus, 2.5, 0, &mut host);
                    (zoom, host)
                },
                |(mut zoom, mut host)| {
                    for ev in events {
                        black_box(zoom.on_touch_event(ev, &mut host));
                    }
                    black_box(zoom.translation());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reset_animation(c: &mut Criterion) {
    c.bench_function("zoom/reset_animation_frames", |b| {
        b.iter_batched(
            || {
                let mut zoom = controller();
                let mut host = CountingHost::default();
                let focus = Point::new(540.0, 960.0);
                zoom.on_scale_begin(focus);
                zoom.on_scale_update(focus, 3.0, 0, &mut host);
                zoom.reset_scaling(true, 0, &mut host);
                (zoom, host)
            },
            |(mut zoom, mut host)| {
                let mut now = 0;
                while zoom.tick(now, &mut host) {
                    now += 16;
                }
                black_box(host.transforms);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pinch, bench_pan, bench_reset_animation);
criterion_main!(benches);
