// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use loupe_geometry::{ContentLayout, Viewport, clamp_translation};

fn layout() -> ContentLayout {
    ContentLayout::new(
        Viewport::new(Size::new(1080.0, 1920.0)),
        Some(Size::new(4000.0, 3000.0)),
    )
}

fn bench_zoom_transform(c: &mut Criterion) {
    let layout = layout();
    c.bench_function("geometry/zoom_transform", |b| {
        b.iter(|| {
            black_box(layout.zoom_transform(black_box(2.25), black_box(Vec2::new(-120.0, 48.0))))
        });
    });
}

fn bench_clamp_pan(c: &mut Criterion) {
    let layout = layout();
    let matrix = layout.zoom_transform(2.25, Vec2::new(-120.0, 48.0));
    c.bench_function("geometry/clamp_pan", |b| {
        b.iter(|| black_box(layout.clamp_pan(black_box(Vec2::new(900.0, -900.0)), matrix)));
    });

    let view = Rect::new(0.0, 0.0, 1080.0, 1920.0);
    let content = Rect::new(-1400.0, 200.0, 2600.0, 1700.0);
    c.bench_function("geometry/clamp_translation", |b| {
        b.iter(|| {
            black_box(clamp_translation(
                black_box(Vec2::new(35.0, -12.0)),
                content,
                view,
            ))
        });
    });
}

criterion_group!(benches, bench_zoom_transform, bench_clamp_pan);
criterion_main!(benches);
