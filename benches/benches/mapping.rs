// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use trimmer_canvas::{OverlayStyle, SelectionTracker, TrimRect, layout_overlay};
use trimmer_view2d::{TrimViewport, UserTransform, fit_transform, image_to_screen, screen_to_image};

fn zoomed_viewport() -> TrimViewport {
    let mut vp = TrimViewport::new(Size::new(1920.0, 1080.0));
    vp.set_image_size(Size::new(6000.0, 4000.0))
        .expect("valid geometry");
    vp.zoom_about(1.5, Point::new(640.0, 360.0));
    vp.pan_by(Vec2::new(-120.0, 45.0));
    vp
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimmer_view2d");

    let fit = fit_transform(Size::new(6000.0, 4000.0), Size::new(1920.0, 1080.0))
        .expect("valid geometry");
    let mut user = UserTransform::IDENTITY;
    user.zoom(0.75, Point::new(300.0, 200.0));

    group.bench_function("image_to_screen(1k points)", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let p = Point::new(f64::from(i) * 6.0, f64::from(i) * 4.0);
                black_box(image_to_screen(black_box(p), &fit, &user));
            }
        });
    });

    group.bench_function("screen_to_image(1k points)", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let p = Point::new(f64::from(i) * 1.9, f64::from(i) * 1.08);
                black_box(screen_to_image(black_box(p), &fit, &user));
            }
        });
    });

    let vp = zoomed_viewport();
    group.bench_function("viewport.screen_to_image_point(1k points)", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let p = Point::new(f64::from(i) * 1.9, f64::from(i) * 1.08);
                black_box(vp.screen_to_image_point(black_box(p)));
            }
        });
    });

    group.bench_function("zoom_about+pan_by", |b| {
        let mut vp = zoomed_viewport();
        b.iter(|| {
            vp.zoom_about(black_box(0.01), Point::new(960.0, 540.0));
            vp.zoom_about(black_box(-0.01), Point::new(960.0, 540.0));
            vp.pan_by(black_box(Vec2::new(1.0, -1.0)));
        });
    });

    group.finish();

    let mut group = c.benchmark_group("trimmer_canvas");
    let style = OverlayStyle::default();
    group.bench_function("layout_overlay", |b| {
        b.iter(|| black_box(layout_overlay(black_box(TrimRect::new(100, 200, 1500, 900)), &vp, &style)));
    });
    group.bench_function("selection_click", |b| {
        let mut tracker = SelectionTracker::default();
        b.iter(|| black_box(tracker.on_click(black_box(Point::new(811.0, 402.0)), &vp)));
    });
    group.finish();
}

criterion_group!(benches, bench_mapping);
criterion_main!(benches);
