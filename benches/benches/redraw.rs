// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use image::RgbaImage;
use kurbo::{Point, Size, Vec2};
use trimmer_canvas::{GestureHandler, ImageHandle, OverlayState, TrimCanvas, TrimRect};
use trimmer_redraw::{RedrawPipeline, RedrawSources};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimmer_redraw");

    for &subscribers in &[1_usize, 4, 16] {
        group.bench_function(format!("publish+notify(subs={subscribers})"), |b| {
            let hits = Rc::new(Cell::new(0_u64));
            let mut pipeline = RedrawPipeline::<TrimRect>::new();
            for _ in 0..subscribers {
                let hits = Rc::clone(&hits);
                pipeline.subscribe(RedrawSources::all(), move |_| hits.set(hits.get() + 1));
            }
            b.iter(|| {
                pipeline.publish(RedrawSources::TRIM_RECT_CHANGED, black_box(TrimRect::new(1, 2, 3, 4)));
                black_box(pipeline.notify(RedrawSources::VIEW_RESIZED));
            });
            black_box(hits.get());
        });
    }

    group.finish();
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimmer_canvas");

    let loaded = || {
        let mut canvas = TrimCanvas::new(Size::new(1280.0, 800.0), OverlayState::Hidden);
        canvas.load_image("bench.png", ImageHandle::from_rgba(RgbaImage::new(4000, 3000)));
        canvas.set_trim_rect(TrimRect::new(300, 300, 2000, 1200));
        canvas
    };

    group.bench_function("gesture_burst(100 zoom+pan)", |b| {
        b.iter_batched(
            loaded,
            |mut canvas| {
                for i in 0..100 {
                    let m = if i % 2 == 0 { 0.05 } else { -0.04 };
                    canvas.on_zoom(m, Point::new(640.0, 400.0));
                    canvas.on_pan_delta(Vec2::new(2.0, -1.0));
                }
                black_box(canvas.take_fired_sources().contains(RedrawSources::TRANSFORM_CHANGED));
                black_box(canvas);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_canvas);
criterion_main!(benches);
