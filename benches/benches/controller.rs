// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use magnify::{PointerInput, PointerPhase, ZoomController};
use std::time::Duration;

fn viewer() -> ZoomController<u32> {
    ZoomController::new(Size::new(4000.0, 3000.0), Size::new(400.0, 800.0))
}

/// One press, `moves` drag samples 4ms apart and a release in place.
fn drag_stream(moves: u32) -> Vec<PointerInput<u32>> {
    let ms = |t: u32| Duration::from_millis(u64::from(t));
    let mut out = Vec::with_capacity(moves as usize + 2);
    out.push(PointerInput::new(
        0,
        PointerPhase::Down,
        Point::new(200.0, 400.0),
        ms(0),
    ));
    for i in 1..=moves {
        let d = f64::from(i) * 3.0;
        out.push(PointerInput::new(
            0,
            PointerPhase::Move,
            Point::new(200.0 + d, 400.0 - d),
            ms(4 * i),
        ));
    }
    let d = f64::from(moves) * 3.0;
    out.push(PointerInput::new(
        0,
        PointerPhase::Up,
        Point::new(200.0 + d, 400.0 - d),
        ms(4 * moves),
    ));
    out
}

fn bench_pointer_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag_stream");

    for moves in [16_u32, 256, 4_096] {
        let stream = drag_stream(moves);
        group.throughput(Throughput::Elements(stream.len() as u64));

        group.bench_with_input(BenchmarkId::new("at_rest", moves), &stream, |b, stream| {
            b.iter_batched(
                viewer,
                |mut viewer| {
                    for input in stream {
                        black_box(viewer.handle_pointer(*input));
                    }
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("zoomed", moves), &stream, |b, stream| {
            b.iter_batched(
                || {
                    let mut viewer = viewer();
                    viewer.zoom_to(Point::new(200.0, 400.0), 5.0, Duration::ZERO);
                    while viewer.tick(Duration::from_secs(1)) {}
                    viewer
                },
                |mut viewer| {
                    for input in stream {
                        black_box(viewer.handle_pointer(*input));
                    }
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_frame_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/frames");

    // Zoom and fling both run under a second of animation at 60 Hz.
    group.bench_function("double_tap_zoom", |b| {
        b.iter_batched(
            viewer,
            |mut viewer| {
                viewer.zoom_to_point(Point::new(120.0, 300.0), Duration::ZERO);
                let mut now = Duration::ZERO;
                while viewer.tick(now) {
                    now += Duration::from_millis(16);
                }
                black_box(viewer.render_transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fling", |b| {
        b.iter_batched(
            || {
                let mut viewer = viewer();
                viewer.zoom_to(Point::new(200.0, 400.0), 7.0, Duration::ZERO);
                while viewer.tick(Duration::from_secs(1)) {}
                viewer
            },
            |mut viewer| {
                viewer.apply(
                    magnify::GestureEvent::DragEnd {
                        velocity: kurbo::Vec2::new(2500.0, -4000.0),
                    },
                    Duration::ZERO,
                );
                let mut now = Duration::ZERO;
                while viewer.tick(now) {
                    now += Duration::from_millis(16);
                }
                black_box(viewer.render_transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_stream, bench_frame_loop);
criterion_main!(benches);
