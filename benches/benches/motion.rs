// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use magnify_motion::{Channel, Easing, ExponentialDecay, Transition, TransitionScheduler};
use magnify_viewport::{ImageGeometry, ViewportState};
use std::time::Duration;

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/easing");
    let samples: Vec<f64> = (0..=1_000).map(|i| f64::from(i) / 1_000.0).collect();

    for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::FastOutSlowIn] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{easing:?}")),
            &samples,
            |b, samples| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &t in samples {
                        acc += easing.apply(black_box(t));
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

fn bench_scheduler_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/scheduler_tick");
    let geometry = ImageGeometry::new(Size::new(4000.0, 3000.0), Size::new(400.0, 800.0));
    let decay = ExponentialDecay::default();

    group.bench_function("three_channels", |b| {
        b.iter(|| {
            let mut state = ViewportState::new(geometry);
            state.set_scale(4.0);
            let mut scheduler = TransitionScheduler::new();
            scheduler.start(Transition::ease(
                Channel::Scale,
                4.0,
                6.0,
                Duration::ZERO,
                Duration::from_millis(300),
                Easing::FastOutSlowIn,
            ));
            let flings = [(Channel::OffsetX, 3_000.0), (Channel::OffsetY, -2_500.0)];
            for (channel, velocity) in flings {
                if let Some(fling) = Transition::decay(channel, 0.0, velocity, Duration::ZERO, decay) {
                    scheduler.start(fling);
                }
            }
            let mut now = Duration::ZERO;
            while scheduler.tick(now, &mut state) {
                now += Duration::from_millis(16);
            }
            black_box(state.render_transform())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_easing, bench_scheduler_tick);
criterion_main!(benches);
