// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use patchwork::{PointerEvent, Session, SessionConfig};
use patchwork_surface::RecordingRenderer;
use patchwork_transition::{DampedParams, Transition, Transitionable};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/render");
    for side in [10_u32, 40] {
        let mut session = Session::new(SessionConfig {
            rows: side,
            cols: side,
            ..SessionConfig::default()
        })
        .unwrap();
        let mut renderer = RecordingRenderer::default();
        session.render(&mut renderer);
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter(|| {
                renderer.clear_events();
                session.render(black_box(&mut renderer));
            });
        });
    }
    group.finish();
}

fn bench_zoom_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/zoom_correction");
    group.bench_function("overshoot_to_rest", |b| {
        b.iter_batched(
            || {
                let mut session = Session::new(SessionConfig::default()).unwrap();
                session.pointer(PointerEvent::Scroll { delta: 26_000.0 });
                session.pointer(PointerEvent::ScrollEnd);
                session
            },
            |mut session| {
                let mut now = 0;
                while session.is_animating() {
                    session.tick(now);
                    now += 16;
                }
                black_box(session.view());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("transitionable_advance", |b| {
        let params = DampedParams::default();
        b.iter(|| {
            let mut t = Transitionable::new(260.0_f64);
            t.set(200.0, Transition::Damped(params));
            while t.is_active() {
                t.advance(16.0);
            }
            black_box(t.get());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render, bench_zoom_correction);
criterion_main!(benches);
