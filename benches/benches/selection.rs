// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use patchwork_grid::{GridDims, GridModel};
use patchwork_selection::{PatchMode, SelectionEngine};
use patchwork_view::ViewportState;

fn bench_marquee_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/update");
    let view = ViewportState::identity(Size::new(1600.0, 1200.0));

    // Every update tests each cell, so cost should scale with cell count
    // and not with how many cells the marquee covers.
    for side in [10_u32, 50, 200] {
        let grid = GridModel::new(GridDims::new(side, side).unwrap(), Size::new(1000.0, 1000.0))
            .unwrap();
        let bounds = grid.bounds(&view);
        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));

        for (label, corner) in [
            ("small", bounds.origin() + (bounds.size() * 0.05).to_vec2()),
            ("full", Point::new(bounds.x1, bounds.y1)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, side), &corner, |b, corner| {
                let mut engine = SelectionEngine::new(grid.dims(), PatchMode::Enabled);
                engine.begin(bounds.origin());
                let mut flip = false;
                b.iter(|| {
                    // Alternate targets so highlights actually change.
                    flip = !flip;
                    let target = if flip { *corner } else { bounds.origin() + (1.0, 1.0) };
                    engine.update(black_box(target), &grid, &view);
                    black_box(engine.range());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_marquee_update);
criterion_main!(benches);
