// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_4;

use kurbo::{Point, Rect, Vec2};
use patchwork::SessionConfig;
use patchwork_gesture::GestureMode;
use patchwork_grid::CellId;
use patchwork_selection::{ContentRef, Patch, PatchMode};
use patchwork_surface::SurfaceRole;
use patchwork_view::{OvershootPolicy, Projection};

use crate::script::Script;

/// Wheel units per notch; the default zoom step turns one notch into one
/// unit of displacement.
const NOTCH: f64 = 100.0;

fn cell_rect(script: &Script, cell: CellId) -> Rect {
    script.session.grid().cell_rect(&script.session.view(), cell)
}

/// Drags a marquee from the center of `from` to the center of `to`.
fn select_cells(script: &mut Script, from: CellId, to: CellId) {
    let a = cell_rect(script, from).center();
    let b = cell_rect(script, to).center();
    script.drag(a, b, 6);
}

fn describe_patch(patch: &Patch) -> String {
    let r = patch.range;
    format!(
        "patch {} rows {}..={} cols {}..={} size {:.0}x{:.0} at ({:.2}, {:.2}) content {}",
        patch.id.0,
        r.min_row,
        r.max_row,
        r.min_col,
        r.max_col,
        patch.placement.size.width,
        patch.placement.size.height,
        patch.placement.alignment.x,
        patch.placement.alignment.y,
        patch.content.0,
    )
}

pub(crate) fn grid(config: Option<SessionConfig>, frame_ms: u64) -> anyhow::Result<()> {
    let config = config.unwrap_or_else(|| SessionConfig {
        patch_mode: PatchMode::Enabled,
        ..SessionConfig::default()
    });
    let mut script = Script::new(config, frame_ms)?;

    script.pan_by(Vec2::new(60.0, -40.0));
    println!("pan offset: {:?}", script.session.viewport().pan_offset());

    // Push well past the upper bound, then let the wall spring pull it back.
    script.scroll(3.0 * NOTCH, 90);
    let peak = script.session.view().zoom_displacement;
    let frames = script.settle();
    println!(
        "zoom overshot to {peak:.1}, settled at {:.1} after {frames} frames",
        script.session.view().zoom_displacement
    );

    script.set_mode(GestureMode::Select);
    select_cells(&mut script, CellId::new(2, 3), CellId::new(4, 6));
    script.set_mode(GestureMode::Pan);

    for patch in script.session.patches() {
        println!("{}", describe_patch(patch));
    }
    println!("surfaces: {}", script.renderer.len());
    Ok(())
}

pub(crate) fn quilt(config: Option<SessionConfig>, frame_ms: u64) -> anyhow::Result<()> {
    let config = config.unwrap_or_else(|| SessionConfig {
        patch_mode: PatchMode::Enabled,
        contents: vec![ContentRef(0), ContentRef(1), ContentRef(2)],
        initial_mode: GestureMode::Select,
        ..SessionConfig::default()
    });
    let mut script = Script::new(config, frame_ms)?;

    let spans = [
        (CellId::new(0, 0), CellId::new(1, 2)),
        (CellId::new(3, 1), CellId::new(6, 1)),
        (CellId::new(2, 4), CellId::new(2, 8)),
        (CellId::new(8, 9), CellId::new(5, 6)),
    ];
    for (from, to) in spans {
        select_cells(&mut script, from, to);
    }

    for patch in script.session.patches() {
        let surface = script.renderer.find(SurfaceRole::Patch(patch.id.0));
        let rect = surface
            .and_then(|id| script.renderer.surface(id))
            .map(|s| s.rect);
        println!("{} on screen {rect:?}", describe_patch(patch));
    }
    Ok(())
}

pub(crate) fn pan(config: Option<SessionConfig>, frame_ms: u64) -> anyhow::Result<()> {
    let config = config.unwrap_or_else(|| SessionConfig {
        overshoot_policy: OvershootPolicy::Hold,
        ..SessionConfig::default()
    });
    let mut script = Script::new(config, frame_ms)?;

    for delta in [Vec2::new(100.0, 0.0), Vec2::new(0.0, 80.0), Vec2::new(-40.0, -40.0)] {
        script.pan_by(delta);
        println!("pan offset: {:?}", script.session.viewport().pan_offset());
    }

    // Zooming out past the lower bound holds at the band edge, then springs back.
    script.scroll(-4.0 * NOTCH, 40);
    let samples = script.settle_sampled(5);
    let trace: Vec<String> = samples.iter().map(|v| format!("{v:.1}")).collect();
    println!("zoom correction: {}", trace.join(" -> "));
    Ok(())
}

pub(crate) fn select(config: Option<SessionConfig>, frame_ms: u64) -> anyhow::Result<()> {
    let config = config.unwrap_or_else(|| SessionConfig {
        initial_mode: GestureMode::Select,
        ..SessionConfig::flat()
    });
    let mut script = Script::new(config, frame_ms)?;

    let center = cell_rect(&script, CellId::new(5, 5)).center();
    let directions = [
        ("down-right", Vec2::new(70.0, 50.0)),
        ("down-left", Vec2::new(-70.0, 50.0)),
        ("up-right", Vec2::new(70.0, -50.0)),
        ("up-left", Vec2::new(-70.0, -50.0)),
        ("zero", Vec2::ZERO),
    ];
    for (name, extent) in directions {
        script.press(center);
        script.move_to(center, center + extent, 4);
        let range = script.session.selection().range();
        let lit = script.session.selection().highlighted().count();
        println!("{name:>10}: {lit:>2} cells, range {range:?}");
        script.release();
    }

    // Hovering reports the cell under the pointer without selecting.
    let probe = Point::new(center.x + 45.0, center.y - 45.0);
    println!(
        "cell under {probe:?}: {:?}",
        script.session.grid().cell_at(&script.session.view(), probe)
    );
    Ok(())
}

pub(crate) fn perspective(config: Option<SessionConfig>, frame_ms: u64) -> anyhow::Result<()> {
    let config = config.unwrap_or_else(|| SessionConfig {
        tilt: FRAC_PI_4,
        ..SessionConfig::default()
    });
    let projection = config.projection;
    let limits = config.limits;
    let mut script = Script::new(config, frame_ms)?;

    if let Projection::Perspective {
        distance,
        base_depth,
    } = projection
    {
        println!("camera distance {distance:.0}, resting depth {base_depth:.0}");
    }
    let mut displacement = limits.min_displace();
    while displacement <= limits.max_displace() {
        println!(
            "displacement {displacement:>6.1} -> scale {:.3}",
            projection.scale_for(displacement)
        );
        displacement += 50.0;
    }

    script.scroll(NOTCH, 50);
    let cell = script
        .renderer
        .find(SurfaceRole::Cell { row: 0, col: 0 })
        .and_then(|id| script.renderer.surface(id));
    if let Some(cell) = cell {
        println!(
            "cell (0, 0) at {:?}, tilt {:.3} rad",
            cell.rect, cell.rotation
        );
    }
    Ok(())
}
