// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use patchwork_gesture::{GestureMode, GestureRouter, PointerEvent};
use patchwork_grid::{GridDims, GridModel};
use patchwork_selection::{Patch, PatchId, SelectionEngine};
use patchwork_surface::{Renderer, SurfaceId, SurfaceRole};
use patchwork_view::{ViewportController, ViewportState, ZoomLimits};

use crate::adapters::{SelectionConsumer, ViewportConsumer};
use crate::config::{ConfigError, SessionConfig};

/// Opacity of a highlighted cell.
pub const CELL_HIGHLIGHT_OPACITY: f64 = 1.0;
/// Opacity of a cell outside the selection.
pub const CELL_DIM_OPACITY: f64 = 0.5;
/// Opacity of the marquee overlay while dragging.
pub const MARQUEE_OPACITY: f64 = 0.2;
/// Size of the mode indicator, anchored to the view's top-right corner.
pub const INDICATOR_SIZE: Size = Size::new(50.0, 40.0);

/// An interactive grid: viewport, selection and gesture routing in one place.
///
/// The session owns every component. Input enters through
/// [`Session::pointer`], time through [`Session::tick`], and
/// [`Session::render`] pushes the derived picture to a [`Renderer`].
#[derive(Debug)]
pub struct Session {
    viewport: ViewportController,
    grid: GridModel,
    selection: SelectionEngine,
    router: GestureRouter,
    tilt: f64,
    surfaces: Surfaces,
}

#[derive(Debug, Default)]
struct Surfaces {
    cells: Vec<SurfaceId>,
    marquee: Option<SurfaceId>,
    indicator: Option<SurfaceId>,
    patches: HashMap<PatchId, SurfaceId>,
}

impl Session {
    /// Builds a session from `config`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dims = GridDims::new(config.rows, config.cols)?;
        let grid = GridModel::new(dims, config.grid_size)?;

        let mut viewport = ViewportController::new(config.view_size);
        // Limits may come from deserialized input, so normalize them again.
        let limits = config.limits;
        viewport.set_limits(ZoomLimits::new(
            limits.min_scale(),
            limits.max_scale(),
            limits.overshoot(),
        ));
        viewport.set_zoom_step(config.zoom_step);
        viewport.set_overshoot_policy(config.overshoot_policy);
        viewport.set_correction(config.correction);
        viewport.set_projection(config.projection);

        let selection = SelectionEngine::new(dims, config.patch_mode).with_contents(config.contents);
        tracing::debug!(
            rows = dims.rows(),
            cols = dims.cols(),
            mode = ?config.initial_mode,
            "session created"
        );
        Ok(Self {
            viewport,
            grid,
            selection,
            router: GestureRouter::new(config.initial_mode),
            tilt: config.tilt,
            surfaces: Surfaces::default(),
        })
    }

    /// Routes one pointer event. Returns `true` if a consumer received it.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let view = self.viewport.state();
        let mut pan = ViewportConsumer::new(&mut self.viewport);
        let mut select = SelectionConsumer::new(&mut self.selection, &self.grid, view);
        self.router.dispatch(event, &mut pan, &mut select)
    }

    /// Switches between panning and selecting, returning the new mode.
    ///
    /// A drag in flight is ended first; in select mode that commits its patch.
    pub fn toggle_mode(&mut self) -> GestureMode {
        let view = self.viewport.state();
        let mut pan = ViewportConsumer::new(&mut self.viewport);
        let mut select = SelectionConsumer::new(&mut self.selection, &self.grid, view);
        self.router.toggle(&mut pan, &mut select)
    }

    /// Switches to `mode`. Same hand-off rules as [`Session::toggle_mode`].
    pub fn set_mode(&mut self, mode: GestureMode) {
        let view = self.viewport.state();
        let mut pan = ViewportConsumer::new(&mut self.viewport);
        let mut select = SelectionConsumer::new(&mut self.selection, &self.grid, view);
        self.router.set_mode(mode, &mut pan, &mut select);
    }

    /// Returns the active gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.router.mode()
    }

    /// Advances animations to the monotonic timestamp `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.viewport.tick(now_ms);
    }

    /// Advances animations by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.viewport.advance(dt_ms);
    }

    /// Returns `true` while the viewport is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    /// Resizes the view. Content stays centered.
    pub fn set_view_size(&mut self, size: Size) {
        self.viewport.set_view_size(size);
    }

    /// Returns the viewport controller.
    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// Returns the viewport controller for direct manipulation.
    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    /// Returns the current viewport snapshot.
    #[must_use]
    pub fn view(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Returns the selection engine.
    #[must_use]
    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    /// Returns committed patches in commit order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        self.selection.patches()
    }

    /// Screen rectangle of the mode indicator.
    #[must_use]
    pub fn indicator_rect(&self) -> Rect {
        let width = self.viewport.view_size().width;
        Rect::new(width - INDICATOR_SIZE.width, 0.0, width, INDICATOR_SIZE.height)
    }

    /// Pushes the current picture to `renderer`.
    ///
    /// Surfaces are created on first use and remembered, so a session should
    /// always render to the same renderer. Every call pushes every cell's
    /// rectangle and opacity, the marquee, all patches and the mode
    /// indicator. Patch content is attached once, when its surface is
    /// created. A pending patch whose marquee touches no cell, or that is
    /// abandoned, has its surface destroyed.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let view = self.viewport.state();
        self.render_cells(renderer, &view);
        self.render_patches(renderer, &view);
        self.render_marquee(renderer);
        self.render_indicator(renderer);
    }

    fn render_cells<R: Renderer + ?Sized>(&mut self, renderer: &mut R, view: &ViewportState) {
        if self.surfaces.cells.is_empty() {
            for cell in self.grid.cells() {
                let id = renderer.create_surface(SurfaceRole::Cell {
                    row: cell.row,
                    col: cell.col,
                });
                renderer.set_surface_rotation(id, self.tilt);
                self.surfaces.cells.push(id);
            }
        }
        for (cell, &id) in self.grid.cells().zip(&self.surfaces.cells) {
            renderer.set_surface_rect(id, self.grid.cell_rect(view, cell));
            let opacity = if self.selection.is_highlighted(cell) {
                CELL_HIGHLIGHT_OPACITY
            } else {
                CELL_DIM_OPACITY
            };
            renderer.set_surface_opacity(id, opacity);
        }
    }

    fn render_patches<R: Renderer + ?Sized>(&mut self, renderer: &mut R, view: &ViewportState) {
        let committed = self
            .selection
            .patches()
            .iter()
            .map(|p| (p.id, p.content, p.placement));
        let pending = self
            .selection
            .pending()
            .and_then(|p| Some((p.id, p.content, p.placement?)));

        let mut live = Vec::with_capacity(self.selection.patches().len() + 1);
        for (id, content, placement) in committed.chain(pending) {
            let surface = *self.surfaces.patches.entry(id).or_insert_with(|| {
                let surface = renderer.create_surface(SurfaceRole::Patch(id.0));
                renderer.set_surface_content(surface, content.0);
                renderer.set_surface_rotation(surface, self.tilt);
                surface
            });
            let rect = self
                .grid
                .local_to_screen(view, placement.local_rect(self.grid.size()));
            renderer.set_surface_rect(surface, rect);
            live.push(id);
        }

        self.surfaces.patches.retain(|id, surface| {
            let keep = live.contains(id);
            if !keep {
                tracing::trace!(patch = id.0, "dropping abandoned patch surface");
                renderer.destroy_surface(*surface);
            }
            keep
        });
    }

    fn render_marquee<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let id = *self
            .surfaces
            .marquee
            .get_or_insert_with(|| renderer.create_surface(SurfaceRole::Marquee));
        let marquee = self.selection.marquee();
        renderer.set_surface_rect(id, marquee.rect());
        let opacity = if marquee.active { MARQUEE_OPACITY } else { 0.0 };
        renderer.set_surface_opacity(id, opacity);
    }

    fn render_indicator<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let id = *self
            .surfaces
            .indicator
            .get_or_insert_with(|| renderer.create_surface(SurfaceRole::Indicator));
        renderer.set_surface_rect(id, self.indicator_rect());
        let opacity = match self.mode() {
            GestureMode::Select => 0.5,
            GestureMode::Pan => 1.0,
        };
        renderer.set_surface_opacity(id, opacity);
    }
}
