// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture consumers wrapping the viewport controller and the selection
//! engine.
//!
//! Both borrow their component for the duration of one dispatch, so they are
//! cheap to build per event.

use kurbo::Point;
use patchwork_gesture::{GestureConsumer, GestureUpdate};
use patchwork_grid::GridModel;
use patchwork_selection::SelectionEngine;
use patchwork_view::{ViewportController, ViewportState};

/// Pans on drag and zooms on scroll.
#[derive(Debug)]
pub struct ViewportConsumer<'a> {
    controller: &'a mut ViewportController,
}

impl<'a> ViewportConsumer<'a> {
    /// Wraps `controller`.
    pub fn new(controller: &'a mut ViewportController) -> Self {
        Self { controller }
    }
}

impl GestureConsumer for ViewportConsumer<'_> {
    fn on_start(&mut self, _position: Point) {}

    fn on_update(&mut self, update: &GestureUpdate) {
        self.controller.on_pan_delta(update.delta);
    }

    fn on_end(&mut self) {}

    fn on_scroll(&mut self, delta: f64) {
        self.controller.on_zoom_delta(delta);
    }

    fn on_scroll_end(&mut self) {
        self.controller.on_zoom_end();
    }
}

/// Draws a selection marquee over the grid on drag.
#[derive(Debug)]
pub struct SelectionConsumer<'a> {
    engine: &'a mut SelectionEngine,
    grid: &'a GridModel,
    view: ViewportState,
}

impl<'a> SelectionConsumer<'a> {
    /// Wraps `engine`, hit-testing against `grid` as seen through `view`.
    pub fn new(engine: &'a mut SelectionEngine, grid: &'a GridModel, view: ViewportState) -> Self {
        Self { engine, grid, view }
    }
}

impl GestureConsumer for SelectionConsumer<'_> {
    fn on_start(&mut self, position: Point) {
        self.engine.begin(position);
    }

    fn on_update(&mut self, update: &GestureUpdate) {
        self.engine.update(update.position, self.grid, &self.view);
    }

    fn on_end(&mut self) {
        self.engine.end();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use patchwork_gesture::{GestureConsumer, GestureUpdate};
    use patchwork_grid::{GridDims, GridModel};
    use patchwork_selection::{PatchMode, SelectionEngine};
    use patchwork_view::ViewportController;

    use super::{SelectionConsumer, ViewportConsumer};

    #[test]
    fn viewport_consumer_pans_and_zooms() {
        let mut controller = ViewportController::new(Size::new(800.0, 600.0));
        let mut consumer = ViewportConsumer::new(&mut controller);
        consumer.on_update(&GestureUpdate {
            position: Point::new(10.0, 10.0),
            delta: Vec2::new(3.0, -4.0),
            offset: Vec2::new(3.0, -4.0),
        });
        consumer.on_scroll(25.0);
        assert_eq!(controller.pan_offset(), Vec2::new(3.0, -4.0));
        assert_eq!(controller.zoom_displacement(), 25.0);
    }

    #[test]
    fn selection_consumer_drives_engine() {
        let grid =
            GridModel::new(GridDims::new(10, 10).unwrap(), Size::new(400.0, 400.0)).unwrap();
        let controller = ViewportController::new(Size::new(800.0, 600.0));
        let mut engine = SelectionEngine::new(grid.dims(), PatchMode::Disabled);
        let mut consumer = SelectionConsumer::new(&mut engine, &grid, controller.state());
        consumer.on_start(Point::new(210.0, 110.0));
        consumer.on_update(&GestureUpdate {
            position: Point::new(215.0, 115.0),
            delta: Vec2::new(5.0, 5.0),
            offset: Vec2::new(5.0, 5.0),
        });
        assert!(engine.range().is_some());
    }
}
