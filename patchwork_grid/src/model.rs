// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use patchwork_view::ViewportState;

use crate::cell::{CellId, GridDims, GridError};

/// A fixed grid of cells centered in the view.
///
/// The model holds only identities and geometry. Every screen rectangle is
/// derived on demand from a [`ViewportState`]; nothing is cached, so a fresh
/// query after each viewport change is always up to date.
///
/// Two coordinate spaces are involved:
/// - **Grid-local**: origin at the grid's top-left corner, unscaled pixels.
/// - **Screen**: view pixels after centering, pan and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridModel {
    dims: GridDims,
    size: Size,
}

impl GridModel {
    /// Creates a grid of `dims` cells spanning `size` pixels.
    ///
    /// Fails if either side of `size` is not finite and positive.
    pub fn new(dims: GridDims, size: Size) -> Result<Self, GridError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(size.width) || !valid(size.height) {
            return Err(GridError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { dims, size })
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the unscaled pixel size of the whole grid.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the unscaled size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.size.width / f64::from(self.dims.cols()),
            self.size.height / f64::from(self.dims.rows()),
        )
    }

    /// Returns `true` if `cell` belongs to this grid.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.dims.contains(cell)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + use<> {
        self.dims.cells()
    }

    /// Returns the screen position of the grid's top-left corner.
    #[must_use]
    pub fn origin(&self, view: &ViewportState) -> Point {
        let half = Vec2::new(self.size.width * 0.5, self.size.height * 0.5);
        view.content_to_view((-half).to_point())
    }

    /// Returns the whole grid's rectangle on screen.
    #[must_use]
    pub fn bounds(&self, view: &ViewportState) -> Rect {
        self.local_to_screen(view, self.size.to_rect())
    }

    /// Returns a cell's rectangle in grid-local pixels.
    ///
    /// Cells outside the grid still get a rectangle, extrapolated from the
    /// cell size; callers that care should check [`GridModel::contains`].
    #[must_use]
    pub fn local_cell_rect(&self, cell: CellId) -> Rect {
        let cs = self.cell_size();
        let origin = Point::new(
            f64::from(cell.col) * cs.width,
            f64::from(cell.row) * cs.height,
        );
        Rect::from_origin_size(origin, cs)
    }

    /// Returns a cell's rectangle on screen.
    #[must_use]
    pub fn cell_rect(&self, view: &ViewportState, cell: CellId) -> Rect {
        self.local_to_screen(view, self.local_cell_rect(cell))
    }

    /// Maps a grid-local rectangle to the screen.
    #[must_use]
    pub fn local_to_screen(&self, view: &ViewportState, rect: Rect) -> Rect {
        let origin = self.origin(view);
        let scale = view.scale;
        Rect::new(
            origin.x + rect.x0 * scale,
            origin.y + rect.y0 * scale,
            origin.x + rect.x1 * scale,
            origin.y + rect.y1 * scale,
        )
    }

    /// Maps a screen point into grid-local pixels.
    #[must_use]
    pub fn screen_to_local(&self, view: &ViewportState, pt: Point) -> Point {
        let origin = self.origin(view);
        ((pt - origin) / view.scale).to_point()
    }

    /// Returns the cell under a screen point, if any.
    ///
    /// Cells are half-open here: a point on a shared edge belongs to the cell
    /// to its right or below. The grid's far edges are exclusive.
    #[must_use]
    pub fn cell_at(&self, view: &ViewportState, pt: Point) -> Option<CellId> {
        let local = self.screen_to_local(view, pt);
        if !(0.0..self.size.width).contains(&local.x) || !(0.0..self.size.height).contains(&local.y)
        {
            return None;
        }
        let cs = self.cell_size();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Both quotients are non-negative and below the u32 row/column counts"
        )]
        let (col, row) = (
            (local.x / cs.width) as u32,
            (local.y / cs.height) as u32,
        );
        // Rounding right at the far edge can land one past the end.
        let cell = CellId::new(
            row.min(self.dims.rows() - 1),
            col.min(self.dims.cols() - 1),
        );
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use patchwork_view::ViewportState;

    use super::GridModel;
    use crate::{CellId, GridDims, GridError};

    fn grid_10x10() -> GridModel {
        GridModel::new(GridDims::new(10, 10).unwrap(), Size::new(400.0, 400.0)).unwrap()
    }

    fn view() -> ViewportState {
        ViewportState::identity(Size::new(800.0, 600.0))
    }

    #[test]
    fn cell_size_divides_grid() {
        let grid =
            GridModel::new(GridDims::new(4, 2).unwrap(), Size::new(200.0, 400.0)).unwrap();
        assert_eq!(grid.cell_size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn invalid_size_is_rejected() {
        let dims = GridDims::new(2, 2).unwrap();
        assert!(matches!(
            GridModel::new(dims, Size::new(0.0, 10.0)),
            Err(GridError::InvalidSize { .. })
        ));
        assert!(GridModel::new(dims, Size::new(f64::INFINITY, 10.0)).is_err());
    }

    #[test]
    fn grid_is_centered_in_view() {
        let grid = grid_10x10();
        assert_eq!(grid.origin(&view()), Point::new(200.0, 100.0));
        assert_eq!(grid.bounds(&view()), Rect::new(200.0, 100.0, 600.0, 500.0));
    }

    #[test]
    fn cell_rect_follows_pan() {
        let grid = grid_10x10();
        let mut v = view();
        assert_eq!(
            grid.cell_rect(&v, CellId::new(2, 3)),
            Rect::new(320.0, 180.0, 360.0, 220.0)
        );
        v.pan_offset = Vec2::new(-20.0, 10.0);
        assert_eq!(
            grid.cell_rect(&v, CellId::new(2, 3)),
            Rect::new(300.0, 190.0, 340.0, 230.0)
        );
    }

    #[test]
    fn cell_rect_follows_scale() {
        let grid = grid_10x10();
        let mut v = view();
        v.scale = 2.0;
        // Grid is 800x800 on screen, still centered on (400, 300).
        assert_eq!(grid.bounds(&v), Rect::new(0.0, -100.0, 800.0, 700.0));
        assert_eq!(
            grid.cell_rect(&v, CellId::new(0, 0)),
            Rect::new(0.0, -100.0, 80.0, -20.0)
        );
    }

    #[test]
    fn cell_at_hits_expected_cell() {
        let grid = grid_10x10();
        let v = view();
        assert_eq!(grid.cell_at(&v, Point::new(201.0, 101.0)), Some(CellId::new(0, 0)));
        assert_eq!(grid.cell_at(&v, Point::new(335.0, 215.0)), Some(CellId::new(2, 3)));
        assert_eq!(grid.cell_at(&v, Point::new(599.9, 499.9)), Some(CellId::new(9, 9)));
        assert_eq!(grid.cell_at(&v, Point::new(600.0, 300.0)), None);
        assert_eq!(grid.cell_at(&v, Point::new(199.0, 300.0)), None);
    }

    #[test]
    fn column_is_independent_of_row() {
        let grid =
            GridModel::new(GridDims::new(3, 5).unwrap(), Size::new(500.0, 300.0)).unwrap();
        let v = view();
        for cell in grid.cells() {
            let rect = grid.cell_rect(&v, cell);
            assert_eq!(grid.cell_at(&v, rect.center()), Some(cell));
        }
    }
}
