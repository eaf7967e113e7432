// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patch placement: geometry for content inserted over a span of cells.
//!
//! A patch covers the cells of a committed [`CellRange`]. Its geometry is
//! expressed in grid-local terms, independent of pan and zoom:
//!
//! - `size` is the spanned cell count times the cell size;
//! - `alignment` is the top-left cell's fractional position in the grid,
//!   `0` at the top-left corner and approaching `1` at the far edges.
//!
//! Content is opaque here: a patch only carries a [`ContentRef`] for the
//! renderer to resolve.

use kurbo::{Point, Rect, Size, Vec2};
use patchwork_grid::GridDims;

use crate::CellRange;

/// Identifier of a patch. Assigned in strictly increasing order.
///
/// Ids saturate at `u32::MAX`; a session that reaches it keeps reusing
/// that last id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchId(pub u32);

impl PatchId {
    /// The id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Opaque handle to host-owned media shown inside a patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRef(pub u32);

/// Whether marquees allocate patches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatchMode {
    /// Marquees only highlight cells.
    #[default]
    Disabled,
    /// Every marquee allocates a patch that is committed on release.
    Enabled,
}

/// Grid-local geometry of a patch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchPlacement {
    /// Size in unscaled grid pixels.
    pub size: Size,
    /// Top-left position as a fraction of the grid size.
    pub alignment: Vec2,
}

impl PatchPlacement {
    /// The patch's rectangle in grid-local pixels.
    #[must_use]
    pub fn local_rect(&self, grid_size: Size) -> Rect {
        let origin = Point::new(
            self.alignment.x * grid_size.width,
            self.alignment.y * grid_size.height,
        );
        Rect::from_origin_size(origin, self.size)
    }
}

/// Computes the placement of a patch covering `range`.
#[must_use]
pub fn place(range: CellRange, grid_size: Size, dims: GridDims) -> PatchPlacement {
    let cols = f64::from(dims.cols());
    let rows = f64::from(dims.rows());
    let cell_w = grid_size.width / cols;
    let cell_h = grid_size.height / rows;
    PatchPlacement {
        size: Size::new(
            f64::from(range.col_count()) * cell_w,
            f64::from(range.row_count()) * cell_h,
        ),
        alignment: Vec2::new(
            f64::from(range.min_col) / cols,
            f64::from(range.min_row) / rows,
        ),
    }
}

/// A patch allocated for the marquee in progress.
///
/// `range` and `placement` follow the live selection and are both `None`
/// while the marquee touches no cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingPatch {
    /// Id the patch will carry if committed.
    pub id: PatchId,
    /// Content to show inside the patch.
    pub content: ContentRef,
    /// Current selection, if any.
    pub range: Option<CellRange>,
    /// Placement for the current selection, if any.
    pub placement: Option<PatchPlacement>,
}

/// A committed patch. Frozen once created.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patch {
    /// Patch id.
    pub id: PatchId,
    /// Cells covered.
    pub range: CellRange,
    /// Grid-local geometry.
    pub placement: PatchPlacement,
    /// Content to show inside the patch.
    pub content: ContentRef,
}
