// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork Grid: a fixed rows×columns grid whose cell rectangles are a pure
//! function of the viewport.
//!
//! Each cell has a stable [`CellId`] (row and column, both explicit). Screen
//! geometry is never stored: [`GridModel::cell_rect`] recomputes it from a
//! borrowed [`patchwork_view::ViewportState`] on every call, which keeps it
//! correct across pans and zooms without any invalidation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use patchwork_grid::{CellId, GridDims, GridModel};
//! use patchwork_view::ViewportState;
//!
//! let dims = GridDims::new(10, 10)?;
//! let grid = GridModel::new(dims, Size::new(400.0, 400.0))?;
//!
//! // 800x600 view, no pan or zoom: the grid is centered.
//! let view = ViewportState::identity(Size::new(800.0, 600.0));
//! assert_eq!(
//!     grid.cell_rect(&view, CellId::new(0, 0)),
//!     Rect::new(200.0, 100.0, 240.0, 140.0),
//! );
//! # Ok::<(), patchwork_grid::GridError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cell;
mod model;

pub use cell::{CellId, GridDims, GridError};
pub use model::GridModel;
