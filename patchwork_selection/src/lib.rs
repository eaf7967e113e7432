// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork Selection: rubber-band marquee selection over a grid.
//!
//! The pieces:
//! - [`Marquee`]: the drag rectangle, anchored where the gesture began.
//! - [`SelectionEngine`]: highlights every cell whose on-screen rectangle
//!   touches the marquee and tracks the bounding [`CellRange`].
//! - [`place`]: turns a range into a grid-relative [`PatchPlacement`], used
//!   by the engine's patch mode to insert content over the selected span.
//!
//! Overlap is closed-interval ([`overlaps`]): a marquee that only touches a
//! cell's edge still selects it. A marquee with zero extent selects nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use patchwork_grid::{CellId, GridDims, GridModel};
//! use patchwork_selection::{CellRange, PatchMode, SelectionEngine};
//! use patchwork_view::ViewportState;
//!
//! let grid = GridModel::new(GridDims::new(10, 10)?, Size::new(400.0, 400.0))?;
//! let view = ViewportState::identity(Size::new(800.0, 600.0));
//!
//! let mut engine = SelectionEngine::new(grid.dims(), PatchMode::Enabled);
//! engine.begin(Point::new(330.0, 190.0));
//! engine.update(Point::new(410.0, 210.0), &grid, &view);
//! assert_eq!(
//!     engine.range(),
//!     Some(CellRange { min_row: 2, max_row: 2, min_col: 3, max_col: 5 }),
//! );
//! assert!(engine.is_highlighted(CellId::new(2, 4)));
//!
//! let patch = *engine.end().expect("a range was selected");
//! assert_eq!(patch.placement.size, Size::new(120.0, 40.0));
//! assert_eq!(patch.placement.alignment, Vec2::new(0.3, 0.2));
//! assert_eq!(engine.range(), None);
//! # Ok::<(), patchwork_grid::GridError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod marquee;
mod range;

pub mod patch;

pub use engine::SelectionEngine;
pub use marquee::{Marquee, overlaps};
pub use patch::{ContentRef, Patch, PatchId, PatchMode, PatchPlacement, PendingPatch, place};
pub use range::CellRange;
