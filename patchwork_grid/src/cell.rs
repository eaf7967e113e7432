// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identity of one grid cell.
///
/// Row and column are independent and always explicit; neither is ever
/// derived from the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    /// Zero-based row, top to bottom.
    pub row: u32,
    /// Zero-based column, left to right.
    pub col: u32,
}

impl CellId {
    /// Creates a cell id.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Number of rows and columns in a grid. Both are at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridDims"))]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    /// Creates grid dimensions, rejecting a zero row or column count.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns `true` if `cell` lies inside these dimensions.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of `cell`, or `None` if it lies outside.
    #[must_use]
    pub fn index_of(&self, cell: CellId) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Cell at a row-major index, or `None` past the end.
    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Option<CellId> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        let row = u32::try_from(index / cols).ok()?;
        let col = u32::try_from(index % cols).ok()?;
        Some(CellId::new(row, col))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellId::new(row, col)))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridDims {
    rows: u32,
    cols: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridDims> for GridDims {
    type Error = GridError;

    fn try_from(raw: RawGridDims) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

/// Error returned when a grid cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    EmptyDimension {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// The grid's pixel size must be finite and positive on both axes.
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells has no cells")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "grid pixel size {width}x{height} is not finite and positive")
            }
        }
    }
}

impl core::error::Error for GridError {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{CellId, GridDims, GridError};

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            GridDims::new(0, 3),
            Err(GridError::EmptyDimension { rows: 0, cols: 3 })
        );
        assert!(GridDims::new(3, 0).is_err());
        assert!(GridDims::new(1, 1).is_ok());
    }

    #[test]
    fn index_roundtrip_is_row_major() {
        let dims = GridDims::new(4, 2).unwrap();
        assert_eq!(dims.index_of(CellId::new(0, 1)), Some(1));
        assert_eq!(dims.index_of(CellId::new(3, 1)), Some(7));
        assert_eq!(dims.index_of(CellId::new(4, 0)), None);
        assert_eq!(dims.index_of(CellId::new(0, 2)), None);
        for i in 0..dims.cell_count() {
            let cell = dims.cell_at_index(i).unwrap();
            assert_eq!(dims.index_of(cell), Some(i));
        }
        assert_eq!(dims.cell_at_index(8), None);
    }

    #[test]
    fn cells_iterate_row_major() {
        let dims = GridDims::new(2, 3).unwrap();
        let cells: Vec<CellId> = dims.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], CellId::new(0, 0));
        assert_eq!(cells[2], CellId::new(0, 2));
        assert_eq!(cells[3], CellId::new(1, 0));
    }

    #[test]
    fn errors_display() {
        let err = GridDims::new(0, 0).unwrap_err();
        assert_eq!(err.to_string(), "grid of 0x0 cells has no cells");
    }
}
