// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use patchwork_grid::CellId;

/// Inclusive row/column bounds of the cells a marquee currently touches.
///
/// "Nothing selected" is `Option<CellRange>::None`; a range with some bounds
/// missing cannot be expressed. `min_row <= max_row` and `min_col <= max_col`
/// always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Topmost selected row.
    pub min_row: u32,
    /// Bottommost selected row.
    pub max_row: u32,
    /// Leftmost selected column.
    pub min_col: u32,
    /// Rightmost selected column.
    pub max_col: u32,
}

impl CellRange {
    /// The range covering a single cell.
    #[must_use]
    pub fn single(cell: CellId) -> Self {
        Self {
            min_row: cell.row,
            max_row: cell.row,
            min_col: cell.col,
            max_col: cell.col,
        }
    }

    /// The range spanning two corner cells, in either order.
    #[must_use]
    pub fn spanning(a: CellId, b: CellId) -> Self {
        Self {
            min_row: a.row.min(b.row),
            max_row: a.row.max(b.row),
            min_col: a.col.min(b.col),
            max_col: a.col.max(b.col),
        }
    }

    /// The bounding range of a set of cells, or `None` if the set is empty.
    pub fn from_cells<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = CellId>,
    {
        cells.into_iter().fold(None, |acc, cell| {
            Some(match acc {
                None => Self::single(cell),
                Some(range) => range.including(cell),
            })
        })
    }

    /// Grows the range to include `cell`.
    #[must_use]
    pub fn including(self, cell: CellId) -> Self {
        Self {
            min_row: self.min_row.min(cell.row),
            max_row: self.max_row.max(cell.row),
            min_col: self.min_col.min(cell.col),
            max_col: self.max_col.max(cell.col),
        }
    }

    /// Number of rows spanned.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.max_row + 1 - self.min_row
    }

    /// Number of columns spanned.
    #[must_use]
    pub fn col_count(&self) -> u32 {
        self.max_col + 1 - self.min_col
    }

    /// Top-left cell of the range.
    #[must_use]
    pub fn top_left(&self) -> CellId {
        CellId::new(self.min_row, self.min_col)
    }

    /// Returns `true` if `cell` lies inside the range.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        (self.min_row..=self.max_row).contains(&cell.row)
            && (self.min_col..=self.max_col).contains(&cell.col)
    }
}

#[cfg(test)]
mod tests {
    use patchwork_grid::CellId;

    use super::CellRange;

    #[test]
    fn empty_set_has_no_range() {
        assert_eq!(CellRange::from_cells(core::iter::empty()), None);
    }

    #[test]
    fn bounds_cover_all_cells() {
        let range = CellRange::from_cells([
            CellId::new(4, 1),
            CellId::new(2, 3),
            CellId::new(3, 5),
        ])
        .unwrap();
        assert_eq!(
            range,
            CellRange {
                min_row: 2,
                max_row: 4,
                min_col: 1,
                max_col: 5,
            }
        );
        assert_eq!(range.row_count(), 3);
        assert_eq!(range.col_count(), 5);
        assert!(range.contains(CellId::new(3, 3)));
        assert!(!range.contains(CellId::new(1, 3)));
    }

    #[test]
    fn spanning_accepts_either_corner_order() {
        let a = CellId::new(5, 1);
        let b = CellId::new(2, 4);
        assert_eq!(CellRange::spanning(a, b), CellRange::spanning(b, a));
        assert_eq!(CellRange::spanning(a, b).top_left(), CellId::new(2, 1));
    }
}
