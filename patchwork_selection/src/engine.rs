// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use patchwork_grid::{CellId, GridDims, GridModel};
use patchwork_view::ViewportState;

use crate::marquee::{Marquee, overlaps};
use crate::patch::{ContentRef, Patch, PatchId, PatchMode, PendingPatch, place};
use crate::range::CellRange;

/// Rubber-band selection over a grid.
///
/// The engine is a two-state machine. [`SelectionEngine::begin`] moves it
/// from idle to dragging; [`SelectionEngine::end`] (or
/// [`SelectionEngine::force_end`]) returns it to idle. Updates while idle are
/// ignored.
///
/// Highlights are computed geometrically: on every update each cell's screen
/// rectangle is tested against the marquee with a closed-interval overlap, so
/// the result always reflects the viewport passed to that update.
///
/// With [`PatchMode::Enabled`], each drag also carries a [`PendingPatch`]
/// that becomes a committed [`Patch`] on release if anything was selected.
#[derive(Clone, Debug)]
pub struct SelectionEngine {
    dims: GridDims,
    mode: PatchMode,
    marquee: Marquee,
    highlights: Vec<bool>,
    range: Option<CellRange>,
    pending: Option<PendingPatch>,
    patches: Vec<Patch>,
    contents: Vec<ContentRef>,
    next_id: PatchId,
    revision: u64,
}

impl SelectionEngine {
    /// Creates an idle engine for a grid of `dims` cells.
    #[must_use]
    pub fn new(dims: GridDims, mode: PatchMode) -> Self {
        Self {
            dims,
            mode,
            marquee: Marquee::default(),
            highlights: vec![false; dims.cell_count()],
            range: None,
            pending: None,
            patches: Vec::new(),
            contents: Vec::new(),
            next_id: PatchId(0),
            revision: 0,
        }
    }

    /// Sets the content playlist patches draw from, cycled by patch id.
    ///
    /// With an empty playlist each patch gets `ContentRef(id)`.
    #[must_use]
    pub fn with_contents(mut self, contents: impl IntoIterator<Item = ContentRef>) -> Self {
        self.contents = contents.into_iter().collect();
        self
    }

    /// Returns the patch mode.
    #[must_use]
    pub fn patch_mode(&self) -> PatchMode {
        self.mode
    }

    /// Changes the patch mode. Takes effect at the next [`SelectionEngine::begin`].
    pub fn set_patch_mode(&mut self, mode: PatchMode) {
        self.mode = mode;
    }

    /// Returns the grid dimensions the highlight flags are sized for.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Starts a marquee at `point`.
    ///
    /// Calling this while already dragging restarts the marquee; a pending
    /// patch keeps its id.
    pub fn begin(&mut self, point: Point) {
        self.marquee = Marquee::at(point);
        self.clear_highlights();
        if self.mode == PatchMode::Enabled {
            let id = self.pending.map_or(self.next_id, |p| p.id);
            self.pending = Some(PendingPatch {
                id,
                content: self.content_for(id),
                range: None,
                placement: None,
            });
        }
        tracing::debug!(x = point.x, y = point.y, "marquee started");
    }

    /// Stretches the marquee to `point` and recomputes highlights.
    ///
    /// Ignored while idle.
    pub fn update(&mut self, point: Point, grid: &GridModel, view: &ViewportState) {
        if !self.marquee.active {
            return;
        }
        if grid.dims() != self.dims {
            self.dims = grid.dims();
            self.highlights = vec![false; self.dims.cell_count()];
            self.range = None;
        }
        self.marquee.extent = point - self.marquee.anchor;

        let marquee = self.marquee.rect();
        let zero = self.marquee.is_zero();
        let mut changed = false;
        let mut range: Option<CellRange> = None;
        for (cell, flag) in grid.cells().zip(self.highlights.iter_mut()) {
            let hit = !zero && overlaps(marquee, grid.cell_rect(view, cell));
            if hit != *flag {
                *flag = hit;
                changed = true;
            }
            if hit {
                range = Some(match range {
                    None => CellRange::single(cell),
                    Some(r) => r.including(cell),
                });
            }
        }
        self.range = range;
        if changed {
            self.bump_revision();
        }

        if let Some(pending) = self.pending.as_mut() {
            pending.range = range;
            pending.placement = range.map(|range| place(range, grid.size(), self.dims));
        }
    }

    /// Finishes the marquee.
    ///
    /// All cells return to dim and the range is cleared. In patch mode the
    /// pending patch is committed if it holds a selection, and the id
    /// counter advances either way. Returns the committed patch, if any.
    pub fn end(&mut self) -> Option<&Patch> {
        if !self.marquee.active {
            return None;
        }
        self.marquee.active = false;
        self.marquee.extent = Vec2::ZERO;
        self.clear_highlights();

        let pending = self.pending.take();
        let committed = pending.and_then(|p| {
            self.next_id = p.id.next();
            let (range, placement) = (p.range?, p.placement?);
            Some(Patch {
                id: p.id,
                range,
                placement,
                content: p.content,
            })
        });
        match committed {
            Some(patch) => {
                tracing::debug!(
                    id = patch.id.0,
                    rows = patch.range.row_count(),
                    cols = patch.range.col_count(),
                    "patch committed"
                );
                self.patches.push(patch);
                self.patches.last()
            }
            None => {
                tracing::debug!("marquee ended");
                None
            }
        }
    }

    /// Ends the marquee on behalf of a mode switch. Same effect as
    /// [`SelectionEngine::end`].
    pub fn force_end(&mut self) -> Option<&Patch> {
        if self.marquee.active {
            tracing::debug!("marquee ended by mode switch");
        }
        self.end()
    }

    /// Returns the current marquee.
    #[must_use]
    pub fn marquee(&self) -> Marquee {
        self.marquee
    }

    /// Returns `true` between [`SelectionEngine::begin`] and
    /// [`SelectionEngine::end`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.marquee.active
    }

    /// Returns the bounds of the highlighted cells, if any.
    #[must_use]
    pub fn range(&self) -> Option<CellRange> {
        self.range
    }

    /// Returns `true` if `cell` is highlighted.
    #[must_use]
    pub fn is_highlighted(&self, cell: CellId) -> bool {
        self.dims
            .index_of(cell)
            .and_then(|i| self.highlights.get(i).copied())
            .unwrap_or(false)
    }

    /// Iterates over the highlighted cells in row-major order.
    pub fn highlighted(&self) -> impl Iterator<Item = CellId> + '_ {
        self.highlights
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .filter_map(|(i, _)| self.dims.cell_at_index(i))
    }

    /// Returns the patch in progress, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingPatch> {
        self.pending.as_ref()
    }

    /// Returns committed patches in commit order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Returns the revision counter.
    ///
    /// Bumped whenever the set of highlighted cells changes, including when
    /// a gesture ends with cells still lit. Updates that leave highlights as
    /// they were do not bump it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn content_for(&self, id: PatchId) -> ContentRef {
        if self.contents.is_empty() {
            return ContentRef(id.0);
        }
        let index = id.0 as usize % self.contents.len();
        self.contents[index]
    }

    fn clear_highlights(&mut self) {
        self.range = None;
        if self.highlights.iter().any(|on| *on) {
            self.highlights.fill(false);
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use patchwork_grid::{CellId, GridDims, GridModel};
    use patchwork_view::ViewportState;

    use super::SelectionEngine;
    use crate::{ContentRef, PatchId, PatchMode};

    fn grid() -> GridModel {
        GridModel::new(GridDims::new(10, 10).unwrap(), Size::new(400.0, 400.0)).unwrap()
    }

    fn view() -> ViewportState {
        ViewportState::identity(Size::new(800.0, 600.0))
    }

    #[test]
    fn update_while_idle_is_ignored() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Disabled);
        engine.update(Point::new(300.0, 300.0), &grid(), &view());
        assert_eq!(engine.range(), None);
        assert_eq!(engine.revision(), 0);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn zero_extent_selects_nothing() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Disabled);
        engine.begin(Point::new(335.0, 215.0));
        engine.update(Point::new(335.0, 215.0), &grid(), &view());
        assert_eq!(engine.range(), None);
        assert_eq!(engine.highlighted().count(), 0);
    }

    #[test]
    fn revision_tracks_highlight_changes_only() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Disabled);
        engine.begin(Point::new(330.0, 190.0));
        engine.update(Point::new(335.0, 195.0), &grid(), &view());
        let after_first = engine.revision();
        assert_eq!(after_first, 1);
        // Still inside the same cell.
        engine.update(Point::new(336.0, 196.0), &grid(), &view());
        assert_eq!(engine.revision(), after_first);
        engine.end();
        assert_eq!(engine.revision(), after_first + 1);
    }

    #[test]
    fn playlist_cycles_by_id() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Enabled)
            .with_contents([ContentRef(7), ContentRef(8)]);
        let mut seen = alloc::vec::Vec::new();
        for _ in 0..3 {
            engine.begin(Point::new(330.0, 190.0));
            seen.push(engine.pending().unwrap().content);
            engine.update(Point::new(350.0, 200.0), &grid(), &view());
            engine.end();
        }
        assert_eq!(seen, [ContentRef(7), ContentRef(8), ContentRef(7)]);
    }

    #[test]
    fn empty_playlist_uses_id() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Enabled);
        engine.begin(Point::ZERO);
        assert_eq!(engine.pending().unwrap().content, ContentRef(0));
    }

    #[test]
    fn restart_keeps_pending_id() {
        let mut engine = SelectionEngine::new(grid().dims(), PatchMode::Enabled);
        engine.begin(Point::new(330.0, 190.0));
        engine.begin(Point::new(210.0, 110.0));
        assert_eq!(engine.pending().unwrap().id, PatchId(0));
        engine.update(Point::new(215.0, 115.0), &grid(), &view());
        assert_eq!(engine.end().unwrap().id, PatchId(0));
    }

    #[test]
    fn mismatched_grid_resizes_flags() {
        let mut engine =
            SelectionEngine::new(GridDims::new(2, 2).unwrap(), PatchMode::Disabled);
        engine.begin(Point::new(201.0, 101.0));
        engine.update(Point::new(202.0, 102.0), &grid(), &view());
        assert_eq!(engine.dims(), grid().dims());
        assert!(engine.is_highlighted(CellId::new(0, 0)));
    }
}
