// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// The in-progress drag rectangle of a rubber-band selection.
///
/// `extent` is signed: dragging up or to the left gives negative components.
/// [`Marquee::rect`] always returns the normalized rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Marquee {
    /// Screen position where the drag started.
    pub anchor: Point,
    /// Signed offset from the anchor to the current pointer position.
    pub extent: Vec2,
    /// `true` between gesture start and end.
    pub active: bool,
}

impl Marquee {
    /// An active marquee with zero extent at `anchor`.
    #[must_use]
    pub fn at(anchor: Point) -> Self {
        Self {
            anchor,
            extent: Vec2::ZERO,
            active: true,
        }
    }

    /// Canonical rectangle: min corner at the smaller coordinates, with
    /// `|extent|` as its size.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.anchor + self.extent)
    }

    /// The pointer position the extent currently reaches.
    #[must_use]
    pub fn corner(&self) -> Point {
        self.anchor + self.extent
    }

    /// Returns `true` if the pointer has not moved from the anchor.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.extent == Vec2::ZERO
    }
}

/// Closed-interval rectangle overlap.
///
/// Rectangles that merely touch along an edge or at a corner overlap. Both
/// inputs are normalized first, so either corner order is accepted.
#[must_use]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    !(a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
}
