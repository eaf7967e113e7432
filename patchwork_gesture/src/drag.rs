// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture tracking: whether a gesture is in flight and how far the
//! pointer has travelled since it began.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use patchwork_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(12.0, 25.0)), Some(Vec2::new(-3.0, 0.0)));
//! assert_eq!(drag.total_offset(), Some(Vec2::new(2.0, 5.0)));
//!
//! drag.end();
//! assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Start and latest pointer positions of an in-flight gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Where the gesture began, or `None` while idle.
    pub start_pos: Option<Point>,
    /// Most recent pointer position of the gesture.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Begins tracking a gesture at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the movement since the last one.
    ///
    /// Returns `None` while idle.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of the latest position from the start position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;

    #[test]
    fn idle_state_reports_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(3.0, 4.0)), None);
        assert_eq!(drag.last_pos, None);
        assert_eq!(drag.total_offset(), None);
    }

    #[test]
    fn missing_last_position_is_recovered() {
        let mut drag = DragState {
            start_pos: Some(Point::new(10.0, 20.0)),
            last_pos: None,
        };
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert_eq!(drag.update(Point::new(16.0, 25.0)), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn restart_resets_offset() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(50.0, 50.0));
        drag.start(Point::new(100.0, 100.0));
        assert_eq!(drag.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn end_clears_both_positions() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 1.0));
        drag.end();
        assert_eq!(drag, DragState::default());
    }
}
