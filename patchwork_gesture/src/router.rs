// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::drag::DragState;

/// Which consumer receives pointer gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureMode {
    /// Drags pan the view.
    #[default]
    Pan,
    /// Drags draw a selection marquee.
    Select,
}

impl GestureMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pan => Self::Select,
            Self::Select => Self::Pan,
        }
    }
}

/// Normalized pointer input, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    /// A drag began.
    Start {
        /// Pointer position.
        position: Point,
    },
    /// The pointer moved during a drag.
    Update {
        /// Movement since the previous event.
        delta: Vec2,
        /// Pointer position.
        position: Point,
    },
    /// The drag ended.
    End,
    /// Wheel or pinch input, in wheel units.
    Scroll {
        /// Signed wheel delta.
        delta: f64,
    },
    /// The scroll gesture finished.
    ScrollEnd,
}

/// One movement of an in-flight gesture, as seen by a consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureUpdate {
    /// Pointer position.
    pub position: Point,
    /// Movement since the previous update.
    pub delta: Vec2,
    /// Movement since the gesture began.
    pub offset: Vec2,
}

/// Receiver of routed gestures.
///
/// Scroll callbacks default to no-ops so consumers that only care about
/// drags need not mention them.
pub trait GestureConsumer {
    /// A drag began at `position`.
    fn on_start(&mut self, position: Point);
    /// The drag moved.
    fn on_update(&mut self, update: &GestureUpdate);
    /// The drag ended, either by release or because the router switched away.
    fn on_end(&mut self);
    /// Wheel input.
    fn on_scroll(&mut self, delta: f64) {
        let _ = delta;
    }
    /// Wheel input finished.
    fn on_scroll_end(&mut self) {}
}

impl<C: GestureConsumer + ?Sized> GestureConsumer for &mut C {
    fn on_start(&mut self, position: Point) {
        (**self).on_start(position);
    }

    fn on_update(&mut self, update: &GestureUpdate) {
        (**self).on_update(update);
    }

    fn on_end(&mut self) {
        (**self).on_end();
    }

    fn on_scroll(&mut self, delta: f64) {
        (**self).on_scroll(delta);
    }

    fn on_scroll_end(&mut self) {
        (**self).on_scroll_end();
    }
}

/// Routes pointer events to one of two consumers by mode.
///
/// Drag events (`Start`, `Update`, `End`) go to exactly one consumer: the pan
/// consumer in [`GestureMode::Pan`], the select consumer in
/// [`GestureMode::Select`]. Scroll events always go to the pan consumer.
///
/// The router holds no consumers. They are borrowed per call, which lets the
/// owner keep them in whatever structure it likes.
#[derive(Clone, Debug, Default)]
pub struct GestureRouter {
    mode: GestureMode,
    drag: DragState,
}

impl GestureRouter {
    /// Creates a router in `mode` with no gesture in flight.
    #[must_use]
    pub fn new(mode: GestureMode) -> Self {
        Self {
            mode,
            drag: DragState::default(),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Returns `true` while a drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns the in-flight drag state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Delivers `event` to the consumer it belongs to.
    ///
    /// `Update` and `End` without a preceding `Start` are dropped. Returns
    /// `true` if a consumer received the event.
    pub fn dispatch<P, S>(&mut self, event: PointerEvent, pan: &mut P, select: &mut S) -> bool
    where
        P: GestureConsumer,
        S: GestureConsumer,
    {
        match event {
            PointerEvent::Start { position } => {
                self.drag.start(position);
                active(self.mode, pan, select).on_start(position);
                true
            }
            PointerEvent::Update { delta, position } => {
                if !self.drag.is_dragging() {
                    tracing::trace!("update without start dropped");
                    return false;
                }
                self.drag.update(position);
                let update = GestureUpdate {
                    position,
                    delta,
                    offset: self.drag.total_offset().unwrap_or(Vec2::ZERO),
                };
                active(self.mode, pan, select).on_update(&update);
                true
            }
            PointerEvent::End => {
                if !self.drag.is_dragging() {
                    tracing::trace!("end without start dropped");
                    return false;
                }
                self.drag.end();
                active(self.mode, pan, select).on_end();
                true
            }
            PointerEvent::Scroll { delta } => {
                pan.on_scroll(delta);
                true
            }
            PointerEvent::ScrollEnd => {
                pan.on_scroll_end();
                true
            }
        }
    }

    /// Switches to the other mode and returns it.
    pub fn toggle<P, S>(&mut self, pan: &mut P, select: &mut S) -> GestureMode
    where
        P: GestureConsumer,
        S: GestureConsumer,
    {
        let next = self.mode.toggled();
        self.set_mode(next, pan, select);
        next
    }

    /// Switches to `mode`.
    ///
    /// A drag in flight is ended on the outgoing consumer first; the incoming
    /// consumer only sees gestures that start after the switch.
    pub fn set_mode<P, S>(&mut self, mode: GestureMode, pan: &mut P, select: &mut S)
    where
        P: GestureConsumer,
        S: GestureConsumer,
    {
        if mode == self.mode {
            return;
        }
        if self.drag.is_dragging() {
            tracing::debug!(mode = ?self.mode, "ending in-flight gesture for mode switch");
            self.drag.end();
            active(self.mode, pan, select).on_end();
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "gesture mode switched");
        self.mode = mode;
    }
}

fn active<'a, P, S>(
    mode: GestureMode,
    pan: &'a mut P,
    select: &'a mut S,
) -> &'a mut dyn GestureConsumer
where
    P: GestureConsumer,
    S: GestureConsumer,
{
    match mode {
        GestureMode::Pan => pan,
        GestureMode::Select => select,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{GestureMode, GestureRouter, PointerEvent};

    #[derive(Default)]
    struct Nop;

    impl super::GestureConsumer for Nop {
        fn on_start(&mut self, _: Point) {}
        fn on_update(&mut self, _: &super::GestureUpdate) {}
        fn on_end(&mut self) {}
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(GestureMode::Pan.toggled(), GestureMode::Select);
        assert_eq!(GestureMode::Select.toggled(), GestureMode::Pan);
        assert_eq!(GestureMode::default(), GestureMode::Pan);
    }

    #[test]
    fn dropped_events_report_false() {
        let mut router = GestureRouter::default();
        assert!(!router.dispatch(PointerEvent::End, &mut Nop, &mut Nop));
        assert!(router.dispatch(
            PointerEvent::Start {
                position: Point::ZERO
            },
            &mut Nop,
            &mut Nop
        ));
        assert!(router.is_dragging());
        assert!(router.dispatch(PointerEvent::End, &mut Nop, &mut Nop));
        assert!(!router.is_dragging());
    }
}
