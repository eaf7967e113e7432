// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `GestureRouter`: which consumer sees which event, and how mode
//! switches interact with gestures in flight.

use kurbo::{Point, Vec2};
use patchwork_gesture::{
    GestureConsumer, GestureMode, GestureRouter, GestureUpdate, PointerEvent,
};

#[derive(Clone, Debug, PartialEq)]
enum Seen {
    Start(Point),
    Update(GestureUpdate),
    End,
    Scroll(f64),
    ScrollEnd,
}

#[derive(Default)]
struct Log(Vec<Seen>);

impl GestureConsumer for Log {
    fn on_start(&mut self, position: Point) {
        self.0.push(Seen::Start(position));
    }

    fn on_update(&mut self, update: &GestureUpdate) {
        self.0.push(Seen::Update(*update));
    }

    fn on_end(&mut self) {
        self.0.push(Seen::End);
    }

    fn on_scroll(&mut self, delta: f64) {
        self.0.push(Seen::Scroll(delta));
    }

    fn on_scroll_end(&mut self) {
        self.0.push(Seen::ScrollEnd);
    }
}

fn start(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Start {
        position: Point::new(x, y),
    }
}

fn update(x: f64, y: f64, dx: f64, dy: f64) -> PointerEvent {
    PointerEvent::Update {
        delta: Vec2::new(dx, dy),
        position: Point::new(x, y),
    }
}

#[test]
fn pan_mode_routes_drags_to_pan_only() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::default();
    router.dispatch(start(10.0, 10.0), &mut pan, &mut select);
    router.dispatch(update(15.0, 12.0, 5.0, 2.0), &mut pan, &mut select);
    router.dispatch(PointerEvent::End, &mut pan, &mut select);

    assert_eq!(
        pan.0,
        [
            Seen::Start(Point::new(10.0, 10.0)),
            Seen::Update(GestureUpdate {
                position: Point::new(15.0, 12.0),
                delta: Vec2::new(5.0, 2.0),
                offset: Vec2::new(5.0, 2.0),
            }),
            Seen::End,
        ]
    );
    assert!(select.0.is_empty());
}

#[test]
fn select_mode_routes_drags_to_select_only() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::new(GestureMode::Select);
    router.dispatch(start(0.0, 0.0), &mut pan, &mut select);
    router.dispatch(update(4.0, 3.0, 4.0, 3.0), &mut pan, &mut select);
    router.dispatch(update(6.0, 3.0, 2.0, 0.0), &mut pan, &mut select);
    router.dispatch(PointerEvent::End, &mut pan, &mut select);

    assert!(pan.0.is_empty());
    assert_eq!(select.0.len(), 4);
    let Seen::Update(last) = &select.0[2] else {
        panic!("expected an update, got {:?}", select.0[2]);
    };
    assert_eq!(last.offset, Vec2::new(6.0, 3.0));
}

#[test]
fn scroll_reaches_pan_in_both_modes() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::new(GestureMode::Select);
    router.dispatch(PointerEvent::Scroll { delta: -3.0 }, &mut pan, &mut select);
    router.toggle(&mut pan, &mut select);
    router.dispatch(PointerEvent::Scroll { delta: 2.0 }, &mut pan, &mut select);
    router.dispatch(PointerEvent::ScrollEnd, &mut pan, &mut select);

    assert_eq!(
        pan.0,
        [Seen::Scroll(-3.0), Seen::Scroll(2.0), Seen::ScrollEnd]
    );
    assert!(select.0.is_empty());
}

#[test]
fn toggle_twice_restores_mode_and_routing() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::default();
    assert_eq!(router.toggle(&mut pan, &mut select), GestureMode::Select);
    assert_eq!(router.toggle(&mut pan, &mut select), GestureMode::Pan);
    assert_eq!(router.mode(), GestureMode::Pan);

    router.dispatch(start(1.0, 1.0), &mut pan, &mut select);
    assert_eq!(pan.0, [Seen::Start(Point::new(1.0, 1.0))]);
    assert!(select.0.is_empty());
}

#[test]
fn switch_mid_gesture_ends_outgoing_consumer() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::new(GestureMode::Select);
    router.dispatch(start(0.0, 0.0), &mut pan, &mut select);
    router.dispatch(update(5.0, 5.0, 5.0, 5.0), &mut pan, &mut select);

    router.set_mode(GestureMode::Pan, &mut pan, &mut select);
    assert_eq!(select.0.last(), Some(&Seen::End));
    assert!(!router.is_dragging());

    // The rest of the old gesture goes nowhere.
    assert!(!router.dispatch(update(9.0, 9.0, 4.0, 4.0), &mut pan, &mut select));
    assert!(!router.dispatch(PointerEvent::End, &mut pan, &mut select));
    assert!(pan.0.is_empty());
    assert_eq!(select.0.len(), 3);
}

#[test]
fn switch_while_idle_sends_nothing() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::default();
    router.toggle(&mut pan, &mut select);
    router.set_mode(GestureMode::Select, &mut pan, &mut select);
    assert!(pan.0.is_empty());
    assert!(select.0.is_empty());
}

#[test]
fn borrowed_consumers_can_be_passed_through() {
    let (mut pan, mut select) = (Log::default(), Log::default());
    let mut router = GestureRouter::default();
    {
        let mut pan_ref = &mut pan;
        let mut select_ref = &mut select;
        router.dispatch(start(2.0, 2.0), &mut pan_ref, &mut select_ref);
    }
    assert_eq!(pan.0.len(), 1);
}
