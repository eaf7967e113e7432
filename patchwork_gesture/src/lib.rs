// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork Gesture: route pointer gestures to exactly one consumer at a time.
//!
//! A canvas usually gives the same drag two meanings: move the view, or draw
//! a selection. [`GestureRouter`] picks between a *pan* consumer and a
//! *select* consumer by [`GestureMode`], and makes the hand-off safe: when
//! the mode switches mid-drag, the outgoing consumer receives
//! [`GestureConsumer::on_end`] before the switch takes effect, so it never
//! sees a gesture that just stops.
//!
//! Scroll events (wheel or pinch zoom) are not modal and always reach the pan
//! consumer.
//!
//! Consumers are borrowed per call rather than stored, so the owner keeps full
//! control of them between events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use patchwork_gesture::{GestureConsumer, GestureMode, GestureRouter, GestureUpdate, PointerEvent};
//!
//! #[derive(Default)]
//! struct Count { starts: u32, ends: u32 }
//!
//! impl GestureConsumer for Count {
//!     fn on_start(&mut self, _: Point) { self.starts += 1; }
//!     fn on_update(&mut self, _: &GestureUpdate) {}
//!     fn on_end(&mut self) { self.ends += 1; }
//! }
//!
//! let (mut pan, mut select) = (Count::default(), Count::default());
//! let mut router = GestureRouter::new(GestureMode::Pan);
//!
//! router.dispatch(PointerEvent::Start { position: Point::ZERO }, &mut pan, &mut select);
//! // Switching mid-drag ends the gesture on the pan consumer.
//! assert_eq!(router.toggle(&mut pan, &mut select), GestureMode::Select);
//! assert_eq!((pan.starts, pan.ends), (1, 1));
//!
//! // The stray end is dropped: nothing is in flight any more.
//! assert!(!router.dispatch(PointerEvent::End, &mut pan, &mut select));
//! assert_eq!(select.ends, 0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod router;

pub use router::{GestureConsumer, GestureMode, GestureRouter, GestureUpdate, PointerEvent};
