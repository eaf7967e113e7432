// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork View: a pan/zoom viewport controller with elastic zoom bounds.
//!
//! This crate provides a small, headless model of an infinite canvas view:
//! - Pan offset, applied immediately and never clamped.
//! - A zoom *displacement* that tracks input linearly, may overshoot its
//!   bounds while a gesture is active, and springs back once it ends.
//! - A [`Projection`] that turns the displacement into an on-screen scale
//!   factor, either flat or as a perspective push toward the viewer.
//!
//! It does **not** own a scene or a rendering backend. Callers feed pointer
//! deltas into [`ViewportController`], advance it once per frame, and hand the
//! resulting [`ViewportState`] to whatever derives screen geometry from it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use patchwork_view::{ViewportController, ZoomPhase};
//!
//! let mut view = ViewportController::new(Size::new(800.0, 600.0));
//!
//! // Drag the canvas around.
//! view.on_pan_delta(Vec2::new(12.0, -4.0));
//!
//! // Scroll past the upper bound (200 by default) ...
//! view.on_zoom_delta(260.0);
//! // ... and let go: the displacement springs back to the bound.
//! view.on_zoom_end();
//! assert_eq!(view.phase(), ZoomPhase::Correcting);
//!
//! while view.is_animating() {
//!     view.advance(16.0);
//! }
//! assert_eq!(view.zoom_displacement(), 200.0);
//! ```
//!
//! ## Design notes
//!
//! - Bounds are never enforced while input is arriving; the correction runs
//!   only from [`ViewportController::on_zoom_end`].
//! - New zoom input abandons a running correction.
//! - Content is centered in the view; panning is expressed in content space
//!   and scales with the content.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod limits;
mod modes;

pub use controller::{ViewportController, ViewportState};
pub use limits::ZoomLimits;
pub use modes::{OvershootPolicy, Projection, ZoomPhase};
