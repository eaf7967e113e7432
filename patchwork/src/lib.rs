// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork: rubber-band selection and elastic pan/zoom over a virtual grid.
//!
//! [`Session`] wires the component crates together:
//! - [`patchwork_view`] owns pan and zoom, including the damped pull back
//!   into zoom bounds after an overshoot.
//! - [`patchwork_grid`] derives every cell rectangle from the current view.
//! - [`patchwork_selection`] turns a drag into highlighted cells and,
//!   optionally, a patch of content spanning them.
//! - [`patchwork_gesture`] decides whether a drag pans or selects.
//! - [`patchwork_surface`] is the interface the result is rendered through.
//!
//! The session is headless and single-threaded. Hosts feed it
//! [`PointerEvent`]s, call [`Session::tick`] once per frame and then
//! [`Session::render`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use patchwork::{Session, SessionConfig};
//! use patchwork_gesture::{GestureMode, PointerEvent};
//! use patchwork_selection::PatchMode;
//! use patchwork_surface::{RecordingRenderer, SurfaceRole};
//!
//! let mut session = Session::new(SessionConfig {
//!     patch_mode: PatchMode::Enabled,
//!     ..SessionConfig::flat()
//! })?;
//! assert_eq!(session.toggle_mode(), GestureMode::Select);
//!
//! // Drag across cells (2, 3)..=(2, 5) of the centered 400x400 grid.
//! session.pointer(PointerEvent::Start { position: Point::new(330.0, 190.0) });
//! session.pointer(PointerEvent::Update {
//!     delta: Vec2::new(80.0, 20.0),
//!     position: Point::new(410.0, 210.0),
//! });
//! session.pointer(PointerEvent::End);
//! assert_eq!(session.patches().len(), 1);
//!
//! let mut renderer = RecordingRenderer::default();
//! session.render(&mut renderer);
//! let patch = renderer.find(SurfaceRole::Patch(0)).unwrap();
//! assert_eq!(renderer.surface(patch).unwrap().rect.size(), kurbo::Size::new(120.0, 40.0));
//! # Ok::<(), patchwork::ConfigError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod config;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{
    CELL_DIM_OPACITY, CELL_HIGHLIGHT_OPACITY, INDICATOR_SIZE, MARQUEE_OPACITY, Session,
};

pub use patchwork_gesture::PointerEvent;
