// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork Surface: the interface between Patchwork's headless state and
//! whatever actually draws it.
//!
//! Rendering is modelled as a set of retained *surfaces*: rectangles with an
//! opacity, an optional tilt and optionally some host-owned content. The
//! host implements [`Renderer`]; Patchwork creates surfaces once and then
//! pushes their derived properties whenever it renders. Nothing is ever read
//! back from the renderer.
//!
//! [`RecordingRenderer`] is a complete implementation that only remembers
//! what it was told, for tests and headless tools.
//!
//! ```rust
//! use kurbo::Rect;
//! use patchwork_surface::{RecordingRenderer, Renderer, SurfaceRole};
//!
//! let mut renderer = RecordingRenderer::default();
//! let id = renderer.create_surface(SurfaceRole::Marquee);
//! renderer.set_surface_rect(id, Rect::new(0.0, 0.0, 10.0, 5.0));
//! renderer.set_surface_opacity(id, 0.2);
//!
//! let state = renderer.surface(id).unwrap();
//! assert_eq!(state.rect, Rect::new(0.0, 0.0, 10.0, 5.0));
//! assert_eq!(state.opacity, 0.2);
//! assert_eq!(renderer.find(SurfaceRole::Marquee), Some(id));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

pub use recording::{RecordingRenderer, SurfaceEvent, SurfaceState};

use kurbo::Rect;

/// Handle to a surface created by a [`Renderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

/// What a surface depicts. Lets renderers style surfaces without inspecting
/// Patchwork state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// One grid cell.
    Cell {
        /// Row index.
        row: u32,
        /// Column index.
        col: u32,
    },
    /// The selection marquee overlay.
    Marquee,
    /// A patch of inserted content, by patch id.
    Patch(u32),
    /// The pan/select mode indicator.
    Indicator,
}

/// A retained-mode drawing target.
///
/// Coordinates are screen pixels. Opacity is in `[0, 1]`. Tilt is a rotation
/// of the surface's plane about its horizontal center line, in radians.
pub trait Renderer {
    /// Creates a surface. It starts with an empty rect, full opacity, no
    /// tilt and no content.
    fn create_surface(&mut self, role: SurfaceRole) -> SurfaceId;

    /// Removes a surface. Unknown ids are ignored.
    fn destroy_surface(&mut self, id: SurfaceId);

    /// Sets the on-screen rectangle.
    fn set_surface_rect(&mut self, id: SurfaceId, rect: Rect);

    /// Sets the opacity.
    fn set_surface_opacity(&mut self, id: SurfaceId, opacity: f64);

    /// Sets the tilt.
    fn set_surface_rotation(&mut self, id: SurfaceId, radians: f64);

    /// Attaches host-owned content, given as an opaque handle.
    fn set_surface_content(&mut self, id: SurfaceId, content: u32);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn create_surface(&mut self, role: SurfaceRole) -> SurfaceId {
        (**self).create_surface(role)
    }

    fn destroy_surface(&mut self, id: SurfaceId) {
        (**self).destroy_surface(id);
    }

    fn set_surface_rect(&mut self, id: SurfaceId, rect: Rect) {
        (**self).set_surface_rect(id, rect);
    }

    fn set_surface_opacity(&mut self, id: SurfaceId, opacity: f64) {
        (**self).set_surface_opacity(id, opacity);
    }

    fn set_surface_rotation(&mut self, id: SurfaceId, radians: f64) {
        (**self).set_surface_rotation(id, radians);
    }

    fn set_surface_content(&mut self, id: SurfaceId, content: u32) {
        (**self).set_surface_content(id, content);
    }
}
