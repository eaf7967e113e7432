// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Renderer, SurfaceId, SurfaceRole};

/// Latest known properties of one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    /// What the surface depicts.
    pub role: SurfaceRole,
    /// Screen rectangle.
    pub rect: Rect,
    /// Opacity.
    pub opacity: f64,
    /// Tilt in radians.
    pub rotation: f64,
    /// Attached content handle.
    pub content: Option<u32>,
}

impl SurfaceState {
    fn new(role: SurfaceRole) -> Self {
        Self {
            role,
            rect: Rect::ZERO,
            opacity: 1.0,
            rotation: 0.0,
            content: None,
        }
    }
}

/// A call received by [`RecordingRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// A surface was created.
    Created(SurfaceId, SurfaceRole),
    /// A surface was destroyed.
    Destroyed(SurfaceId),
    /// A rect was set.
    Rect(SurfaceId, Rect),
    /// An opacity was set.
    Opacity(SurfaceId, f64),
    /// A tilt was set.
    Rotation(SurfaceId, f64),
    /// Content was attached.
    Content(SurfaceId, u32),
}

/// Renderer that records calls instead of drawing.
///
/// Surfaces are stored in a vector indexed by id; ids are never reused.
/// Calls naming a destroyed or unknown surface are still logged but change
/// no state.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    surfaces: Vec<Option<SurfaceState>>,
    events: Vec<SurfaceEvent>,
}

impl RecordingRenderer {
    /// Returns every call received, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Forgets the event log but keeps surfaces.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns a live surface's state.
    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<&SurfaceState> {
        self.surfaces.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Iterates over live surfaces in creation order.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &SurfaceState)> + '_ {
        self.surfaces
            .iter()
            .zip(0_u32..)
            .filter_map(|(slot, i)| slot.as_ref().map(|s| (SurfaceId(i), s)))
    }

    /// Returns the first live surface with `role`.
    #[must_use]
    pub fn find(&self, role: SurfaceRole) -> Option<SurfaceId> {
        self.surfaces()
            .find(|(_, s)| s.role == role)
            .map(|(id, _)| id)
    }

    /// Number of live surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.iter().flatten().count()
    }

    /// Returns `true` if no surface is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&mut self, id: SurfaceId) -> Option<&mut SurfaceState> {
        self.surfaces.get_mut(id.0 as usize).and_then(Option::as_mut)
    }
}

impl Renderer for RecordingRenderer {
    fn create_surface(&mut self, role: SurfaceRole) -> SurfaceId {
        let id = SurfaceId(u32::try_from(self.surfaces.len()).unwrap_or(u32::MAX));
        self.surfaces.push(Some(SurfaceState::new(role)));
        self.events.push(SurfaceEvent::Created(id, role));
        id
    }

    fn destroy_surface(&mut self, id: SurfaceId) {
        if let Some(slot) = self.surfaces.get_mut(id.0 as usize) {
            *slot = None;
        }
        self.events.push(SurfaceEvent::Destroyed(id));
    }

    fn set_surface_rect(&mut self, id: SurfaceId, rect: Rect) {
        if let Some(s) = self.slot(id) {
            s.rect = rect;
        }
        self.events.push(SurfaceEvent::Rect(id, rect));
    }

    fn set_surface_opacity(&mut self, id: SurfaceId, opacity: f64) {
        if let Some(s) = self.slot(id) {
            s.opacity = opacity;
        }
        self.events.push(SurfaceEvent::Opacity(id, opacity));
    }

    fn set_surface_rotation(&mut self, id: SurfaceId, radians: f64) {
        if let Some(s) = self.slot(id) {
            s.rotation = radians;
        }
        self.events.push(SurfaceEvent::Rotation(id, radians));
    }

    fn set_surface_content(&mut self, id: SurfaceId, content: u32) {
        if let Some(s) = self.slot(id) {
            s.content = Some(content);
        }
        self.events.push(SurfaceEvent::Content(id, content));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{RecordingRenderer, SurfaceEvent};
    use crate::{Renderer, SurfaceId, SurfaceRole};

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut r = RecordingRenderer::default();
        let a = r.create_surface(SurfaceRole::Patch(0));
        let b = r.create_surface(SurfaceRole::Indicator);
        r.destroy_surface(a);
        let c = r.create_surface(SurfaceRole::Patch(0));
        assert_eq!((a, b, c), (SurfaceId(0), SurfaceId(1), SurfaceId(2)));
        assert_eq!(r.len(), 2);
        assert!(r.surface(a).is_none());
    }

    #[test]
    fn calls_on_dead_surfaces_are_logged_only() {
        let mut r = RecordingRenderer::default();
        let a = r.create_surface(SurfaceRole::Patch(3));
        r.destroy_surface(a);
        r.set_surface_opacity(a, 0.5);
        r.set_surface_rect(SurfaceId(99), Rect::ZERO);
        assert!(r.is_empty());
        assert_eq!(r.events().len(), 4);
        assert_eq!(r.events()[2], SurfaceEvent::Opacity(a, 0.5));
    }

    #[test]
    fn state_tracks_latest_values() {
        let mut r = RecordingRenderer::default();
        let id = r.create_surface(SurfaceRole::Cell { row: 1, col: 2 });
        assert_eq!(r.surface(id).unwrap().opacity, 1.0);
        r.set_surface_opacity(id, 0.5);
        r.set_surface_opacity(id, 1.0);
        r.set_surface_rotation(id, 0.25);
        r.set_surface_content(id, 7);
        let s = r.surface(id).unwrap();
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.rotation, 0.25);
        assert_eq!(s.content, Some(7));
        assert_eq!(r.find(SurfaceRole::Cell { row: 1, col: 2 }), Some(id));
        assert_eq!(r.find(SurfaceRole::Marquee), None);

        r.clear_events();
        assert!(r.events().is_empty());
        assert!(r.surface(id).is_some());
    }
}
