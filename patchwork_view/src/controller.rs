// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use patchwork_transition::{DampedParams, Transition, Transitionable};

use crate::limits::ZoomLimits;
use crate::modes::{OvershootPolicy, Projection, ZoomPhase};

/// Snapshot of the viewport, as seen by grid and selection queries.
///
/// This is a plain value: take a fresh one from
/// [`ViewportController::state`] whenever the controller has changed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Pan offset in content pixels (scaled along with the content).
    pub pan_offset: Vec2,
    /// Unclamped running zoom accumulator.
    pub zoom_displacement: f64,
    /// On-screen scale factor derived from the displacement.
    pub scale: f64,
    /// Size of the view in pixels; content is centered in it.
    pub view_size: Size,
}

impl ViewportState {
    /// A state with no pan, no zoom and unit scale.
    #[must_use]
    pub fn identity(view_size: Size) -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            zoom_displacement: 0.0,
            scale: 1.0,
            view_size,
        }
    }

    /// Center of the view in view pixels.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(self.view_size.width * 0.5, self.view_size.height * 0.5)
    }

    /// Maps a point in centered content space into view pixels.
    ///
    /// Content space has its origin at the view center; panning happens in
    /// content space and is scaled along with the content.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.view_center() + (pt.to_vec2() + self.pan_offset) * self.scale
    }

    /// Maps a point in view pixels back into centered content space.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        ((pt - self.view_center()) / self.scale - self.pan_offset).to_point()
    }
}

/// Pan/zoom controller with elastic zoom bounds.
///
/// Panning is unbounded and applied immediately. Zooming accumulates a
/// displacement that may overshoot [`ZoomLimits`] while a gesture is active;
/// [`ViewportController::on_zoom_end`] then starts a damped correction back
/// to the nearest bound, which [`ViewportController::tick`] advances.
#[derive(Clone, Debug)]
pub struct ViewportController {
    pan: Transitionable<Vec2>,
    zoom: Transitionable<f64>,
    limits: ZoomLimits,
    policy: OvershootPolicy,
    correction: DampedParams,
    zoom_step: f64,
    projection: Projection,
    view_size: Size,
    phase: ZoomPhase,
}

impl ViewportController {
    /// Creates a controller for a view of `view_size` pixels.
    ///
    /// - Pan and zoom displacement start at zero.
    /// - Zoom limits are [`ZoomLimits::default`] (`0..=200`, overshoot `50`).
    /// - Each zoom input unit moves the displacement by one unit.
    /// - The projection is [`Projection::Flat`].
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            pan: Transitionable::new(Vec2::ZERO),
            zoom: Transitionable::new(0.0),
            limits: ZoomLimits::default(),
            policy: OvershootPolicy::default(),
            correction: DampedParams::default(),
            zoom_step: 1.0,
            projection: Projection::default(),
            view_size,
            phase: ZoomPhase::Free,
        }
    }

    /// Returns a snapshot of the current viewport.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        let zoom_displacement = self.zoom.get();
        ViewportState {
            pan_offset: self.pan.get(),
            zoom_displacement,
            scale: self.projection.scale_for(zoom_displacement),
            view_size: self.view_size,
        }
    }

    /// Returns the current zoom phase.
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Returns the current zoom displacement.
    #[must_use]
    pub fn zoom_displacement(&self) -> f64 {
        self.zoom.get()
    }

    /// Returns the value the zoom is heading toward.
    ///
    /// While correcting this is the bound being restored; otherwise it is the
    /// current displacement.
    #[must_use]
    pub fn zoom_target(&self) -> f64 {
        self.zoom.target()
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan.get()
    }

    /// Returns the configured zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom limits.
    ///
    /// The current displacement is left alone; call
    /// [`ViewportController::on_zoom_end`] to pull it into the new bounds.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
    }

    /// Returns the overshoot policy.
    #[must_use]
    pub fn overshoot_policy(&self) -> OvershootPolicy {
        self.policy
    }

    /// Sets what zoom input does outside the widened band.
    pub fn set_overshoot_policy(&mut self, policy: OvershootPolicy) {
        self.policy = policy;
    }

    /// Returns the damping used for snap-back corrections.
    #[must_use]
    pub fn correction(&self) -> DampedParams {
        self.correction
    }

    /// Sets the damping used for snap-back corrections.
    pub fn set_correction(&mut self, params: DampedParams) {
        self.correction = params;
    }

    /// Returns the displacement applied per zoom input unit.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets the displacement applied per zoom input unit.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom_step(&mut self, step: f64) {
        if step.is_finite() {
            self.zoom_step = step;
        }
    }

    /// Returns the projection used to derive the scale factor.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Sets the projection used to derive the scale factor.
    ///
    /// Projections that fail [`Projection::is_valid`] are ignored.
    pub fn set_projection(&mut self, projection: Projection) {
        if !projection.is_valid() {
            tracing::debug!(?projection, "ignoring invalid projection");
            return;
        }
        self.projection = projection;
    }

    /// Returns the view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size. Content stays centered in the new extent.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Applies zoom input.
    ///
    /// Inside the widened band the scaled delta is added linearly. Outside
    /// it, [`OvershootPolicy`] decides whether input keeps accumulating. No
    /// bound is enforced here; that happens in
    /// [`ViewportController::on_zoom_end`]. Any in-flight correction is
    /// abandoned in favour of the new input.
    pub fn on_zoom_delta(&mut self, delta_units: f64) {
        let delta = delta_units * self.zoom_step;
        if !delta.is_finite() {
            return;
        }
        if self.zoom.is_active() {
            self.zoom.halt();
            self.phase = ZoomPhase::Free;
            tracing::debug!(value = self.zoom.get(), "zoom correction interrupted by input");
        }
        let current = self.zoom.get();
        let next = if self.limits.in_band(current) {
            current + delta
        } else {
            tracing::trace!(value = current, "zoom displacement outside overshoot band");
            match self.policy {
                OvershootPolicy::Elastic => current + delta,
                OvershootPolicy::Hold => current,
            }
        };
        self.zoom.set(next, Transition::Immediate);
    }

    /// Ends a zoom gesture, correcting an out-of-bounds displacement.
    ///
    /// Below `min_scale` the zoom is damped toward `min_scale`, above
    /// `max_scale` toward `max_scale`; inside the bounds this is a no-op.
    pub fn on_zoom_end(&mut self) {
        let current = self.zoom.get();
        let Some(target) = self.limits.correction_target(current) else {
            return;
        };
        self.zoom.set(target, Transition::Damped(self.correction));
        if self.zoom.is_active() {
            self.phase = ZoomPhase::Correcting;
            tracing::debug!(from = current, to = target, "zoom correction started");
        }
    }

    /// Pans by `delta` content pixels, immediately and without bounds.
    pub fn on_pan_delta(&mut self, delta: Vec2) {
        if !delta.is_finite() || delta == Vec2::ZERO {
            return;
        }
        let next = self.pan.get() + delta;
        self.pan.set(next, Transition::Immediate);
    }

    /// Sets the pan offset, optionally animated.
    pub fn set_pan(&mut self, offset: Vec2, transition: Transition) {
        self.pan.set(offset, transition);
    }

    /// Returns pan and zoom to their initial pose.
    pub fn reset(&mut self, transition: Transition) {
        self.pan.set(Vec2::ZERO, transition);
        self.zoom.set(0.0, transition);
        self.phase = if self.zoom.is_active() {
            ZoomPhase::Correcting
        } else {
            ZoomPhase::Free
        };
    }

    /// Advances animations to the monotonic timestamp `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.pan.tick(now_ms);
        let settled = self.zoom.tick(now_ms);
        self.finish_correction(settled);
    }

    /// Advances animations by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.pan.advance(dt_ms);
        let settled = self.zoom.advance(dt_ms);
        self.finish_correction(settled);
    }

    /// Returns `true` while any pan or zoom animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pan.is_active() || self.zoom.is_active()
    }

    fn finish_correction(&mut self, settled: bool) {
        if self.phase == ZoomPhase::Correcting && !self.zoom.is_active() {
            self.phase = ZoomPhase::Free;
            if settled {
                tracing::debug!(value = self.zoom.get(), "zoom correction settled");
            }
        }
    }
}
