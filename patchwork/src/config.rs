// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use patchwork_gesture::GestureMode;
use patchwork_grid::GridError;
use patchwork_selection::{ContentRef, PatchMode};
use patchwork_transition::DampedParams;
use patchwork_view::{OvershootPolicy, Projection, ZoomLimits};

/// Everything needed to build a [`crate::Session`].
///
/// [`SessionConfig::default`] describes the classic grid editor: a 10×10 grid
/// 400 pixels square in an 800×600 view, zoom bounds `0..=200` with 50 units
/// of overshoot, wheel deltas divided by 100, a wall bounce back into bounds,
/// and a perspective camera placed 120 pixels beyond the furthest overshoot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// Unscaled grid size in pixels.
    pub grid_size: Size,
    /// View size in pixels.
    pub view_size: Size,
    /// Zoom bounds and overshoot.
    pub limits: ZoomLimits,
    /// Zoom displacement per wheel unit.
    pub zoom_step: f64,
    /// Behaviour of zoom input outside the overshoot band.
    pub overshoot_policy: OvershootPolicy,
    /// Spring used to pull zoom back into bounds.
    pub correction: DampedParams,
    /// Mapping from zoom displacement to scale.
    pub projection: Projection,
    /// Tilt applied to grid and patch surfaces, in radians.
    pub tilt: f64,
    /// Whether marquees insert patches.
    pub patch_mode: PatchMode,
    /// Content cycled through by new patches.
    pub contents: Vec<ContentRef>,
    /// Mode the gesture router starts in.
    pub initial_mode: GestureMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            rows: 10,
            cols: 10,
            grid_size: Size::new(400.0, 400.0),
            view_size: Size::new(800.0, 600.0),
            limits,
            zoom_step: 0.01,
            overshoot_policy: OvershootPolicy::default(),
            correction: DampedParams::default(),
            projection: Projection::Perspective {
                distance: limits.max_displace() + 120.0,
                base_depth: limits.overshoot() + 50.0,
            },
            tilt: 0.0,
            patch_mode: PatchMode::Disabled,
            contents: Vec::new(),
            initial_mode: GestureMode::Pan,
        }
    }
}

impl SessionConfig {
    /// The default configuration with a flat projection, so one content pixel
    /// is one screen pixel until zoom limits are changed.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            projection: Projection::Flat,
            ..Self::default()
        }
    }

    /// Checks everything [`crate::Session::new`] would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.view_size.width) || !positive(self.view_size.height) {
            return Err(ConfigError::InvalidViewSize {
                width: self.view_size.width,
                height: self.view_size.height,
            });
        }
        if !self.zoom_step.is_finite() || self.zoom_step == 0.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !self.correction.is_valid() {
            return Err(ConfigError::InvalidDamping(self.correction));
        }
        if !self.projection.is_valid() {
            return Err(ConfigError::InvalidProjection(self.projection));
        }
        if !self.tilt.is_finite() {
            return Err(ConfigError::InvalidTilt(self.tilt));
        }
        Ok(())
    }
}

/// Error returned when a [`SessionConfig`] cannot produce a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or size were rejected.
    Grid(GridError),
    /// The zoom step must be finite and non-zero.
    InvalidZoomStep(f64),
    /// The correction spring is unstable or not finite.
    InvalidDamping(DampedParams),
    /// The view must be finite and positive on both axes.
    InvalidViewSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The perspective camera must sit a finite, positive distance away.
    InvalidProjection(Projection),
    /// The tilt must be finite.
    InvalidTilt(f64),
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "invalid grid: {err}"),
            Self::InvalidZoomStep(step) => {
                write!(f, "zoom step must be finite and non-zero, got {step}")
            }
            Self::InvalidDamping(params) => write!(
                f,
                "correction spring is invalid (damping ratio {}, period {} ms, epsilon {})",
                params.damping_ratio, params.period_ms, params.epsilon
            ),
            Self::InvalidViewSize { width, height } => {
                write!(f, "view size must be finite and positive, got {width}x{height}")
            }
            Self::InvalidProjection(projection) => {
                write!(f, "projection cannot produce a positive scale: {projection:?}")
            }
            Self::InvalidTilt(tilt) => write!(f, "tilt must be finite, got {tilt}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}
