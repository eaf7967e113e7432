// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where the zoom value is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// Zoom follows input linearly (or rests).
    #[default]
    Free,
    /// A damped correction is pulling the zoom back inside its bounds.
    Correcting,
}

/// What zoom input does once the displacement has left the widened band.
///
/// The band is `[min_scale - overshoot, max_scale + overshoot]`; see
/// [`crate::ZoomLimits`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OvershootPolicy {
    /// Keep applying input; the value is only pulled back when the gesture ends.
    #[default]
    Elastic,
    /// Ignore further input until the gesture ends and the correction runs.
    Hold,
}

/// How zoom displacement maps to an on-screen scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    /// Displacement is tracked but the scale factor stays at `1.0`.
    #[default]
    Flat,
    /// Displacement moves the canvas toward a viewer `distance` pixels away.
    ///
    /// The canvas rests at `base_depth` in front of the screen plane, so the
    /// scale factor is `distance / (distance - (base_depth + displacement))`.
    Perspective {
        /// Viewer distance from the screen plane, in pixels.
        distance: f64,
        /// Resting depth of the canvas before any zoom input.
        base_depth: f64,
    },
}

impl Projection {
    /// Smallest denominator used by [`Projection::Perspective`].
    ///
    /// Keeps the scale finite when the canvas is pushed through the viewer.
    pub const MIN_EYE_DISTANCE: f64 = 1.0;

    /// Returns `true` if every displacement maps to a finite, positive scale.
    ///
    /// A perspective camera needs a finite, positive `distance` and a finite
    /// `base_depth`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Flat => true,
            Self::Perspective {
                distance,
                base_depth,
            } => distance.is_finite() && distance > 0.0 && base_depth.is_finite(),
        }
    }

    /// Returns the on-screen scale factor for a zoom displacement.
    #[must_use]
    pub fn scale_for(self, displacement: f64) -> f64 {
        match self {
            Self::Flat => 1.0,
            Self::Perspective {
                distance,
                base_depth,
            } => {
                let eye = (distance - (base_depth + displacement)).max(Self::MIN_EYE_DISTANCE);
                distance / eye
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Projection;

    #[test]
    fn flat_scale_is_unity() {
        assert_eq!(Projection::Flat.scale_for(123.0), 1.0);
    }

    #[test]
    fn perspective_scale_grows_toward_viewer() {
        let p = Projection::Perspective {
            distance: 370.0,
            base_depth: 0.0,
        };
        assert_eq!(p.scale_for(0.0), 1.0);
        assert!(p.scale_for(100.0) > p.scale_for(0.0));
        assert!(p.scale_for(-100.0) < 1.0);
        // Pushed through the viewer: clamped rather than negative or infinite.
        assert_eq!(p.scale_for(10_000.0), 370.0);
    }

    #[test]
    fn validity_requires_a_camera_in_front() {
        assert!(Projection::Flat.is_valid());
        let camera = |distance, base_depth| Projection::Perspective {
            distance,
            base_depth,
        };
        assert!(camera(370.0, 100.0).is_valid());
        assert!(camera(370.0, -50.0).is_valid());
        assert!(!camera(0.0, 100.0).is_valid());
        assert!(!camera(-370.0, 100.0).is_valid());
        assert!(!camera(f64::INFINITY, 100.0).is_valid());
        assert!(!camera(370.0, f64::NAN).is_valid());
    }
}
