// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom bounds plus the overshoot allowed while a gesture is active.
///
/// `[min_scale, max_scale]` is where the zoom displacement rests.
/// `[min_displace, max_displace]` widens that range by `overshoot` on both
/// sides and marks where linear tracking of input ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    min_scale: f64,
    max_scale: f64,
    overshoot: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.0,
            max_scale: 200.0,
            overshoot: 50.0,
        }
    }
}

impl ZoomLimits {
    /// Creates zoom limits.
    ///
    /// The bounds are normalized so that `min_scale <= max_scale`, and a
    /// negative or non-finite overshoot is treated as zero.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64, overshoot: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        let overshoot = if overshoot.is_finite() {
            overshoot.max(0.0)
        } else {
            0.0
        };
        Self {
            min_scale,
            max_scale,
            overshoot,
        }
    }

    /// Lower resting bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper resting bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Distance the band extends past each resting bound.
    #[must_use]
    pub fn overshoot(&self) -> f64 {
        self.overshoot
    }

    /// Lower edge of the widened band.
    #[must_use]
    pub fn min_displace(&self) -> f64 {
        self.min_scale - self.overshoot
    }

    /// Upper edge of the widened band.
    #[must_use]
    pub fn max_displace(&self) -> f64 {
        self.max_scale + self.overshoot
    }

    /// Returns `true` if `value` lies inside the widened band (inclusive).
    #[must_use]
    pub fn in_band(&self, value: f64) -> bool {
        (self.min_displace()..=self.max_displace()).contains(&value)
    }

    /// Returns `true` if `value` lies inside the resting bounds (inclusive).
    #[must_use]
    pub fn in_bounds(&self, value: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&value)
    }

    /// Returns the bound a value should be corrected to, if it is outside.
    #[must_use]
    pub fn correction_target(&self, value: f64) -> Option<f64> {
        if value < self.min_scale {
            Some(self.min_scale)
        } else if value > self.max_scale {
            Some(self.max_scale)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn band_widens_bounds_by_overshoot() {
        let limits = ZoomLimits::default();
        assert_eq!(limits.min_displace(), -50.0);
        assert_eq!(limits.max_displace(), 250.0);
        assert!(limits.in_band(250.0));
        assert!(!limits.in_band(250.5));
        assert!(!limits.in_bounds(220.0));
    }

    #[test]
    fn new_normalizes_inputs() {
        let limits = ZoomLimits::new(10.0, -10.0, -5.0);
        assert_eq!(limits.min_scale(), -10.0);
        assert_eq!(limits.max_scale(), 10.0);
        assert_eq!(limits.overshoot(), 0.0);
    }

    #[test]
    fn correction_targets_nearest_bound() {
        let limits = ZoomLimits::default();
        assert_eq!(limits.correction_target(260.0), Some(200.0));
        assert_eq!(limits.correction_target(-3.0), Some(0.0));
        assert_eq!(limits.correction_target(80.0), None);
        assert_eq!(limits.correction_target(200.0), None);
    }
}
