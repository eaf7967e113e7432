// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring integration.
//!
//! The built-in integrator is a second-order damped spring advanced with
//! semi-implicit Euler in small fixed sub-steps. Two flavours are offered:
//!
//! - [`DampingMethod::Spring`]: the value may pass through the target and
//!   oscillate around it (for damping ratios below `1.0`).
//! - [`DampingMethod::Wall`]: the target acts as a wall; when the value
//!   would cross it, it is placed on the target and its velocity is reflected
//!   and scaled by `restitution`.

use core::f64::consts::TAU;

use crate::Animatable;

/// Longest single integration step, in milliseconds.
const MAX_SUBSTEP_MS: f64 = 4.0;

/// Upper bound on sub-steps taken by one call to [`Integrator::step`].
///
/// A transition that has not settled after this many steps simply continues
/// on the next call.
const MAX_SUBSTEPS: u32 = 4096;

/// Position and velocity of an animated value.
///
/// Velocity is expressed in value units per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion<T> {
    /// Current value.
    pub position: T,
    /// Current rate of change per millisecond.
    pub velocity: T,
}

impl<T: Animatable> Motion<T> {
    /// A motion resting at `position`.
    #[must_use]
    pub fn at_rest(position: T) -> Self {
        Self {
            position,
            velocity: T::zero(),
        }
    }
}

/// How a damped transition treats its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DampingMethod {
    /// Plain damped spring.
    Spring,
    /// Spring that bounces off the target instead of passing through it.
    Wall {
        /// Fraction of speed kept after hitting the target, in `[0, 1]`.
        restitution: f64,
    },
}

impl Default for DampingMethod {
    fn default() -> Self {
        Self::Wall { restitution: 0.5 }
    }
}

/// Parameters of a damped transition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DampedParams {
    /// Spring or wall behaviour.
    pub method: DampingMethod,
    /// Damping ratio; `1.0` is critical damping.
    pub damping_ratio: f64,
    /// Undamped oscillation period in milliseconds.
    pub period_ms: f64,
    /// Rest tolerance for both distance to target and speed (per ms).
    pub epsilon: f64,
}

impl Default for DampedParams {
    fn default() -> Self {
        Self {
            method: DampingMethod::default(),
            damping_ratio: 0.5,
            period_ms: 500.0,
            epsilon: 1e-3,
        }
    }
}

impl DampedParams {
    /// A plain spring with the given damping ratio and period.
    #[must_use]
    pub fn spring(damping_ratio: f64, period_ms: f64) -> Self {
        Self {
            method: DampingMethod::Spring,
            damping_ratio,
            period_ms,
            ..Self::default()
        }
    }

    /// A wall transition with the given damping ratio and period.
    #[must_use]
    pub fn wall(damping_ratio: f64, period_ms: f64) -> Self {
        Self {
            method: DampingMethod::default(),
            damping_ratio,
            period_ms,
            ..Self::default()
        }
    }

    /// Returns `true` if the parameters describe a stable, finite spring.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let restitution_ok = match self.method {
            DampingMethod::Spring => true,
            DampingMethod::Wall { restitution } => (0.0..=1.0).contains(&restitution),
        };
        restitution_ok
            && self.damping_ratio.is_finite()
            && self.damping_ratio >= 0.0
            && self.period_ms.is_finite()
            && self.period_ms > 0.0
            && self.epsilon.is_finite()
            && self.epsilon > 0.0
    }
}

/// Numeric integrator that drives a [`Motion`] toward a target.
///
/// Hosts can implement this to plug in their own curves; see
/// [`Transitionable::advance_with`](crate::Transitionable::advance_with).
pub trait Integrator<T: Animatable> {
    /// Advances `motion` toward `target` by `dt_ms` milliseconds.
    ///
    /// Returns `true` once the motion has come to rest on the target. The
    /// integrator is expected to leave `motion.position == target` and a zero
    /// velocity in that case.
    fn step(&mut self, motion: &mut Motion<T>, target: T, dt_ms: f64) -> bool;
}

/// Built-in integrator for [`DampedParams`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringIntegrator {
    params: DampedParams,
    stiffness: f64,
    damping: f64,
    substep: f64,
}

impl SpringIntegrator {
    /// Creates an integrator for the given parameters.
    #[must_use]
    pub fn new(params: DampedParams) -> Self {
        let omega = TAU / params.period_ms;
        Self {
            params,
            stiffness: omega * omega,
            damping: 2.0 * params.damping_ratio * omega,
            // Semi-implicit Euler needs `omega * h` well below 2.
            substep: MAX_SUBSTEP_MS.min(params.period_ms / 20.0),
        }
    }

    /// Returns the parameters this integrator was built from.
    #[must_use]
    pub fn params(&self) -> DampedParams {
        self.params
    }

    fn at_rest<T: Animatable>(&self, motion: &Motion<T>, target: T) -> bool {
        let eps_sq = self.params.epsilon * self.params.epsilon;
        motion.position.sub(target).length_squared() < eps_sq
            && motion.velocity.length_squared() < eps_sq
    }
}

impl<T: Animatable> Integrator<T> for SpringIntegrator {
    fn step(&mut self, motion: &mut Motion<T>, target: T, dt_ms: f64) -> bool {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return self.at_rest(motion, target);
        }
        let mut remaining = dt_ms;
        let mut steps = 0;
        while remaining > 0.0 && steps < MAX_SUBSTEPS {
            let h = remaining.min(self.substep);
            remaining -= h;
            steps += 1;

            let before = motion.position.sub(target);
            let accel = before
                .scale(-self.stiffness)
                .sub(motion.velocity.scale(self.damping));
            motion.velocity = motion.velocity.add(accel.scale(h));
            motion.position = motion.position.add(motion.velocity.scale(h));

            if let DampingMethod::Wall { restitution } = self.params.method {
                let after = motion.position.sub(target);
                if after.dot(before) < 0.0 {
                    motion.position = target;
                    motion.velocity = motion.velocity.scale(-restitution);
                }
            }

            if self.at_rest(motion, target) {
                *motion = Motion::at_rest(target);
                return true;
            }
        }
        false
    }
}
