// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Animatable, DampedParams, Integrator, Motion, SpringIntegrator};

/// How [`Transitionable::set`] reaches its new target.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Jump to the target immediately.
    #[default]
    Immediate,
    /// Animate toward the target with a damped spring.
    Damped(DampedParams),
}

/// A value with an optional smoothed transition to a target.
///
/// Time is owned by the caller: the render loop calls [`Transitionable::tick`]
/// (or [`Transitionable::advance`]) once per frame, and [`Transitionable::get`]
/// reports the value as of the last advance. Only one transition is ever in
/// flight; a new [`Transitionable::set`] replaces it and discards its target.
#[derive(Clone, Debug)]
pub struct Transitionable<T> {
    motion: Motion<T>,
    target: T,
    integrator: Option<SpringIntegrator>,
    last_tick: Option<u64>,
}

impl<T: Animatable> Transitionable<T> {
    /// Creates an idle transitionable resting at `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            motion: Motion::at_rest(value),
            target: value,
            integrator: None,
            last_tick: None,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.motion.position
    }

    /// Returns the value the current transition is heading toward.
    ///
    /// For an idle instance this equals [`Transitionable::get`].
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns the current velocity, in value units per millisecond.
    #[must_use]
    pub fn velocity(&self) -> T {
        self.motion.velocity
    }

    /// Returns `true` while a damped transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.integrator.is_some()
    }

    /// Returns the parameters of the in-flight transition, if any.
    #[must_use]
    pub fn active_params(&self) -> Option<DampedParams> {
        self.integrator.map(|i| i.params())
    }

    /// Sets a new target.
    ///
    /// Any in-flight transition is replaced. With [`Transition::Damped`] the
    /// current position and velocity carry over into the new spring; invalid
    /// damping parameters (see [`DampedParams::is_valid`]) or a non-finite
    /// target fall back to an immediate set.
    pub fn set(&mut self, target: T, transition: Transition) {
        match transition {
            Transition::Damped(params) if params.is_valid() && target.is_finite() => {
                self.target = target;
                self.integrator = Some(SpringIntegrator::new(params));
            }
            _ => self.jump(target),
        }
    }

    /// Stops any transition, freezing the value where it currently is.
    pub fn halt(&mut self) {
        self.jump(self.motion.position);
    }

    /// Advances the in-flight transition by `dt_ms` milliseconds.
    ///
    /// Returns `true` if the transition settled during this call.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let Some(integrator) = self.integrator.as_mut() else {
            return false;
        };
        let settled = integrator.step(&mut self.motion, self.target, dt_ms);
        if settled {
            self.integrator = None;
        }
        settled
    }

    /// Advances using a caller-provided integrator instead of the built-in spring.
    ///
    /// The target is still the one given to the last [`Transitionable::set`].
    /// Does nothing while idle.
    pub fn advance_with<I: Integrator<T>>(&mut self, integrator: &mut I, dt_ms: f64) -> bool {
        if self.integrator.is_none() {
            return false;
        }
        let settled = integrator.step(&mut self.motion, self.target, dt_ms);
        if settled {
            self.jump(self.target);
        }
        settled
    }

    /// Advances by the time elapsed since the previous tick.
    ///
    /// `now_ms` is a monotonic timestamp in milliseconds. The first tick only
    /// establishes the time base. Returns `true` if the transition settled.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let dt = match self.last_tick {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_tick = Some(now_ms);
        if dt == 0 {
            return false;
        }
        self.advance(dt as f64)
    }

    fn jump(&mut self, value: T) {
        self.motion = Motion::at_rest(value);
        self.target = value;
        self.integrator = None;
    }
}

impl<T: Animatable> Default for Transitionable<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}
