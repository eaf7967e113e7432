// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Patchwork Transition: values that move toward a target over time.
//!
//! [`Transitionable`] holds a numeric value (a scalar, a [`kurbo::Vec2`], or a
//! fixed-length `[f64; N]`) and either jumps to a new target or animates
//! toward it with a damped spring. There is no background clock: the owning
//! render loop advances every transitionable once per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use patchwork_transition::{DampedParams, Transition, Transitionable};
//!
//! let mut zoom = Transitionable::new(260.0);
//!
//! // Spring back to the upper bound after an overshooting gesture.
//! zoom.set(200.0, Transition::Damped(DampedParams::default()));
//!
//! // One 16 ms frame at a time until the value rests on its target.
//! while zoom.is_active() {
//!     zoom.advance(16.0);
//! }
//! assert_eq!(zoom.get(), 200.0);
//! ```
//!
//! ## Damping methods
//!
//! - [`DampingMethod::Spring`]: a plain second-order damped spring that may
//!   oscillate around the target.
//! - [`DampingMethod::Wall`]: the target behaves like a wall; the value bounces
//!   back instead of passing through it.
//!
//! Hosts that want a different curve can implement [`Integrator`] and drive
//! the value with [`Transitionable::advance_with`].
//!
//! This crate is `no_std`.

#![no_std]

mod animatable;
mod spring;
mod transitionable;

pub use animatable::Animatable;
pub use spring::{DampedParams, DampingMethod, Integrator, Motion, SpringIntegrator};
pub use transitionable::{Transition, Transitionable};
