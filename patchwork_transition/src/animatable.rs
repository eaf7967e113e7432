// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value abstraction used by transitions.
//!
//! This trait is intentionally small: it covers exactly the vector-space
//! operations a damped integrator needs.

use core::fmt::Debug;

use kurbo::Vec2;

/// A fixed-shape numeric value that can be animated.
///
/// Implemented for `f64`, [`kurbo::Vec2`] and `[f64; N]`. The shape of the
/// value is fixed by the type, so a single [`Transitionable`](crate::Transitionable)
/// can never switch between a scalar and a vector.
pub trait Animatable: Copy + Debug + PartialEq {
    /// Additive identity.
    fn zero() -> Self;

    /// Component-wise sum.
    fn add(self, other: Self) -> Self;

    /// Component-wise difference.
    fn sub(self, other: Self) -> Self;

    /// Multiplies every component by `factor`.
    fn scale(self, factor: f64) -> Self;

    /// Dot product, treating the value as a vector.
    fn dot(self, other: Self) -> f64;

    /// Squared Euclidean length.
    fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns `true` if every component is finite.
    fn is_finite(self) -> bool;
}

impl Animatable for f64 {
    fn zero() -> Self {
        0.0
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn dot(self, other: Self) -> f64 {
        self * other
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl Animatable for Vec2 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn dot(self, other: Self) -> f64 {
        Self::dot(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl<const N: usize> Animatable for [f64; N] {
    fn zero() -> Self {
        [0.0; N]
    }

    fn add(mut self, other: Self) -> Self {
        for (a, b) in self.iter_mut().zip(other) {
            *a += b;
        }
        self
    }

    fn sub(mut self, other: Self) -> Self {
        for (a, b) in self.iter_mut().zip(other) {
            *a -= b;
        }
        self
    }

    fn scale(mut self, factor: f64) -> Self {
        for a in &mut self {
            *a *= factor;
        }
        self
    }

    fn dot(self, other: Self) -> f64 {
        self.iter().zip(other).map(|(a, b)| a * b).sum()
    }

    fn is_finite(self) -> bool {
        self.iter().all(|a| a.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::Animatable;

    #[test]
    fn array_ops_are_component_wise() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, 0.5, 0.5];
        assert_eq!(Animatable::add(a, b), [1.5, 2.5, 3.5]);
        assert_eq!(Animatable::sub(a, b), [0.5, 1.5, 2.5]);
        assert_eq!(a.scale(2.0), [2.0, 4.0, 6.0]);
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    fn vec2_matches_kurbo() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(Animatable::dot(a, Vec2::new(1.0, 0.0)), 3.0);
        assert!(!Animatable::is_finite(Vec2::new(f64::NAN, 0.0)));
    }
}
