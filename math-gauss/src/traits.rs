//! Scalar abstraction for the elimination kernels
//!
//! [`ComplexField`] lets the same pivoting and reduction code run on real and
//! complex systems. Pivot selection only needs a magnitude.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, FromPrimitive, NumAssign, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Trait for scalar types that can be eliminated.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32`
/// - `Complex64`
/// - `Complex32`
pub trait ComplexField:
    NumAssign + Clone + Copy + Send + Sync + Debug + Zero + One + Neg<Output = Self> + 'static
{
    /// The real number type underlying this field
    type Real: Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static;

    /// Squared magnitude |z|²
    fn norm_sqr(&self) -> Self::Real;

    /// Magnitude |z|
    fn norm(&self) -> Self::Real {
        self.norm_sqr().sqrt()
    }

    /// Neither infinite nor NaN (both parts, for complex values)
    fn is_finite(&self) -> bool;
}

impl ComplexField for Complex64 {
    type Real = f64;

    #[inline]
    fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl ComplexField for Complex32 {
    type Real = f32;

    #[inline]
    fn norm_sqr(&self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    fn norm(&self) -> f32 {
        self.re.hypot(self.im)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl ComplexField for f64 {
    type Real = f64;

    #[inline]
    fn norm_sqr(&self) -> f64 {
        *self * *self
    }

    // abs() avoids overflow in norm_sqr for large entries
    #[inline]
    fn norm(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl ComplexField for f32 {
    type Real = f32;

    #[inline]
    fn norm_sqr(&self) -> f32 {
        *self * *self
    }

    #[inline]
    fn norm(&self) -> f32 {
        self.abs()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}
