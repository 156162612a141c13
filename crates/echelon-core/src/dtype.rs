//! Numeric element types.
//!
//! ```text
//! Scalar   (f32, f64, integers)
//!   └── Float  (f32, f64)
//! ```
//!
//! Container operations (construction, transpose, addition, products) only
//! need [`Scalar`]. Anything that divides, such as elimination, inversion or
//! normalization, requires [`Float`].

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Base trait for every element type storable in a [`Matrix`](crate::Matrix).
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

/// Floating-point element types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    /// Machine epsilon.
    fn epsilon() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;

    /// Convert from an `f64` literal (used for constants and parsed input).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64` (used for formatting).
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
}

impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
