//! Numeric representations a quantity can carry

use std::fmt;

use ome_core::Number;

use crate::Tolerance;

/// A numeric type that can be rescaled by powers of ten
pub trait Scalar: Clone + PartialEq + fmt::Debug + Send + Sync {
    /// Multiply by `10^decades`
    fn scale_pow10(&self, decades: i32) -> Self;

    /// Compare two values within `tolerance`
    fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool;
}

/// Correctly rounded powers of ten, 10^0 through 10^48.
/// Every entry up to 10^22 is exact in binary64.
const POW10: [f64; 49] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28, 1e29, 1e30, 1e31,
    1e32, 1e33, 1e34, 1e35, 1e36, 1e37, 1e38, 1e39, 1e40, 1e41, 1e42, 1e43, 1e44, 1e45, 1e46,
    1e47, 1e48,
];

fn pow10(decades: u32) -> f64 {
    POW10
        .get(decades as usize)
        .copied()
        .unwrap_or_else(|| 10f64.powi(decades as i32))
}

impl Scalar for f64 {
    /// Multiplies for upward shifts and divides for downward ones, so
    /// `x / 1e3` is the correctly rounded thousandth rather than `x * 0.001`.
    fn scale_pow10(&self, decades: i32) -> Self {
        let factor = pow10(decades.unsigned_abs());
        if decades >= 0 {
            self * factor
        } else {
            self / factor
        }
    }

    fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.within(*self, *other)
    }
}

impl Scalar for f32 {
    // Widen first: 10^48 does not fit in an f32.
    fn scale_pow10(&self, decades: i32) -> Self {
        f64::from(*self).scale_pow10(decades) as f32
    }

    fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.within(f64::from(*self), f64::from(*other))
    }
}

impl Scalar for Number {
    fn scale_pow10(&self, decades: i32) -> Self {
        Number::scale_pow10(self, decades)
    }

    fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        if self == other {
            return true;
        }
        match (self.to_f64(), other.to_f64()) {
            (Some(a), Some(b)) => tolerance.within(a, b),
            _ => false,
        }
    }
}
