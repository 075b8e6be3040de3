//! Exact decimal numbers using dashu
//!
//! Uses dashu-float (DBig), which stores `significand * 10^exponent`.
//! Rescaling by a power of ten only moves the exponent, so unit
//! conversions between metric prefixes never round.

use std::fmt;
use std::str::FromStr;

use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Not a finite number: {0}")]
    NonFinite(f64),
}

/// Working precision for calculations (decimal digits)
pub const DEFAULT_PRECISION: usize = 50;

/// Widest exponent `Display` writes out positionally; beyond it,
/// `{significand}e{exponent}` keeps the output bounded.
const MAX_POSITIONAL_EXPONENT: usize = 64;

/// Exact decimal number
///
/// Values parsed from text keep every digit (up to [`DEFAULT_PRECISION`]),
/// and [`Number::scale_pow10`] is lossless.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    fn from_parts(significand: IBig, exponent: isize) -> Self {
        Self { inner: Self::with_work_precision(DBig::from_parts(significand, exponent)) }
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self::from_parts(IBig::from(n), 0)
    }

    /// Create from f64 using its shortest round-trip decimal form,
    /// so `0.1` becomes exactly `1/10` rather than the binary neighbour.
    pub fn from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::NonFinite(f));
        }
        let (significand, exponent) = parse_decimal(&format!("{:e}", f))?;
        Ok(Self::from_parts(significand, exponent))
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Arithmetic ==========

    /// Multiply by `10^decades` without rounding.
    ///
    /// The stored exponent saturates at the `isize` bounds.
    pub fn scale_pow10(&self, decades: i32) -> Self {
        if decades == 0 || self.is_zero() {
            return self.clone();
        }
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        Self::from_parts(significand, exponent.saturating_add(decades as isize))
    }

    /// Convert to f64, correctly rounded. `None` when the value overflows
    /// to infinity or a nonzero value underflows to zero.
    pub fn to_f64(&self) -> Option<f64> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let f: f64 = format!("{}e{}", significand, exponent).parse().ok()?;
        if !f.is_finite() || (f == 0.0 && !self.is_zero()) {
            return None;
        }
        Some(f)
    }
}

/// Split `[-]digits[.digits][e[-]digits]` into an integer significand
/// and a decimal exponent.
fn parse_decimal(s: &str) -> Result<(IBig, isize), NumberError> {
    let err = || NumberError::ParseError(s.to_string());
    let s = s.trim();

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => {
            let exp: i32 = s[pos + 1..].parse().map_err(|_| err())?;
            (&s[..pos], exp)
        }
        None => (s, 0),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(err());
    }

    let frac_len = i32::try_from(frac_part.len()).map_err(|_| err())?;
    let exponent = exponent.checked_sub(frac_len).ok_or_else(err)?;

    let magnitude: IBig = format!("{}{}", int_part, frac_part).parse().map_err(|_| err())?;
    let significand = if negative { -magnitude } else { magnitude };
    Ok((significand, exponent as isize))
}

// ========== Trait Implementations ==========

impl FromStr for Number {
    type Err = NumberError;

    /// Supports: "123", "-3.14", "1.5e10", "602214076e15"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (significand, exponent) = parse_decimal(s)?;
        Ok(Self::from_parts(significand, exponent))
    }
}

impl fmt::Display for Number {
    /// Plain positional notation with every stored digit, or
    /// `{significand}e{exponent}` once the exponent gets too wide.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        if exponent.unsigned_abs() > MAX_POSITIONAL_EXPONENT {
            return write!(f, "{}e{}", significand, exponent);
        }

        let sign = if significand < IBig::ZERO { "-" } else { "" };
        let digits = if sign.is_empty() { significand.to_string() } else { (-significand).to_string() };

        if exponent >= 0 {
            return write!(f, "{}{}{}", sign, digits, "0".repeat(exponent as usize));
        }

        let shift = exponent.unsigned_abs();
        if digits.len() > shift {
            let (int_part, frac_part) = digits.split_at(digits.len() - shift);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        } else {
            write!(f, "{}0.{}{}", sign, "0".repeat(shift - digits.len()), digits)
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // DBig implements PartialOrd, use it and treat None as Equal
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
