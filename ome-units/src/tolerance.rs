//! Comparison tolerance for floating-point quantities

use serde::{Deserialize, Serialize};

/// How close two magnitudes must be to count as the same measurement.
///
/// Two values `a` and `b` match when
/// `|a - b| <= absolute + relative * max(|a|, |b|)`.
/// The default (relative 1e-9, absolute 0) is the round-trip guarantee
/// for `f64` conversions across the full prefix range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Tolerance {
    /// Exact comparison
    pub const EXACT: Tolerance = Tolerance { relative: 0.0, absolute: 0.0 };

    pub fn new(relative: f64, absolute: f64) -> Self {
        Tolerance { relative, absolute }
    }

    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    /// Check whether `a` and `b` are within tolerance of each other
    pub fn within(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.absolute + self.relative * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { relative: 1e-9, absolute: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_relative() {
        let tol = Tolerance::default();
        assert!(tol.within(1.0, 1.0 + 1e-12));
        assert!(!tol.within(1.0, 1.0 + 1e-6));
        assert!(tol.within(1e30, 1e30 * (1.0 + 1e-10)));
    }

    #[test]
    fn test_exact() {
        assert!(Tolerance::EXACT.within(0.5, 0.5));
        assert!(!Tolerance::EXACT.within(0.5, 0.5 + f64::EPSILON));
    }

    #[test]
    fn test_absolute_floor() {
        let tol = Tolerance::default().with_absolute(1e-6);
        assert!(tol.within(0.0, 1e-7));
        assert!(!Tolerance::default().within(0.0, 1e-7));
    }

    #[test]
    fn test_non_finite() {
        let tol = Tolerance::default();
        assert!(tol.within(f64::INFINITY, f64::INFINITY));
        assert!(!tol.within(f64::NAN, f64::NAN));
        assert!(!tol.within(f64::INFINITY, 1.0));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let tol: Tolerance = serde_json::from_str(r#"{"absolute": 0.5}"#).unwrap();
        assert_eq!(tol, Tolerance::new(1e-9, 0.5));
    }
}
