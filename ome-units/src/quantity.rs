//! Quantity type - a value with an associated unit

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::{Scalar, Tolerance, UnitSystem, UnitsPower};

/// A physical quantity: a numeric value tagged with one unit of a closed
/// enumeration. The magnitude in base units is `value * 10^unit.exponent()`.
///
/// Quantities are immutable; conversion returns a new quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<E, V> {
    value: V,
    unit: E,
}

/// A quantity measured in one of the [`UnitsPower`] units
pub type PowerQuantity<V = f64> = Quantity<UnitsPower, V>;

impl<E, V> Quantity<E, V> {
    /// Create a new quantity
    pub fn new(value: V, unit: E) -> Self {
        Quantity { value, unit }
    }

    /// The stored numeric value, in this quantity's own unit
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the quantity, returning its value
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consume the quantity, returning value and unit
    pub fn into_parts(self) -> (V, E) {
        (self.value, self.unit)
    }
}

impl<E: UnitSystem, V: Scalar> Quantity<E, V> {
    /// The unit of measurement
    pub fn unit(&self) -> E {
        self.unit
    }

    /// Express the same magnitude in another unit
    pub fn convert_to(&self, dest: E) -> Self {
        convert(self, dest)
    }

    /// Express the same magnitude in the base unit
    pub fn to_base(&self) -> Self {
        convert(self, E::BASE)
    }

    /// The magnitude in base units
    pub fn canonical_value(&self) -> V {
        self.to_base().into_value()
    }

    /// Check if two quantities describe the same magnitude within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: &Tolerance) -> bool {
        let (lhs, rhs) = self.in_finer_unit(other);
        lhs.value.approx_eq(&rhs.value, tolerance)
    }

    // Upward rescaling multiplies by an exact power of ten, so comparing in
    // the finer unit of the two avoids rounding the finer value.
    fn in_finer_unit(&self, other: &Self) -> (Self, Self) {
        let finer = if self.unit.exponent() <= other.unit.exponent() {
            self.unit
        } else {
            other.unit
        };
        (convert(self, finer), convert(other, finer))
    }
}

impl<E: UnitSystem, V: Scalar> PartialEq for Quantity<E, V> {
    /// Physical equality: equal magnitudes, whatever the stored units
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.in_finer_unit(other);
        lhs.value == rhs.value
    }
}

impl<E: UnitSystem, V: fmt::Display> fmt::Display for Quantity<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ome_core::Number;

    #[test]
    fn test_quantity_creation() {
        let q = PowerQuantity::new(5.0, UnitsPower::Kilowatt);
        assert_eq!(*q.value(), 5.0);
        assert_eq!(q.unit(), UnitsPower::Kilowatt);
        assert_eq!(q.into_parts(), (5.0, UnitsPower::Kilowatt));
    }

    #[test]
    fn test_to_base() {
        let q = PowerQuantity::new(5.0, UnitsPower::Kilowatt);
        let base = q.to_base();
        assert_eq!(base.unit(), UnitsPower::Watt);
        assert_eq!(*base.value(), 5000.0);
        assert_eq!(q.canonical_value(), 5000.0);
    }

    #[test]
    fn test_convert_leaves_source_untouched() {
        let q = PowerQuantity::new(2.0, UnitsPower::Megawatt);
        let converted = q.convert_to(UnitsPower::Kilowatt);
        assert_eq!(*converted.value(), 2000.0);
        assert_eq!(*q.value(), 2.0);
        assert_eq!(q.unit(), UnitsPower::Megawatt);
    }

    #[test]
    fn test_physical_equality() {
        let kw = PowerQuantity::new(1.5, UnitsPower::Kilowatt);
        let w = PowerQuantity::new(1500.0, UnitsPower::Watt);
        assert_eq!(kw, w);
        assert_eq!(w, kw);
        assert_ne!(kw, PowerQuantity::new(1.5, UnitsPower::Watt));
    }

    #[test]
    fn test_approx_equality() {
        let a = PowerQuantity::new(1.0, UnitsPower::Milliwatt);
        let b = PowerQuantity::new(1.0000000000001e-3, UnitsPower::Watt);
        assert!(a.approx_eq(&b, &Tolerance::default()));
        assert!(!a.approx_eq(&PowerQuantity::new(2e-3, UnitsPower::Watt), &Tolerance::default()));
    }

    #[test]
    fn test_exact_number_equality() {
        let a = PowerQuantity::new("0.1".parse::<Number>().unwrap(), UnitsPower::Yottawatt);
        let b = PowerQuantity::new("1e47".parse::<Number>().unwrap(), UnitsPower::Yoctowatt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let q = PowerQuantity::new(1.5, UnitsPower::Microwatt);
        assert_eq!(q.to_string(), "1.5 µW");
        let n = PowerQuantity::new(Number::from_i64(-3), UnitsPower::Decawatt);
        assert_eq!(n.to_string(), "-3 daW");
    }

    #[test]
    fn test_serde() {
        let q = PowerQuantity::new(1.5, UnitsPower::Kilowatt);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"kW"}"#);

        let exact: PowerQuantity<Number> = serde_json::from_str(r#"{"value":"2.5","unit":"nW"}"#).unwrap();
        assert_eq!(exact.unit(), UnitsPower::Nanowatt);
        assert_eq!(exact.into_value(), "2.5".parse::<Number>().unwrap());
    }
}
