//! The contract every unit enumeration implements
//!
//! A dimension (power, length, frequency, ...) plugs into the conversion
//! engine by supplying a closed enum, its declaration order, and the
//! decimal exponent of each member relative to the dimension's base unit.

use std::fmt::Debug;
use std::hash::Hash;

use crate::UnitsError;

/// A closed enumeration of metric-prefixed units for one physical dimension
pub trait UnitSystem: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name of the physical dimension (e.g., "power")
    const DIMENSION: &'static str;

    /// The unscaled reference unit (exponent zero)
    const BASE: Self;

    /// Every member, in declaration order (largest scale first)
    fn all() -> &'static [Self];

    /// Decimal exponent relative to the base unit: magnitude = value * 10^exponent
    fn exponent(self) -> i32;

    /// Position of this member in [`UnitSystem::all`]
    fn ordinal(self) -> usize;

    /// Schema symbol (e.g., "kW")
    fn symbol(self) -> &'static str;

    /// Check that the table is a bijection onto the enumeration with
    /// strictly decreasing exponents and a listed, zero-exponent base unit.
    ///
    /// A member whose ordinal lies past the end of [`UnitSystem::all`] is
    /// only caught here when it is the base unit; implementors keep
    /// `exponent` and `ordinal` as exhaustive `match`es so the compiler
    /// covers the rest.
    fn verify_table() -> Result<(), UnitsError> {
        let all = Self::all();
        if all.is_empty() {
            return Err(UnitsError::configuration(Self::DIMENSION, "no units declared"));
        }

        for (position, unit) in all.iter().enumerate() {
            if unit.ordinal() != position {
                return Err(UnitsError::configuration(
                    Self::DIMENSION,
                    format!("{:?} listed at position {} but has ordinal {}", unit, position, unit.ordinal()),
                ));
            }
        }

        if all.get(Self::BASE.ordinal()) != Some(&Self::BASE) {
            return Err(UnitsError::configuration(
                Self::DIMENSION,
                format!("base unit {} is not listed", Self::BASE.symbol()),
            ));
        }

        for pair in all.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.exponent() >= prev.exponent() {
                return Err(UnitsError::configuration(
                    Self::DIMENSION,
                    format!(
                        "exponents must strictly decrease: {} (10^{}) followed by {} (10^{})",
                        prev.symbol(),
                        prev.exponent(),
                        next.symbol(),
                        next.exponent()
                    ),
                ));
            }
        }

        if Self::BASE.exponent() != 0 {
            return Err(UnitsError::configuration(
                Self::DIMENSION,
                format!("base unit {} has exponent {}", Self::BASE.symbol(), Self::BASE.exponent()),
            ));
        }

        Ok(())
    }
}
