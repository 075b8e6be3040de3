//! Conversion engine and the public converter interface
//!
//! Every unit of a dimension carries a decimal exponent relative to the base
//! unit, so any-to-any conversion is one rescale by the exponent difference:
//!
//! ```text
//! value_dest = value_src * 10^(exponent(src) - exponent(dest))
//! ```
//!
//! The exponent lookup is an exhaustive `match`, so the compiler proves every
//! (source, destination) pair is covered and no fallback path exists.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::{Quantity, Scalar, UnitSystem, UnitsError, UnitsPower};

/// Express `quantity` in `dest`, returning a new quantity.
///
/// Converting to the quantity's own unit copies the value unchanged.
pub fn convert<E: UnitSystem, V: Scalar>(quantity: &Quantity<E, V>, dest: E) -> Quantity<E, V> {
    let src = quantity.unit();
    if src == dest {
        return Quantity::new(quantity.value().clone(), dest);
    }

    let decades = src.exponent() - dest.exponent();
    trace!(
        dimension = E::DIMENSION,
        from = src.symbol(),
        to = dest.symbol(),
        decades,
        "rescaling quantity"
    );
    Quantity::new(quantity.value().scale_pow10(decades), dest)
}

/// Converts quantities of one dimension `E` carrying numeric type `V`.
///
/// Zero-sized and freely shareable across threads. Other dimensions plug in
/// by implementing [`UnitSystem`] for their own enumeration.
pub struct Converter<E, V> {
    _marker: PhantomData<fn() -> (E, V)>,
}

/// Converter for [`UnitsPower`] quantities
pub type PowerConverter<V = f64> = Converter<UnitsPower, V>;

impl<E: UnitSystem, V: Scalar> Converter<E, V> {
    pub const fn new() -> Self {
        Converter { _marker: PhantomData }
    }

    /// Create a converter after checking the dimension's unit table
    pub fn checked() -> Result<Self, UnitsError> {
        if let Err(e) = E::verify_table() {
            warn!(dimension = E::DIMENSION, error = %e, "rejecting unit table");
            return Err(e);
        }
        debug!(dimension = E::DIMENSION, units = E::all().len(), "unit table verified");
        Ok(Self::new())
    }

    /// Express `quantity` in `dest`
    pub fn convert(&self, quantity: &Quantity<E, V>, dest: E) -> Quantity<E, V> {
        convert(quantity, dest)
    }
}

impl<E: UnitSystem, V: Scalar> Default for Converter<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V> Clone for Converter<E, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, V> Copy for Converter<E, V> {}

impl<E: UnitSystem, V> fmt::Debug for Converter<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").field("dimension", &E::DIMENSION).finish()
    }
}
