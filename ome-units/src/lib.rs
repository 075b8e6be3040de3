//! OME Units - Metric-prefixed unit enumerations and quantity conversion
//!
//! A measurement in a metadata model is stored as a value tagged with one
//! unit from a closed enumeration. This crate converts such a quantity into
//! any other unit of the same enumeration by one power-of-ten rescale.
//!
//! Dimensions:
//! - Power (yottawatt through yoctowatt)
//!
//! Other dimensions plug in by implementing [`UnitSystem`].
//!
//! ```
//! use ome_units::{PowerConverter, PowerQuantity, UnitsPower};
//!
//! let converter = PowerConverter::<f64>::new();
//! let q = PowerQuantity::new(1.0, UnitsPower::Megawatt);
//! let mw = converter.convert(&q, UnitsPower::Milliwatt);
//! assert_eq!(*mw.value(), 1.0e9);
//! ```

mod error;
mod system;
mod power;
mod scalar;
mod tolerance;
mod quantity;
mod convert;

pub use error::UnitsError;
pub use system::UnitSystem;
pub use power::UnitsPower;
pub use scalar::Scalar;
pub use tolerance::Tolerance;
pub use quantity::{Quantity, PowerQuantity};
pub use convert::{convert, Converter, PowerConverter};
