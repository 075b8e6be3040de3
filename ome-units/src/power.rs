//! Power units: metric-prefixed watts from yottawatt down to yoctowatt

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{UnitSystem, UnitsError};

/// Closed enumeration of power units, ordered from largest to smallest.
///
/// Serializes as the schema symbol (e.g., `"kW"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitsPower {
    #[serde(rename = "YW")]
    Yottawatt,
    #[serde(rename = "ZW")]
    Zettawatt,
    #[serde(rename = "EW")]
    Exawatt,
    #[serde(rename = "PW")]
    Petawatt,
    #[serde(rename = "TW")]
    Terawatt,
    #[serde(rename = "GW")]
    Gigawatt,
    #[serde(rename = "MW")]
    Megawatt,
    #[serde(rename = "kW")]
    Kilowatt,
    #[serde(rename = "hW")]
    Hectowatt,
    #[serde(rename = "daW")]
    Decawatt,
    #[serde(rename = "W")]
    Watt,
    #[serde(rename = "dW")]
    Deciwatt,
    #[serde(rename = "cW")]
    Centiwatt,
    #[serde(rename = "mW")]
    Milliwatt,
    #[serde(rename = "µW")]
    Microwatt,
    #[serde(rename = "nW")]
    Nanowatt,
    #[serde(rename = "pW")]
    Picowatt,
    #[serde(rename = "fW")]
    Femtowatt,
    #[serde(rename = "aW")]
    Attowatt,
    #[serde(rename = "zW")]
    Zeptowatt,
    #[serde(rename = "yW")]
    Yoctowatt,
}

impl UnitsPower {
    /// Every power unit in declaration order
    pub const ALL: [UnitsPower; 21] = [
        UnitsPower::Yottawatt,
        UnitsPower::Zettawatt,
        UnitsPower::Exawatt,
        UnitsPower::Petawatt,
        UnitsPower::Terawatt,
        UnitsPower::Gigawatt,
        UnitsPower::Megawatt,
        UnitsPower::Kilowatt,
        UnitsPower::Hectowatt,
        UnitsPower::Decawatt,
        UnitsPower::Watt,
        UnitsPower::Deciwatt,
        UnitsPower::Centiwatt,
        UnitsPower::Milliwatt,
        UnitsPower::Microwatt,
        UnitsPower::Nanowatt,
        UnitsPower::Picowatt,
        UnitsPower::Femtowatt,
        UnitsPower::Attowatt,
        UnitsPower::Zeptowatt,
        UnitsPower::Yoctowatt,
    ];

    /// The watt
    pub const BASE: UnitsPower = UnitsPower::Watt;

    /// Decimal exponent relative to the watt
    pub const fn exponent(self) -> i32 {
        match self {
            UnitsPower::Yottawatt => 24,
            UnitsPower::Zettawatt => 21,
            UnitsPower::Exawatt => 18,
            UnitsPower::Petawatt => 15,
            UnitsPower::Terawatt => 12,
            UnitsPower::Gigawatt => 9,
            UnitsPower::Megawatt => 6,
            UnitsPower::Kilowatt => 3,
            UnitsPower::Hectowatt => 2,
            UnitsPower::Decawatt => 1,
            UnitsPower::Watt => 0,
            UnitsPower::Deciwatt => -1,
            UnitsPower::Centiwatt => -2,
            UnitsPower::Milliwatt => -3,
            UnitsPower::Microwatt => -6,
            UnitsPower::Nanowatt => -9,
            UnitsPower::Picowatt => -12,
            UnitsPower::Femtowatt => -15,
            UnitsPower::Attowatt => -18,
            UnitsPower::Zeptowatt => -21,
            UnitsPower::Yoctowatt => -24,
        }
    }

    /// Position in [`UnitsPower::ALL`]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Schema symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            UnitsPower::Yottawatt => "YW",
            UnitsPower::Zettawatt => "ZW",
            UnitsPower::Exawatt => "EW",
            UnitsPower::Petawatt => "PW",
            UnitsPower::Terawatt => "TW",
            UnitsPower::Gigawatt => "GW",
            UnitsPower::Megawatt => "MW",
            UnitsPower::Kilowatt => "kW",
            UnitsPower::Hectowatt => "hW",
            UnitsPower::Decawatt => "daW",
            UnitsPower::Watt => "W",
            UnitsPower::Deciwatt => "dW",
            UnitsPower::Centiwatt => "cW",
            UnitsPower::Milliwatt => "mW",
            UnitsPower::Microwatt => "µW",
            UnitsPower::Nanowatt => "nW",
            UnitsPower::Picowatt => "pW",
            UnitsPower::Femtowatt => "fW",
            UnitsPower::Attowatt => "aW",
            UnitsPower::Zeptowatt => "zW",
            UnitsPower::Yoctowatt => "yW",
        }
    }

    /// Full unit name
    pub const fn name(self) -> &'static str {
        match self {
            UnitsPower::Yottawatt => "yottawatt",
            UnitsPower::Zettawatt => "zettawatt",
            UnitsPower::Exawatt => "exawatt",
            UnitsPower::Petawatt => "petawatt",
            UnitsPower::Terawatt => "terawatt",
            UnitsPower::Gigawatt => "gigawatt",
            UnitsPower::Megawatt => "megawatt",
            UnitsPower::Kilowatt => "kilowatt",
            UnitsPower::Hectowatt => "hectowatt",
            UnitsPower::Decawatt => "decawatt",
            UnitsPower::Watt => "watt",
            UnitsPower::Deciwatt => "deciwatt",
            UnitsPower::Centiwatt => "centiwatt",
            UnitsPower::Milliwatt => "milliwatt",
            UnitsPower::Microwatt => "microwatt",
            UnitsPower::Nanowatt => "nanowatt",
            UnitsPower::Picowatt => "picowatt",
            UnitsPower::Femtowatt => "femtowatt",
            UnitsPower::Attowatt => "attowatt",
            UnitsPower::Zeptowatt => "zeptowatt",
            UnitsPower::Yoctowatt => "yoctowatt",
        }
    }

    /// Look up a unit by its position in [`UnitsPower::ALL`]
    pub fn from_ordinal(ordinal: usize) -> Result<Self, UnitsError> {
        Self::ALL.get(ordinal).copied().ok_or(UnitsError::UndefinedUnit {
            dimension: <Self as UnitSystem>::DIMENSION,
            ordinal,
        })
    }
}

// A table that drifts from the enumeration fails the build.
const _: () = {
    let all = UnitsPower::ALL;
    assert!(all[UnitsPower::BASE.ordinal()].exponent() == 0, "watt must be the base unit");
    let mut i = 0;
    while i < all.len() {
        assert!(all[i].ordinal() == i, "UnitsPower::ALL out of declaration order");
        if i > 0 {
            assert!(all[i].exponent() < all[i - 1].exponent(), "power exponents must strictly decrease");
        }
        i += 1;
    }
};

impl UnitSystem for UnitsPower {
    const DIMENSION: &'static str = "power";
    const BASE: Self = UnitsPower::Watt;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn exponent(self) -> i32 {
        UnitsPower::exponent(self)
    }

    fn ordinal(self) -> usize {
        UnitsPower::ordinal(self)
    }

    fn symbol(self) -> &'static str {
        UnitsPower::symbol(self)
    }
}

impl TryFrom<usize> for UnitsPower {
    type Error = UnitsError;

    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl fmt::Display for UnitsPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
