//! Denomination discriminator

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::constants::{DISPLAY_DECIMAL_PLACES, UNITS_PER_DISPLAY};
use crate::errors::{CoinParseError, UnitParseError};

use super::coin::Coin;

/// Unit an amount string is expressed in
///
/// # Examples
///
/// ```
/// use ledgercoin::Unit;
///
/// assert_eq!(Unit::Display.base_units_per_unit(), 100_000_000);
/// assert_eq!("BASE".parse::<Unit>().unwrap(), Unit::Base);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// The indivisible integer unit all balances are stored in
    #[default]
    Base,
    /// The human-facing whole-coin unit
    Display,
}

impl Unit {
    /// Number of base units in one of this unit
    pub const fn base_units_per_unit(self) -> u64 {
        match self {
            Unit::Base => 1,
            Unit::Display => UNITS_PER_DISPLAY,
        }
    }

    /// Maximum number of decimal places an amount in this unit may carry
    pub const fn decimal_places(self) -> u32 {
        match self {
            Unit::Base => 0,
            Unit::Display => DISPLAY_DECIMAL_PLACES,
        }
    }

    /// Parse an amount expressed in this unit
    ///
    /// Same as [`Coin::from_unit`], convenient when the unit was itself
    /// parsed from user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgercoin::Unit;
    ///
    /// let unit: Unit = "display".parse().unwrap();
    /// assert_eq!(unit.parse_amount("2.5").unwrap().to_string(), "250000000");
    /// ```
    pub fn parse_amount(self, value: &str) -> Result<Coin, CoinParseError> {
        Coin::from_unit(value, self)
    }

    /// Lowercase name, as used by `Display` and serde
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Base => "base",
            Unit::Display => "display",
        }
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("base") {
            Ok(Unit::Base)
        } else if s.eq_ignore_ascii_case("display") {
            Ok(Unit::Display)
        } else {
            Err(UnitParseError::new(s))
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
