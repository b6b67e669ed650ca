// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Native coin amount type

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::constants::{total_supply, units_per_display, DISPLAY_DECIMAL_PLACES};
use crate::config::ParseConfig;
use crate::errors::{CoinArithmeticError, CoinParseError};
use crate::parse::{parse_decimal, to_base_units, Rejection};
use crate::spans;

use super::unit::Unit;

/// An amount of the native coin
///
/// Stores an exact, arbitrary-precision integer number of base units,
/// always within `0..=TOTAL_SUPPLY_BASE_UNITS`. The only ways to obtain a
/// `Coin` are the validated constructors and the checked arithmetic methods,
/// so holding one is proof the amount is valid. Values are immutable;
/// arithmetic returns a new `Coin`.
///
/// Serializes as its base-unit string (`"150000000"`) and deserializes through
/// [`from_base_unit`](Self::from_base_unit), so invalid amounts are rejected at
/// the serde boundary too.
///
/// # Examples
///
/// ```
/// use ledgercoin::{Coin, Unit};
///
/// let amount = Coin::from_display_unit("1.5").unwrap();
/// let fee = Coin::from_base_unit("5000").unwrap();
///
/// let total = amount.checked_add(&fee).unwrap();
/// assert_eq!(total.to_unit_string(Unit::Base), "150005000");
/// assert_eq!(total.to_unit_string(Unit::Display), "1.50005");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coin(BigInt);

impl Coin {
    /// Zero base units
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// The entire supply of the network
    pub fn total_supply() -> Self {
        Self(total_supply())
    }

    /// Parse an amount expressed in base units
    ///
    /// The input may be any base-10 literal (`"100"`, `"+1e3"`, `"5.000"`) as
    /// long as its value is a whole number of base units.
    ///
    /// # Errors
    ///
    /// - [`CoinParseError::InvalidFormat`] if the input is not a numeric literal
    /// - [`CoinParseError::FractionalBaseUnit`] if the value has a fractional part
    /// - [`CoinParseError::NegativeAmount`] if the value is below zero
    /// - [`CoinParseError::ExceedsTotalSupply`] if the value is above the total supply
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgercoin::Coin;
    ///
    /// assert_eq!(Coin::from_base_unit("1e3").unwrap().to_string(), "1000");
    /// assert!(Coin::from_base_unit("1.5").is_err());
    /// ```
    pub fn from_base_unit(value: &str) -> Result<Self, CoinParseError> {
        Self::from_base_unit_with(&ParseConfig::default(), value)
    }

    /// [`from_base_unit`](Self::from_base_unit) with custom parsing limits
    pub fn from_base_unit_with(config: &ParseConfig, value: &str) -> Result<Self, CoinParseError> {
        Self::parse(config, value, Unit::Base)
    }

    /// Parse an amount expressed in display units
    ///
    /// The value is converted to base units once, here, and checked with the
    /// same sign and supply rules as [`from_base_unit`](Self::from_base_unit).
    ///
    /// # Errors
    ///
    /// - [`CoinParseError::InvalidFormat`] if the input is not a numeric literal
    /// - [`CoinParseError::ExcessPrecision`] if the value has more than
    ///   [`DISPLAY_DECIMAL_PLACES`] significant decimal places
    /// - [`CoinParseError::NegativeAmount`] if the value is below zero
    /// - [`CoinParseError::ExceedsTotalSupply`] if the value is above the total supply
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgercoin::Coin;
    ///
    /// assert_eq!(Coin::from_display_unit("0.00000001").unwrap().to_string(), "1");
    /// assert!(Coin::from_display_unit("0.000000001").is_err());
    /// ```
    pub fn from_display_unit(value: &str) -> Result<Self, CoinParseError> {
        Self::from_display_unit_with(&ParseConfig::default(), value)
    }

    /// [`from_display_unit`](Self::from_display_unit) with custom parsing limits
    pub fn from_display_unit_with(
        config: &ParseConfig,
        value: &str,
    ) -> Result<Self, CoinParseError> {
        Self::parse(config, value, Unit::Display)
    }

    /// Parse an amount expressed in `unit`
    pub fn from_unit(value: &str, unit: Unit) -> Result<Self, CoinParseError> {
        Self::parse(&ParseConfig::default(), value, unit)
    }

    fn parse(config: &ParseConfig, value: &str, unit: Unit) -> Result<Self, CoinParseError> {
        let span = spans::parse_coin(unit);
        let _guard = span.enter();

        parse_decimal(value, config)
            .and_then(|decimal| {
                to_base_units(&decimal, unit.decimal_places())
                    .map_err(|rejection| rejection_error(rejection, value, unit))
            })
            .map(Self)
            .inspect_err(|err| {
                tracing::debug!(unit = %unit, error = %err, "Rejected coin amount");
            })
    }

    /// Re-validate a computed quantity through the base-unit rules.
    fn from_base_quantity(units: BigInt) -> Result<Self, CoinParseError> {
        let decimal = BigDecimal::new(units.clone(), 0);
        to_base_units(&decimal, 0)
            .map(Self)
            .map_err(|rejection| rejection_error(rejection, &units.to_string(), Unit::Base))
    }

    /// Add two amounts
    ///
    /// # Errors
    ///
    /// [`CoinArithmeticError::ExceedsTotalSupply`] if the sum is above the
    /// total supply.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgercoin::Coin;
    ///
    /// let max = Coin::total_supply();
    /// let one = Coin::from_base_unit("1").unwrap();
    /// assert!(max.checked_add(&one).is_err());
    /// ```
    pub fn checked_add(&self, other: &Coin) -> Result<Coin, CoinArithmeticError> {
        let span = spans::coin_arithmetic("add");
        let _guard = span.enter();

        let sum = &self.0 + &other.0;
        if sum > total_supply() {
            let err = CoinArithmeticError::exceeds_total_supply(self, other);
            tracing::debug!(error = %err, "Rejected coin addition");
            return Err(err);
        }

        Ok(Self::from_base_quantity(sum)?)
    }

    /// Subtract `other` from this amount
    ///
    /// # Errors
    ///
    /// [`CoinArithmeticError::NegativeResult`] if `other` is larger than `self`.
    pub fn checked_sub(&self, other: &Coin) -> Result<Coin, CoinArithmeticError> {
        let span = spans::coin_arithmetic("sub");
        let _guard = span.enter();

        let diff = &self.0 - &other.0;
        if diff < BigInt::zero() {
            let err = CoinArithmeticError::negative_result(self, other);
            tracing::debug!(error = %err, "Rejected coin subtraction");
            return Err(err);
        }

        Ok(Self::from_base_quantity(diff)?)
    }

    /// Sum a sequence of amounts, failing on the first overflow
    ///
    /// An empty sequence sums to zero.
    pub fn checked_sum<'a, I>(coins: I) -> Result<Coin, CoinArithmeticError>
    where
        I: IntoIterator<Item = &'a Coin>,
    {
        coins
            .into_iter()
            .try_fold(Coin::zero(), |total, coin| total.checked_add(coin))
    }

    /// The raw base-unit integer
    pub fn as_base_units(&self) -> &BigInt {
        &self.0
    }

    /// Consume the amount, returning the raw base-unit integer
    pub fn into_base_units(self) -> BigInt {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact value in display units
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgercoin::{BigDecimal, Coin};
    /// use std::str::FromStr;
    ///
    /// let coin = Coin::from_base_unit("150000000").unwrap();
    /// assert_eq!(coin.to_display_decimal(), BigDecimal::from_str("1.5").unwrap());
    /// ```
    pub fn to_display_decimal(&self) -> BigDecimal {
        BigDecimal::new(self.0.clone(), i64::from(DISPLAY_DECIMAL_PLACES))
    }

    /// Render the amount in `unit`
    ///
    /// Base units render as a plain integer. Display units render as an exact
    /// decimal with trailing fractional zeros removed: `150000000` base units
    /// is `"1.5"`, `100000000` is `"1"`.
    pub fn to_unit_string(&self, unit: Unit) -> String {
        match unit {
            Unit::Base => self.0.to_string(),
            Unit::Display => format_display(&self.0),
        }
    }
}

/// Map a classifier rejection to the error of the unit's constructor
fn rejection_error(rejection: Rejection, value: &str, unit: Unit) -> CoinParseError {
    match (rejection, unit) {
        (Rejection::Fractional, Unit::Base) => CoinParseError::fractional_base_unit(value),
        (Rejection::Fractional, Unit::Display) => CoinParseError::excess_precision(value),
        (Rejection::Negative, _) => CoinParseError::negative_amount(value),
        (Rejection::ExceedsSupply, _) => CoinParseError::exceeds_total_supply(value, unit),
    }
}

/// Split base units into whole and fractional display units.
fn format_display(units: &BigInt) -> String {
    let divisor = units_per_display();
    let whole = units / &divisor;
    let fractional = units % &divisor;

    let fractional_str = format!(
        "{:0width$}",
        fractional,
        width = DISPLAY_DECIMAL_PLACES as usize
    );
    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, trimmed)
    }
}

impl FromStr for Coin {
    type Err = CoinParseError;

    /// Parses base units; use [`Coin::from_display_unit`] for display units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base_unit(s)
    }
}

impl TryFrom<String> for Coin {
    type Error = CoinParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_base_unit(&value)
    }
}

impl TryFrom<u64> for Coin {
    type Error = CoinParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_base_quantity(BigInt::from(value))
    }
}

impl TryFrom<u128> for Coin {
    type Error = CoinParseError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::from_base_quantity(BigInt::from(value))
    }
}

impl From<Coin> for String {
    fn from(coin: Coin) -> Self {
        coin.0.to_string()
    }
}

/// Base units by default; the alternate flag (`{:#}`) renders display units.
impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = if f.alternate() {
            Unit::Display
        } else {
            Unit::Base
        };
        f.write_str(&self.to_unit_string(unit))
    }
}
