// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric literal parsing and exact base-unit classification
//!
//! Accepted grammar: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`.
//!
//! Classification works on the normalized `(digits, scale)` pair of a
//! [`BigDecimal`], so integrality, sign and magnitude are decided without ever
//! materializing a huge power of ten: `1e-999999` is rejected as fractional
//! and `1e999999` as over supply in constant time.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};

use crate::config::constants::{total_supply, TOTAL_SUPPLY_DIGITS};
use crate::config::{ParseConfig, MAX_EXPONENT_DIGITS};
use crate::errors::CoinParseError;

/// Why a parsed value cannot be a base-unit quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Not an integer after scaling
    Fractional,
    /// Below zero
    Negative,
    /// Above the total supply
    ExceedsSupply,
}

/// Parse a base-10 literal into an exact decimal.
pub(crate) fn parse_decimal(input: &str, config: &ParseConfig) -> Result<BigDecimal, CoinParseError> {
    if input.is_empty() {
        return Err(CoinParseError::invalid_format(input, "empty input"));
    }
    if input.len() > config.max_input_len {
        return Err(CoinParseError::invalid_format(
            input,
            format!("input is longer than {} bytes", config.max_input_len),
        ));
    }

    let (negative, unsigned) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let exponent = match exponent {
        None => 0,
        Some(_) if !config.allow_exponent => {
            return Err(CoinParseError::invalid_format(
                input,
                "exponent notation is not allowed",
            ));
        }
        Some(raw) => parse_exponent(input, raw, config)?,
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(CoinParseError::invalid_format(input, "no digits"));
    }
    if !is_digits(integer) || !is_digits(fraction) {
        return Err(CoinParseError::invalid_format(
            input,
            "not a base-10 numeric literal",
        ));
    }

    let mut digits = BigInt::from_str(&format!("{integer}{fraction}"))
        .map_err(|e| CoinParseError::invalid_format(input, e.to_string()))?;
    if negative {
        digits = -digits;
    }

    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|places| places.checked_sub(exponent))
        .ok_or_else(|| CoinParseError::invalid_format(input, "exponent out of range"))?;
    Ok(BigDecimal::new(digits, scale))
}

fn parse_exponent(input: &str, raw: &str, config: &ParseConfig) -> Result<i64, CoinParseError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !is_digits(digits) {
        return Err(CoinParseError::invalid_format(input, "malformed exponent"));
    }
    // fields are public, so the builder's cap may have been bypassed
    let max_digits = config.max_exponent_digits.min(MAX_EXPONENT_DIGITS);
    if digits.len() > usize::from(max_digits) {
        return Err(CoinParseError::invalid_format(
            input,
            format!("exponent has more than {max_digits} digits"),
        ));
    }

    let magnitude = i64::from_str(digits)
        .map_err(|e| CoinParseError::invalid_format(input, e.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Exact base-unit integer for `value * 10^shift`.
///
/// Checks run in a fixed order: integrality, then sign, then supply.
pub(crate) fn to_base_units(value: &BigDecimal, shift: u32) -> Result<BigInt, Rejection> {
    if value.is_zero() {
        return Ok(BigInt::zero());
    }

    // value = digits * 10^exponent with no trailing zeros in digits
    let (digits, scale) = value.normalized().into_bigint_and_exponent();
    let exponent = i128::from(shift) - i128::from(scale);

    if exponent < 0 {
        return Err(Rejection::Fractional);
    }
    if digits < BigInt::zero() {
        return Err(Rejection::Negative);
    }
    // digits >= 1, so the value is at least 10^exponent
    if exponent >= i128::from(TOTAL_SUPPLY_DIGITS) {
        return Err(Rejection::ExceedsSupply);
    }

    let units = digits * BigInt::from(10u8).pow(exponent as u32);
    if units > total_supply() {
        return Err(Rejection::ExceedsSupply);
    }
    Ok(units)
}
