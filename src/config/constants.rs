// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Monetary constants of the network
//!
//! These values are fixed by the ledger and are not configurable. The number
//! of display-unit decimal places is derived from [`UNITS_PER_DISPLAY`] rather
//! than declared separately, so the two can never disagree.

use bigdecimal::num_bigint::BigInt;

/// Fixed total supply of the native coin, in base units.
pub const TOTAL_SUPPLY_BASE_UNITS: u128 = 10_000_000_000_000_000_000;

/// Number of base units in one display unit.
pub const UNITS_PER_DISPLAY: u64 = 100_000_000;

/// Maximum number of decimal places a display-unit amount may carry.
pub const DISPLAY_DECIMAL_PLACES: u32 = UNITS_PER_DISPLAY.ilog10();

// The decimal-places ceiling is only meaningful for a power-of-ten ratio.
const _: () = assert!(10u64.pow(DISPLAY_DECIMAL_PLACES) == UNITS_PER_DISPLAY);

/// Number of decimal digits in [`TOTAL_SUPPLY_BASE_UNITS`].
pub(crate) const TOTAL_SUPPLY_DIGITS: u32 = TOTAL_SUPPLY_BASE_UNITS.ilog10() + 1;

/// Total supply as an arbitrary-precision integer
pub(crate) fn total_supply() -> BigInt {
    BigInt::from(TOTAL_SUPPLY_BASE_UNITS)
}

/// Display-unit ratio as an arbitrary-precision integer
pub(crate) fn units_per_display() -> BigInt {
    BigInt::from(UNITS_PER_DISPLAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_decimal_places_derived_from_ratio() {
        assert_eq!(DISPLAY_DECIMAL_PLACES, 8);
    }

    #[test]
    fn test_total_supply_digits() {
        assert_eq!(TOTAL_SUPPLY_DIGITS, 20);
        assert_eq!(
            total_supply().to_string().len(),
            TOTAL_SUPPLY_DIGITS as usize
        );
    }

    #[test]
    fn test_total_supply_in_display_units() {
        // 100 billion display units
        assert_eq!(
            total_supply() / units_per_display(),
            BigInt::from(100_000_000_000u64)
        );
    }
}
