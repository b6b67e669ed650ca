// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # ledgercoin
//!
//! Exact, supply-bounded amounts of a ledger's native coin.
//!
//! [`Coin`] holds an arbitrary-precision integer number of base units and can
//! only be obtained through validated constructors, so every `Coin` a wallet or
//! transaction builder holds is guaranteed to be:
//!
//! - a whole number of base units,
//! - non-negative,
//! - no larger than [`TOTAL_SUPPLY_BASE_UNITS`].
//!
//! Amounts can be parsed from and rendered to either the indivisible base unit
//! or the human-facing display unit ([`UNITS_PER_DISPLAY`] base units). No
//! value ever passes through binary floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgercoin::{Coin, CoinError, Unit};
//!
//! fn total_with_fee(amount: &str, fee: &str) -> Result<Coin, CoinError> {
//!     let amount = Coin::from_display_unit(amount)?;
//!     let fee = Coin::from_base_unit(fee)?;
//!     Ok(amount.checked_add(&fee)?)
//! }
//!
//! let total = total_with_fee("12.5", "100000").unwrap();
//! assert_eq!(total.to_unit_string(Unit::Display), "12.501");
//! assert_eq!(total.to_unit_string(Unit::Base), "1250100000");
//! ```
//!
//! ## Error handling
//!
//! Every failure is a typed error: [`CoinParseError`] from the constructors,
//! [`CoinArithmeticError`] from `checked_add`/`checked_sub`, both convertible
//! into [`CoinError`]. Nothing is clamped, rounded or defaulted.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `DEBUG` when an amount is rejected and
//! `TRACE` spans around parsing and arithmetic. It never installs a subscriber.

mod config;
mod errors;
mod parse;
mod spans;
mod types;

pub use config::constants::{DISPLAY_DECIMAL_PLACES, TOTAL_SUPPLY_BASE_UNITS, UNITS_PER_DISPLAY};
pub use config::{
    ParseConfig, ParseConfigBuilder, DEFAULT_MAX_EXPONENT_DIGITS, DEFAULT_MAX_INPUT_LEN,
    MAX_EXPONENT_DIGITS,
};
pub use errors::{CoinArithmeticError, CoinError, CoinErrorKind, CoinParseError, UnitParseError};
pub use types::{Coin, Unit};

/// Re-export of the decimal primitive used in the public API
pub use bigdecimal::num_bigint::BigInt;
pub use bigdecimal::BigDecimal;
