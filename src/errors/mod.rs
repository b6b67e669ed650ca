//! Error types for the ledgercoin library.
//!
//! This module provides strongly-typed errors for all public APIs. It follows
//! a hybrid approach:
//!
//! - **Operation-specific errors** for fine-grained handling
//!   ([`CoinParseError`] for construction, [`CoinArithmeticError`] for
//!   add/subtract, [`UnitParseError`] for unit names)
//! - **Unified error type** ([`CoinError`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! Whatever the source, [`CoinErrorKind`] names the taxonomy entry of a
//! failure without destructuring it.
//!
//! No error is ever recovered from inside the crate: an invalid amount is not
//! clamped, rounded, or replaced by zero.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use ledgercoin::{Coin, CoinParseError};
//!
//! match Coin::from_base_unit("1.5") {
//!     Ok(coin) => println!("Parsed: {coin}"),
//!     Err(CoinParseError::FractionalBaseUnit { value }) => {
//!         eprintln!("Base units are indivisible: {value}");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use ledgercoin::{Coin, CoinError};
//!
//! fn transfer_total(amount: &str, fee: &str) -> Result<Coin, CoinError> {
//!     let amount = Coin::from_display_unit(amount)?;
//!     let fee = Coin::from_base_unit(fee)?;
//!     // Errors automatically convert to CoinError via From implementations
//!     Ok(amount.checked_add(&fee)?)
//! }
//!
//! assert_eq!(transfer_total("1", "5000").unwrap().to_string(), "100005000");
//! ```

mod arithmetic;
mod parse;
mod unit;

pub use arithmetic::CoinArithmeticError;
pub use parse::CoinParseError;
pub use unit::UnitParseError;

/// Fieldless name of a coin validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinErrorKind {
    /// Input is not a valid base-10 numeric literal
    InvalidFormat,
    /// Base-unit value is not an integer
    FractionalBaseUnit,
    /// Display-unit value has more decimal places than the base unit allows
    ExcessPrecision,
    /// Resulting base quantity is negative
    NegativeAmount,
    /// Resulting base quantity exceeds the total supply
    ExceedsTotalSupply,
    /// Subtraction would go below zero
    NegativeResult,
}

/// Unified error type for all ledgercoin operations.
///
/// All operation-specific error types convert to `CoinError` via `From`
/// implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    /// Error while constructing an amount.
    #[error("Coin parse error: {0}")]
    Parse(#[from] CoinParseError),

    /// Error from amount arithmetic.
    #[error("Coin arithmetic error: {0}")]
    Arithmetic(#[from] CoinArithmeticError),

    /// Error while parsing a unit name.
    #[error("Unit error: {0}")]
    Unit(#[from] UnitParseError),
}

impl CoinError {
    /// The taxonomy entry of an amount failure.
    ///
    /// Returns `None` for unit-name errors, which are not amount failures.
    pub fn kind(&self) -> Option<CoinErrorKind> {
        match self {
            CoinError::Parse(err) => Some(err.kind()),
            CoinError::Arithmetic(err) => Some(err.kind()),
            CoinError::Unit(_) => None,
        }
    }
}
