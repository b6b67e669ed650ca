//! Error types for coin construction.
//!
//! These are raised when an amount string (or a raw integer) cannot become a
//! valid [`Coin`](crate::Coin). Every variant is a deterministic, input-driven
//! validation failure; retrying with the same input always fails the same way.

use crate::config::constants::DISPLAY_DECIMAL_PLACES;
use crate::types::Unit;

use super::CoinErrorKind;

/// Longest input echoed back in an error message
const MAX_ECHOED_INPUT: usize = 64;

/// Errors that can occur while constructing a coin amount.
///
/// # Examples
///
/// ```rust
/// use ledgercoin::{Coin, CoinParseError};
///
/// match Coin::from_display_unit("0.000000001") {
///     Err(CoinParseError::ExcessPrecision { max_decimal_places, .. }) => {
///         assert_eq!(max_decimal_places, 8);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinParseError {
    /// The input is not a base-10 numeric literal, or it exceeds the
    /// configured parsing limits.
    #[error("Invalid amount format {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input (truncated when long)
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// A base-unit amount has a fractional part.
    #[error("Base-unit amount must be an integer, got {value}")]
    FractionalBaseUnit {
        /// The rejected input
        value: String,
    },

    /// A display-unit amount has more decimal places than the base unit can
    /// represent.
    #[error("Display-unit amount {value} has more than {max_decimal_places} decimal places")]
    ExcessPrecision {
        /// The rejected input
        value: String,
        /// Maximum number of decimal places accepted
        max_decimal_places: u32,
    },

    /// The amount is below zero.
    #[error("Amount must not be negative, got {value}")]
    NegativeAmount {
        /// The rejected input
        value: String,
    },

    /// The amount is larger than the network's total supply.
    #[error("Amount {value} ({unit} units) exceeds the total supply")]
    ExceedsTotalSupply {
        /// The rejected input
        value: String,
        /// Unit the input was expressed in
        unit: Unit,
    },
}

impl CoinParseError {
    /// Create an `InvalidFormat` error with a reason.
    pub fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        CoinParseError::InvalidFormat {
            input: echo(input),
            reason: reason.into(),
        }
    }

    /// Create a `FractionalBaseUnit` error.
    pub fn fractional_base_unit(value: &str) -> Self {
        CoinParseError::FractionalBaseUnit {
            value: echo(value),
        }
    }

    /// Create an `ExcessPrecision` error using the network's decimal-places
    /// ceiling.
    pub fn excess_precision(value: &str) -> Self {
        CoinParseError::ExcessPrecision {
            value: echo(value),
            max_decimal_places: DISPLAY_DECIMAL_PLACES,
        }
    }

    /// Create a `NegativeAmount` error.
    pub fn negative_amount(value: &str) -> Self {
        CoinParseError::NegativeAmount {
            value: echo(value),
        }
    }

    /// Create an `ExceedsTotalSupply` error.
    pub fn exceeds_total_supply(value: &str, unit: Unit) -> Self {
        CoinParseError::ExceedsTotalSupply {
            value: echo(value),
            unit,
        }
    }

    /// The taxonomy entry this error belongs to
    pub fn kind(&self) -> CoinErrorKind {
        match self {
            CoinParseError::InvalidFormat { .. } => CoinErrorKind::InvalidFormat,
            CoinParseError::FractionalBaseUnit { .. } => CoinErrorKind::FractionalBaseUnit,
            CoinParseError::ExcessPrecision { .. } => CoinErrorKind::ExcessPrecision,
            CoinParseError::NegativeAmount { .. } => CoinErrorKind::NegativeAmount,
            CoinParseError::ExceedsTotalSupply { .. } => CoinErrorKind::ExceedsTotalSupply,
        }
    }
}

/// Input as shown in error messages
fn echo(input: &str) -> String {
    match input.char_indices().nth(MAX_ECHOED_INPUT) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_truncates_long_input() {
        let input = "9".repeat(500);
        let err = CoinParseError::invalid_format(&input, "too long");
        let CoinParseError::InvalidFormat { input: echoed, .. } = err else {
            panic!("expected InvalidFormat");
        };
        assert_eq!(echoed.len(), MAX_ECHOED_INPUT + 3);
        assert!(echoed.ends_with("..."));
    }

    #[test]
    fn test_every_variant_truncates_long_input() {
        let input = format!("{}.5", "9".repeat(500));
        let errors = [
            CoinParseError::fractional_base_unit(&input),
            CoinParseError::excess_precision(&input),
            CoinParseError::negative_amount(&input),
            CoinParseError::exceeds_total_supply(&input, Unit::Base),
        ];

        for err in errors {
            let message = err.to_string();
            assert!(message.len() < 200, "untruncated message: {message}");
            assert!(message.contains("..."));
        }
    }

    #[test]
    fn test_invalid_format_keeps_short_input() {
        let err = CoinParseError::invalid_format("abc", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid amount format \"abc\": not a number"
        );
    }

    #[test]
    fn test_excess_precision_reports_ceiling() {
        let err = CoinParseError::excess_precision("0.000000001");
        assert_eq!(
            err.to_string(),
            "Display-unit amount 0.000000001 has more than 8 decimal places"
        );
    }

    #[test]
    fn test_exceeds_total_supply_names_unit() {
        let err = CoinParseError::exceeds_total_supply("100000000001", Unit::Display);
        assert!(err.to_string().contains("display units"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CoinParseError::invalid_format("x", "bad").kind(),
            CoinErrorKind::InvalidFormat
        );
        assert_eq!(
            CoinParseError::fractional_base_unit("1.5").kind(),
            CoinErrorKind::FractionalBaseUnit
        );
        assert_eq!(
            CoinParseError::excess_precision("0.000000001").kind(),
            CoinErrorKind::ExcessPrecision
        );
        assert_eq!(
            CoinParseError::negative_amount("-1").kind(),
            CoinErrorKind::NegativeAmount
        );
        assert_eq!(
            CoinParseError::exceeds_total_supply("1e30", Unit::Base).kind(),
            CoinErrorKind::ExceedsTotalSupply
        );
    }
}
