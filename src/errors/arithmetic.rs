//! Error types for coin arithmetic.
//!
//! Both operands of an arithmetic operation are already valid coins, so these
//! errors describe the *result* leaving the valid range rather than a bad
//! input.

use crate::types::Coin;

use super::{CoinErrorKind, CoinParseError};

/// Errors that can occur when adding or subtracting coin amounts.
///
/// # Examples
///
/// ```rust
/// use ledgercoin::{Coin, CoinArithmeticError};
///
/// let five = Coin::from_base_unit("5").unwrap();
/// let ten = Coin::from_base_unit("10").unwrap();
///
/// assert!(matches!(
///     five.checked_sub(&ten),
///     Err(CoinArithmeticError::NegativeResult { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinArithmeticError {
    /// The sum is larger than the network's total supply.
    #[error("{lhs} + {rhs} base units exceeds the total supply")]
    ExceedsTotalSupply {
        /// Left operand
        lhs: Coin,
        /// Right operand
        rhs: Coin,
    },

    /// The difference would be below zero.
    #[error("{lhs} - {rhs} base units would be negative")]
    NegativeResult {
        /// Left operand
        lhs: Coin,
        /// Right operand
        rhs: Coin,
    },

    /// The result failed re-validation through the base-unit constructor.
    ///
    /// Unreachable for results that pass the range checks above; surfaced
    /// rather than swallowed so that a broken invariant is never hidden.
    #[error("Result failed validation: {0}")]
    Validation(#[from] CoinParseError),
}

impl CoinArithmeticError {
    /// Create an `ExceedsTotalSupply` error for the given operands.
    pub fn exceeds_total_supply(lhs: &Coin, rhs: &Coin) -> Self {
        CoinArithmeticError::ExceedsTotalSupply {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
    }

    /// Create a `NegativeResult` error for the given operands.
    pub fn negative_result(lhs: &Coin, rhs: &Coin) -> Self {
        CoinArithmeticError::NegativeResult {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        }
    }

    /// The taxonomy entry this error belongs to
    pub fn kind(&self) -> CoinErrorKind {
        match self {
            CoinArithmeticError::ExceedsTotalSupply { .. } => CoinErrorKind::ExceedsTotalSupply,
            CoinArithmeticError::NegativeResult { .. } => CoinErrorKind::NegativeResult,
            CoinArithmeticError::Validation(err) => err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_total_supply_message() {
        let max = Coin::total_supply();
        let one = Coin::from_base_unit("1").unwrap();
        let err = CoinArithmeticError::exceeds_total_supply(&max, &one);
        assert_eq!(
            err.to_string(),
            "10000000000000000000 + 1 base units exceeds the total supply"
        );
        assert_eq!(err.kind(), CoinErrorKind::ExceedsTotalSupply);
    }

    #[test]
    fn test_negative_result_message() {
        let five = Coin::from_base_unit("5").unwrap();
        let ten = Coin::from_base_unit("10").unwrap();
        let err = CoinArithmeticError::negative_result(&five, &ten);
        assert_eq!(err.to_string(), "5 - 10 base units would be negative");
        assert_eq!(err.kind(), CoinErrorKind::NegativeResult);
    }

    #[test]
    fn test_validation_kind_passes_through() {
        let err: CoinArithmeticError = CoinParseError::negative_amount("-1").into();
        assert_eq!(err.kind(), CoinErrorKind::NegativeAmount);
    }
}
