//! Tracing span helpers for coin operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation
//! has a span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, unit: Unit) -> Result<T, E> {
//!     let span = spans::parse_coin(unit);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::types::Unit;

/// Create span for parsing an amount string in the given unit.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn parse_coin(unit: Unit) -> Span {
    tracing::trace_span!("ledgercoin.parse_coin", unit = %unit)
}

/// Create span for a checked arithmetic operation (`add` or `sub`).
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn coin_arithmetic(op: &'static str) -> Span {
    tracing::trace_span!("ledgercoin.coin_arithmetic", op = op)
}
