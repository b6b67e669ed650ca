// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the tracing events emitted by coin operations
//!
//! Rejections are logged at DEBUG with the unit and error; successful
//! operations log nothing above TRACE.

mod helpers;

use helpers::CapturedLogs;
use ledgercoin::Coin;
use tracing::Level;

#[test]
fn test_rejected_amount_logged_at_debug() {
    let logs = CapturedLogs::default();

    let result = logs.capture(Level::DEBUG, || Coin::from_display_unit("-2.5"));
    assert!(result.is_err());

    let output = logs.contents();
    assert!(output.contains("DEBUG"), "missing level in: {output}");
    assert!(output.contains("Rejected coin amount"), "missing message in: {output}");
    assert!(output.contains("unit=display"), "missing unit in: {output}");
    assert!(output.contains("must not be negative"), "missing error in: {output}");
}

#[test]
fn test_rejected_arithmetic_logged_at_debug() {
    let logs = CapturedLogs::default();
    let five = Coin::from_base_unit("5").unwrap();
    let ten = Coin::from_base_unit("10").unwrap();

    let result = logs.capture(Level::DEBUG, || five.checked_sub(&ten));
    assert!(result.is_err());

    let output = logs.contents();
    assert!(output.contains("Rejected coin subtraction"), "missing message in: {output}");
    assert!(output.contains("5 - 10"), "missing operands in: {output}");
}

#[test]
fn test_successful_operations_are_quiet_at_debug() {
    let logs = CapturedLogs::default();

    logs.capture(Level::DEBUG, || {
        let amount = Coin::from_display_unit("1.5").unwrap();
        let fee = Coin::from_base_unit("5000").unwrap();
        amount.checked_add(&fee).unwrap()
    });

    assert_eq!(logs.contents(), "");
}

#[test]
fn test_rejection_not_logged_above_debug() {
    let logs = CapturedLogs::default();

    let result = logs.capture(Level::INFO, || Coin::from_base_unit("1.5"));
    assert!(result.is_err());
    assert_eq!(logs.contents(), "");
}
