// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for ledgercoin integration tests
//!
//! Provides proptest strategies for valid amounts and a log subscriber so that
//! rejection events show up with `RUST_LOG=ledgercoin=debug`.

use std::io;
use std::sync::{Arc, Mutex};

use ledgercoin::{Coin, TOTAL_SUPPLY_BASE_UNITS, UNITS_PER_DISPLAY};
use proptest::prelude::*;

/// Whole display units in the total supply
#[allow(dead_code)]
pub const SUPPLY_IN_DISPLAY_UNITS: u64 =
    (TOTAL_SUPPLY_BASE_UNITS / UNITS_PER_DISPLAY as u128) as u64;

/// Install a test-friendly subscriber once per test binary
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory log sink for asserting on emitted events
///
/// # Example
///
/// ```rust,ignore
/// let logs = CapturedLogs::default();
/// logs.capture(tracing::Level::DEBUG, || {
///     let _ = Coin::from_base_unit("-1");
/// });
/// assert!(logs.contents().contains("Rejected coin amount"));
/// ```
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Run `f` with a subscriber writing to this sink at `level` and above
    pub fn capture<T>(&self, level: tracing::Level, f: impl FnOnce() -> T) -> T {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Any valid base-unit quantity
#[allow(dead_code)]
pub fn arb_base_units() -> impl Strategy<Value = u128> {
    0u128..=TOTAL_SUPPLY_BASE_UNITS
}

/// Any valid coin
#[allow(dead_code)]
pub fn arb_coin() -> impl Strategy<Value = Coin> {
    arb_base_units().prop_map(|units| Coin::try_from(units).expect("units within supply"))
}

/// Two quantities whose sum stays within the total supply
#[allow(dead_code)]
pub fn arb_summable_pair() -> impl Strategy<Value = (u128, u128)> {
    arb_base_units().prop_flat_map(|a| (Just(a), 0u128..=TOTAL_SUPPLY_BASE_UNITS - a))
}

/// A display-unit literal with at most eight decimal places, within supply
///
/// Yields `(literal, canonical)` where `canonical` drops leading zeros of the
/// whole part and trailing zeros of the fraction.
#[allow(dead_code)]
pub fn arb_display_literal() -> impl Strategy<Value = (String, String)> {
    (0u64..SUPPLY_IN_DISPLAY_UNITS, "[0-9]{0,8}", 0usize..3).prop_map(|(whole, fraction, pad)| {
        let literal = if fraction.is_empty() {
            format!("{}{}", "0".repeat(pad), whole)
        } else {
            format!("{}{}.{}", "0".repeat(pad), whole, fraction)
        };

        let trimmed = fraction.trim_end_matches('0');
        let canonical = if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{trimmed}")
        };

        (literal, canonical)
    })
}
