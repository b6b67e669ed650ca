// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native coin amounts.
//!
//! ```text
//! "1.5" ──from_display_unit──┐
//!                            ├──> Coin (BigInt, base units, 0..=TOTAL_SUPPLY)
//! "150000000" ─from_base_unit┘         │
//!                                      │ to_unit_string(Unit)
//!                                      ↓
//!                         "150000000" (Base) / "1.5" (Display)
//! ```

mod coin;
mod unit;

pub use coin::Coin;
pub use unit::Unit;

// Note: Public types are re-exported from lib.rs, not here
