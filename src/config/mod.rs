// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for coin amount parsing
//!
//! Amount strings usually arrive from untrusted sources (user input, RPC
//! responses, config files). [`ParseConfig`] bounds how much work the parser
//! is willing to do on such input before the value reaches the decimal
//! primitive. The monetary rules themselves (total supply, unit ratio) are
//! fixed and live in [`constants`].
//!
//! # Example: Using defaults
//!
//! ```rust
//! use ledgercoin::{Coin, ParseConfig};
//!
//! let config = ParseConfig::default();
//! let coin = Coin::from_display_unit_with(&config, "1.5e2").unwrap();
//! assert_eq!(coin.to_string(), "15000000000");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use ledgercoin::{Coin, ParseConfigBuilder};
//!
//! let config = ParseConfigBuilder::new()
//!     .max_input_len(64)
//!     .allow_exponent(false)
//!     .build();
//!
//! assert!(Coin::from_base_unit_with(&config, "1e3").is_err());
//! ```

pub mod constants;

/// Default upper bound on the byte length of an amount string
pub const DEFAULT_MAX_INPUT_LEN: usize = 256;

/// Default upper bound on the digit count of an exponent
pub const DEFAULT_MAX_EXPONENT_DIGITS: u8 = 6;

/// Hard ceiling for [`ParseConfig::max_exponent_digits`]; keeps exponents
/// within `i64`.
pub const MAX_EXPONENT_DIGITS: u8 = 18;

/// Limits applied to amount strings before they are parsed
///
/// Use [`ParseConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum accepted input length in bytes
    /// Default: 256
    pub max_input_len: usize,

    /// Maximum number of digits in an exponent (`1e5` has one)
    /// Default: 6, never more than [`MAX_EXPONENT_DIGITS`] when parsing
    pub max_exponent_digits: u8,

    /// Whether scientific notation (`1.5e8`) is accepted at all
    /// Default: true
    pub allow_exponent: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_exponent_digits: DEFAULT_MAX_EXPONENT_DIGITS,
            allow_exponent: true,
        }
    }
}

impl ParseConfig {
    /// Plain decimal literals only
    ///
    /// Suitable for form input where `1e3` is far more likely a typo than an
    /// intentional amount.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledgercoin::ParseConfig;
    ///
    /// let config = ParseConfig::strict();
    /// assert!(!config.allow_exponent);
    /// ```
    pub fn strict() -> Self {
        Self {
            allow_exponent: false,
            ..Self::default()
        }
    }
}

/// Builder for [`ParseConfig`]
///
/// # Example
///
/// ```rust
/// use ledgercoin::ParseConfigBuilder;
///
/// let config = ParseConfigBuilder::new()
///     .max_input_len(128)
///     .max_exponent_digits(3)
///     .build();
///
/// assert_eq!(config.max_input_len, 128);
/// assert_eq!(config.max_exponent_digits, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    /// Create a new builder starting from [`ParseConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from [`ParseConfig::strict`]
    pub fn strict() -> Self {
        Self {
            config: ParseConfig::strict(),
        }
    }

    /// Set the maximum input length in bytes
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.config.max_input_len = max;
        self
    }

    /// Set the maximum exponent digit count
    ///
    /// Values above [`MAX_EXPONENT_DIGITS`] are capped.
    pub fn max_exponent_digits(mut self, max: u8) -> Self {
        self.config.max_exponent_digits = max.min(MAX_EXPONENT_DIGITS);
        self
    }

    /// Accept or reject scientific notation
    pub fn allow_exponent(mut self, allow: bool) -> Self {
        self.config.allow_exponent = allow;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ParseConfig {
        self.config
    }
}
