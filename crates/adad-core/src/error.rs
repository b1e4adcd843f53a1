//! # Error Types
//!
//! Conversion errors for adad-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  adad-core errors (this file)                                          │
//! │  └── ConvertError     - Input or magnitude failures                    │
//! │      ├── InvalidNumber  → "عدد نامعتبر است"                            │
//! │      └── TooLarge       → "عدد بسیار بزرگ است"                         │
//! │                                                                         │
//! │  adad-cli errors (binary crate)                                        │
//! │  └── ConfigError      - Bad environment or flag values                 │
//! │                                                                         │
//! │  Flow: try_to_words → ConvertError → to_words prints the sentinel      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of every variant IS the Persian sentinel, so callers
//!    doing inline formatting can print an error without a lookup table
//! 3. Structured context (the rejected input, the group count) stays in the
//!    variant fields for logs and tests

use thiserror::Error;

use crate::lexicon::{INVALID_NUMBER, TOO_LARGE};

// =============================================================================
// Convert Error
// =============================================================================

/// Errors produced by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The value cannot be read as a finite real number.
    ///
    /// ## When This Occurs
    /// - Non-numeric text (`"abc"`, `""`, `"12abc"`)
    /// - `NaN` or infinite floats
    /// - Scientific text whose value lies outside the finite `f64` range
    ///   (`"1e400"`, `"1e-400"`)
    #[error("{}", INVALID_NUMBER)]
    InvalidNumber { input: String },

    /// The integer part needs more 3-digit groups than there are scale words.
    ///
    /// ## When This Occurs
    /// ```text
    /// 999 999 999 999 999 999 999 999 999   → 9 groups, OK (سپتیلیون)
    /// 1 000 000 000 000 000 000 000 000 000 → 10 groups, TooLarge
    /// ```
    #[error("{}", TOO_LARGE)]
    TooLarge { groups: usize, max: usize },
}

impl ConvertError {
    /// Returns the fixed sentinel string for this error kind.
    pub fn sentinel(&self) -> &'static str {
        match self {
            ConvertError::InvalidNumber { .. } => INVALID_NUMBER,
            ConvertError::TooLarge { .. } => TOO_LARGE,
        }
    }

    /// Shorthand used by the normalizer.
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        ConvertError::InvalidNumber {
            input: input.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;

// =============================================================================
// Unit Tests
// =============================================================================
