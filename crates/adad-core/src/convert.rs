//! # Conversion
//!
//! The public entry points and the last three pipeline stages: magnitude
//! assembly, decimal spelling, and final formatting.
//!
//! ## User Workflow
//! ```text
//! to_words("-1,000,010", &opts)
//!      │
//!      ▼
//! normalize        → negative, integer "1000010", fraction ""
//!      │
//!      ▼
//! split_groups     → [001] [000] [010]
//!      │
//!      ▼
//! assemble         → "یک میلیون" + (000 dropped) + "ده"  joined by separator
//!      │
//!      ▼
//! format_words     → "منفی یک میلیون و ده"
//! ```

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::groups::{split_groups, Group};
use crate::lexicon::{digit_word, MAX_GROUPS, NEGATIVE, POINT, SCALE_WORDS, ZERO};
use crate::normalize::{normalize, NumberInput};
use crate::options::ConvertOptions;

// =============================================================================
// Entry Points
// =============================================================================

/// Converts a number to Persian words. Never fails.
///
/// Invalid input returns `"عدد نامعتبر است"`; a value with more than 27
/// integer digits returns `"عدد بسیار بزرگ است"`.
///
/// ## Example
/// ```rust
/// use adad_core::{to_words, ConvertOptions};
///
/// let opts = ConvertOptions::default();
/// assert_eq!(to_words(-1_000_010, &opts), "منفی یک میلیون و ده");
/// assert_eq!(to_words(3.1415, &opts), "سه ممیز یک چهار یک پنج");
/// assert_eq!(to_words("not a number", &opts), "عدد نامعتبر است");
/// ```
pub fn to_words<'a>(value: impl Into<NumberInput<'a>>, options: &ConvertOptions) -> String {
    try_to_words(value, options).unwrap_or_else(|err| err.to_string())
}

/// Same pipeline as [`to_words`], with failures as a typed error.
///
/// ## Example
/// ```rust
/// use adad_core::{try_to_words, ConvertError, ConvertOptions};
///
/// let opts = ConvertOptions::default();
/// assert_eq!(try_to_words(1_000_000, &opts).unwrap(), "یک میلیون");
/// assert!(matches!(
///     try_to_words("1e30", &opts),
///     Err(ConvertError::TooLarge { groups: 11, max: 9 })
/// ));
/// ```
pub fn try_to_words<'a>(
    value: impl Into<NumberInput<'a>>,
    options: &ConvertOptions,
) -> ConvertResult<String> {
    let input = value.into();
    let kind = input.kind();

    let split = match normalize(&input) {
        Ok(split) => split,
        Err(err) => {
            debug!(kind, error = ?err, "Rejected input");
            return Err(err);
        }
    };

    if split.is_zero() {
        return Ok(ZERO.to_string());
    }

    let groups = split_groups(&split.integer);
    let integer_words = match assemble_magnitudes(&groups, &options.separator) {
        Ok(words) => words,
        Err(err) => {
            debug!(kind, groups = groups.len(), "Magnitude out of range");
            return Err(err);
        }
    };

    let decimal_words = (options.show_decimal && !split.fraction.is_empty())
        .then(|| lexicalize_fraction(&split.fraction));

    let words = format_words(
        &integer_words,
        decimal_words.as_deref(),
        split.negative && options.show_negative,
    );

    debug!(
        kind,
        groups = groups.len(),
        fraction_digits = split.fraction.len(),
        negative = split.negative,
        "Converted number"
    );
    Ok(words)
}

// =============================================================================
// Magnitude Assembler
// =============================================================================

/// Attaches scale words to lexicalized groups and joins the non-empty ones.
///
/// All-zero groups are dropped together with their scale word, so
/// `1 000 010` never reads "... صفر هزار ...".
///
/// ## Errors
/// [`ConvertError::TooLarge`] when there are more groups than scale words.
///
/// ## Example
/// ```rust
/// use adad_core::convert::assemble_magnitudes;
/// use adad_core::groups::split_groups;
///
/// let groups = split_groups("123456");
/// assert_eq!(
///     assemble_magnitudes(&groups, "، ").unwrap(),
///     "صد و بیست و سه هزار، چهارصد و پنجاه و شش"
/// );
/// ```
pub fn assemble_magnitudes(groups: &[Group], separator: &str) -> ConvertResult<String> {
    let count = groups.len();
    if count > MAX_GROUPS {
        return Err(ConvertError::TooLarge {
            groups: count,
            max: MAX_GROUPS,
        });
    }

    let parts: Vec<String> = groups
        .iter()
        .enumerate()
        .filter_map(|(i, group)| {
            let words = group.lexicalize();
            if words.is_empty() {
                return None;
            }
            match SCALE_WORDS[count - i - 1] {
                "" => Some(words),
                scale => Some(format!("{words} {scale}")),
            }
        })
        .collect();

    Ok(parts.join(separator))
}

// =============================================================================
// Decimal Lexicalizer
// =============================================================================

/// Spells each fractional digit on its own, separated by single spaces.
///
/// ## Example
/// ```rust
/// use adad_core::convert::lexicalize_fraction;
///
/// assert_eq!(lexicalize_fraction("1415"), "یک چهار یک پنج");
/// assert_eq!(lexicalize_fraction("05"), "صفر پنج");
/// ```
pub fn lexicalize_fraction(digits: &str) -> String {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| digit_word(b - b'0'))
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Formatter
// =============================================================================

/// Final assembly: optional negative prefix, integer words, optional decimal
/// clause.
///
/// An empty integer part reads as zero. The negative prefix follows the sign
/// flag alone, so `-0.5` with decimals hidden reads "منفی صفر".
fn format_words(integer_words: &str, decimal_words: Option<&str>, negative: bool) -> String {
    let mut out = String::new();
    if negative {
        out.push_str(NEGATIVE);
        out.push(' ');
    }
    out.push_str(if integer_words.is_empty() {
        ZERO
    } else {
        integer_words
    });
    if let Some(decimal) = decimal_words {
        out.push(' ');
        out.push_str(POINT);
        out.push(' ');
        out.push_str(decimal);
    }
    out
}

// =============================================================================
// Extension Trait
// =============================================================================

/// Method-call sugar over [`to_words`].
///
/// ## Example
/// ```rust
/// use adad_core::ToWords;
///
/// assert_eq!(21_u32.to_words(), "بیست و یک");
/// assert_eq!("1,000".to_words(), "یک هزار");
/// ```
pub trait ToWords {
    /// Converts with the given options.
    fn to_words_with(&self, options: &ConvertOptions) -> String;

    /// Converts with default options.
    fn to_words(&self) -> String {
        self.to_words_with(&ConvertOptions::default())
    }
}

impl ToWords for str {
    fn to_words_with(&self, options: &ConvertOptions) -> String {
        to_words(self, options)
    }
}

impl ToWords for String {
    fn to_words_with(&self, options: &ConvertOptions) -> String {
        to_words(self.as_str(), options)
    }
}

macro_rules! impl_to_words_copy {
    ($($t:ty),*) => {
        $(impl ToWords for $t {
            fn to_words_with(&self, options: &ConvertOptions) -> String {
                to_words(*self, options)
            }
        })*
    };
}

impl_to_words_copy!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    rust_decimal::Decimal
);

// =============================================================================
// Unit Tests
// =============================================================================
