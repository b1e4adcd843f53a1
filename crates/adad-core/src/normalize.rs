//! # Input Normalizer
//!
//! Turns whatever the caller handed us into a sign flag plus two plain ASCII
//! digit strings (integer part, fractional part).
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NumberInput ──► decimal text ──► clean_text ──► parse_numeral          │
//! │                                                       │                 │
//! │                                                       ▼                 │
//! │                                 SplitNumber { negative, integer,        │
//! │                                               fraction }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Text, Not Floats?
//! Every input, including `f64`, is first rendered as decimal text and the
//! digits are read from that text. `3.1415_f64` prints as `3.1415`, so the
//! fractional digits match what a human reads. Repeatedly multiplying the
//! float by ten would surface binary rounding noise instead.

use std::borrow::Cow;

use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{ConvertError, ConvertResult};

/// Largest decimal order of magnitude accepted in scientific text, matching
/// the finite range of an `f64`. Applies to the value (`"0.0001e310"` is
/// `1e306` and passes), not to the literal exponent.
pub const MAX_EXPONENT: i64 = 308;

// =============================================================================
// Number Input
// =============================================================================

/// A value accepted by the converter.
///
/// Build one with `From`/`Into`:
/// ```rust
/// use adad_core::NumberInput;
///
/// let a: NumberInput = 42_i32.into();
/// let b: NumberInput = 3.5_f64.into();
/// let c: NumberInput = "1,234".into();
/// assert_eq!(a.kind(), "integer");
/// assert_eq!(b.kind(), "float");
/// assert_eq!(c.kind(), "text");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput<'a> {
    Float(f64),
    Float32(f32),
    Int(i128),
    UInt(u128),
    Decimal(Decimal),
    Text(Cow<'a, str>),
}

impl NumberInput<'_> {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            NumberInput::Float(_) | NumberInput::Float32(_) => "float",
            NumberInput::Int(_) | NumberInput::UInt(_) => "integer",
            NumberInput::Decimal(_) => "decimal",
            NumberInput::Text(_) => "text",
        }
    }
}

impl From<f64> for NumberInput<'_> {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

/// Kept as `f32` so it is rendered with its own shortest form: `0.1_f32`
/// stays `0.1` instead of widening to `0.10000000149011612`.
impl From<f32> for NumberInput<'_> {
    fn from(value: f32) -> Self {
        NumberInput::Float32(value)
    }
}

impl From<Decimal> for NumberInput<'_> {
    fn from(value: Decimal) -> Self {
        NumberInput::Decimal(value)
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        NumberInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        NumberInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for NumberInput<'_> {
    fn from(value: String) -> Self {
        NumberInput::Text(Cow::Owned(value))
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput<'_> {
            fn from(value: $t) -> Self {
                NumberInput::Int(value as i128)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for NumberInput<'_> {
            fn from(value: $t) -> Self {
                NumberInput::UInt(value as u128)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

// =============================================================================
// Split Number
// =============================================================================

/// Sign flag plus integer and fractional digits of the absolute value.
///
/// - `integer` has no leading zeros and is `"0"` when the value is below one.
/// - `fraction` has no trailing zeros and is empty when there is nothing to
///   spell after the point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNumber {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

impl SplitNumber {
    /// True when every digit is zero (covers `-0` and `0.000`).
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes any [`NumberInput`] into a [`SplitNumber`].
///
/// ## Example
/// ```rust
/// use adad_core::normalize::normalize;
///
/// let split = normalize(&"-1,234.50".into()).unwrap();
/// assert!(split.negative);
/// assert_eq!(split.integer, "1234");
/// assert_eq!(split.fraction, "5");
/// ```
pub fn normalize(input: &NumberInput<'_>) -> ConvertResult<SplitNumber> {
    let split = match input {
        NumberInput::Float(value) => {
            if !value.is_finite() {
                return Err(ConvertError::invalid(value.to_string()));
            }
            parse_from(&value.to_string())?
        }
        NumberInput::Float32(value) => {
            if !value.is_finite() {
                return Err(ConvertError::invalid(value.to_string()));
            }
            parse_from(&value.to_string())?
        }
        NumberInput::Int(value) => parse_from(&value.to_string())?,
        NumberInput::UInt(value) => parse_from(&value.to_string())?,
        NumberInput::Decimal(value) => parse_from(&value.to_string())?,
        NumberInput::Text(raw) => {
            let cleaned = clean_text(raw);
            parse_numeral(&cleaned).ok_or_else(|| ConvertError::invalid(raw.to_string()))?
        }
    };

    trace!(
        kind = input.kind(),
        negative = split.negative,
        integer = %split.integer,
        fraction = %split.fraction,
        "Normalized input"
    );
    Ok(split)
}

fn parse_from(text: &str) -> ConvertResult<SplitNumber> {
    parse_numeral(text).ok_or_else(|| ConvertError::invalid(text))
}

/// Strips grouping separators and folds Persian/Arabic-Indic digits to ASCII.
///
/// ## Rules
/// - Surrounding whitespace is trimmed
/// - `,` `٬` `_` are dropped
/// - `۰`-`۹` and `٠`-`٩` become `0`-`9`
/// - `٫` becomes `.`
///
/// ## Example
/// ```rust
/// use adad_core::normalize::clean_text;
///
/// assert_eq!(clean_text(" 1,234,567.89 "), "1234567.89");
/// assert_eq!(clean_text("۱٬۲۳۴٫۵"), "1234.5");
/// ```
pub fn clean_text(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '\u{066C}' | '_'))
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
            '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
            '\u{066B}' => '.',
            other => other,
        })
        .collect()
}

fn ascii_digit(offset: u32) -> char {
    char::from_digit(offset, 10).unwrap_or('0')
}

/// Parses cleaned decimal text into a [`SplitNumber`].
///
/// ## Grammar
/// ```text
/// [+-]? digits* ( '.' digits* )? ( [eE] [+-]? digits )?
/// ```
/// At least one mantissa digit is required. Exponents shift the decimal point
/// on the digit string itself, so `"1.5e3"` is exactly `1500`. A value whose
/// order of magnitude lies beyond [`MAX_EXPONENT`] either way is rejected.
///
/// Returns `None` for anything that does not match.
pub fn parse_numeral(text: &str) -> Option<SplitNumber> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return None;
    }

    let exponent = match exponent {
        Some(e) => parse_exponent(e)?,
        None => 0,
    };
    if let Some(lead) = format!("{int_digits}{frac_digits}").find(|c: char| c != '0') {
        let magnitude = int_digits.len() as i64 + exponent - lead as i64 - 1;
        if magnitude.abs() > MAX_EXPONENT {
            return None;
        }
    } else if exponent.abs() > MAX_EXPONENT {
        // all-zero mantissa: the value is zero whatever the exponent says
        return Some(SplitNumber {
            negative,
            integer: "0".to_string(),
            fraction: String::new(),
        });
    }

    let (integer, fraction) = shift_point(int_digits, frac_digits, exponent);
    let integer = integer.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');

    Some(SplitNumber {
        negative,
        integer: if integer.is_empty() {
            "0".to_string()
        } else {
            integer.to_string()
        },
        fraction: fraction.to_string(),
    })
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }
    text.parse().ok()
}

/// Moves the decimal point `exponent` places to the right (left if negative).
fn shift_point(int_digits: &str, frac_digits: &str, exponent: i64) -> (String, String) {
    let digits = format!("{int_digits}{frac_digits}");
    let point = int_digits.len() as i64 + exponent;

    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        (String::new(), format!("{zeros}{digits}"))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        let (int, frac) = digits.split_at(point as usize);
        (int.to_string(), frac.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn split(negative: bool, integer: &str, fraction: &str) -> SplitNumber {
        SplitNumber {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_numeral("123"), Some(split(false, "123", "")));
        assert_eq!(parse_numeral("-45.60"), Some(split(true, "45", "6")));
        assert_eq!(parse_numeral("+7"), Some(split(false, "7", "")));
        assert_eq!(parse_numeral(".5"), Some(split(false, "0", "5")));
        assert_eq!(parse_numeral("5."), Some(split(false, "5", "")));
        assert_eq!(parse_numeral("000123"), Some(split(false, "123", "")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "-", ".", "abc", "12abc", "1.2.3", "NaN", "inf", "Infinity", "--1", "1e", "e5", "1e+"] {
            assert_eq!(parse_numeral(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_exponent_shifts_exactly() {
        assert_eq!(parse_numeral("1.5e3"), Some(split(false, "1500", "")));
        assert_eq!(parse_numeral("1e21"), Some(split(false, "1000000000000000000000", "")));
        assert_eq!(parse_numeral("25E-3"), Some(split(false, "0", "025")));
        assert_eq!(parse_numeral("1.25e1"), Some(split(false, "12", "5")));
        assert_eq!(parse_numeral("1e400"), None);
        assert_eq!(parse_numeral("1e-400"), None);
        assert_eq!(parse_numeral("1e99999999999999999999"), None);
    }

    #[test]
    fn test_parse_exponent_range_follows_value() {
        let big = parse_numeral("0.0001e310").unwrap();
        assert_eq!(big.integer.len(), 307);
        assert!(big.integer.starts_with('1'));
        assert!(big.fraction.is_empty());

        let small = parse_numeral("1000e-310").unwrap();
        assert_eq!(small.integer, "0");
        assert_eq!(small.fraction.len(), 307);
        assert!(small.fraction.ends_with('1'));

        assert_eq!(parse_numeral("10e308"), None);
        assert!(parse_numeral("0e500").map(|s| s.is_zero()).unwrap_or(false));
    }

    #[test]
    fn test_zero_detection() {
        assert!(parse_numeral("0").map(|s| s.is_zero()).unwrap_or(false));
        assert!(parse_numeral("-0.000").map(|s| s.is_zero()).unwrap_or(false));
        assert!(!parse_numeral("0.01").map(|s| s.is_zero()).unwrap_or(true));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("1,234,567.89"), "1234567.89");
        assert_eq!(clean_text("  42\n"), "42");
        assert_eq!(clean_text("۱۲۳"), "123");
        assert_eq!(clean_text("١٢٣"), "123");
        assert_eq!(clean_text("۱٬۰۰۰٫۲۵"), "1000.25");
        assert_eq!(clean_text("1_000"), "1000");
    }

    #[test]
    fn test_normalize_float_uses_printed_digits() {
        let out = normalize(&NumberInput::from(3.1415)).unwrap();
        assert_eq!(out, split(false, "3", "1415"));

        let out = normalize(&NumberInput::from(0.1 + 0.2)).unwrap();
        assert_eq!(out.fraction, "30000000000000004");

        let input = NumberInput::from(0.1_f32);
        assert_eq!(input.kind(), "float");
        let out = normalize(&input).unwrap();
        assert_eq!(out.fraction, "1");
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        assert!(normalize(&NumberInput::from(f64::NAN)).is_err());
        assert!(normalize(&NumberInput::from(f64::INFINITY)).is_err());
        assert!(normalize(&NumberInput::from(f32::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_normalize_integers_and_decimals() {
        let out = normalize(&NumberInput::from(-1_000_010_i64)).unwrap();
        assert_eq!(out, split(true, "1000010", ""));

        let out = normalize(&NumberInput::from(u128::MAX)).unwrap();
        assert_eq!(out.integer, u128::MAX.to_string());

        let dec = Decimal::from_str("-123.4500").unwrap();
        let out = normalize(&NumberInput::from(dec)).unwrap();
        assert_eq!(out, split(true, "123", "45"));
    }

    #[test]
    fn test_normalize_text_error_keeps_raw_input() {
        let err = normalize(&NumberInput::from("12 apples")).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidNumber {
                input: "12 apples".to_string()
            }
        );
    }
}
