//! # Groups
//!
//! Splitting the integer digits into 3-digit groups and spelling one group.
//!
//! ## Decomposition
//! ```text
//! "1234567"  ──pad──►  "001234567"  ──chunk──►  [001] [234] [567]
//!                                                  │     │     │
//!                                        position  2     1     0
//!                                                میلیون  هزار   -
//! ```
//!
//! ## Lexicalization of one group
//! ```text
//! ┌──────────────┬────────────────────────────────────────────────┐
//! │  h t u       │  words                                         │
//! ├──────────────┼────────────────────────────────────────────────┤
//! │  0 0 0       │  ""  (group is dropped by the assembler)       │
//! │  1 0 0       │  صد                                            │
//! │  1 1 5       │  صد و پانزده        (t == 1 → teen table)       │
//! │  3 4 0       │  سیصد و چهل                                    │
//! │  0 2 7       │  بیست و هفت                                    │
//! └──────────────┴────────────────────────────────────────────────┘
//! ```
//! Parts inside a group are always joined with [`CONJUNCTION`]; the
//! caller-configurable separator only applies between groups.

use std::fmt;

use crate::lexicon::{CONJUNCTION, HUNDREDS, TEENS, TENS, UNITS};

// =============================================================================
// Group
// =============================================================================

/// Three decimal digits: hundreds, tens, units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Group {
    hundreds: u8,
    tens: u8,
    units: u8,
}

impl Group {
    /// Builds a group from a value in `0..=999`. Only the three low digits of
    /// larger values are kept (`1234` becomes `234`).
    pub const fn from_value(value: u16) -> Self {
        let value = value % 1000;
        Group {
            hundreds: (value / 100) as u8,
            tens: ((value / 10) % 10) as u8,
            units: (value % 10) as u8,
        }
    }

    /// Builds a group from exactly three ASCII digits.
    pub fn from_digits(chunk: &[u8; 3]) -> Self {
        Group {
            hundreds: chunk[0].wrapping_sub(b'0') % 10,
            tens: chunk[1].wrapping_sub(b'0') % 10,
            units: chunk[2].wrapping_sub(b'0') % 10,
        }
    }

    /// Numeric value of the group.
    pub const fn value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.tens as u16 * 10 + self.units as u16
    }

    /// True when all three digits are zero.
    pub const fn is_zero(&self) -> bool {
        self.hundreds == 0 && self.tens == 0 && self.units == 0
    }

    /// Spells the group in words, or returns an empty string for `000`.
    ///
    /// ## Example
    /// ```rust
    /// use adad_core::groups::Group;
    ///
    /// assert_eq!(Group::from_value(115).lexicalize(), "صد و پانزده");
    /// assert_eq!(Group::from_value(0).lexicalize(), "");
    /// ```
    pub fn lexicalize(&self) -> String {
        if self.is_zero() {
            return String::new();
        }

        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if self.hundreds > 0 {
            parts.push(HUNDREDS[usize::from(self.hundreds)]);
        }
        if self.tens == 1 {
            parts.push(TEENS[usize::from(self.units)]);
        } else {
            if self.tens > 1 {
                parts.push(TENS[usize::from(self.tens)]);
            }
            if self.units > 0 {
                parts.push(UNITS[usize::from(self.units)]);
            }
        }
        parts.join(CONJUNCTION)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.hundreds, self.tens, self.units)
    }
}

/// Spells a value in `0..=999`.
///
/// Only the three low digits are read: `lexicalize_group(1234)` spells `234`.
/// Use [`to_words`](crate::to_words) for anything larger.
///
/// ## Example
/// ```rust
/// use adad_core::lexicalize_group;
///
/// assert_eq!(lexicalize_group(789), "هفتصد و هشتاد و نه");
/// assert_eq!(lexicalize_group(10), "ده");
/// ```
pub fn lexicalize_group(n: u16) -> String {
    Group::from_value(n).lexicalize()
}

// =============================================================================
// Decomposition
// =============================================================================

/// Left-pads an ASCII digit string to a multiple of three and slices it into
/// groups, most-significant first.
///
/// An empty string is treated as `"0"` and yields one zero group.
///
/// ## Example
/// ```rust
/// use adad_core::groups::split_groups;
///
/// let groups = split_groups("1000010");
/// let shown: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
/// assert_eq!(shown, ["001", "000", "010"]);
/// ```
pub fn split_groups(digits: &str) -> Vec<Group> {
    let digits = if digits.is_empty() { "0" } else { digits };
    let padded_len = digits.len().div_ceil(3) * 3;
    let padded = format!("{digits:0>padded_len$}");

    padded
        .as_bytes()
        .chunks_exact(3)
        .map(|chunk| Group::from_digits(&[chunk[0], chunk[1], chunk[2]]))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicalize_examples() {
        assert_eq!(lexicalize_group(1), "یک");
        assert_eq!(lexicalize_group(10), "ده");
        assert_eq!(lexicalize_group(19), "نوزده");
        assert_eq!(lexicalize_group(20), "بیست");
        assert_eq!(lexicalize_group(100), "صد");
        assert_eq!(lexicalize_group(110), "صد و ده");
        assert_eq!(lexicalize_group(123), "صد و بیست و سه");
        assert_eq!(lexicalize_group(205), "دویست و پنج");
        assert_eq!(lexicalize_group(999), "نهصد و نود و نه");
    }

    #[test]
    fn test_lexicalize_non_empty_iff_positive() {
        for n in 0..1000u16 {
            assert_eq!(lexicalize_group(n).is_empty(), n == 0, "n = {n}");
        }
    }

    #[test]
    fn test_group_round_trips_value() {
        for n in [0u16, 7, 42, 100, 512, 999] {
            assert_eq!(Group::from_value(n).value(), n);
        }
        assert_eq!(Group::from_digits(b"046").value(), 46);
    }

    #[test]
    fn test_lexicalize_group_reads_low_three_digits() {
        assert_eq!(Group::from_value(1234).value(), 234);
        assert_eq!(lexicalize_group(1234), lexicalize_group(234));
        assert_eq!(lexicalize_group(5000), "");
    }

    #[test]
    fn test_split_groups_padding() {
        let shown = |d: &str| -> Vec<String> {
            split_groups(d).iter().map(|g| g.to_string()).collect()
        };
        assert_eq!(shown("0"), ["000"]);
        assert_eq!(shown(""), ["000"]);
        assert_eq!(shown("123"), ["123"]);
        assert_eq!(shown("1234"), ["001", "234"]);
        assert_eq!(shown("123456789"), ["123", "456", "789"]);
        assert_eq!(shown("1000000000000").len(), 5);
    }
}
