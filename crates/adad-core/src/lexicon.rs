//! # Lexicon
//!
//! Fixed Persian word tables used by every stage of the pipeline.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index   UNITS    TEENS     TENS     HUNDREDS   SCALE_WORDS             │
//! │  ─────   ─────    ─────     ────     ────────   ───────────             │
//! │    0     ""       ده        ""       ""         ""          (ones)      │
//! │    1     یک       یازده     ""       صد         هزار        10^3        │
//! │    2     دو       دوازده    بیست     دویست      میلیون      10^6        │
//! │    3     سه       سیزده     سی       سیصد       میلیارد     10^9        │
//! │   ...                                                                   │
//! │    8     هشت      هجده      هشتاد    هشتصد      سپتیلیون    10^24       │
//! │    9     نه       نوزده     نود      نهصد       -                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All tables are `const` and indexed by a single decimal digit (or a group
//! position for `SCALE_WORDS`).

/// Units, indexed by digit. Index 0 is empty; use [`ZERO`] for a spoken zero.
pub const UNITS: [&str; 10] = [
    "", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه",
];

/// 10 through 19, indexed by the units digit.
pub const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

/// Tens, indexed by the tens digit. Indices 0 and 1 are unused.
pub const TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

/// Hundreds, indexed by the hundreds digit.
pub const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Scale words, indexed by group position counted from the least-significant
/// group. Position 0 carries no scale word.
pub const SCALE_WORDS: [&str; 9] = [
    "",
    "هزار",
    "میلیون",
    "میلیارد",
    "تریلیون",
    "کوادریلیون",
    "کوانتینیلیون",
    "سکستیلیون",
    "سپتیلیون",
];

/// Largest number of 3-digit groups that can be named.
pub const MAX_GROUPS: usize = SCALE_WORDS.len();

/// "zero"
pub const ZERO: &str = "صفر";

/// Prefix for negative values.
pub const NEGATIVE: &str = "منفی";

/// Marker placed between the integer words and the fractional digits.
pub const POINT: &str = "ممیز";

/// Joins the parts inside one group. Also the default inter-group separator.
pub const CONJUNCTION: &str = " و ";

/// Returned when the input is not a finite number.
pub const INVALID_NUMBER: &str = "عدد نامعتبر است";

/// Returned when the integer part needs more than [`MAX_GROUPS`] groups.
pub const TOO_LARGE: &str = "عدد بسیار بزرگ است";

/// Spoken form of a single digit, with `0` spelled as [`ZERO`].
pub fn digit_word(digit: u8) -> &'static str {
    match digit {
        0 => ZERO,
        d => UNITS[usize::from(d % 10)],
    }
}
