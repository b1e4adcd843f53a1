//! # adad-core: Persian Numbers in Words
//!
//! Converts integers and decimals into written Persian, e.g.
//! `123456789` → "صد و بیست و سه میلیون و چهارصد و پنجاه و شش هزار و هفتصد و هشتاد و نه".
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Conversion Pipeline                              │
//! │                                                                         │
//! │   number | "1,234.5" | "۱٬۲۳۴"                                          │
//! │            │                                                            │
//! │   ┌────────▼────────┐   strip separators, fold digits, read sign        │
//! │   │    normalize    │   integer digits + fraction digits                │
//! │   └────────┬────────┘                                                   │
//! │   ┌────────▼────────┐   pad to multiple of 3, chunk                     │
//! │   │  split_groups   │   [001] [234]                                     │
//! │   └────────┬────────┘                                                   │
//! │   ┌────────▼────────┐   lexicalize each group, attach هزار/میلیون/...   │
//! │   │    assemble     │   drop all-zero groups, join with separator       │
//! │   └────────┬────────┘                                                   │
//! │   ┌────────▼────────┐   "منفی" prefix, "ممیز" + one word per digit      │
//! │   │     format      │                                                   │
//! │   └─────────────────┘                                                   │
//! │                                                                         │
//! │   NO I/O • NO GLOBAL STATE • SAFE FROM ANY THREAD                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`] - Word tables and fixed words
//! - [`normalize`] - Input coercion, sign and integer/fraction split
//! - [`groups`] - 3-digit groups and their spelling
//! - [`convert`] - Magnitude assembly, decimals, formatting, entry points
//! - [`options`] - Caller-tunable formatting
//! - [`error`] - Conversion errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, no side effects
//! 2. **Digits From Text**: fractional digits come from decimal text, never
//!    from float arithmetic
//! 3. **Never Panic**: [`to_words`] always returns a string; [`try_to_words`]
//!    returns a typed error instead of a sentinel
//!
//! ## Example Usage
//!
//! ```rust
//! use adad_core::{to_words, ConvertOptions};
//!
//! let opts = ConvertOptions::default();
//! assert_eq!(to_words(1_000_000, &opts), "یک میلیون");
//! assert_eq!(
//!     to_words("1,234,567.89", &opts),
//!     "یک میلیون و دویست و سی و چهار هزار و پانصد و شصت و هفت ممیز هشت نه"
//! );
//!
//! let opts = ConvertOptions::default().with_separator("، ");
//! assert_eq!(to_words(123_456, &opts), "صد و بیست و سه هزار، چهارصد و پنجاه و شش");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod convert;
pub mod error;
pub mod groups;
pub mod lexicon;
pub mod normalize;
pub mod options;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use convert::{to_words, try_to_words, ToWords};
pub use error::{ConvertError, ConvertResult};
pub use groups::lexicalize_group;
pub use normalize::NumberInput;
pub use options::{ConvertOptions, OptionOverrides};

// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn non_zero_groups(mut n: u64) -> usize {
        let mut count = 0;
        while n > 0 {
            if n % 1000 != 0 {
                count += 1;
            }
            n /= 1000;
        }
        count
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertOptions>();
        assert_send_sync::<ConvertError>();
        assert_send_sync::<NumberInput<'static>>();
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| to_words(987_654_321, &ConvertOptions::default())))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "نهصد و هشتاد و هفت میلیون و ششصد و پنجاه و چهار هزار و سیصد و بیست و یک"
            );
        }
    }

    proptest! {
        #[test]
        fn test_hidden_sign_matches_positive(x in 1u64..) {
            let hidden = ConvertOptions::default().with_show_negative(false);
            let negative = -(x as i128);
            prop_assert_eq!(to_words(negative, &hidden), to_words(x, &ConvertOptions::default()));
        }

        #[test]
        fn test_hidden_sign_matches_positive_float(x in 1e-6f64..1e20) {
            let hidden = ConvertOptions::default().with_show_negative(false);
            prop_assert_eq!(to_words(-x, &hidden), to_words(x, &ConvertOptions::default()));
        }

        #[test]
        fn test_hidden_decimal_never_has_point(x in any::<f64>()) {
            let hidden = ConvertOptions::default().with_show_decimal(false);
            prop_assert!(!to_words(x, &hidden).contains(lexicon::POINT));
        }

        #[test]
        fn test_emitted_groups_match_non_zero_groups(n in 1u64..) {
            let opts = ConvertOptions::default().with_separator(" | ");
            let words = to_words(n, &opts);
            prop_assert_eq!(words.split(" | ").count(), non_zero_groups(n));
        }

        #[test]
        fn test_negative_prefix_present(x in 1i64..) {
            let words = to_words(-x, &ConvertOptions::default());
            prop_assert!(words.starts_with("منفی "));
        }

        #[test]
        fn test_integer_text_and_number_agree(n in any::<u64>()) {
            let opts = ConvertOptions::default();
            prop_assert_eq!(to_words(n.to_string(), &opts), to_words(n, &opts));
        }
    }
}
