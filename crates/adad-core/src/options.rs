//! # Conversion Options
//!
//! Caller-tunable formatting for [`to_words`](crate::to_words).
//!
//! ## Defaults and Overrides
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Option Resolution (per call)                         │
//! │                                                                         │
//! │  ConvertOptions::default()                                              │
//! │     separator     = " و "                                               │
//! │     show_negative = true                                                │
//! │     show_decimal  = true                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  .merge(OptionOverrides { separator: Some("، "), .. })                 │
//! │           │        only the fields that are Some(..) replace defaults   │
//! │           ▼                                                             │
//! │  ConvertOptions (immutable for the rest of the call)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types use camelCase keys so a JS-style options object deserializes
//! as-is:
//! ```rust
//! use adad_core::ConvertOptions;
//!
//! let opts: ConvertOptions = serde_json::from_str(r#"{"showDecimal": false}"#).unwrap();
//! assert!(!opts.show_decimal);
//! assert!(opts.show_negative);
//! assert_eq!(opts.separator, " و ");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lexicon::CONJUNCTION;

// =============================================================================
// Convert Options
// =============================================================================

/// Resolved formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ConvertOptions {
    /// Placed between successive non-empty magnitude groups.
    /// Default: `" و "`.
    pub separator: String,

    /// Prefix negative values with "منفی". When false the sign is dropped.
    pub show_negative: bool,

    /// Spell the fractional part. When false it is discarded.
    pub show_decimal: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            separator: CONJUNCTION.to_string(),
            show_negative: true,
            show_decimal: true,
        }
    }
}

impl ConvertOptions {
    /// Replaces the inter-group separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_show_negative(mut self, show: bool) -> Self {
        self.show_negative = show;
        self
    }

    pub fn with_show_decimal(mut self, show: bool) -> Self {
        self.show_decimal = show;
        self
    }

    /// Applies every `Some` field of `overrides` on top of `self`.
    ///
    /// ## Example
    /// ```rust
    /// use adad_core::{ConvertOptions, OptionOverrides};
    ///
    /// let opts = ConvertOptions::default().merge(OptionOverrides {
    ///     show_negative: Some(false),
    ///     ..Default::default()
    /// });
    /// assert!(!opts.show_negative);
    /// assert!(opts.show_decimal);
    /// ```
    pub fn merge(self, overrides: OptionOverrides) -> Self {
        ConvertOptions {
            separator: overrides.separator.unwrap_or(self.separator),
            show_negative: overrides.show_negative.unwrap_or(self.show_negative),
            show_decimal: overrides.show_decimal.unwrap_or(self.show_decimal),
        }
    }
}

// =============================================================================
// Option Overrides
// =============================================================================

/// Partial options; unset fields fall back to whatever they are merged onto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_negative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_decimal: Option<bool>,
}

impl OptionOverrides {
    /// Layers `other` over `self`: fields set in `other` win.
    pub fn or_from(self, other: OptionOverrides) -> Self {
        OptionOverrides {
            separator: other.separator.or(self.separator),
            show_negative: other.show_negative.or(self.show_negative),
            show_decimal: other.show_decimal.or(self.show_decimal),
        }
    }

    /// Resolves against the documented defaults.
    pub fn resolve(self) -> ConvertOptions {
        ConvertOptions::default().merge(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.separator, " و ");
        assert!(opts.show_negative);
        assert!(opts.show_decimal);
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let opts = ConvertOptions::default().merge(OptionOverrides {
            separator: Some("، ".to_string()),
            ..Default::default()
        });
        assert_eq!(opts.separator, "، ");
        assert!(opts.show_negative);
        assert!(opts.show_decimal);

        assert_eq!(
            ConvertOptions::default().merge(OptionOverrides::default()),
            ConvertOptions::default()
        );
    }

    #[test]
    fn test_overrides_layering() {
        let env = OptionOverrides {
            separator: Some(" - ".to_string()),
            show_decimal: Some(false),
            ..Default::default()
        };
        let flags = OptionOverrides {
            separator: Some(", ".to_string()),
            ..Default::default()
        };
        let opts = env.or_from(flags).resolve();
        assert_eq!(opts.separator, ", ");
        assert!(!opts.show_decimal);
        assert!(opts.show_negative);
    }

    #[test]
    fn test_json_camel_case() {
        let overrides: OptionOverrides =
            serde_json::from_str(r#"{"separator": "، ", "showNegative": false}"#).unwrap();
        assert_eq!(overrides.separator.as_deref(), Some("، "));
        assert_eq!(overrides.show_negative, Some(false));
        assert_eq!(overrides.show_decimal, None);

        let json = serde_json::to_value(ConvertOptions::default()).unwrap();
        assert_eq!(json["showNegative"], true);
        assert_eq!(json["showDecimal"], true);
        assert_eq!(json["separator"], " و ");
    }

    #[test]
    fn test_builders() {
        let opts = ConvertOptions::default()
            .with_separator("، ")
            .with_show_negative(false)
            .with_show_decimal(false);
        assert_eq!(opts.separator, "، ");
        assert!(!opts.show_negative);
        assert!(!opts.show_decimal);
    }
}
