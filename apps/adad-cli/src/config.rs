//! CLI configuration module.
//!
//! Configuration is loaded from environment variables; command-line flags are
//! layered on top in `main`.
//!
//! | Variable             | Meaning                          | Default |
//! |----------------------|----------------------------------|---------|
//! | `ADAD_SEPARATOR`     | inter-group separator            | `" و "` |
//! | `ADAD_SHOW_NEGATIVE` | prefix negatives with "منفی"     | `true`  |
//! | `ADAD_SHOW_DECIMAL`  | spell the fractional part        | `true`  |
//! | `ADAD_LOG`           | tracing filter directive         | `warn`  |

use std::env;

use adad_core::OptionOverrides;

pub const ENV_SEPARATOR: &str = "ADAD_SEPARATOR";
pub const ENV_SHOW_NEGATIVE: &str = "ADAD_SHOW_NEGATIVE";
pub const ENV_SHOW_DECIMAL: &str = "ADAD_SHOW_DECIMAL";
pub const ENV_LOG: &str = "ADAD_LOG";

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Conversion options set through the environment. Unset variables stay
    /// `None` so flags and library defaults can fill them.
    pub overrides: OptionOverrides,

    /// Raw `ADAD_LOG` directive, if any.
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup (used by tests).
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let show_negative = lookup(ENV_SHOW_NEGATIVE)
            .map(|v| parse_bool(ENV_SHOW_NEGATIVE, &v))
            .transpose()?;
        let show_decimal = lookup(ENV_SHOW_DECIMAL)
            .map(|v| parse_bool(ENV_SHOW_DECIMAL, &v))
            .transpose()?;

        Ok(CliConfig {
            overrides: OptionOverrides {
                separator: lookup(ENV_SEPARATOR),
                show_negative,
                show_decimal,
            },
            log_filter: lookup(ENV_LOG).filter(|v| !v.trim().is_empty()),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' (expected true or false)")]
    InvalidValue { key: String, value: String },

    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidLogFilter { directive: String, reason: String },
}
