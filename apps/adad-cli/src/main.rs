//! # adad
//!
//! Command-line front end for adad-core.
//!
//! ## Usage
//! ```bash
//! adad 123456789
//! adad -s "، " 123456
//! adad --hide-decimal --json 3.1415 "1,234,567.89"
//! adad -- -1,000   # comma-grouped negatives go after `--`
//! ```
//!
//! ## Option Resolution
//! ```text
//! library defaults  ◄──  ADAD_* environment  ◄──  command-line flags
//!    (lowest)                                        (highest)
//! ```
//!
//! Exit codes: `0` all inputs converted, `1` at least one input was rejected,
//! `2` configuration error.

mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use adad_core::{try_to_words, ConvertOptions, OptionOverrides};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "adad")]
#[command(version)]
#[command(about = "Spell numbers out in Persian words", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Numbers to convert (`,` grouping and Persian digits are accepted)
    #[arg(required = true)]
    numbers: Vec<String>,

    /// Separator placed between magnitude groups
    #[arg(short, long)]
    separator: Option<String>,

    /// Drop the "منفی" prefix from negative numbers
    #[arg(long)]
    hide_negative: bool,

    /// Drop the fractional part
    #[arg(long)]
    hide_decimal: bool,

    /// Print one JSON object per input
    #[arg(long)]
    json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags as overrides; absent flags leave the field unset.
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            separator: self.separator.clone(),
            show_negative: self.hide_negative.then_some(false),
            show_decimal: self.hide_decimal.then_some(false),
        }
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct Rendered<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

fn render<'a>(input: &'a str, options: &ConvertOptions) -> Rendered<'a> {
    match try_to_words(input, options) {
        Ok(words) => Rendered {
            input,
            words: Some(words),
            error: None,
        },
        Err(err) => {
            debug!(input, error = %err, "Conversion failed");
            Rendered {
                input,
                words: None,
                error: Some(err.sentinel()),
            }
        }
    }
}

fn init_tracing(config: &CliConfig, verbose: bool) -> Result<(), ConfigError> {
    let directive = match (&config.log_filter, verbose) {
        (Some(directive), _) => directive.clone(),
        (None, true) => "debug".to_string(),
        (None, false) => "warn".to_string(),
    };
    let filter = EnvFilter::try_new(&directive).map_err(|e| ConfigError::InvalidLogFilter {
        directive: directive.clone(),
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("adad: {err}");
            return Ok(ExitCode::from(2));
        }
    };
    if let Err(err) = init_tracing(&config, cli.verbose) {
        eprintln!("adad: {err}");
        return Ok(ExitCode::from(2));
    }

    let options = config.overrides.clone().or_from(cli.overrides()).resolve();
    info!(
        separator = %options.separator,
        show_negative = options.show_negative,
        show_decimal = options.show_decimal,
        inputs = cli.numbers.len(),
        "Converting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for input in &cli.numbers {
        let rendered = render(input, &options);
        failed |= rendered.error.is_some();

        if cli.json {
            let line = serde_json::to_string(&rendered).context("Failed to encode JSON output")?;
            writeln!(out, "{line}").context("Failed to write to stdout")?;
        } else {
            let text = rendered.words.as_deref().or(rendered.error).unwrap_or_default();
            writeln!(out, "{text}").context("Failed to write to stdout")?;
        }
    }

    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
