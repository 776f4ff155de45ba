//! CLI output formatting.
//!
//! Report lines go to stdout exactly as scripts expect them. Errors go to
//! stderr, colored when the terminal supports it, or as a JSON line when
//! `--json` is active.

use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from CLI flags.
///
/// Call this early in the CLI entry point.
pub fn configure(config: OutputConfig, color: &ColorChoice) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
    match color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print a `label: value` report line.
pub fn report_line(label: &str, value: &str) {
    println!("{label}: {value}");
}

/// Print a free-form report block as-is.
pub fn report_block(text: &str) {
    println!("{text}");
}

/// Print a JSON document on stdout.
pub fn json_document(value: &serde_json::Value) {
    println!("{value}");
}

/// Print an error line.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("{} {}", "✗".if_supports_color(owo_colors::Stream::Stderr, |s| s.red()), message);
}
