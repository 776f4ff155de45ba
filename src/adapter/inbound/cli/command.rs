//! Command-line interface definitions.
//!
//! Defines the CLI structure for the oddsreport binary using `clap`. A single
//! invocation loads one snapshot document and prints the requested reports.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::application::ranking::RankingPolicy;
use crate::application::summary::MarketOrder;
use crate::port::SourceFormat;

/// `--comp-dump` value that sends the CSV to stdout.
pub const STDOUT_PATH: &str = "-";

/// Market percentage and summary reports for betting snapshots
#[derive(Parser, Debug)]
#[command(name = "oddsreport")]
#[command(version, about)]
pub struct Cli {
    /// Snapshot document to report on (.json or .xml)
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Competition name to search for
    #[arg(long, value_name = "NAME")]
    pub comp: Option<String>,

    /// File to dump competition market prices to ("-" for stdout); needs --comp
    #[arg(long, value_name = "PATH")]
    pub comp_dump: Option<PathBuf>,

    /// Show how many options are available
    #[arg(long)]
    pub options: bool,

    /// Show a complete summary report
    #[arg(long)]
    pub summary: bool,

    /// Show the competition with the largest market percentage
    #[arg(long)]
    pub largest_market_percentage: bool,

    /// Show the competition with the least market percentage
    #[arg(long)]
    pub least_market_percentage: bool,

    /// Document format, overriding the file extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override log level (e.g. debug, info, warn)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    /// Print the reports as one JSON object
    #[arg(long)]
    pub json: bool,

    /// Seeding policy for the largest / least scans
    #[arg(long, value_enum)]
    pub ranking: Option<RankingArg>,

    /// Order of market names within each sport of the summary
    #[arg(long, value_enum)]
    pub market_order: Option<MarketOrderArg>,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,
}

impl Cli {
    /// True when `--comp-dump` targets stdout.
    #[must_use]
    pub fn dumps_to_stdout(&self) -> bool {
        self.comp_dump
            .as_deref()
            .is_some_and(|path| path.as_os_str() == STDOUT_PATH)
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Snapshot document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Xml,
}

impl From<FormatArg> for SourceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => SourceFormat::Json,
            FormatArg::Xml => SourceFormat::Xml,
        }
    }
}

/// Ranking policy names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RankingArg {
    /// Largest starts at 0, least at 100000
    Legacy,
    /// Both scans start from the first competition
    Seeded,
}

impl From<RankingArg> for RankingPolicy {
    fn from(arg: RankingArg) -> Self {
        match arg {
            RankingArg::Legacy => RankingPolicy::Legacy,
            RankingArg::Seeded => RankingPolicy::Seeded,
        }
    }
}

/// Market order names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MarketOrderArg {
    /// Order in which market names first appear
    #[value(name = "first_seen", alias = "first-seen")]
    FirstSeen,
    /// Lexicographic order
    Alphabetical,
}

impl From<MarketOrderArg> for MarketOrder {
    fn from(arg: MarketOrderArg) -> Self {
        match arg {
            MarketOrderArg::FirstSeen => MarketOrder::FirstSeen,
            MarketOrderArg::Alphabetical => MarketOrder::Alphabetical,
        }
    }
}
