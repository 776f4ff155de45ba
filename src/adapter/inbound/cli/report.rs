//! Handler for a report invocation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::command::Cli;
use super::output;
use crate::adapter::outbound::source::SourceFactory;
use crate::application::Reporter;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// Printed when a ranking finds no competition.
const NO_RESULT: &str = "None";

/// Build the effective configuration: file (or defaults) plus CLI overrides.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the overridden
/// values fail validation.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(ranking) = cli.ranking {
        config.report.ranking = ranking.into();
    }
    if let Some(order) = cli.market_order {
        config.report.market_order = order.into();
    }

    config.validate()?;
    Ok(config)
}

/// Check flag combinations clap cannot express.
///
/// # Errors
///
/// Returns a usage error when `--comp-dump` is given without `--comp`.
pub fn check_usage(cli: &Cli) -> Result<()> {
    if cli.comp_dump.is_some() && cli.comp.is_none() {
        return Err(Error::Usage("Missing `--comp` argument.".to_string()));
    }
    Ok(())
}

/// Run the report command.
///
/// Reports are produced in a fixed order: dump, option count, largest,
/// least, summary.
///
/// # Errors
///
/// Returns an error on bad flag combinations, config failures, unreadable
/// or malformed documents, or when the dump cannot be written.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    check_usage(cli)?;

    let source = SourceFactory::for_path(&cli.filename, cli.format.map(Into::into))?;
    let mut reporter = Reporter::new(source, config.report);
    let file = File::open(&cli.filename)?;
    reporter.load(file)?;
    info!(path = %cli.filename.display(), "report input loaded");

    if cli.json {
        let report = json_report(cli, &reporter)?;
        output::json_document(&report);
        return Ok(());
    }

    if let (Some(name), Some(path)) = (&cli.comp, &cli.comp_dump) {
        dump(&reporter, name, path, cli.dumps_to_stdout())?;
    }
    if cli.options {
        output::report_line("Available options", &reporter.option_count().to_string());
    }
    if cli.largest_market_percentage {
        output::report_line(
            "Competition with the largest market price",
            reporter.largest_market_percentage().unwrap_or(NO_RESULT),
        );
    }
    if cli.least_market_percentage {
        output::report_line(
            "Competition with the least market price",
            reporter.least_market_percentage().unwrap_or(NO_RESULT),
        );
    }
    if cli.summary {
        output::report_block(&reporter.summary());
    }
    Ok(())
}

fn dump(reporter: &Reporter, name: &str, path: &Path, to_stdout: bool) -> Result<()> {
    let rows = if to_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        reporter.dump_competition_market_prices(name, &mut writer)?
    } else {
        let mut writer = BufWriter::new(File::create(path)?);
        let rows = reporter.dump_competition_market_prices(name, &mut writer)?;
        writer.flush()?;
        rows
    };
    debug!(competition = name, rows, path = %path.display(), "market prices dumped");
    Ok(())
}

/// Collect the requested reports into one JSON object.
///
/// With `--comp` the matching rows are embedded under `dump`; a
/// `--comp-dump` file path is still written as CSV.
fn json_report(cli: &Cli, reporter: &Reporter) -> Result<Value> {
    let mut report = Map::new();

    if let Some(name) = &cli.comp {
        if let Some(path) = cli.comp_dump.as_deref().filter(|_| !cli.dumps_to_stdout()) {
            dump(reporter, name, path, false)?;
        }
        report.insert(
            "dump".to_string(),
            json!({
                "competition": name,
                "rows": reporter.competition_market_prices(name),
            }),
        );
    }
    if cli.options {
        report.insert("options".to_string(), json!(reporter.option_count()));
    }
    if cli.largest_market_percentage {
        report.insert(
            "largest_market_percentage".to_string(),
            json!(reporter.largest_market_percentage()),
        );
    }
    if cli.least_market_percentage {
        report.insert(
            "least_market_percentage".to_string(),
            json!(reporter.least_market_percentage()),
        );
    }
    if cli.summary {
        report.insert(
            "summary".to_string(),
            serde_json::to_value(reporter.summary_report())?,
        );
    }
    Ok(Value::Object(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ranking::RankingPolicy;
    use crate::error::ConfigError;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["oddsreport"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn comp_dump_requires_comp() {
        let cli = parse(&["options.json", "--comp-dump", "out.csv"]);
        let err = check_usage(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn comp_without_dump_is_allowed() {
        let cli = parse(&["options.json", "--comp", "NRL"]);
        assert!(check_usage(&cli).is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "options.json",
            "--ranking",
            "seeded",
            "--log-level",
            "debug",
            "--json-logs",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.report.ranking, RankingPolicy::Seeded);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn blank_level_override_is_rejected() {
        let cli = parse(&["options.json", "--log-level", ""]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let cli = parse(&["options.json", "--config", "/nonexistent/oddsreport.toml"]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
        assert_eq!(err.exit_code(), 78);
    }
}
