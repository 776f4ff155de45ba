use clap::Parser;
use tracing::debug;

use oddsreport::adapter::inbound::cli::command::Cli;
use oddsreport::adapter::inbound::cli::output::{self, OutputConfig};
use oddsreport::adapter::inbound::cli::report;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig { json: cli.json }, &cli.color);

    let result = report::resolve_config(&cli).and_then(|config| {
        config.init_logging();
        debug!(?config, "configuration resolved");
        report::execute(&cli, &config)
    });

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
