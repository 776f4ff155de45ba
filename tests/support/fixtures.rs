use std::path::PathBuf;

use oddsreport::adapter::outbound::source::SourceFactory;
use oddsreport::application::{ReportSettings, Reporter};

/// Number of options in both fixture documents.
pub const FIXTURE_OPTIONS: usize = 4;

/// Summary of both fixture documents with first-seen market order.
pub const FIXTURE_SUMMARY: &str =
    "Rugby League\n  Match Betting: 1\nRugby Union\n  Match Betting: 2\n  Handicap: 1\n";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn json_fixture() -> PathBuf {
    fixture_path("options.json")
}

pub fn xml_fixture() -> PathBuf {
    fixture_path("options.xml")
}

/// Reporter loaded from a fixture, with the format picked by extension.
pub fn load_reporter(name: &str, settings: ReportSettings) -> Reporter {
    let path = fixture_path(name);
    let source = SourceFactory::for_path(&path, None).expect("fixture format");
    let mut reporter = Reporter::new(source, settings);
    let file = std::fs::File::open(&path).expect("open fixture");
    reporter.load(file).expect("load fixture");
    reporter
}
