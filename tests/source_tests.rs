//! Document adapter integration tests.

mod support;

use std::path::Path;

use oddsreport::adapter::outbound::source::{JsonSource, SourceFactory, XmlSource};
use oddsreport::error::{Error, SourceError};
use oddsreport::port::{CompetitionSource, SourceFormat};

use support::fixtures::{json_fixture, xml_fixture, FIXTURE_OPTIONS};

fn parse_fixture(path: &Path) -> Box<dyn CompetitionSource> {
    let mut source = SourceFactory::for_path(path, None).unwrap();
    let input = std::fs::read_to_string(path).unwrap();
    source.parse(&input).unwrap();
    source
}

#[test]
fn json_and_xml_fixtures_describe_the_same_snapshot() {
    let json = parse_fixture(&json_fixture());
    let xml = parse_fixture(&xml_fixture());
    assert_eq!(json.format(), SourceFormat::Json);
    assert_eq!(xml.format(), SourceFormat::Xml);
    assert_eq!(json.option_count(), FIXTURE_OPTIONS);
    assert_eq!(xml.option_count(), FIXTURE_OPTIONS);

    for (a, b) in json.competitions().iter().zip(xml.competitions()) {
        assert_eq!(a.venue(), b.venue());
        assert_eq!(a.competition(), b.competition());
        assert_eq!(a.closes(), b.closes());
        assert_eq!(a.name(), b.name());
        assert_eq!(a.number(), b.number());
        assert_eq!(a.sport(), b.sport());
        assert_eq!(a.game(), b.game());
        assert_eq!(a.selections(), b.selections());
    }
}

#[test]
fn competitions_keep_document_order() {
    let source = parse_fixture(&json_fixture());
    let games: Vec<&str> = source.competitions().iter().map(|c| c.game()).collect();
    assert_eq!(
        games,
        vec![
            "Blues v Chiefs",
            "Crusaders v Highlanders",
            "Auckland v Otago",
            "Storm v Broncos",
        ]
    );
}

#[test]
fn competitions_by_name_returns_every_match() {
    let source = parse_fixture(&xml_fixture());
    assert_eq!(source.competitions_by_name("Super Rugby").len(), 2);
    assert_eq!(source.competitions_by_name("NRL").len(), 1);
    assert!(source.competitions_by_name("super rugby").is_empty());
}

#[test]
fn scratched_selection_is_kept_but_unpriced() {
    let source = parse_fixture(&json_fixture());
    let blues = &source.competitions()[0];
    assert_eq!(blues.selection_count(), 3);
    let draw = blues.selections()[2];
    assert_eq!(draw.status(), "SCRATCHED");
    assert!(!draw.is_priced());
    assert_eq!(blues.priced_odds().collect::<Vec<_>>(), vec![195, 205]);
}

#[test]
fn option_count_ignores_selection_counts() {
    let mut source = JsonSource::new();
    source
        .parse(
            r#"{"options": {"option": [
                {"selections": {"selection": [{"number": 1, "odds": 100}, {"number": 2, "odds": 300}]}},
                {}
            ]}}"#,
        )
        .unwrap();
    assert_eq!(source.option_count(), 2);
}

#[test]
fn nested_options_are_found_at_any_depth() {
    let mut source = XmlSource::new();
    source
        .parse(
            r#"<feed><snapshot><options>
                <option competition="NRL" number="7"/>
            </options></snapshot></feed>"#,
        )
        .unwrap();
    assert_eq!(source.option_count(), 1);
    assert_eq!(source.competitions()[0].number(), 7);
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = SourceFactory::for_path(Path::new("options.csv"), None).err().unwrap();
    assert!(matches!(
        err,
        Error::Source(SourceError::UnsupportedFormat { .. })
    ));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn extension_match_is_case_insensitive() {
    let source = SourceFactory::for_path(Path::new("OPTIONS.XML"), None).unwrap();
    assert_eq!(source.format(), SourceFormat::Xml);
}

#[test]
fn malformed_json_is_a_source_error() {
    let mut source = JsonSource::new();
    let err = source.parse("{\"options\": {\"option\": [").unwrap_err();
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn malformed_xml_is_a_source_error() {
    let mut source = XmlSource::new();
    let err = source.parse("<options><option></selections></options>").unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert_eq!(err.exit_code(), 65);
}
