//! Oddsreport - Market percentage and summary reports for betting snapshots.
//!
//! This crate loads a snapshot of betting options (competitions with their
//! priced selections) from a JSON or XML document and answers a handful of
//! reports over it.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Competitions, selections and the market percentage math
//! - **`port`** - The `CompetitionSource` trait every document format implements
//! - **`adapter::outbound::source`** - JSON and XML document adapters
//! - **`application`** - Ranking, summary and CSV dump use cases behind `Reporter`
//! - **`adapter::inbound::cli`** - The `oddsreport` command line
//! - **`infrastructure::config`** - TOML configuration and logging setup
//!
//! # Modules
//!
//! - [`domain`] - Format-agnostic types
//! - [`port`] - Trait definitions
//! - [`adapter`] - Port implementations
//! - [`application`] - Report services
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsreport::adapter::outbound::source::JsonSource;
//! use oddsreport::application::{ReportSettings, Reporter};
//!
//! let document = r#"{"options": {"option": [
//!     {"competition": "NRL", "name": "Match Betting", "sport": "Rugby League",
//!      "selections": {"selection": [
//!         {"number": 1, "odds": 150}, {"number": 2, "odds": 250}]}}
//! ]}}"#;
//!
//! let mut reporter = Reporter::new(Box::new(JsonSource::new()), ReportSettings::default());
//! reporter.load_str(document).unwrap();
//! assert_eq!(reporter.option_count(), 1);
//! assert_eq!(reporter.largest_market_percentage(), Some("NRL"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
