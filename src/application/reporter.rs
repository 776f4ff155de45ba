//! Report generation over a loaded snapshot.
//!
//! [`Reporter`] owns a [`CompetitionSource`] and answers every report from
//! the competitions it holds. Nothing is cached between calls.

use std::io::{Read, Write};

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::dump::{market_price_rows, write_market_prices_csv, MarketPriceRow};
use super::ranking::{largest_market_percentage, least_market_percentage, RankingPolicy};
use super::summary::{render_summary, summarize, MarketOrder, SportSummary};
use crate::error::Result;
use crate::port::CompetitionSource;

/// Report tuning, read from the `[report]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Seeding policy for the largest / least scans.
    pub ranking: RankingPolicy,
    /// Market-name order within each sport of the summary.
    pub market_order: MarketOrder,
    /// Prices are divided by this before taking reciprocals.
    pub odds_divisor: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            ranking: RankingPolicy::default(),
            market_order: MarketOrder::default(),
            odds_divisor: 1.0,
        }
    }
}

/// Generates reports from a snapshot loaded through a [`CompetitionSource`].
pub struct Reporter {
    source: Box<dyn CompetitionSource>,
    settings: ReportSettings,
}

impl Reporter {
    pub fn new(source: Box<dyn CompetitionSource>, settings: ReportSettings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub fn source(&self) -> &dyn CompetitionSource {
        self.source.as_ref()
    }

    /// Read and parse a whole document.
    ///
    /// The raw bytes go to the source, which owns character decoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the document is malformed.
    /// Nothing from a failed load is kept.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        self.load_bytes(&input)
    }

    /// Parse a document already held as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn load_str(&mut self, input: &str) -> Result<()> {
        self.load_bytes(input.as_bytes())
    }

    /// Parse a document already held as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or cannot be decoded.
    pub fn load_bytes(&mut self, input: &[u8]) -> Result<()> {
        let format = self.source.format();
        self.source.parse_bytes(input)?;

        let competitions = self.source.competitions();
        let unpriced = competitions
            .iter()
            .filter(|c| !c.has_priced_selections())
            .count();
        if unpriced > 0 {
            warn!(
                competitions = unpriced,
                "competitions without priced selections"
            );
        }
        info!(
            %format,
            options = self.source.option_count(),
            "snapshot loaded"
        );
        Ok(())
    }

    /// Total number of options in the loaded document.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.source.option_count()
    }

    /// Name of the competition with the largest market percentage.
    #[must_use]
    pub fn largest_market_percentage(&self) -> Option<&str> {
        largest_market_percentage(
            self.source.competitions(),
            self.settings.ranking,
            self.settings.odds_divisor,
        )
        .map(|found| found.name())
    }

    /// Name of the competition with the least market percentage.
    #[must_use]
    pub fn least_market_percentage(&self) -> Option<&str> {
        least_market_percentage(
            self.source.competitions(),
            self.settings.ranking,
            self.settings.odds_divisor,
        )
        .map(|found| found.name())
    }

    /// Market price rows for the competitions named `name`, by close time.
    #[must_use]
    pub fn competition_market_prices(&self, name: &str) -> Vec<MarketPriceRow> {
        let matching = self.source.competitions_by_name(name);
        debug!(competition = name, matches = matching.len(), "selected competitions");
        market_price_rows(&matching, self.settings.odds_divisor)
    }

    /// Write the market prices of the competitions named `name` as CSV.
    ///
    /// Columns: `Game,Closes,Name,Calculated Market Percentage`. The
    /// header is written even when nothing matches. Returns the number of
    /// data rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn dump_competition_market_prices<W: Write>(&self, name: &str, writer: &mut W) -> Result<usize> {
        let rows = self.competition_market_prices(name);
        write_market_prices_csv(&rows, writer)?;
        Ok(rows.len())
    }

    /// Structured sport / market-name counts.
    #[must_use]
    pub fn summary_report(&self) -> Vec<SportSummary> {
        summarize(self.source.competitions(), self.settings.market_order)
    }

    /// Summary report as text:
    ///
    /// ```text
    /// <Sport Name>
    ///   <Market Name>: <Total Count>
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        render_summary(&self.summary_report())
    }
}
