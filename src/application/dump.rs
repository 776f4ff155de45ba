//! Per-competition market price dump (CSV).

use std::io::Write;

use serde::Serialize;

use crate::domain::Competition;

/// Column names of the market price dump, in output order.
pub const CSV_HEADER: [&str; 4] = ["Game", "Closes", "Name", "Calculated Market Percentage"];

/// One row of the market price dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPriceRow {
    pub game: String,
    pub closes: String,
    pub name: String,
    pub market_percentage: f64,
}

/// Build dump rows for `competitions`, ordered by close time.
///
/// Close times are compared as strings. The sort is stable, so
/// competitions closing at the same time keep their source order.
#[must_use]
pub fn market_price_rows(competitions: &[&Competition], odds_divisor: f64) -> Vec<MarketPriceRow> {
    let mut sorted = competitions.to_vec();
    sorted.sort_by(|a, b| a.closes().cmp(b.closes()));

    sorted
        .into_iter()
        .map(|competition| MarketPriceRow {
            game: competition.game().to_string(),
            closes: competition.closes().to_string(),
            name: competition.name().to_string(),
            market_percentage: competition.market_percentage(odds_divisor),
        })
        .collect()
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    write!(writer, "{}\r\n", line.join(","))
}

/// Write the header followed by one record per row.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_market_prices_csv<W: Write>(rows: &[MarketPriceRow], writer: &mut W) -> std::io::Result<()> {
    write_record(writer, &CSV_HEADER)?;
    for row in rows {
        // Debug keeps the fractional part of whole numbers ("0.0", not "0").
        let percentage = format!("{:?}", row.market_percentage);
        write_record(
            writer,
            &[
                row.game.as_str(),
                row.closes.as_str(),
                row.name.as_str(),
                percentage.as_str(),
            ],
        )?;
    }
    writer.flush()
}
