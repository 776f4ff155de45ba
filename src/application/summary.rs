//! Sport / market-name summary report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Competition;

/// Ordering of market names within a sport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    /// Order in which each market name first appears in the source.
    #[default]
    FirstSeen,
    /// Lexicographic order of market names.
    Alphabetical,
}

/// Number of competitions offering a market name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketCount {
    pub name: String,
    pub count: usize,
}

/// Market counts for one sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportSummary {
    pub sport: String,
    pub markets: Vec<MarketCount>,
}

/// Group competitions by sport, then count market names.
///
/// Sports are returned in lexicographic order.
#[must_use]
pub fn summarize(competitions: &[Competition], order: MarketOrder) -> Vec<SportSummary> {
    let mut by_sport: BTreeMap<&str, Vec<MarketCount>> = BTreeMap::new();

    for competition in competitions {
        let markets = by_sport.entry(competition.sport()).or_default();
        match markets.iter_mut().find(|m| m.name == competition.name()) {
            Some(market) => market.count += 1,
            None => markets.push(MarketCount {
                name: competition.name().to_string(),
                count: 1,
            }),
        }
    }

    by_sport
        .into_iter()
        .map(|(sport, mut markets)| {
            if order == MarketOrder::Alphabetical {
                markets.sort_by(|a, b| a.name.cmp(&b.name));
            }
            SportSummary {
                sport: sport.to_string(),
                markets,
            }
        })
        .collect()
}

/// Render a summary as text:
///
/// ```text
/// <Sport Name>
///   <Market Name>: <Total Count>
/// ```
#[must_use]
pub fn render_summary(summary: &[SportSummary]) -> String {
    let mut out = String::new();
    for sport in summary {
        out.push_str(&sport.sport);
        out.push('\n');
        for market in &sport.markets {
            out.push_str(&format!("  {}: {}\n", market.name, market.count));
        }
    }
    out
}
