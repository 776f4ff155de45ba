//! Competition (market instance) domain type.
//!
//! - [`Competition`] - One betting market for a game, owning its selections
//! - [`CompetitionInfo`] - Descriptive fields used to build a competition

use std::collections::BTreeSet;

use serde::Serialize;

use super::market::calc_market_percentage;
use super::selection::Selection;

/// Descriptive fields of a competition, as read from a source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitionInfo {
    pub venue: String,
    pub competition: String,
    pub closes: String,
    pub name: String,
    pub number: u32,
    pub sport: String,
    pub game: String,
}

/// A single market instance (an "option" in the source feed).
///
/// The `competition` field is the series name (e.g. "Super Rugby") and is
/// the key used for name lookups; `name` is the market name (e.g. "Match
/// Betting"). Selections form a value set: adding an equal selection twice
/// keeps a single copy.
#[derive(Debug, Clone, Serialize)]
pub struct Competition {
    venue: String,
    competition: String,
    closes: String,
    name: String,
    number: u32,
    sport: String,
    game: String,
    selections: BTreeSet<Selection>,
}

impl Competition {
    /// Create a competition with no selections.
    pub fn new(info: CompetitionInfo) -> Self {
        let CompetitionInfo {
            venue,
            competition,
            closes,
            name,
            number,
            sport,
            game,
        } = info;
        Self {
            venue,
            competition,
            closes,
            name,
            number,
            sport,
            game,
            selections: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Series name this market belongs to.
    #[must_use]
    pub fn competition(&self) -> &str {
        &self.competition
    }

    /// Close time as provided by the source. Sorts correctly when the
    /// source uses an ISO-8601 style format.
    #[must_use]
    pub fn closes(&self) -> &str {
        &self.closes
    }

    /// Market name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    #[must_use]
    pub fn game(&self) -> &str {
        &self.game
    }

    /// Add a selection. Returns `false` if an equal selection was already present.
    pub fn add_selection(&mut self, selection: Selection) -> bool {
        self.selections.insert(selection)
    }

    /// Number of distinct selections.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Selections ordered by ascending `number`.
    #[must_use]
    pub fn selections(&self) -> Vec<&Selection> {
        self.selections.iter().collect()
    }

    /// Selections ordered by ascending `key`.
    ///
    /// The sort is stable, so selections with equal keys keep their
    /// default (number) order.
    pub fn selections_by_key<K, F>(&self, key: F) -> Vec<&Selection>
    where
        K: Ord,
        F: FnMut(&&Selection) -> K,
    {
        let mut selections = self.selections();
        selections.sort_by_key(key);
        selections
    }

    /// Odds of the selections that carry a price, in default selection order.
    pub fn priced_odds(&self) -> impl Iterator<Item = i64> + '_ {
        self.selections
            .iter()
            .filter(|s| s.is_priced())
            .map(Selection::odds)
    }

    /// True when at least one selection carries a price.
    #[must_use]
    pub fn has_priced_selections(&self) -> bool {
        self.priced_odds().next().is_some()
    }

    /// Market percentage over the priced selections.
    ///
    /// Each price is divided by `odds_divisor` before taking its reciprocal;
    /// a divisor of `1.0` uses the raw minor-unit prices.
    #[must_use]
    pub fn market_percentage(&self, odds_divisor: f64) -> f64 {
        calc_market_percentage(self.priced_odds().map(|odds| odds as f64 / odds_divisor))
    }
}
