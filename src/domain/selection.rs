//! A single priced outcome within a competition.

use std::fmt;

use serde::Serialize;

/// A selection (outcome) offered in a competition's market.
///
/// Selections are plain values: two selections with the same number, name,
/// odds and status are the same selection. The derived ordering compares
/// `number` first, which gives the default presentation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Selection {
    number: u32,
    name: String,
    odds: i64,
    status: String,
}

impl Selection {
    /// Create a new selection.
    ///
    /// `odds` is the price in minor currency units; `0` means no price is
    /// available.
    pub fn new(number: u32, name: impl Into<String>, odds: i64, status: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            odds,
            status: status.into(),
        }
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn odds(&self) -> i64 {
        self.odds
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True when the selection carries a usable price.
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        self.odds > 0
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Selection> Number: {}, Odds: {}, Status: {}",
            self.number, self.odds, self.status
        )
    }
}
