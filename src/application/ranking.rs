//! Largest / least market percentage scans.
//!
//! Both scans walk competitions in source order and keep the first
//! competition that reaches the extreme; later ties never replace it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Competition;

/// Starting value of the legacy "least" scan.
pub const LEGACY_LEAST_SENTINEL: f64 = 100_000.0;

/// How a ranking scan seeds its running extreme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// "Largest" starts at 0 and "least" at [`LEGACY_LEAST_SENTINEL`].
    ///
    /// When no competition has a priced selection, "largest" finds nothing
    /// while "least" reports the first competition.
    #[default]
    Legacy,
    /// Both scans start from the first competition, so a non-empty list
    /// always produces a result.
    Seeded,
}

/// A competition together with its computed market percentage.
#[derive(Debug, Clone, Copy)]
pub struct RankedCompetition<'a> {
    pub competition: &'a Competition,
    pub market_percentage: f64,
}

impl<'a> RankedCompetition<'a> {
    /// Series name of the ranked competition.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.competition.competition()
    }
}

#[derive(Clone, Copy)]
enum Extreme {
    Largest,
    Least,
}

impl Extreme {
    fn replaces(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Largest => candidate > current,
            Self::Least => candidate < current,
        }
    }

    fn legacy_floor(self) -> f64 {
        match self {
            Self::Largest => 0.0,
            Self::Least => LEGACY_LEAST_SENTINEL,
        }
    }
}

fn scan<'a>(
    competitions: &'a [Competition],
    policy: RankingPolicy,
    odds_divisor: f64,
    extreme: Extreme,
) -> Option<RankedCompetition<'a>> {
    let mut ranked = competitions.iter().map(|competition| RankedCompetition {
        competition,
        market_percentage: competition.market_percentage(odds_divisor),
    });

    let (mut best, mut bound) = match policy {
        RankingPolicy::Legacy => (None, extreme.legacy_floor()),
        RankingPolicy::Seeded => {
            let first = ranked.next()?;
            (Some(first), first.market_percentage)
        }
    };

    for candidate in ranked {
        if extreme.replaces(candidate.market_percentage, bound) {
            bound = candidate.market_percentage;
            best = Some(candidate);
        }
    }

    if let Some(found) = &best {
        debug!(
            competition = found.name(),
            market_percentage = found.market_percentage,
            ?policy,
            "ranking scan complete"
        );
    }
    best
}

/// Competition with the largest market percentage.
#[must_use]
pub fn largest_market_percentage(
    competitions: &[Competition],
    policy: RankingPolicy,
    odds_divisor: f64,
) -> Option<RankedCompetition<'_>> {
    scan(competitions, policy, odds_divisor, Extreme::Largest)
}

/// Competition with the least market percentage.
#[must_use]
pub fn least_market_percentage(
    competitions: &[Competition],
    policy: RankingPolicy,
    odds_divisor: f64,
) -> Option<RankedCompetition<'_>> {
    scan(competitions, policy, odds_divisor, Extreme::Least)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompetitionInfo, Selection};

    fn competition(name: &str, odds: &[i64]) -> Competition {
        let mut comp = Competition::new(CompetitionInfo {
            competition: name.into(),
            ..Default::default()
        });
        for (i, price) in odds.iter().enumerate() {
            comp.add_selection(Selection::new(i as u32 + 1, format!("S{i}"), *price, "OK"));
        }
        comp
    }

    fn fixture() -> Vec<Competition> {
        vec![
            // 1/195 + 1/205 = 0.010006...
            competition("Super Rugby", &[195, 205, 0]),
            // 1/130 + 1/790 = 0.008958...
            competition("Super Rugby B", &[130, 790]),
            // 2/190 = 0.010526...
            competition("Mitre 10 Cup", &[190, 190]),
            // 1/150 + 1/250 = 0.010666...
            competition("NRL", &[150, 250]),
        ]
    }

    #[test]
    fn largest_picks_highest_book() {
        let comps = fixture();
        let found = largest_market_percentage(&comps, RankingPolicy::Legacy, 1.0).unwrap();
        assert_eq!(found.name(), "NRL");
        assert!((found.market_percentage - (1.0 / 150.0 + 1.0 / 250.0)).abs() < 1e-15);
    }

    #[test]
    fn least_picks_lowest_book() {
        let comps = fixture();
        let found = least_market_percentage(&comps, RankingPolicy::Legacy, 1.0).unwrap();
        assert_eq!(found.name(), "Super Rugby B");
    }

    #[test]
    fn first_competition_wins_ties() {
        let comps = vec![
            competition("First", &[200, 200]),
            competition("Second", &[200, 200]),
        ];
        for policy in [RankingPolicy::Legacy, RankingPolicy::Seeded] {
            assert_eq!(
                largest_market_percentage(&comps, policy, 1.0).unwrap().name(),
                "First"
            );
            assert_eq!(
                least_market_percentage(&comps, policy, 1.0).unwrap().name(),
                "First"
            );
        }
    }

    #[test]
    fn empty_list_has_no_result() {
        for policy in [RankingPolicy::Legacy, RankingPolicy::Seeded] {
            assert!(largest_market_percentage(&[], policy, 1.0).is_none());
            assert!(least_market_percentage(&[], policy, 1.0).is_none());
        }
    }

    #[test]
    fn legacy_policy_is_asymmetric_without_prices() {
        let comps = vec![competition("Unpriced", &[0]), competition("Also", &[])];
        assert!(largest_market_percentage(&comps, RankingPolicy::Legacy, 1.0).is_none());
        assert_eq!(
            least_market_percentage(&comps, RankingPolicy::Legacy, 1.0)
                .unwrap()
                .name(),
            "Unpriced"
        );
    }

    #[test]
    fn seeded_policy_is_symmetric_without_prices() {
        let comps = vec![competition("Unpriced", &[0]), competition("Also", &[])];
        assert_eq!(
            largest_market_percentage(&comps, RankingPolicy::Seeded, 1.0)
                .unwrap()
                .name(),
            "Unpriced"
        );
        assert_eq!(
            least_market_percentage(&comps, RankingPolicy::Seeded, 1.0)
                .unwrap()
                .name(),
            "Unpriced"
        );
    }

    #[test]
    fn legacy_least_prefers_unpriced_competition() {
        let mut comps = fixture();
        comps.push(competition("Scratched", &[0, 0]));
        assert_eq!(
            least_market_percentage(&comps, RankingPolicy::Legacy, 1.0)
                .unwrap()
                .name(),
            "Scratched"
        );
    }

    #[test]
    fn divisor_scales_but_keeps_order() {
        let comps = fixture();
        let found = largest_market_percentage(&comps, RankingPolicy::Legacy, 100.0).unwrap();
        assert_eq!(found.name(), "NRL");
        assert!((found.market_percentage - (1.0 / 1.5 + 1.0 / 2.5)).abs() < 1e-12);
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            ranking: RankingPolicy,
        }
        let parsed: Wrapper = toml::from_str("ranking = \"seeded\"").unwrap();
        assert_eq!(parsed.ranking, RankingPolicy::Seeded);
    }
}
