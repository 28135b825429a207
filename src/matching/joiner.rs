use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::football::Fixture;
use crate::matching::names::{normalize, TeamNameMatcher};
use crate::odds::{OddsQuote, SportKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Home => "home",
            Outcome::Draw => "draw",
            Outcome::Away => "away",
        })
    }
}

/// 1X2 prices attached to a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOdds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedProbabilities {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl MatchOdds {
    /// The side with the lowest price.
    ///
    /// Draw wins only as the strict minimum; a home/away tie goes to home.
    pub fn favorite(&self) -> Outcome {
        if self.draw < self.home && self.draw < self.away {
            Outcome::Draw
        } else if self.home <= self.away {
            Outcome::Home
        } else {
            Outcome::Away
        }
    }

    pub fn price(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// Bookmaker margin: sum of inverse prices minus one.
    pub fn overround(&self) -> Option<f64> {
        self.inverse_sum().map(|sum| sum - 1.0)
    }

    /// Inverse prices rescaled to sum to one. `None` if any price is not a positive number.
    pub fn implied_probabilities(&self) -> Option<ImpliedProbabilities> {
        let sum = self.inverse_sum()?;
        Some(ImpliedProbabilities {
            home: 1.0 / self.home / sum,
            draw: 1.0 / self.draw / sum,
            away: 1.0 / self.away / sum,
        })
    }

    fn inverse_sum(&self) -> Option<f64> {
        let prices = [self.home, self.draw, self.away];
        if prices.iter().all(|p| p.is_finite() && *p > 0.0) {
            Some(prices.iter().map(|p| 1.0 / p).sum())
        } else {
            None
        }
    }
}

impl From<&OddsQuote> for MatchOdds {
    fn from(quote: &OddsQuote) -> Self {
        Self {
            home: quote.bookmaker_odds.home,
            draw: quote.bookmaker_odds.draw,
            away: quote.bookmaker_odds.away,
        }
    }
}

/// A fixture with odds when a quote could be matched to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedFixture {
    pub fixture: Fixture,
    pub odds: Option<MatchOdds>,
}

impl JoinedFixture {
    pub fn has_odds(&self) -> bool {
        self.odds.is_some()
    }

    pub fn favorite(&self) -> Option<Outcome> {
        self.odds.as_ref().map(MatchOdds::favorite)
    }
}

/// Exact-key index over one sport's quotes, with the ordered quote list kept for the fallback scan.
#[derive(Debug)]
pub struct QuoteIndex<'a> {
    quotes: &'a [OddsQuote],
    by_key: HashMap<String, usize>,
}

impl<'a> QuoteIndex<'a> {
    pub fn new(quotes: &'a [OddsQuote]) -> Self {
        let mut by_key = HashMap::with_capacity(quotes.len());
        for (i, quote) in quotes.iter().enumerate() {
            if let Some(key) = exact_key(&quote.home_team_name, &quote.away_team_name) {
                by_key.entry(key).or_insert(i);
            }
        }
        Self { quotes, by_key }
    }

    /// Exact key first, then the first quote in provider order that passes containment.
    pub fn find(&self, matcher: &TeamNameMatcher, home: &str, away: &str) -> Option<&'a OddsQuote> {
        if let Some(&i) = exact_key(home, away).and_then(|key| self.by_key.get(&key)) {
            return Some(&self.quotes[i]);
        }

        self.quotes
            .iter()
            .find(|quote| matcher.matches(home, away, &quote.home_team_name, &quote.away_team_name))
    }
}

/// Pair key for the exact stage. A side that folds to nothing has no key.
fn exact_key(home: &str, away: &str) -> Option<String> {
    let (home, away) = (normalize(home), normalize(away));
    if home.is_empty() || away.is_empty() {
        return None;
    }
    Some(format!("{}_{}", home, away))
}

/// Attaches odds quotes to fixtures by team name.
#[derive(Debug, Clone, Default)]
pub struct MatchOddsJoiner {
    matcher: TeamNameMatcher,
}

impl MatchOddsJoiner {
    pub fn new(matcher: TeamNameMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &TeamNameMatcher {
        &self.matcher
    }

    /// Join fixtures with the quotes of the sport their competition maps to.
    ///
    /// Fixtures from an unmapped competition, or with no matching quote, get `odds: None`.
    pub fn join(
        &self,
        fixtures: Vec<Fixture>,
        quotes_by_sport: &HashMap<SportKey, Vec<OddsQuote>>,
    ) -> Vec<JoinedFixture> {
        let indexes: HashMap<SportKey, QuoteIndex<'_>> = quotes_by_sport
            .iter()
            .map(|(sport, quotes)| (*sport, QuoteIndex::new(quotes)))
            .collect();

        let joined: Vec<JoinedFixture> = fixtures
            .into_iter()
            .map(|fixture| {
                let odds = SportKey::for_competition(fixture.competition.id)
                    .and_then(|sport| indexes.get(&sport))
                    .and_then(|index| {
                        index.find(&self.matcher, &fixture.home_team.name, &fixture.away_team.name)
                    })
                    .map(MatchOdds::from);
                JoinedFixture { fixture, odds }
            })
            .collect();

        debug!(
            "Joined odds onto {}/{} fixtures",
            joined.iter().filter(|j| j.has_odds()).count(),
            joined.len()
        );
        joined
    }

    /// Join fixtures that are already known to belong to one sport.
    pub fn join_sport(&self, fixtures: Vec<Fixture>, quotes: &[OddsQuote]) -> Vec<JoinedFixture> {
        let index = QuoteIndex::new(quotes);
        fixtures
            .into_iter()
            .map(|fixture| {
                let odds = index
                    .find(&self.matcher, &fixture.home_team.name, &fixture.away_team.name)
                    .map(MatchOdds::from);
                JoinedFixture { fixture, odds }
            })
            .collect()
    }
}
