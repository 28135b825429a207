use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::football::client::PlayerStatsSource;
use crate::football::{LeagueId, LeagueRef, PlayerStat};

/// Per-league page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    Goals,
    Assists,
    /// Goals plus assists
    #[value(alias = "total")]
    GoalsAndAssists,
    Rating,
}

impl RankingMetric {
    /// Sort value of a row. Missing ratings rank below every rated player.
    pub fn value(&self, stat: &PlayerStat) -> f64 {
        match self {
            RankingMetric::Goals => f64::from(stat.goals),
            RankingMetric::Assists => f64::from(stat.assists),
            RankingMetric::GoalsAndAssists => f64::from(stat.total()),
            RankingMetric::Rating => stat.rating.unwrap_or(f64::NEG_INFINITY),
        }
    }
}

/// A competition queried by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: &'static str,
    pub flag: &'static str,
}

impl League {
    pub fn to_ref(&self) -> LeagueRef {
        LeagueRef {
            id: self.id,
            name: self.name.to_string(),
            flag: self.flag.to_string(),
        }
    }
}

/// The top five European leagues, in query order.
pub const TOP_FIVE: [League; 5] = [
    League { id: 39, name: "Premier League", flag: "gb-eng" },
    League { id: 140, name: "La Liga", flag: "es" },
    League { id: 135, name: "Serie A", flag: "it" },
    League { id: 78, name: "Bundesliga", flag: "de" },
    League { id: 61, name: "Ligue 1", flag: "fr" },
];

/// Stable descending sort; equal values keep their incoming order.
pub fn sort_by_metric(rows: &mut [PlayerStat], metric: RankingMetric) {
    rows.sort_by(|a, b| {
        metric
            .value(b)
            .partial_cmp(&metric.value(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Merges per-league player statistics into one cross-league ranking.
#[derive(Debug, Clone)]
pub struct EuropeanAggregator<S> {
    source: S,
    leagues: Vec<LeagueRef>,
}

impl<S: PlayerStatsSource> EuropeanAggregator<S> {
    pub fn new(source: S) -> Self {
        Self::with_leagues(source, TOP_FIVE.iter().map(League::to_ref).collect())
    }

    pub fn with_leagues(source: S, leagues: Vec<LeagueRef>) -> Self {
        Self { source, leagues }
    }

    pub fn leagues(&self) -> &[LeagueRef] {
        &self.leagues
    }

    /// Query each league once, in order, tag rows with their league and rank them.
    ///
    /// At most `leagues × page_size` rows come back. A league that fails
    /// contributes nothing. No deduplication is done across leagues.
    pub async fn ranking(&self, metric: RankingMetric, page_size: usize) -> Vec<PlayerStat> {
        let delay = self.source.league_delay();
        let mut all = Vec::with_capacity(self.leagues.len() * page_size);

        for (i, league) in self.leagues.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let mut rows = match metric {
                RankingMetric::Assists => self.source.top_assists(league.id, page_size).await,
                _ => self.source.top_scorers(league.id, page_size).await,
            };
            rows.truncate(page_size);

            if rows.is_empty() {
                debug!("No {:?} rows for {} ({})", metric, league.name, league.id);
            }

            all.extend(rows.into_iter().map(|mut row| {
                row.league = league.clone();
                row
            }));
        }

        sort_by_metric(&mut all, metric);
        info!("European {:?} ranking built from {} rows", metric, all.len());
        all
    }
}
