use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::aggregate::{EuropeanAggregator, RankingMetric};
use crate::config::Config;
use crate::error::Result;
use crate::football::{FootballDataClient, LeagueId, PlayerStat};
use crate::matching::{ClubCodes, JoinedFixture, MatchOddsJoiner, TeamNameMatcher};
use crate::odds::{OddsDataClient, SportKey};
use crate::refresh::{PeriodicTask, RefreshHandle};

/// Entry point for consumers: both provider clients plus the joiner.
#[derive(Debug, Clone)]
pub struct MatchdayService {
    football: FootballDataClient,
    odds: OddsDataClient,
    joiner: MatchOddsJoiner,
}

impl MatchdayService {
    pub fn new(football: FootballDataClient, odds: OddsDataClient, joiner: MatchOddsJoiner) -> Self {
        Self { football, odds, joiner }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let football = FootballDataClient::from_config(config)?;
        let odds = OddsDataClient::from_config(config)?;

        let mut codes = ClubCodes::builtin().clone();
        if let Some(path) = &config.matching.extra_codes_file {
            match ClubCodes::load(path) {
                Ok(extra) => codes.extend(extra),
                Err(e) => warn!("Ignoring club code table {}: {}", path.display(), e),
            }
        }

        Ok(Self::new(football, odds, MatchOddsJoiner::new(TeamNameMatcher::new(codes))))
    }

    pub fn football(&self) -> &FootballDataClient {
        &self.football
    }

    pub fn odds(&self) -> &OddsDataClient {
        &self.odds
    }

    pub fn joiner(&self) -> &MatchOddsJoiner {
        &self.joiner
    }

    /// Upcoming fixtures of the given competitions with odds attached where a quote matched.
    ///
    /// The throttled fixture sweep and the concurrent odds fan-out run side by side.
    pub async fn upcoming_with_odds(&self, sports: &[SportKey], count: usize) -> Vec<JoinedFixture> {
        let leagues: Vec<LeagueId> = sports.iter().map(SportKey::competition_id).collect();

        let (fixtures, quotes) = tokio::join!(
            self.football.get_multi_league_fixtures(&leagues, count),
            self.odds.get_odds_for_sports(sports),
        );

        self.joiner.join(fixtures, &quotes)
    }

    /// Cross-league ranking over the top five leagues.
    pub async fn european_ranking(&self, metric: RankingMetric, page_size: usize) -> Vec<PlayerStat> {
        EuropeanAggregator::new(self.football.clone())
            .ranking(metric, page_size)
            .await
    }

    /// Rebuild the odds board every `period` and hand each result to `on_update`.
    pub fn start_board_refresh<F>(
        &self,
        sports: Vec<SportKey>,
        count: usize,
        period: Duration,
        on_update: F,
    ) -> RefreshHandle
    where
        F: Fn(Vec<JoinedFixture>) + Send + Sync + 'static,
    {
        let service = self.clone();
        let sports = Arc::new(sports);
        let on_update = Arc::new(on_update);

        PeriodicTask::spawn("odds-board", period, move || {
            let service = service.clone();
            let sports = Arc::clone(&sports);
            let on_update = Arc::clone(&on_update);
            async move {
                let board = service.upcoming_with_odds(&sports, count).await;
                info!(
                    "Odds board refreshed: {} fixtures, {} with odds",
                    board.len(),
                    board.iter().filter(|j| j.has_odds()).count()
                );
                on_update(board);
            }
        })
    }
}
