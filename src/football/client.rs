use crate::config::{ApiSettings, Config};
use crate::error::Result;
use crate::football::{Fixture, LeagueId, PlayerStat, StandingRow, TeamDetails};
use crate::http::ProxyFetcher;
use crate::storage::{cache_key, CacheStore};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default pause between consecutive league requests.
pub const DEFAULT_LEAGUE_DELAY: Duration = Duration::from_millis(120);

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    standings: Vec<StandingRow>,
}

#[derive(Debug, Deserialize)]
struct ScorersResponse {
    #[serde(default)]
    scorers: Vec<PlayerStat>,
}

#[derive(Debug, Deserialize)]
struct AssistsResponse {
    #[serde(default)]
    assists: Vec<PlayerStat>,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<Fixture>,
}

/// Source of per-league player statistics.
#[async_trait]
pub trait PlayerStatsSource: Send + Sync {
    async fn top_scorers(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat>;

    async fn top_assists(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat>;

    /// Pause to insert between consecutive league calls.
    fn league_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Fixtures, standings and player statistics behind the football proxy.
///
/// Every operation is memoized in the shared football store under
/// `operation:params`. Provider failures never escape: they are logged and
/// turned into an empty list or `None`.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    fetcher: ProxyFetcher,
    cache: CacheStore,
    league_delay: Duration,
}

impl FootballDataClient {
    pub fn new(fetcher: ProxyFetcher, cache: CacheStore) -> Self {
        Self {
            fetcher,
            cache,
            league_delay: DEFAULT_LEAGUE_DELAY,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = ProxyFetcher::with_settings(&config.api, &config.api.football_path)?;
        let cache = CacheStore::new("football", config.cache.football_ttl());
        Ok(Self::new(fetcher, cache).with_league_delay(config.throttle.league_delay()))
    }

    pub fn with_settings(settings: &ApiSettings, cache: CacheStore) -> Result<Self> {
        let fetcher = ProxyFetcher::with_settings(settings, &settings.football_path)?;
        Ok(Self::new(fetcher, cache))
    }

    pub fn with_league_delay(mut self, delay: Duration) -> Self {
        self.league_delay = delay;
        self
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub async fn get_standings(&self, league: LeagueId) -> Vec<StandingRow> {
        let key = cache_key("standings", &league);
        let path = format!("competitions/{}/standings", league);
        self.list("standings", &key, || async {
            let body: StandingsResponse = self.fetcher.get_json(&path, &[]).await?;
            Ok(body.standings)
        })
        .await
    }

    pub async fn get_top_scorers(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat> {
        let key = cache_key("top_scorers", &(league, limit));
        let path = format!("competitions/{}/scorers", league);
        self.list("top_scorers", &key, || async {
            let body: ScorersResponse = self.fetcher.get_json(&path, &[("limit", limit.to_string())]).await?;
            Ok(truncated(body.scorers, limit))
        })
        .await
    }

    pub async fn get_top_assists(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat> {
        let key = cache_key("top_assists", &(league, limit));
        let path = format!("competitions/{}/assists", league);
        self.list("top_assists", &key, || async {
            let body: AssistsResponse = self.fetcher.get_json(&path, &[("limit", limit.to_string())]).await?;
            Ok(truncated(body.assists, limit))
        })
        .await
    }

    pub async fn get_next_fixtures(&self, league: LeagueId, count: usize) -> Vec<Fixture> {
        self.league_matches("next_fixtures", league, "SCHEDULED", Some(count)).await
    }

    pub async fn get_last_results(&self, league: LeagueId, count: usize) -> Vec<Fixture> {
        self.league_matches("last_results", league, "FINISHED", Some(count)).await
    }

    pub async fn get_live_fixtures(&self, league: LeagueId) -> Vec<Fixture> {
        self.league_matches("live_fixtures", league, "LIVE", None).await
    }

    pub async fn get_team_fixtures(&self, team_id: u64, count: usize) -> Vec<Fixture> {
        let key = cache_key("team_fixtures", &(team_id, count));
        let path = format!("teams/{}/matches", team_id);
        self.list("team_fixtures", &key, || async {
            let body: MatchesResponse = self.fetcher.get_json(&path, &[("limit", count.to_string())]).await?;
            Ok(truncated(body.matches, count))
        })
        .await
    }

    pub async fn get_team_details(&self, team_id: u64) -> Option<TeamDetails> {
        let key = cache_key("team_details", &team_id);
        let path = format!("teams/{}", team_id);
        self.single("team_details", &key, || async {
            self.fetcher.get_json::<TeamDetails>(&path, &[]).await
        })
        .await
    }

    pub async fn get_match_details(&self, match_id: u64) -> Option<Fixture> {
        let key = cache_key("match_details", &match_id);
        let path = format!("matches/{}", match_id);
        self.single("match_details", &key, || async {
            self.fetcher.get_json::<Fixture>(&path, &[]).await
        })
        .await
    }

    /// Upcoming fixtures for several leagues, fetched one league at a time.
    ///
    /// Consecutive calls are spaced by the configured league delay to stay
    /// under the provider's rate limit. The result is ordered by kickoff.
    pub async fn get_multi_league_fixtures(&self, leagues: &[LeagueId], count: usize) -> Vec<Fixture> {
        let mut all = Vec::new();
        for (i, league) in leagues.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.league_delay).await;
            }
            all.extend(self.get_next_fixtures(*league, count).await);
        }
        all.sort_by_key(|fixture| fixture.kickoff_time);
        all
    }

    async fn league_matches(
        &self,
        operation: &'static str,
        league: LeagueId,
        status: &'static str,
        count: Option<usize>,
    ) -> Vec<Fixture> {
        let key = cache_key(operation, &(league, status, count));
        let path = format!("competitions/{}/matches", league);
        let mut query = vec![("status", status.to_string())];
        if let Some(count) = count {
            query.push(("limit", count.to_string()));
        }

        self.list(operation, &key, || async {
            let body: MatchesResponse = self.fetcher.get_json(&path, &query).await?;
            Ok(match count {
                Some(count) => truncated(body.matches, count),
                None => body.matches,
            })
        })
        .await
    }

    async fn list<T, F, Fut>(&self, operation: &str, key: &str, producer: F) -> Vec<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<T>>>,
    {
        match self.cache.fetch(key, producer).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("{} failed ({}), returning empty list: {}", operation, e.error_code(), e);
                Vec::new()
            }
        }
    }

    async fn single<T, F, Fut>(&self, operation: &str, key: &str, producer: F) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        match self.cache.fetch(key, producer).await {
            Ok(value) => Some(value),
            Err(e) if e.is_not_found() => {
                debug!("{} found nothing for {}", operation, key);
                None
            }
            Err(e) => {
                warn!("{} failed ({}), returning nothing: {}", operation, e.error_code(), e);
                None
            }
        }
    }
}

#[async_trait]
impl PlayerStatsSource for FootballDataClient {
    async fn top_scorers(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat> {
        self.get_top_scorers(league, limit).await
    }

    async fn top_assists(&self, league: LeagueId, limit: usize) -> Vec<PlayerStat> {
        self.get_top_assists(league, limit).await
    }

    fn league_delay(&self) -> Duration {
        self.league_delay
    }
}

fn truncated<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}
