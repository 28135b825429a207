use crate::config::{ApiSettings, Config};
use crate::error::{Error, Result};
use crate::http::{header_value, FetchFailure, ProxyFetcher};
use crate::odds::{OddsQuote, OddsResponse, SportKey};
use crate::storage::{cache_key, CacheStore};
use futures::future::join_all;
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use tracing::{debug, warn};

pub const REQUESTS_USED_HEADER: &str = "x-requests-used";
pub const REQUESTS_REMAINING_HEADER: &str = "x-requests-remaining";

/// Odds quotes behind the odds proxy, one cache entry per sport key.
#[derive(Debug, Clone)]
pub struct OddsDataClient {
    fetcher: ProxyFetcher,
    cache: CacheStore,
}

impl OddsDataClient {
    pub fn new(fetcher: ProxyFetcher, cache: CacheStore) -> Self {
        Self { fetcher, cache }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = ProxyFetcher::with_settings(&config.api, &config.api.odds_path)?;
        let cache = CacheStore::new("odds", config.cache.odds_ttl());
        Ok(Self::new(fetcher, cache))
    }

    pub fn with_settings(settings: &ApiSettings, cache: CacheStore) -> Result<Self> {
        let fetcher = ProxyFetcher::with_settings(settings, &settings.odds_path)?;
        Ok(Self::new(fetcher, cache))
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Quotes for one competition. Any failure yields an empty list.
    pub async fn get_odds_by_sport(&self, sport: SportKey) -> Vec<OddsQuote> {
        let key = cache_key("odds", sport.as_str());
        let result = self
            .cache
            .fetch(&key, || self.fetch_sport(sport))
            .await;

        match result {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Odds for {} unavailable ({}): {}", sport, e.error_code(), e);
                Vec::new()
            }
        }
    }

    /// Quotes for several competitions, requested concurrently.
    ///
    /// A sport whose request fails maps to an empty list; the others are unaffected.
    pub async fn get_odds_for_sports(&self, sports: &[SportKey]) -> HashMap<SportKey, Vec<OddsQuote>> {
        let requests = sports.iter().map(|sport| async move {
            (*sport, self.get_odds_by_sport(*sport).await)
        });

        join_all(requests).await.into_iter().collect()
    }

    async fn fetch_sport(&self, sport: SportKey) -> Result<Vec<OddsQuote>> {
        let fetched = self
            .fetcher
            .get_json_with_headers::<OddsResponse>("", &[("sport", sport.as_str().to_string())])
            .await;

        match fetched {
            Ok(fetched) => {
                let body = fetched.body;
                if !body.success {
                    log_quota(sport, Some(&fetched.headers));
                    return Err(Error::Http(format!("odds provider reported failure for {}", sport)));
                }
                if let Some(usage) = body.api_usage {
                    debug!(
                        "Odds API usage after {}: used={:?} remaining={:?}",
                        sport, usage.used, usage.remaining
                    );
                }
                debug!("Received {} odds quotes for {}", body.data.len(), sport);
                Ok(body.data.into_iter().map(OddsQuote::from).collect())
            }
            Err(FetchFailure { error, headers }) => {
                log_quota(sport, headers.as_ref());
                Err(error)
            }
        }
    }
}

/// Log the provider's quota headers, if it sent any. Informational only.
fn log_quota(sport: SportKey, headers: Option<&HeaderMap>) {
    let Some(headers) = headers else {
        return;
    };
    let used = header_value(headers, REQUESTS_USED_HEADER);
    let remaining = header_value(headers, REQUESTS_REMAINING_HEADER);
    if used.is_some() || remaining.is_some() {
        warn!(
            "Odds quota for {}: used={} remaining={}",
            sport,
            used.as_deref().unwrap_or("?"),
            remaining.as_deref().unwrap_or("?")
        );
    }
}
