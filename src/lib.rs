pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod football;
pub mod http;
pub mod matching;
pub mod odds;
pub mod refresh;
pub mod service;
pub mod storage;

pub use aggregate::{EuropeanAggregator, RankingMetric};
pub use config::Config;
pub use error::{Error, Result};
pub use football::FootballDataClient;
pub use matching::{MatchOddsJoiner, TeamNameMatcher};
pub use odds::{OddsDataClient, SportKey};
pub use refresh::{PeriodicTask, RefreshHandle};
pub use service::MatchdayService;
pub use storage::CacheStore;
