use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub throttle: ThrottleSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_football_path")]
    pub football_path: String,

    #[serde(default = "default_odds_path")]
    pub odds_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Football store TTL in seconds
    #[serde(default = "default_football_ttl")]
    pub football_ttl: u64,

    /// Odds store TTL in seconds
    #[serde(default = "default_odds_ttl")]
    pub odds_ttl: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrottleSettings {
    /// Pause between consecutive league requests, in milliseconds
    #[serde(default = "default_league_delay_ms")]
    pub league_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSettings {
    /// Periodic refetch interval in seconds
    #[serde(default = "default_refresh_interval")]
    pub interval: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingSettings {
    /// Extra club-code table merged over the built-in one
    #[serde(default)]
    pub extra_codes_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub log_to_file: bool,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default)]
    pub json_format: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::NotFound(path.as_ref().display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a config file.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.api.base_url)
            .map_err(|_| ConfigError::InvalidUrl(self.api.base_url.clone()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!("Unsupported scheme: {}", base.scheme())));
        }

        for proxy_path in [&self.api.football_path, &self.api.odds_path] {
            if !proxy_path.starts_with('/') {
                return Err(ConfigError::Invalid(format!("Proxy path must start with '/': {}", proxy_path)));
            }
        }

        if self.api.timeout == 0 {
            return Err(ConfigError::Invalid("Timeout must be greater than 0".to_string()));
        }

        if self.cache.football_ttl == 0 || self.cache.odds_ttl == 0 {
            return Err(ConfigError::Invalid("Cache TTLs must be greater than 0".to_string()));
        }

        if self.refresh.interval == 0 {
            return Err(ConfigError::Invalid("Refresh interval must be greater than 0".to_string()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("MATCHDAY_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(level) = std::env::var("MATCHDAY_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(delay) = std::env::var("MATCHDAY_LEAGUE_DELAY_MS") {
            if let Ok(val) = delay.parse() {
                self.throttle.league_delay_ms = val;
            }
        }
    }

    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("matchday"))
            .ok_or_else(|| ConfigError::Invalid("Could not determine config directory".to_string()))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl CacheSettings {
    pub fn football_ttl(&self) -> Duration {
        Duration::from_secs(self.football_ttl)
    }

    pub fn odds_ttl(&self) -> Duration {
        Duration::from_secs(self.odds_ttl)
    }
}

impl ThrottleSettings {
    pub fn league_delay(&self) -> Duration {
        Duration::from_millis(self.league_delay_ms)
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            football_path: default_football_path(),
            odds_path: default_odds_path(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            football_ttl: default_football_ttl(),
            odds_ttl: default_odds_ttl(),
        }
    }
}

impl Default for ThrottleSettings {
    fn default() -> Self {
        Self {
            league_delay_ms: default_league_delay_ms(),
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval: default_refresh_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_file: false,
            log_file: default_log_file(),
            json_format: false,
        }
    }
}

fn default_base_url() -> String { "http://localhost:3000".to_string() }
fn default_football_path() -> String { "/api/football".to_string() }
fn default_odds_path() -> String { "/api/odds".to_string() }
fn default_timeout() -> u64 { 15 }
fn default_user_agent() -> String {
    format!("matchday/{}", env!("CARGO_PKG_VERSION"))
}

fn default_football_ttl() -> u64 { 300 }
fn default_odds_ttl() -> u64 { 180 }
fn default_league_delay_ms() -> u64 { 120 }
fn default_refresh_interval() -> u64 { 60 }

fn default_log_level() -> String { "warn".to_string() }
fn default_log_file() -> String { "logs/matchday.log".to_string() }
