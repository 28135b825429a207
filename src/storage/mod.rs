pub mod cache;
pub mod clock;

pub use cache::{cache_key, CacheEntry, CacheStats, CacheStore, FOOTBALL_TTL, ODDS_TTL};
pub use clock::{Clock, ManualClock, SystemClock};
