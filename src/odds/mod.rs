pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::football::LeagueId;

pub use client::OddsDataClient;

/// The odds provider's identifier for a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportKey {
    Ligue1,
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
    ChampionsLeague,
    EuropaLeague,
    Ligue2,
}

/// Football competition id to odds sport key.
const COMPETITION_SPORTS: [(LeagueId, SportKey); 8] = [
    (61, SportKey::Ligue1),
    (39, SportKey::PremierLeague),
    (140, SportKey::LaLiga),
    (135, SportKey::SerieA),
    (78, SportKey::Bundesliga),
    (2, SportKey::ChampionsLeague),
    (3, SportKey::EuropaLeague),
    (62, SportKey::Ligue2),
];

impl SportKey {
    pub const ALL: [SportKey; 8] = [
        SportKey::Ligue1,
        SportKey::PremierLeague,
        SportKey::LaLiga,
        SportKey::SerieA,
        SportKey::Bundesliga,
        SportKey::ChampionsLeague,
        SportKey::EuropaLeague,
        SportKey::Ligue2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportKey::Ligue1 => "ligue1",
            SportKey::PremierLeague => "premierleague",
            SportKey::LaLiga => "laliga",
            SportKey::SerieA => "seriea",
            SportKey::Bundesliga => "bundesliga",
            SportKey::ChampionsLeague => "championsleague",
            SportKey::EuropaLeague => "europaleague",
            SportKey::Ligue2 => "ligue2",
        }
    }

    /// Odds feed that applies to fixtures of a football competition.
    pub fn for_competition(id: LeagueId) -> Option<SportKey> {
        COMPETITION_SPORTS
            .iter()
            .find(|(league, _)| *league == id)
            .map(|(_, sport)| *sport)
    }

    pub fn competition_id(&self) -> LeagueId {
        COMPETITION_SPORTS
            .iter()
            .find(|(_, sport)| sport == self)
            .map(|(league, _)| *league)
            .unwrap_or_default()
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SportKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Invalid(format!("Unknown sport key: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverUnder {
    pub line: f64,
    pub over: f64,
    pub under: f64,
}

/// Decimal prices for the three match outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmakerOdds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
    #[serde(default)]
    pub over_under: Option<OverUnder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    pub id: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub commence_time: DateTime<Utc>,
    pub bookmaker_odds: BookmakerOdds,
}

/// Response envelope of the odds proxy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsResponse {
    pub success: bool,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub api_usage: Option<ApiUsage>,
    #[serde(default)]
    pub data: Vec<OddsQuoteWire>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ApiUsage {
    #[serde(default)]
    pub remaining: Option<u64>,
    #[serde(default)]
    pub used: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsQuoteWire {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    pub odds: OddsBlockWire,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsBlockWire {
    #[serde(default)]
    pub winamax: Option<WinamaxWire>,
    pub best_odds: PriceWire,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinamaxWire {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
    #[serde(default)]
    pub over_under: Option<OverUnder>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PriceWire {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl From<OddsQuoteWire> for OddsQuote {
    /// The Winamax quote is preferred; the best available prices are the fallback.
    fn from(wire: OddsQuoteWire) -> Self {
        let bookmaker_odds = match wire.odds.winamax {
            Some(w) => BookmakerOdds {
                home: w.home,
                draw: w.draw,
                away: w.away,
                over_under: w.over_under,
            },
            None => BookmakerOdds {
                home: wire.odds.best_odds.home,
                draw: wire.odds.best_odds.draw,
                away: wire.odds.best_odds.away,
                over_under: None,
            },
        };

        Self {
            id: wire.id,
            home_team_name: wire.home_team,
            away_team_name: wire.away_team,
            commence_time: wire.commence_time,
            bookmaker_odds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_table() {
        assert_eq!(SportKey::for_competition(61), Some(SportKey::Ligue1));
        assert_eq!(SportKey::for_competition(39), Some(SportKey::PremierLeague));
        assert_eq!(SportKey::for_competition(140), Some(SportKey::LaLiga));
        assert_eq!(SportKey::for_competition(135), Some(SportKey::SerieA));
        assert_eq!(SportKey::for_competition(78), Some(SportKey::Bundesliga));
        assert_eq!(SportKey::for_competition(2), Some(SportKey::ChampionsLeague));
        assert_eq!(SportKey::for_competition(3), Some(SportKey::EuropaLeague));
        assert_eq!(SportKey::for_competition(62), Some(SportKey::Ligue2));
        assert_eq!(SportKey::for_competition(999), None);

        for key in SportKey::ALL {
            assert_eq!(SportKey::for_competition(key.competition_id()), Some(key));
        }
    }

    #[test]
    fn test_sport_key_strings() {
        for key in SportKey::ALL {
            assert_eq!(key.as_str().parse::<SportKey>().unwrap(), key);
            assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{}\"", key));
        }
        assert_eq!("PremierLeague".parse::<SportKey>().unwrap(), SportKey::PremierLeague);
        assert!("mls".parse::<SportKey>().is_err());
    }

    #[test]
    fn test_wire_prefers_winamax() {
        let wire: OddsQuoteWire = serde_json::from_str(r#"{
            "id": "evt-1",
            "homeTeam": "Paris SG",
            "awayTeam": "Marseille",
            "commenceTime": "2024-03-16T20:00:00Z",
            "odds": {
                "winamax": {"home": 1.55, "draw": 4.2, "away": 5.5,
                            "overUnder": {"line": 2.5, "over": 1.7, "under": 2.1},
                            "lastUpdate": "2024-03-16T18:00:00Z"},
                "bestOdds": {"home": 1.6, "draw": 4.4, "away": 5.8}
            }
        }"#).unwrap();

        let quote = OddsQuote::from(wire);
        assert_eq!(quote.home_team_name, "Paris SG");
        assert_eq!(quote.bookmaker_odds.home, 1.55);
        assert_eq!(quote.bookmaker_odds.over_under.map(|ou| ou.line), Some(2.5));
    }

    #[test]
    fn test_wire_falls_back_to_best_odds() {
        let wire: OddsQuoteWire = serde_json::from_str(r#"{
            "id": "evt-2",
            "homeTeam": "Lens",
            "awayTeam": "Lille",
            "commenceTime": "2024-03-17T14:00:00Z",
            "odds": {"bestOdds": {"home": 2.3, "draw": 3.1, "away": 3.2}}
        }"#).unwrap();

        let quote = OddsQuote::from(wire);
        assert_eq!(quote.bookmaker_odds.draw, 3.1);
        assert!(quote.bookmaker_odds.over_under.is_none());
    }
}
