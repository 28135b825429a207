pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use client::FootballDataClient;

/// Football provider competition id (39 = Premier League, 61 = Ligue 1, ...).
pub type LeagueId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default, alias = "crest")]
    pub crest_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Cancelled,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "SCHEDULED",
            FixtureStatus::Timed => "TIMED",
            FixtureStatus::InPlay => "IN_PLAY",
            FixtureStatus::Paused => "PAUSED",
            FixtureStatus::Finished => "FINISHED",
            FixtureStatus::Postponed => "POSTPONED",
            FixtureStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRef {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u64,
    pub kickoff_time: DateTime<Utc>,
    pub status: FixtureStatus,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    #[serde(default)]
    pub score: Score,
    pub competition: CompetitionRef,
}

impl Fixture {
    pub fn is_live(&self) -> bool {
        matches!(self.status, FixtureStatus::InPlay | FixtureStatus::Paused)
    }

    pub fn is_finished(&self) -> bool {
        self.status == FixtureStatus::Finished
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self.status, FixtureStatus::Scheduled | FixtureStatus::Timed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: u32,
    pub team: TeamRef,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Competition a stat row was collected from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueRef {
    pub id: LeagueId,
    pub name: String,
    #[serde(default)]
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub player: Player,
    pub team: TeamRef,
    #[serde(default)]
    pub league: LeagueRef,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub played_matches: u32,
}

impl PlayerStat {
    /// Goals plus assists. Derived, never stored.
    pub fn total(&self) -> u32 {
        self.goals + self.assists
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    #[serde(flatten)]
    pub team: TeamRef,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub founded: Option<u32>,
    #[serde(default)]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub squad: Vec<SquadMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "id": 1001,
        "kickoffTime": "2024-03-16T20:00:00Z",
        "status": "IN_PLAY",
        "homeTeam": {"id": 85, "name": "Paris Saint-Germain", "tla": "PSG", "crestUrl": "https://crests/85.png"},
        "awayTeam": {"id": 81, "name": "Olympique de Marseille", "crest": "https://crests/81.png"},
        "score": {"home": 1, "away": null},
        "competition": {"id": 61, "name": "Ligue 1"}
    }"#;

    #[test]
    fn test_fixture_wire_shape() {
        let fixture: Fixture = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(fixture.status, FixtureStatus::InPlay);
        assert!(fixture.is_live());
        assert!(!fixture.is_upcoming());
        assert_eq!(fixture.home_team.tla.as_deref(), Some("PSG"));
        assert_eq!(fixture.away_team.crest_url, "https://crests/81.png");
        assert_eq!(fixture.score, Score { home: Some(1), away: None });
        assert_eq!(fixture.competition.id, 61);
    }

    #[test]
    fn test_player_total_is_derived() {
        let stat: PlayerStat = serde_json::from_str(r#"{
            "player": {"id": 7, "name": "Kylian Mbappé"},
            "team": {"id": 86, "name": "Real Madrid"},
            "goals": 12,
            "assists": 5,
            "playedMatches": 20
        }"#).unwrap();
        assert_eq!(stat.total(), 17);
        assert_eq!(stat.rating, None);
        assert_eq!(stat.league, LeagueRef::default());

        let json = serde_json::to_value(&stat).unwrap();
        assert!(json.get("total").is_none());
    }

    #[test]
    fn test_team_details_flatten() {
        let details: TeamDetails = serde_json::from_str(r#"{
            "id": 81, "name": "FC Barcelona", "shortName": "Barça", "tla": "FCB",
            "crestUrl": "https://crests/81.png", "venue": "Camp Nou", "founded": 1899,
            "squad": [{"id": 1, "name": "Pedri", "position": "Midfield"}]
        }"#).unwrap();
        assert_eq!(details.team.short_name.as_deref(), Some("Barça"));
        assert_eq!(details.founded, Some(1899));
        assert_eq!(details.squad.len(), 1);
    }

    #[test]
    fn test_status_names_match_wire() {
        for status in [FixtureStatus::Scheduled, FixtureStatus::Postponed, FixtureStatus::Cancelled] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
