/// Provider payloads shared by the integration tests.
/// Shapes follow what the football and odds proxies return.

pub const LIGUE1_STANDINGS: &str = r#"{
    "standings": [
        {
            "position": 1,
            "team": {"id": 524, "name": "Paris Saint-Germain", "shortName": "PSG", "tla": "PSG", "crest": "https://crests.example.com/524.png"},
            "points": 62, "played": 26, "won": 19, "draw": 5, "lost": 2, "goalDifference": 38
        },
        {
            "position": 2,
            "team": {"id": 548, "name": "AS Monaco", "shortName": "Monaco", "tla": "ASM", "crest": "https://crests.example.com/548.png"},
            "points": 50, "played": 26, "won": 15, "draw": 5, "lost": 6, "goalDifference": 17
        },
        {
            "position": 3,
            "team": {"id": 516, "name": "Olympique de Marseille", "shortName": "Marseille", "tla": "OM", "crest": "https://crests.example.com/516.png"},
            "points": 45, "played": 26, "won": 13, "draw": 6, "lost": 7, "goalDifference": 9
        }
    ]
}"#;

pub const LIGUE1_SCHEDULED: &str = r#"{
    "matches": [
        {
            "id": 9001,
            "kickoffTime": "2024-03-17T20:45:00Z",
            "status": "SCHEDULED",
            "homeTeam": {"id": 516, "name": "Olympique de Marseille"},
            "awayTeam": {"id": 524, "name": "Paris Saint-Germain"},
            "competition": {"id": 61, "name": "Ligue 1"}
        },
        {
            "id": 9002,
            "kickoffTime": "2024-03-16T16:00:00Z",
            "status": "TIMED",
            "homeTeam": {"id": 523, "name": "Olympique Lyonnais"},
            "awayTeam": {"id": 548, "name": "AS Monaco"},
            "competition": {"id": 61, "name": "Ligue 1"}
        },
        {
            "id": 9003,
            "kickoffTime": "2024-03-17T14:00:00Z",
            "status": "SCHEDULED",
            "homeTeam": {"id": 521, "name": "Lille OSC"},
            "awayTeam": {"id": 529, "name": "Stade Rennais FC"},
            "competition": {"id": 61, "name": "Ligue 1"}
        }
    ]
}"#;

pub const PREMIER_LEAGUE_SCHEDULED: &str = r#"{
    "matches": [
        {
            "id": 7001,
            "kickoffTime": "2024-03-16T12:30:00Z",
            "status": "SCHEDULED",
            "homeTeam": {"id": 57, "name": "Arsenal FC"},
            "awayTeam": {"id": 61, "name": "Chelsea FC"},
            "competition": {"id": 39, "name": "Premier League"}
        },
        {
            "id": 7002,
            "kickoffTime": "2024-03-17T15:30:00Z",
            "status": "SCHEDULED",
            "homeTeam": {"id": 65, "name": "Manchester City FC"},
            "awayTeam": {"id": 64, "name": "Liverpool FC"},
            "competition": {"id": 39, "name": "Premier League"}
        }
    ]
}"#;

pub const LIGUE1_FINISHED: &str = r#"{
    "matches": [
        {
            "id": 8801,
            "kickoffTime": "2024-03-10T20:45:00Z",
            "status": "FINISHED",
            "homeTeam": {"id": 548, "name": "AS Monaco"},
            "awayTeam": {"id": 516, "name": "Olympique de Marseille"},
            "score": {"home": 2, "away": 2},
            "competition": {"id": 61, "name": "Ligue 1"}
        },
        {
            "id": 8800,
            "kickoffTime": "2024-03-09T20:00:00Z",
            "status": "FINISHED",
            "homeTeam": {"id": 524, "name": "Paris Saint-Germain"},
            "awayTeam": {"id": 548, "name": "AS Monaco"},
            "score": {"home": 3, "away": 1},
            "competition": {"id": 61, "name": "Ligue 1"}
        },
        {
            "id": 8799,
            "kickoffTime": "2024-03-08T19:00:00Z",
            "status": "FINISHED",
            "homeTeam": {"id": 523, "name": "Olympique Lyonnais"},
            "awayTeam": {"id": 521, "name": "Lille OSC"},
            "score": {"home": 0, "away": 1},
            "competition": {"id": 61, "name": "Ligue 1"}
        }
    ]
}"#;

pub const FINISHED_MATCH: &str = r#"{
    "id": 8800,
    "kickoffTime": "2024-03-09T20:00:00Z",
    "status": "FINISHED",
    "homeTeam": {"id": 524, "name": "Paris Saint-Germain"},
    "awayTeam": {"id": 548, "name": "AS Monaco"},
    "score": {"home": 3, "away": 1},
    "competition": {"id": 61, "name": "Ligue 1"}
}"#;

pub const TEAM_DETAILS: &str = r#"{
    "id": 524,
    "name": "Paris Saint-Germain",
    "shortName": "PSG",
    "tla": "PSG",
    "crest": "https://crests.example.com/524.png",
    "venue": "Parc des Princes",
    "founded": 1970,
    "clubColors": "Red / Navy Blue / White",
    "squad": [
        {"id": 1, "name": "Gianluigi Donnarumma", "position": "Goalkeeper", "nationality": "Italy"},
        {"id": 2, "name": "Kylian Mbappé", "position": "Offence", "nationality": "France"}
    ]
}"#;

/// Three scorers; used for every league in the ranking tests.
pub const SCORERS: &str = r#"{
    "scorers": [
        {
            "player": {"id": 44, "name": "Striker A"},
            "team": {"id": 1, "name": "Club A"},
            "goals": 21, "assists": 4, "rating": 7.8, "playedMatches": 25
        },
        {
            "player": {"id": 45, "name": "Striker B"},
            "team": {"id": 2, "name": "Club B"},
            "goals": 15, "assists": 9, "playedMatches": 26
        },
        {
            "player": {"id": 46, "name": "Striker C"},
            "team": {"id": 3, "name": "Club C"},
            "goals": 12, "assists": 2, "rating": 7.1, "playedMatches": 24
        }
    ]
}"#;

pub const LIGUE1_ODDS: &str = r#"{
    "success": true,
    "sport": "ligue1",
    "count": 3,
    "apiUsage": {"remaining": 412, "used": 88},
    "data": [
        {
            "id": "evt-om-psg",
            "homeTeam": "Marseille",
            "awayTeam": "Paris Saint Germain",
            "commenceTime": "2024-03-17T20:45:00Z",
            "odds": {
                "winamax": {"home": 3.9, "draw": 3.8, "away": 1.85, "overUnder": {"line": 2.5, "over": 1.6, "under": 2.25}},
                "bestOdds": {"home": 4.1, "draw": 3.9, "away": 1.9}
            }
        },
        {
            "id": "evt-ol-asm",
            "homeTeam": "Lyon",
            "awayTeam": "Monaco",
            "commenceTime": "2024-03-16T16:00:00Z",
            "odds": {"bestOdds": {"home": 2.5, "draw": 3.4, "away": 2.7}}
        },
        {
            "id": "evt-unrelated",
            "homeTeam": "Nantes",
            "awayTeam": "Nice",
            "commenceTime": "2024-03-17T12:00:00Z",
            "odds": {"bestOdds": {"home": 2.9, "draw": 3.1, "away": 2.5}}
        }
    ]
}"#;

pub const PREMIER_LEAGUE_ODDS: &str = r#"{
    "success": true,
    "sport": "premierleague",
    "count": 1,
    "data": [
        {
            "id": "evt-mci-liv",
            "homeTeam": "Manchester City",
            "awayTeam": "Liverpool",
            "commenceTime": "2024-03-17T15:30:00Z",
            "odds": {"bestOdds": {"home": 2.1, "draw": 3.6, "away": 3.3}}
        }
    ]
}"#;

pub const ODDS_FAILURE: &str = r#"{"success": false, "error": "quota exceeded"}"#;
