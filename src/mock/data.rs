use crate::error::Result;
use crate::types::team::{MatchRecord, MatchStatus, PlayerRecord, TeamRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Teams and matches served by the mock data API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockStore {
    #[serde(default, deserialize_with = "teams_by_id")]
    pub teams: BTreeMap<u32, TeamRecord>,
    #[serde(default, deserialize_with = "matches_by_id")]
    pub matches: BTreeMap<u32, MatchRecord>,
}

fn teams_by_id<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<u32, TeamRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let teams = Vec::<TeamRecord>::deserialize(deserializer)?;
    Ok(teams.into_iter().map(|team| (team.id, team)).collect())
}

fn matches_by_id<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<u32, MatchRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let matches = Vec::<MatchRecord>::deserialize(deserializer)?;
    Ok(matches.into_iter().map(|record| (record.id, record)).collect())
}

impl MockStore {
    /// Reads a `{ "teams": [...], "matches": [...] }` fixture file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn fixtures() -> Self {
        let teams = [harbour_hawks(), valley_rovers(), summit_strikers(), riverside_rangers()];
        let matches = [
            MatchRecord {
                id: 1,
                home_team_id: 1,
                away_team_id: 2,
                date: kickoff(1_710_424_800),
                home_score: Some(187),
                away_score: Some(164),
                status: MatchStatus::Completed,
            },
            MatchRecord {
                id: 2,
                home_team_id: 3,
                away_team_id: 1,
                date: kickoff(1_711_029_600),
                home_score: None,
                away_score: None,
                status: MatchStatus::Upcoming,
            },
        ];

        Self {
            teams: teams.into_iter().map(|team| (team.id, team)).collect(),
            matches: matches.into_iter().map(|record| (record.id, record)).collect(),
        }
    }
}

fn kickoff(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

fn player(
    id: u32,
    name: &str,
    role: &str,
    batting_average: f64,
    bowling_average: f64,
    wickets_taken: u32,
    strike_rate: f64,
) -> PlayerRecord {
    PlayerRecord {
        id,
        name: name.to_string(),
        role: role.to_string(),
        matches_played: 16,
        batting_average,
        bowling_average,
        wickets_taken,
        strike_rate,
    }
}

fn harbour_hawks() -> TeamRecord {
    TeamRecord {
        id: 1,
        name: "Harbour Hawks".to_string(),
        league: "Coastal Premier League".to_string(),
        wins: 11,
        losses: 4,
        draws: 0,
        no_results: 1,
        runs_scored: 2745,
        runs_conceded: 2460,
        players: vec![
            player(1, "Arjun Mehta", "Batsman", 46.2, 0.0, 0, 128.4),
            player(2, "Tom Whitfield", "Wicketkeeper", 33.8, 0.0, 0, 141.0),
            player(3, "Kasun Perera", "All-rounder", 27.5, 24.6, 17, 119.2),
            player(4, "Liam O'Connor", "Bowler", 8.1, 21.3, 24, 92.5),
        ],
    }
}

fn valley_rovers() -> TeamRecord {
    TeamRecord {
        id: 2,
        name: "Valley Rovers".to_string(),
        league: "Coastal Premier League".to_string(),
        wins: 6,
        losses: 8,
        draws: 1,
        no_results: 1,
        runs_scored: 2490,
        runs_conceded: 2585,
        players: vec![
            player(5, "Sam Hollis", "Batsman", 38.9, 0.0, 0, 115.7),
            player(6, "Imran Qadir", "All-rounder", 22.4, 29.8, 13, 104.3),
            player(7, "Ben Achterberg", "Bowler", 6.5, 31.2, 15, 71.0),
        ],
    }
}

fn summit_strikers() -> TeamRecord {
    TeamRecord {
        id: 3,
        name: "Summit Strikers".to_string(),
        league: "Highlands Cup".to_string(),
        wins: 3,
        losses: 2,
        draws: 0,
        no_results: 5,
        runs_scored: 910,
        runs_conceded: 880,
        players: vec![
            player(8, "Noah Fairbairn", "Batsman", 0.0, 0.0, 0, 0.0),
            player(9, "Ravi Chandran", "Bowler", 0.0, 27.0, 0, 0.0),
        ],
    }
}

/// Newly admitted side with no matches or player history.
fn riverside_rangers() -> TeamRecord {
    TeamRecord {
        id: 4,
        name: "Riverside Rangers".to_string(),
        league: "Highlands Cup".to_string(),
        ..TeamRecord::default()
    }
}
