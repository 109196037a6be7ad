use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team statistics as served by the data service.
///
/// Only the outcome counts, run totals and player list feed the strength
/// score; the descriptive fields are carried for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub league: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub no_results: u32,
    pub runs_scored: u64,
    pub runs_conceded: u64,
    pub players: Vec<PlayerRecord>,
}

impl TeamRecord {
    /// Name to show in reports, falling back to the id when the service
    /// left it blank.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Team {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Per-player averages. A value of `0` means "no data" for every average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub matches_played: u32,
    pub batting_average: f64,
    pub bowling_average: f64,
    pub wickets_taken: u32,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
}
