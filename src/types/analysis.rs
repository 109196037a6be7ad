use crate::error::{PredictorError, Result};
use serde::{Deserialize, Serialize};

/// Structured prediction for a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub winner: String,
    pub win_probability: f64,
    pub reasoning: String,
    pub key_factors: Vec<String>,
    pub home_team_strength: f64,
    pub away_team_strength: f64,
}

impl MatchAnalysis {
    pub fn validate(&self) -> Result<()> {
        if self.winner.trim().is_empty() {
            return Err(PredictorError::InvalidAnalysis(
                "winner must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("win_probability", self.win_probability),
            ("home_team_strength", self.home_team_strength),
            ("away_team_strength", self.away_team_strength),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PredictorError::InvalidAnalysis(format!(
                    "{field} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
