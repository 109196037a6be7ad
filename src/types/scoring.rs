use serde::Serialize;

pub type Score = f64;

pub const WIN_RATE_WEIGHT: Score = 0.35;
pub const BATTING_WEIGHT: Score = 0.25;
pub const BOWLING_WEIGHT: Score = 0.25;
pub const RUN_DIFF_WEIGHT: Score = 0.10;
pub const STRIKE_RATE_WEIGHT: Score = 0.05;

/// Every intermediate value behind a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthBreakdown {
    pub total_games: u64,
    pub meaningful_games: u64,
    pub win_rate: Score,
    pub run_difference: Score,
    pub run_diff_factor: Score,
    pub batting_strength: Score,
    pub bowling_strength: Score,
    pub strike_rate_factor: Score,
    pub strength: Score,
}

impl StrengthBreakdown {
    /// Breakdown for a team with no recorded games.
    pub fn neutral() -> Self {
        Self {
            total_games: 0,
            meaningful_games: 0,
            win_rate: 0.5,
            run_difference: 0.0,
            run_diff_factor: 0.5,
            batting_strength: 0.5,
            bowling_strength: 0.5,
            strike_rate_factor: 0.5,
            strength: 0.5,
        }
    }

    pub fn weighted_sum(&self) -> Score {
        self.win_rate * WIN_RATE_WEIGHT
            + self.batting_strength * BATTING_WEIGHT
            + self.bowling_strength * BOWLING_WEIGHT
            + self.run_diff_factor * RUN_DIFF_WEIGHT
            + self.strike_rate_factor * STRIKE_RATE_WEIGHT
    }
}
