use crate::types::scoring::Score;
use crate::types::team::TeamRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFactors {
    pub total_games: u64,
    pub meaningful_games: u64,
    pub win_rate: Score,
    pub run_difference: Score,
    pub run_diff_factor: Score,
}

pub fn total_games(team: &TeamRecord) -> u64 {
    u64::from(team.wins) + u64::from(team.losses) + u64::from(team.draws) + u64::from(team.no_results)
}

/// Win rate and run differential over games that produced a result.
pub fn record_factors(team: &TeamRecord) -> RecordFactors {
    let total_games = total_games(team);
    // No-results carry no performance signal.
    let meaningful_games = total_games - u64::from(team.no_results);

    let (win_rate, run_difference) = if meaningful_games > 0 {
        let games = meaningful_games as Score;
        let avg_scored = team.runs_scored as Score / games;
        let avg_conceded = team.runs_conceded as Score / games;
        (Score::from(team.wins) / games, avg_scored - avg_conceded)
    } else {
        (0.5, 0.0)
    };

    RecordFactors {
        total_games,
        meaningful_games,
        win_rate,
        run_difference,
        run_diff_factor: run_diff_factor(run_difference),
    }
}

/// Maps a per-game run differential of [-50, +50] onto [0, 1].
pub fn run_diff_factor(run_difference: Score) -> Score {
    (run_difference / 100.0).clamp(-0.5, 0.5) + 0.5
}
