use super::{PredictionReport, StrengthReport};

const RULE: &str = "==================================================";

pub fn prediction_to_text(report: &PredictionReport) -> String {
    let analysis = &report.analysis;
    let mut output = String::new();
    output.push_str(&format!(
        "Match: Team {} vs Team {} ({} engine)\n",
        report.home_team_id, report.away_team_id, report.engine
    ));
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!("Predicted Winner: {}\n", analysis.winner));
    output.push_str(&format!(
        "Win Probability: {:.1}%\n",
        analysis.win_probability * 100.0
    ));
    output.push_str(&format!(
        "Home Team Strength: {:.2}\n",
        analysis.home_team_strength
    ));
    output.push_str(&format!(
        "Away Team Strength: {:.2}\n",
        analysis.away_team_strength
    ));

    output.push_str("\nReasoning:\n");
    output.push_str(&analysis.reasoning);
    output.push('\n');

    output.push_str("\nKey Factors:\n");
    if analysis.key_factors.is_empty() {
        output.push_str("  - none\n");
    } else {
        for factor in &analysis.key_factors {
            output.push_str(&format!("  - {factor}\n"));
        }
    }

    output
}

pub fn strength_to_text(report: &StrengthReport) -> String {
    let b = &report.breakdown;
    let mut output = String::new();
    output.push_str(&format!(
        "Team {} ({})\n",
        report.team_id, report.team_name
    ));
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "Games: {} total, {} with a result\n",
        b.total_games, b.meaningful_games
    ));
    output.push_str(&format!(
        "- win rate: {:.3}\n- run differential: {:+.1} per game (factor {:.3})\n- batting strength: {:.3}\n- bowling strength: {:.3}\n- strike rate factor: {:.3}\n",
        b.win_rate,
        b.run_difference,
        b.run_diff_factor,
        b.batting_strength,
        b.bowling_strength,
        b.strike_rate_factor
    ));
    output.push_str(&format!("Strength: {:.4}\n", b.strength));
    output
}
