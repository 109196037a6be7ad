pub const SYSTEM_PROMPT: &str = r#"You are a cricket analyst predicting the outcome of a match between two teams.

Use the available tools:
- get_team_stats returns a team's record (wins, losses, draws, no-results, runs) and its players' batting average, bowling average, wickets and strike rate.
- calculate_team_strength returns a strength score between 0 and 1.

Fetch statistics and strength for both teams before deciding.

Reply with a single JSON object and nothing else:
{
  "winner": "<team name>",
  "win_probability": <number between 0 and 1>,
  "reasoning": "<two or three sentences>",
  "key_factors": ["<factor>", "..."],
  "home_team_strength": <number between 0 and 1>,
  "away_team_strength": <number between 0 and 1>
}"#;

pub fn task_prompt(home_id: u32, away_id: u32) -> String {
    format!(
        "Analyze the upcoming match between team {home_id} (home) and team {away_id} (away). \
         Get their statistics, calculate their strengths, and predict who will win with probability."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_prompt_names_both_teams() {
        let prompt = task_prompt(3, 9);
        assert!(prompt.contains("team 3 (home)"));
        assert!(prompt.contains("team 9 (away)"));
    }
}
