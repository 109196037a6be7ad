use super::{ensure_distinct, Predictor};
use crate::error::Result;
use crate::provider::TeamProvider;
use crate::scoring;
use crate::types::analysis::MatchAnalysis;
use crate::types::scoring::{
    Score, StrengthBreakdown, BATTING_WEIGHT, BOWLING_WEIGHT, RUN_DIFF_WEIGHT,
    STRIKE_RATE_WEIGHT, WIN_RATE_WEIGHT,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const MAX_KEY_FACTORS: usize = 3;

/// Deterministic predictor: the stronger team wins, with probability equal
/// to its share of the combined strength.
pub struct HeuristicPredictor {
    provider: Arc<dyn TeamProvider>,
}

impl HeuristicPredictor {
    pub fn new(provider: Arc<dyn TeamProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Predictor for HeuristicPredictor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn analyze_match(&self, home_id: u32, away_id: u32) -> Result<MatchAnalysis> {
        ensure_distinct(home_id, away_id)?;
        let (home, away) = tokio::try_join!(
            self.provider.get_team(home_id),
            self.provider.get_team(away_id)
        )?;

        let home_name = home.display_name();
        let away_name = away.display_name();
        let home_breakdown = scoring::breakdown(&home);
        let away_breakdown = scoring::breakdown(&away);
        info!(
            home = %home_name,
            away = %away_name,
            home_strength = home_breakdown.strength,
            away_strength = away_breakdown.strength,
            "teams scored"
        );

        Ok(synthesize(
            &home_name,
            &home_breakdown,
            &away_name,
            &away_breakdown,
        ))
    }
}

struct FactorEdge {
    label: &'static str,
    home: Score,
    away: Score,
    weighted_gap: Score,
}

fn factor_edges(home: &StrengthBreakdown, away: &StrengthBreakdown) -> Vec<FactorEdge> {
    let factors = [
        ("Win rate", home.win_rate, away.win_rate, WIN_RATE_WEIGHT),
        ("Batting strength", home.batting_strength, away.batting_strength, BATTING_WEIGHT),
        ("Bowling strength", home.bowling_strength, away.bowling_strength, BOWLING_WEIGHT),
        ("Run differential", home.run_diff_factor, away.run_diff_factor, RUN_DIFF_WEIGHT),
        ("Strike rate", home.strike_rate_factor, away.strike_rate_factor, STRIKE_RATE_WEIGHT),
    ];

    let mut edges: Vec<FactorEdge> = factors
        .into_iter()
        .map(|(label, home, away, weight)| FactorEdge {
            label,
            home,
            away,
            weighted_gap: (home - away) * weight,
        })
        .filter(|edge| edge.weighted_gap.abs() > 1e-9)
        .collect();
    edges.sort_by(|a, b| b.weighted_gap.abs().total_cmp(&a.weighted_gap.abs()));
    edges
}

pub(crate) fn synthesize(
    home_name: &str,
    home: &StrengthBreakdown,
    away_name: &str,
    away: &StrengthBreakdown,
) -> MatchAnalysis {
    // Ties go to the home side.
    let home_wins = home.strength >= away.strength;
    let (winner, loser, winner_strength, loser_strength) = if home_wins {
        (home_name, away_name, home.strength, away.strength)
    } else {
        (away_name, home_name, away.strength, home.strength)
    };

    let total = winner_strength + loser_strength;
    let win_probability = if total > 0.0 {
        winner_strength / total
    } else {
        0.5
    };

    let edges = factor_edges(home, away);
    let key_factors: Vec<String> = if edges.is_empty() {
        vec!["Teams are evenly matched on every factor".to_string()]
    } else {
        edges
            .iter()
            .take(MAX_KEY_FACTORS)
            .map(|edge| {
                format!(
                    "{}: {} {:.2} vs {} {:.2}",
                    edge.label, home_name, edge.home, away_name, edge.away
                )
            })
            .collect()
    };

    let winner_sign = if home_wins { 1.0 } else { -1.0 };
    let deciding = edges
        .iter()
        .find(|edge| edge.weighted_gap * winner_sign > 0.0)
        .map(|edge| edge.label.to_lowercase());
    let reasoning = match deciding {
        Some(label) => format!(
            "{winner} rates {winner_strength:.2} against {loser}'s {loser_strength:.2}. \
             Their clearest advantage is {label}."
        ),
        None => format!(
            "{winner} and {loser} rate {winner_strength:.2} and {loser_strength:.2}; \
             with no clear edge the home side is favoured."
        ),
    };

    MatchAnalysis {
        winner: winner.to_string(),
        win_probability,
        reasoning,
        key_factors,
        home_team_strength: home.strength,
        away_team_strength: away.strength,
    }
}
