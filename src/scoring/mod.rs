//! Team strength scoring.
//!
//! A pure projection of a [`TeamRecord`] onto a single value in `[0, 1]`:
//! win rate, batting, bowling, run differential and strike rate combined
//! with fixed weights. Degenerate records (no games, only no-results, no
//! usable player data) resolve to neutral constants instead of failing.

pub mod players;
pub mod record;

use crate::types::scoring::{Score, StrengthBreakdown};
use crate::types::team::TeamRecord;

pub fn score(team: &TeamRecord) -> Score {
    breakdown(team).strength
}

pub fn breakdown(team: &TeamRecord) -> StrengthBreakdown {
    let record = record::record_factors(team);
    if record.total_games == 0 {
        return StrengthBreakdown::neutral();
    }

    let players = players::player_factors(&team.players);

    let mut breakdown = StrengthBreakdown {
        total_games: record.total_games,
        meaningful_games: record.meaningful_games,
        win_rate: record.win_rate,
        run_difference: record.run_difference,
        run_diff_factor: record.run_diff_factor,
        batting_strength: players.batting_strength,
        bowling_strength: players.bowling_strength,
        strike_rate_factor: players.strike_rate_factor,
        strength: 0.0,
    };
    breakdown.strength = breakdown.weighted_sum().clamp(0.0, 1.0);
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::team::PlayerRecord;
    use proptest::prelude::*;

    fn player(batting: f64, bowling: f64, wickets: u32, strike_rate: f64) -> PlayerRecord {
        PlayerRecord {
            batting_average: batting,
            bowling_average: bowling,
            wickets_taken: wickets,
            strike_rate,
            ..PlayerRecord::default()
        }
    }

    fn worked_example() -> TeamRecord {
        TeamRecord {
            wins: 10,
            losses: 5,
            draws: 0,
            no_results: 0,
            runs_scored: 2500,
            runs_conceded: 2200,
            players: vec![player(40.0, 0.0, 0, 90.0)],
            ..TeamRecord::default()
        }
    }

    #[test]
    fn zero_games_is_exactly_neutral() {
        let team = TeamRecord {
            players: vec![player(60.0, 15.0, 30, 140.0)],
            ..TeamRecord::default()
        };
        assert_eq!(score(&team), 0.5);
        assert_eq!(breakdown(&team), StrengthBreakdown::neutral());
    }

    #[test]
    fn only_no_results_is_exactly_neutral() {
        let team = TeamRecord {
            no_results: 4,
            runs_scored: 300,
            ..TeamRecord::default()
        };
        assert_eq!(score(&team), 0.5);
    }

    #[test]
    fn worked_example_matches_hand_computation() {
        let result = breakdown(&worked_example());

        assert_eq!(result.meaningful_games, 15);
        assert!((result.win_rate - 2.0 / 3.0).abs() < 1e-9);
        assert!((result.run_difference - 20.0).abs() < 1e-9);
        assert!((result.run_diff_factor - 0.7).abs() < 1e-9);
        assert!((result.batting_strength - 0.8).abs() < 1e-9);
        assert!((result.bowling_strength - 0.5).abs() < 1e-9);
        assert!((result.strike_rate_factor - 0.72).abs() < 1e-9);

        let expected = (2.0 / 3.0) * 0.35 + 0.8 * 0.25 + 0.5 * 0.25 + 0.7 * 0.10 + 0.72 * 0.05;
        assert!((result.strength - expected).abs() < 1e-9);
        assert!((result.strength - 0.6643).abs() < 0.001);
    }

    #[test]
    fn empty_and_all_sentinel_squads_differ_only_in_strike_rate() {
        let base = TeamRecord {
            wins: 5,
            losses: 5,
            runs_scored: 1500,
            runs_conceded: 1500,
            ..TeamRecord::default()
        };
        let sentinel = TeamRecord {
            players: vec![player(0.0, 0.0, 0, 0.0)],
            ..base.clone()
        };

        let empty = breakdown(&base);
        let sentinel = breakdown(&sentinel);

        assert_eq!(empty.strike_rate_factor, 0.5);
        assert!((sentinel.strike_rate_factor - 0.64).abs() < 1e-12);
        assert!((empty.batting_strength - sentinel.batting_strength).abs() < 1e-12);
        assert!((empty.bowling_strength - sentinel.bowling_strength).abs() < 1e-12);
        assert!(empty.strength < sentinel.strength);
        assert!((0.0..=1.0).contains(&empty.strength));
        assert!((0.0..=1.0).contains(&sentinel.strength));
    }

    #[test]
    fn heavy_defeats_with_poor_squad_stay_in_range() {
        let team = TeamRecord {
            losses: 20,
            runs_scored: 0,
            runs_conceded: 1_000_000,
            players: vec![player(0.0, 400.0, 3, 0.0)],
            ..TeamRecord::default()
        };
        let result = breakdown(&team);
        assert_eq!(result.run_diff_factor, 0.0);
        assert_eq!(result.bowling_strength, 0.0);
        assert!((0.0..=1.0).contains(&result.strength));
    }

    #[test]
    fn elite_bowling_is_clamped_in_final_score() {
        let team = TeamRecord {
            wins: 30,
            runs_scored: 9000,
            runs_conceded: 1000,
            players: vec![player(120.0, 1.0, 50, 300.0)],
            ..TeamRecord::default()
        };
        let result = breakdown(&team);
        assert!(result.weighted_sum() > 1.0);
        assert_eq!(result.strength, 1.0);
    }

    #[test]
    fn scoring_is_idempotent_and_leaves_input_untouched() {
        let team = worked_example();
        let snapshot = team.clone();
        let first = score(&team);
        let second = score(&team);
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(team, snapshot);
    }

    fn arb_player() -> impl Strategy<Value = PlayerRecord> {
        (0.0f64..200.0, 0.0f64..200.0, 0u32..500, 0.0f64..400.0).prop_map(
            |(batting, bowling, wickets, strike_rate)| player(batting, bowling, wickets, strike_rate),
        )
    }

    fn arb_team() -> impl Strategy<Value = TeamRecord> {
        (
            0u32..200,
            0u32..200,
            0u32..50,
            0u32..50,
            0u64..100_000,
            0u64..100_000,
            proptest::collection::vec(arb_player(), 0..15),
        )
            .prop_map(
                |(wins, losses, draws, no_results, runs_scored, runs_conceded, players)| TeamRecord {
                    wins,
                    losses,
                    draws,
                    no_results,
                    runs_scored,
                    runs_conceded,
                    players,
                    ..TeamRecord::default()
                },
            )
    }

    proptest! {
        #[test]
        fn score_is_always_within_unit_interval(team in arb_team()) {
            let value = score(&team);
            prop_assert!((0.0..=1.0).contains(&value), "score {} out of range", value);
        }

        #[test]
        fn trading_a_loss_for_a_win_never_lowers_score(team in arb_team()) {
            prop_assume!(team.losses > 0);
            let mut improved = team.clone();
            improved.losses -= 1;
            improved.wins += 1;
            prop_assert!(score(&improved) >= score(&team));
        }
    }
}
