use crate::types::scoring::Score;
use crate::types::team::PlayerRecord;

pub const BATTING_AVERAGE_FALLBACK: Score = 25.0;
pub const BOWLING_AVERAGE_FALLBACK: Score = 35.0;
pub const STRIKE_RATE_FALLBACK: Score = 80.0;

/// Flat value used for every player factor when the squad list is empty.
pub const EMPTY_SQUAD_FACTOR: Score = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerFactors {
    pub batting_strength: Score,
    pub bowling_strength: Score,
    pub strike_rate_factor: Score,
}

impl PlayerFactors {
    fn empty_squad() -> Self {
        Self {
            batting_strength: EMPTY_SQUAD_FACTOR,
            bowling_strength: EMPTY_SQUAD_FACTOR,
            strike_rate_factor: EMPTY_SQUAD_FACTOR,
        }
    }
}

/// Mean of `values`, or `default` when there is nothing to average.
pub fn average_or_default<I>(values: I, default: Score) -> Score
where
    I: IntoIterator<Item = Score>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        default
    } else {
        sum / count as Score
    }
}

pub fn player_factors(players: &[PlayerRecord]) -> PlayerFactors {
    // An empty squad skips the fallback averages entirely.
    if players.is_empty() {
        return PlayerFactors::empty_squad();
    }

    let batting_average = average_or_default(
        players
            .iter()
            .map(|player| player.batting_average)
            .filter(|average| *average > 0.0),
        BATTING_AVERAGE_FALLBACK,
    );
    let bowling_average = average_or_default(
        players
            .iter()
            .filter(|player| player.bowling_average > 0.0 && player.wickets_taken > 0)
            .map(|player| player.bowling_average),
        BOWLING_AVERAGE_FALLBACK,
    );
    let strike_rate = average_or_default(
        players
            .iter()
            .map(|player| player.strike_rate)
            .filter(|rate| *rate > 0.0),
        STRIKE_RATE_FALLBACK,
    );

    PlayerFactors {
        batting_strength: batting_strength(batting_average),
        bowling_strength: bowling_strength(bowling_average),
        strike_rate_factor: strike_rate_factor(strike_rate),
    }
}

/// An average of 50 or more saturates at 1.0.
pub fn batting_strength(average: Score) -> Score {
    (average / 50.0).min(1.0)
}

/// Inverse scale: 20 maps to 1.0 and 50 or higher to 0.0. Averages below 20
/// exceed 1.0; only the combined score is clamped.
pub fn bowling_strength(average: Score) -> Score {
    (1.0 - (average - 20.0) / 30.0).max(0.0)
}

/// Capped at 0.96 for strike rates of 120 and above.
pub fn strike_rate_factor(strike_rate: Score) -> Score {
    (strike_rate / 100.0).min(1.2) * 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(batting: f64, bowling: f64, wickets: u32, strike_rate: f64) -> PlayerRecord {
        PlayerRecord {
            batting_average: batting,
            bowling_average: bowling,
            wickets_taken: wickets,
            strike_rate,
            ..PlayerRecord::default()
        }
    }

    #[test]
    fn average_or_default_falls_back_on_empty_input() {
        assert_eq!(average_or_default(Vec::new(), 25.0), 25.0);
        assert_eq!(average_or_default(vec![30.0, 50.0], 25.0), 40.0);
    }

    #[test]
    fn empty_squad_uses_flat_factor() {
        let factors = player_factors(&[]);
        assert_eq!(factors.batting_strength, 0.5);
        assert_eq!(factors.bowling_strength, 0.5);
        assert_eq!(factors.strike_rate_factor, 0.5);
    }

    #[test]
    fn all_sentinel_squad_uses_fallback_constants() {
        let factors = player_factors(&[player(0.0, 0.0, 0, 0.0), player(0.0, 0.0, 0, 0.0)]);
        assert!((factors.batting_strength - 0.5).abs() < 1e-12);
        assert!((factors.bowling_strength - 0.5).abs() < 1e-12);
        assert!((factors.strike_rate_factor - 0.64).abs() < 1e-12);
    }

    #[test]
    fn sentinel_values_are_excluded_from_averages() {
        let factors = player_factors(&[player(40.0, 0.0, 0, 90.0), player(0.0, 24.0, 12, 0.0)]);
        assert!((factors.batting_strength - 0.8).abs() < 1e-12);
        assert!((factors.bowling_strength - (1.0 - 4.0 / 30.0)).abs() < 1e-12);
        assert!((factors.strike_rate_factor - 0.72).abs() < 1e-12);
    }

    #[test]
    fn bowling_average_without_wickets_is_ignored() {
        let factors = player_factors(&[player(30.0, 18.0, 0, 100.0)]);
        assert!((factors.bowling_strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalizers_saturate() {
        assert_eq!(batting_strength(75.0), 1.0);
        assert!((bowling_strength(12.0) - (1.0 + 8.0 / 30.0)).abs() < 1e-12);
        assert_eq!(bowling_strength(80.0), 0.0);
        assert!((strike_rate_factor(180.0) - 0.96).abs() < 1e-12);
    }
}
