//! Score assignment for candidate paths
//!
//! The random ranges are placeholders carried over for behavioural parity;
//! they are not derived from any domain model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::model::element::StrategicElement;
use crate::model::strategy_path::Scores;

pub const RISK_RANGE: RangeInclusive<f64> = 0.1..=0.5;
pub const UTILITY_RANGE: RangeInclusive<f64> = 0.6..=0.95;

/// Assigns (risk, utility) to an End/Means pairing.
pub trait ScoringPolicy {
    fn score(&mut self, end: &StrategicElement, means: &StrategicElement) -> Scores;
}

impl<F> ScoringPolicy for F
where
    F: FnMut(&StrategicElement, &StrategicElement) -> Scores,
{
    fn score(&mut self, end: &StrategicElement, means: &StrategicElement) -> Scores {
        self(end, means)
    }
}

/// Uniform draws from the placeholder ranges, rounded to two decimals.
pub struct RandomScoring {
    rng: StdRng,
}

impl RandomScoring {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ScoringPolicy for RandomScoring {
    fn score(&mut self, _end: &StrategicElement, _means: &StrategicElement) -> Scores {
        let risk = round2(self.rng.gen_range(RISK_RANGE));
        let utility = round2(self.rng.gen_range(UTILITY_RANGE));
        Scores { risk, utility }
    }
}

/// Same scores for every pairing.
#[derive(Debug, Clone, Copy)]
pub struct FixedScoring(pub Scores);

impl ScoringPolicy for FixedScoring {
    fn score(&mut self, _end: &StrategicElement, _means: &StrategicElement) -> Scores {
        self.0
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::ElementCategory;
    use serde_json::Map;

    fn pair() -> (StrategicElement, StrategicElement) {
        (
            StrategicElement::new("Carbon Neutrality", ElementCategory::End, Map::new()),
            StrategicElement::new("Solar Subsidies", ElementCategory::Means, Map::new()),
        )
    }

    fn has_two_decimals(x: f64) -> bool {
        ((x * 100.0).round() - x * 100.0).abs() < 1e-9
    }

    #[test]
    fn test_random_scores_stay_in_bounds() {
        let (end, means) = pair();
        let mut scoring = RandomScoring::seeded(7);

        for _ in 0..10_000 {
            let s = scoring.score(&end, &means);
            assert!(RISK_RANGE.contains(&s.risk), "risk {}", s.risk);
            assert!(UTILITY_RANGE.contains(&s.utility), "utility {}", s.utility);
            assert!(has_two_decimals(s.risk));
            assert!(has_two_decimals(s.utility));
        }
    }

    #[test]
    fn test_seeded_scoring_is_reproducible() {
        let (end, means) = pair();
        let mut a = RandomScoring::seeded(42);
        let mut b = RandomScoring::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.score(&end, &means), b.score(&end, &means));
        }
    }

    #[test]
    fn test_closure_policy() {
        let (end, means) = pair();
        let mut calls = 0;
        let mut policy = |e: &StrategicElement, m: &StrategicElement| {
            calls += 1;
            Scores {
                risk: if e.name() == "Carbon Neutrality" { 0.2 } else { 0.4 },
                utility: if m.name() == "Solar Subsidies" { 0.9 } else { 0.7 },
            }
        };

        assert_eq!(policy.score(&end, &means), Scores::new(0.2, 0.9));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.123), 0.12);
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(0.949), 0.95);
    }
}
