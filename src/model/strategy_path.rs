use crate::model::element::StrategicElement;

/// Risk and utility attached to one End/Means pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub risk: f64,
    pub utility: f64,
}

impl Scores {
    pub const fn new(risk: f64, utility: f64) -> Self {
        Self { risk, utility }
    }
}

/// A candidate strategy: one End, one Means, and how to combine them.
///
/// Borrows both elements from the extraction result; nothing is copied.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyPath<'a> {
    pub end: &'a StrategicElement,
    pub means: &'a StrategicElement,
    pub way: String,
    pub risk_score: f64,
    pub utility_score: f64,
}

impl<'a> StrategyPath<'a> {
    pub fn new(
        end: &'a StrategicElement,
        means: &'a StrategicElement,
        way: String,
        scores: Scores,
    ) -> Self {
        Self {
            end,
            means,
            way,
            risk_score: scores.risk,
            utility_score: scores.utility,
        }
    }

    /// Ranking key: utility minus risk.
    pub fn net_value(&self) -> f64 {
        self.utility_score - self.risk_score
    }
}
