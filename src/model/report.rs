use crate::model::element::StrategicElement;
use crate::model::headline::Headline;
use crate::model::strategy_path::StrategyPath;

/// A ranked path flattened for display, detached from the element borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub rank: usize,
    pub way: String,
    pub end: String,
    pub means: String,
    pub utility_score: f64,
    pub risk_score: f64,
}

impl Recommendation {
    pub fn from_ranked(paths: &[StrategyPath<'_>]) -> Vec<Recommendation> {
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| Recommendation {
                rank: i + 1,
                way: p.way.clone(),
                end: p.end.name().to_string(),
                means: p.means.name().to_string(),
                utility_score: p.utility_score,
                risk_score: p.risk_score,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Ranked(Vec<Recommendation>),
    /// Extraction found no End or no Means; nothing was generated.
    InsufficientElements { ends: usize, means: usize },
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub elements: Vec<StrategicElement>,
    pub outcome: AnalysisOutcome,
    pub headlines: Vec<Headline>,
}

impl AnalysisReport {
    pub fn recommendations(&self) -> &[Recommendation] {
        match &self.outcome {
            AnalysisOutcome::Ranked(recs) => recs,
            AnalysisOutcome::InsufficientElements { .. } => &[],
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self.outcome, AnalysisOutcome::InsufficientElements { .. })
    }
}
