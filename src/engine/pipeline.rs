use log::{info, warn};

use crate::config::{Config, NewsConfig};
use crate::engine::error::ExtractionError;
use crate::engine::extractor::extract_elements;
use crate::engine::llm_client::{CompletionService, OpenAiClient};
use crate::engine::news_client::{fetch_headlines, NewsApiClient, NewsSource};
use crate::engine::path_generator::generate_paths;
use crate::engine::ranker::rank_paths;
use crate::engine::scoring::{RandomScoring, ScoringPolicy};
use crate::model::element::{ElementCategory, StrategicElement};
use crate::model::report::{AnalysisOutcome, AnalysisReport, Recommendation};

/// Result of one run as seen by a renderer.
pub type RunResult = Result<AnalysisReport, ExtractionError>;

/// Extract → generate → rank, then fetch headlines.
pub struct Pipeline {
    completion: Box<dyn CompletionService>,
    news: Box<dyn NewsSource>,
    scoring: Box<dyn ScoringPolicy + Send>,
    news_query: String,
    max_headlines: usize,
}

impl Pipeline {
    pub fn new(
        completion: Box<dyn CompletionService>,
        news: Box<dyn NewsSource>,
        scoring: Box<dyn ScoringPolicy + Send>,
        news_config: &NewsConfig,
    ) -> Self {
        Self {
            completion,
            news,
            scoring,
            news_query: news_config.query.clone(),
            max_headlines: news_config.max_headlines,
        }
    }

    /// Wire the real HTTP clients and random scoring from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let completion = OpenAiClient::from_config(&config.completion)?;
        let news = NewsApiClient::from_config(&config.news)?;

        Ok(Self::new(
            Box::new(completion),
            Box::new(news),
            Box::new(RandomScoring::from_entropy()),
            &config.news,
        ))
    }

    pub fn analyze(&mut self, text: &str) -> RunResult {
        let elements = extract_elements(self.completion.as_ref(), text)?;

        let ends: Vec<&StrategicElement> = elements
            .iter()
            .filter(|e| e.is(ElementCategory::End))
            .collect();
        let means: Vec<&StrategicElement> = elements
            .iter()
            .filter(|e| e.is(ElementCategory::Means))
            .collect();

        if ends.is_empty() || means.is_empty() {
            warn!(
                "Insufficient elements extracted (ends: {}, means: {})",
                ends.len(),
                means.len()
            );
            let outcome = AnalysisOutcome::InsufficientElements {
                ends: ends.len(),
                means: means.len(),
            };
            return Ok(AnalysisReport {
                elements,
                outcome,
                headlines: Vec::new(),
            });
        }

        let paths = generate_paths(&ends, &means, self.scoring.as_mut());
        let ranked = rank_paths(&paths);
        let recommendations = Recommendation::from_ranked(&ranked);
        info!("Ranked {} strategy paths", recommendations.len());

        let headlines = fetch_headlines(self.news.as_ref(), &self.news_query, self.max_headlines);

        Ok(AnalysisReport {
            elements,
            outcome: AnalysisOutcome::Ranked(recommendations),
            headlines,
        })
    }
}
