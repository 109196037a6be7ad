pub mod heuristic;
pub mod llm;
pub mod prompt;

use crate::error::{PredictorError, Result};
use crate::provider::TeamProvider;
use crate::tools::CapabilityRegistry;
use crate::types::analysis::MatchAnalysis;
use crate::types::config::PredictorConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

pub use heuristic::HeuristicPredictor;
pub use llm::AgentPredictor;

/// Produces a structured prediction for a home/away pairing.
#[async_trait]
pub trait Predictor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze_match(&self, home_id: u32, away_id: u32) -> Result<MatchAnalysis>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// The LLM agent when a model is configured, otherwise the heuristic.
    Auto,
    Agent,
    Heuristic,
}

pub fn build_predictor(
    engine: Engine,
    config: &PredictorConfig,
    provider: Arc<dyn TeamProvider>,
) -> Result<Box<dyn Predictor>> {
    match engine {
        Engine::Heuristic => Ok(Box::new(HeuristicPredictor::new(provider))),
        Engine::Agent => {
            let registry = CapabilityRegistry::with_defaults(provider);
            Ok(Box::new(AgentPredictor::new(config.llm.clone(), registry)?))
        }
        Engine::Auto if config.llm.is_configured() => {
            build_predictor(Engine::Agent, config, provider)
        }
        Engine::Auto => {
            warn!("no llm model configured; using heuristic predictor");
            Ok(Box::new(HeuristicPredictor::new(provider)))
        }
    }
}

pub(crate) fn ensure_distinct(home_id: u32, away_id: u32) -> Result<()> {
    if home_id == away_id {
        return Err(PredictorError::InvalidArguments {
            capability: "analyze_match".to_string(),
            reason: format!("a team cannot play itself (team {home_id})"),
        });
    }
    Ok(())
}
