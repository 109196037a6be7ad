pub mod json;
pub mod text;

use crate::error::PredictorError;
use crate::types::analysis::MatchAnalysis;
use crate::types::scoring::StrengthBreakdown;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub engine: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub analysis: MatchAnalysis,
}

impl PredictionReport {
    pub fn new(home_team_id: u32, away_team_id: u32, engine: &str, analysis: MatchAnalysis) -> Self {
        Self {
            home_team_id,
            away_team_id,
            engine: engine.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            analysis,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub team_id: u32,
    pub team_name: String,
    #[serde(flatten)]
    pub breakdown: StrengthBreakdown,
}

pub fn render_prediction(
    report: &PredictionReport,
    format: OutputFormat,
) -> Result<String, PredictorError> {
    match format {
        OutputFormat::Text => Ok(text::prediction_to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(PredictorError::Json),
    }
}

pub fn render_strength(
    report: &StrengthReport,
    format: OutputFormat,
) -> Result<String, PredictorError> {
    match format {
        OutputFormat::Text => Ok(text::strength_to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(PredictorError::Json),
    }
}
