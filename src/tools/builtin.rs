use super::{require_u32, Capability};
use crate::error::Result;
use crate::provider::TeamProvider;
use crate::scoring;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

fn team_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "team_id": {
                "type": "integer",
                "minimum": 0,
                "description": "Identifier of the team in the sports data service"
            }
        },
        "required": ["team_id"],
        "additionalProperties": false
    })
}

pub struct GetTeamStats {
    provider: Arc<dyn TeamProvider>,
}

impl GetTeamStats {
    pub const NAME: &'static str = "get_team_stats";

    pub fn new(provider: Arc<dyn TeamProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Capability for GetTeamStats {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Get comprehensive statistics for a team including players."
    }

    fn parameters(&self) -> Value {
        team_id_schema()
    }

    async fn invoke(&self, args: Value) -> Result<Value> {
        let team_id = require_u32(Self::NAME, &args, "team_id")?;
        info!(team_id, "getting team stats");
        let team = self.provider.get_team(team_id).await?;
        Ok(serde_json::to_value(team)?)
    }
}

pub struct CalculateTeamStrength {
    provider: Arc<dyn TeamProvider>,
}

impl CalculateTeamStrength {
    pub const NAME: &'static str = "calculate_team_strength";

    pub fn new(provider: Arc<dyn TeamProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Capability for CalculateTeamStrength {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Calculate a team's overall strength score in [0, 1] based on cricket statistics."
    }

    fn parameters(&self) -> Value {
        team_id_schema()
    }

    async fn invoke(&self, args: Value) -> Result<Value> {
        let team_id = require_u32(Self::NAME, &args, "team_id")?;
        let team = self.provider.get_team(team_id).await?;
        let strength = scoring::score(&team);
        info!(team_id, strength, "team strength calculated");
        Ok(json!(strength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;
    use crate::provider::fixtures::{strong_team, StaticProvider};
    use crate::tools::CapabilityRegistry;

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::with_defaults(Arc::new(StaticProvider::default().with_team(strong_team(1))))
    }

    #[tokio::test]
    async fn strength_capability_returns_bare_score() {
        let value = registry()
            .invoke(CalculateTeamStrength::NAME, json!({"team_id": 1}))
            .await
            .expect("strength should compute");

        let expected = scoring::score(&strong_team(1));
        assert_eq!(value.as_f64(), Some(expected));
    }

    #[tokio::test]
    async fn stats_capability_returns_team_record() {
        let value = registry()
            .invoke(GetTeamStats::NAME, json!({"team_id": 1}))
            .await
            .expect("stats should load");

        assert_eq!(value["name"], "Harbour Hawks");
        assert_eq!(value["players"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn missing_team_propagates_instead_of_scoring_neutral() {
        let result = registry()
            .invoke(CalculateTeamStrength::NAME, json!({"team_id": 42}))
            .await;
        assert!(matches!(result, Err(PredictorError::TeamNotFound(42))));
    }

    #[tokio::test]
    async fn bad_arguments_are_rejected_before_fetching() {
        let provider = Arc::new(StaticProvider::default().with_team(strong_team(1)));
        let capability = CalculateTeamStrength::new(provider.clone());

        let result = capability.invoke(json!({"team": 1})).await;

        assert!(matches!(result, Err(PredictorError::InvalidArguments { .. })));
        assert_eq!(provider.fetches.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
