//! Capability registry.
//!
//! A capability is a named async callable with a JSON-schema description of
//! its arguments. Orchestrators (the LLM agent, the CLI) look capabilities
//! up by name and invoke them with a JSON argument object, so the scoring
//! logic stays independent of any particular orchestration framework.

pub mod builtin;

use crate::error::{PredictorError, Result};
use crate::provider::TeamProvider;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

#[async_trait]
pub trait Capability: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the argument object.
    fn parameters(&self) -> Value;

    async fn invoke(&self, args: Value) -> Result<Value>;
}

#[derive(Default, Clone)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `get_team_stats` and `calculate_team_strength`.
    pub fn with_defaults(provider: Arc<dyn TeamProvider>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(builtin::GetTeamStats::new(Arc::clone(&provider))));
        registry.register(Arc::new(builtin::CalculateTeamStrength::new(provider)));
        registry
    }

    pub fn register(&mut self, capability: Arc<dyn Capability>) {
        let name = capability.name().to_string();
        if self.capabilities.insert(name.clone(), capability).is_some() {
            warn!(capability = %name, "replaced existing capability");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.capabilities.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Function-tool descriptions in the chat-completions `tools` format.
    pub fn specs(&self) -> Vec<Value> {
        self.capabilities
            .values()
            .map(|capability| {
                json!({
                    "type": "function",
                    "function": {
                        "name": capability.name(),
                        "description": capability.description(),
                        "parameters": capability.parameters(),
                    }
                })
            })
            .collect()
    }

    pub async fn invoke(&self, name: &str, args: Value) -> Result<Value> {
        let capability = self
            .get(name)
            .ok_or_else(|| PredictorError::UnknownCapability(name.to_string()))?;
        debug!(capability = name, %args, "invoking capability");
        capability.invoke(args).await
    }
}

/// Reads a required non-negative integer argument from an object that holds
/// no other keys.
pub(crate) fn require_u32(capability: &str, args: &Value, key: &str) -> Result<u32> {
    let invalid = |reason: String| PredictorError::InvalidArguments {
        capability: capability.to_string(),
        reason,
    };

    let object = args
        .as_object()
        .ok_or_else(|| invalid("arguments must be a JSON object".to_string()))?;
    if let Some(extra) = object.keys().find(|name| name.as_str() != key) {
        return Err(invalid(format!("unexpected argument `{extra}`")));
    }
    let value = object
        .get(key)
        .ok_or_else(|| invalid(format!("missing `{key}`")))?;

    value
        .as_u64()
        .and_then(|raw| u32::try_from(raw).ok())
        .ok_or_else(|| invalid(format!("`{key}` must be a non-negative integer, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fixtures::{strong_team, StaticProvider};

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::with_defaults(Arc::new(StaticProvider::default().with_team(strong_team(1))))
    }

    #[test]
    fn defaults_register_both_team_capabilities() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["calculate_team_strength", "get_team_stats"]);

        let specs = registry.specs();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|spec| spec["type"] == "function"));
        assert!(specs
            .iter()
            .all(|spec| spec["function"]["parameters"]["required"] == json!(["team_id"])));
    }

    #[tokio::test]
    async fn unknown_capability_is_an_error() {
        let result = registry().invoke("predict_weather", json!({})).await;
        assert!(matches!(result, Err(PredictorError::UnknownCapability(name)) if name == "predict_weather"));
    }

    #[test]
    fn require_u32_validates_shape() {
        assert_eq!(require_u32("t", &json!({"team_id": 4}), "team_id").ok(), Some(4));
        assert!(require_u32("t", &json!([4]), "team_id").is_err());
        assert!(require_u32("t", &json!({}), "team_id").is_err());
        assert!(require_u32("t", &json!({"team_id": -1}), "team_id").is_err());
        assert!(require_u32("t", &json!({"team_id": "4"}), "team_id").is_err());
        assert!(matches!(
            require_u32("calculate_team_strength", &json!({"team_id": 1, "bogus": true}), "team_id"),
            Err(PredictorError::InvalidArguments { reason, .. }) if reason.contains("bogus")
        ));
    }

    #[test]
    fn registering_same_name_replaces_entry() {
        let provider: Arc<dyn TeamProvider> = Arc::new(StaticProvider::default());
        let mut registry = CapabilityRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(builtin::GetTeamStats::new(Arc::clone(&provider))));
        registry.register(Arc::new(builtin::GetTeamStats::new(provider)));
        assert_eq!(registry.names().len(), 1);
    }
}
