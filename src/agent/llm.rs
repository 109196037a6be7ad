//! LLM-driven predictor.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint, exposes the
//! capability registry as function tools, and runs the tool-calling loop
//! until the model answers with a JSON [`MatchAnalysis`].

use super::prompt::{task_prompt, SYSTEM_PROMPT};
use super::{ensure_distinct, Predictor};
use crate::error::{PredictorError, Result};
use crate::tools::CapabilityRegistry;
use crate::types::analysis::MatchAnalysis;
use crate::types::config::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::text("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::text("user", content)
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    fn text(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    fn pending_tool_calls(&self) -> Option<&[ToolCall]> {
        self.tool_calls
            .as_deref()
            .filter(|calls| !calls.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: FunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object, as sent by the model.
    #[serde(default)]
    pub arguments: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct AgentPredictor {
    config: LlmConfig,
    model: String,
    registry: CapabilityRegistry,
    http: Client,
}

impl AgentPredictor {
    pub fn new(config: LlmConfig, registry: CapabilityRegistry) -> Result<Self> {
        let model = config
            .model
            .clone()
            .filter(|model| !model.trim().is_empty())
            .ok_or_else(|| {
                PredictorError::LlmNotConfigured(
                    "set llm.model in predictor.toml or MODEL_NAME".to_string(),
                )
            })?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            model,
            registry,
            http,
        })
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            tools: self.registry.specs(),
            temperature: self.config.temperature,
        };
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        let mut builder = self.http.post(&url).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "chat completion failed");
            return Err(PredictorError::Llm(format!("{status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::Llm(format!("failed to parse chat response: {e}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| PredictorError::Llm("response contained no choices".to_string()))
    }

    async fn run_tool_call(&self, call: &ToolCall) -> Result<ChatMessage> {
        let args = parse_arguments(&call.function.name, &call.function.arguments)?;
        let result = self.registry.invoke(&call.function.name, args).await?;
        Ok(ChatMessage::tool(call.id.clone(), result.to_string()))
    }
}

#[async_trait]
impl Predictor for AgentPredictor {
    fn name(&self) -> &'static str {
        "agent"
    }

    async fn analyze_match(&self, home_id: u32, away_id: u32) -> Result<MatchAnalysis> {
        ensure_distinct(home_id, away_id)?;
        info!(model = %self.model, home_id, away_id, "starting agent analysis");

        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(task_prompt(home_id, away_id)),
        ];

        for turn in 1..=self.config.max_turns {
            let reply = self.complete(&messages).await?;

            let Some(calls) = reply.pending_tool_calls().map(<[ToolCall]>::to_vec) else {
                debug!(turn, "agent produced final answer");
                return parse_analysis(reply.content.as_deref().unwrap_or_default());
            };

            debug!(turn, calls = calls.len(), "agent requested tools");
            messages.push(reply);
            for call in &calls {
                messages.push(self.run_tool_call(call).await?);
            }
        }

        Err(PredictorError::AgentLoop(self.config.max_turns))
    }
}

fn parse_arguments(capability: &str, raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(raw).map_err(|e| PredictorError::InvalidArguments {
        capability: capability.to_string(),
        reason: format!("arguments are not valid JSON: {e}"),
    })
}

/// Pulls the JSON object out of a model reply that may wrap it in a code
/// fence or surrounding prose.
fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        let body = after_fence
            .strip_prefix("json")
            .unwrap_or(after_fence);
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

pub(crate) fn parse_analysis(content: &str) -> Result<MatchAnalysis> {
    let json = extract_json(content);
    let analysis: MatchAnalysis = serde_json::from_str(json)
        .map_err(|e| PredictorError::InvalidAnalysis(format!("could not parse answer: {e}")))?;
    analysis.validate()?;
    Ok(analysis)
}
