use serde::Deserialize;

pub const DEFAULT_DATA_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_KEY_ENV: &str = "LLM_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictorConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_url")]
    pub base_url: String,
    #[serde(default = "default_data_timeout")]
    pub timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: default_data_url(),
            timeout_secs: default_data_timeout(),
        }
    }
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_data_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Resolved from `api_key_env` at load time, never read from files.
    #[serde(skip)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: None,
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            api_key: None,
            temperature: default_temperature(),
            max_turns: default_max_turns(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

impl LlmConfig {
    pub fn is_configured(&self) -> bool {
        self.model
            .as_deref()
            .is_some_and(|model| !model.trim().is_empty())
    }
}

fn default_api_base() -> String {
    "http://localhost:4000/v1".to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_turns() -> u32 {
    8
}

fn default_llm_timeout() -> u64 {
    60
}
