use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("team not found: {0}")]
    TeamNotFound(u32),

    #[error("data service returned {status}: {body}")]
    DataService { status: u16, body: String },

    #[error("malformed team record for team {team_id}: {source}")]
    MalformedTeam {
        team_id: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("invalid arguments for {capability}: {reason}")]
    InvalidArguments { capability: String, reason: String },

    #[error("llm not configured: {0}")]
    LlmNotConfigured(String),

    #[error("llm error: {0}")]
    Llm(String),

    #[error("agent did not finish within {0} turns")]
    AgentLoop(u32),

    #[error("invalid analysis: {0}")]
    InvalidAnalysis(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PredictorError>;
