use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "match-predictor",
    version,
    about = "Cricket team strength scoring and match prediction CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file merged over predictor.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the winner of a match between two teams
    Predict(PredictCommand),
    /// Show a team's strength score and its components
    Strength(StrengthCommand),
    /// Print the capability specs exposed to the agent
    Tools,
    /// Run the mock sports data API
    ServeMock(ServeMockCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EngineChoice {
    Auto,
    Agent,
    Heuristic,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct PredictCommand {
    pub home_team_id: u32,
    pub away_team_id: u32,
    #[arg(long, value_enum, default_value = "auto")]
    pub engine: EngineChoice,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
    /// Base URL of the sports data service
    #[arg(long)]
    pub data_url: Option<String>,
    /// Model name for the agent engine
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args)]
pub struct StrengthCommand {
    pub team_id: u32,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
    /// Base URL of the sports data service
    #[arg(long)]
    pub data_url: Option<String>,
}

#[derive(Args)]
pub struct ServeMockCommand {
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,
    /// JSON file with `teams` and `matches` arrays to serve instead of the
    /// built-in fixtures
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
}
