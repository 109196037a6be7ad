mod cli;

use clap::Parser;
use match_predictor::agent::{self, Engine};
use match_predictor::error::{PredictorError, Result};
use match_predictor::mock::{self, MockStore};
use match_predictor::provider::{HttpTeamProvider, TeamProvider};
use match_predictor::report::{self, OutputFormat, PredictionReport, StrengthReport};
use match_predictor::tools::CapabilityRegistry;
use match_predictor::{config, scoring};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
    pub const TEAM_NOT_FOUND: i32 = 4;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn output_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Text => OutputFormat::Text,
        cli::OutputFormat::Json => OutputFormat::Json,
    }
}

async fn run(cli: cli::Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let mut config = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Predict(cmd) => {
            if let Some(url) = cmd.data_url {
                config.data.base_url = url;
            }
            if let Some(model) = cmd.model {
                config.llm.model = Some(model);
            }

            let engine = match cmd.engine {
                cli::EngineChoice::Auto => Engine::Auto,
                cli::EngineChoice::Agent => Engine::Agent,
                cli::EngineChoice::Heuristic => Engine::Heuristic,
            };
            let provider: Arc<dyn TeamProvider> = Arc::new(HttpTeamProvider::new(&config.data)?);
            let predictor = agent::build_predictor(engine, &config, provider)?;

            info!(
                home = cmd.home_team_id,
                away = cmd.away_team_id,
                engine = predictor.name(),
                "analyzing match"
            );
            let analysis = predictor
                .analyze_match(cmd.home_team_id, cmd.away_team_id)
                .await?;

            let prediction = PredictionReport::new(
                cmd.home_team_id,
                cmd.away_team_id,
                predictor.name(),
                analysis,
            );
            let rendered = report::render_prediction(&prediction, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Strength(cmd) => {
            if let Some(url) = cmd.data_url {
                config.data.base_url = url;
            }

            let provider = HttpTeamProvider::new(&config.data)?;
            let team = provider.get_team(cmd.team_id).await?;
            let strength = StrengthReport {
                team_id: cmd.team_id,
                team_name: team.display_name(),
                breakdown: scoring::breakdown(&team),
            };
            let rendered = report::render_strength(&strength, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tools => {
            let provider: Arc<dyn TeamProvider> = Arc::new(HttpTeamProvider::new(&config.data)?);
            let registry = CapabilityRegistry::with_defaults(provider);
            println!("{}", serde_json::to_string_pretty(&registry.specs())?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ServeMock(cmd) => {
            let store = match &cmd.fixtures {
                Some(path) => MockStore::from_file(path)?,
                None => MockStore::fixtures(),
            };
            let listener = tokio::net::TcpListener::bind(cmd.addr).await?;
            println!("mock data api listening on http://{}", listener.local_addr()?);
            mock::serve(listener, store).await?;
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                PredictorError::TeamNotFound(_) => exit_code::TEAM_NOT_FOUND,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
