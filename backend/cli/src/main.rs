use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use askforge_answer::providers::OpenAiProvider;
use askforge_answer::{AnswerService, AnswerSettings};
use askforge_config::{mask_secret, Config};
use askforge_core::CompletionProvider;
use askforge_gateway::{start_server, GatewayState};
use askforge_understanding::{OcrEngine, SimulatedOcr};

#[derive(Parser)]
#[command(name = "askforge")]
#[command(about = "askforge question-answering web service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the askforge HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current service status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("askforge is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        model = %config.model,
        openai_key_configured = config.openai_key_configured(),
        openai_key_length = config.openai_api_key.as_deref().map_or(0, str::len),
        ocr_key_configured = config.ocr_key_configured(),
        "Starting askforge"
    );

    let provider: Option<Arc<dyn CompletionProvider>> = match config.effective_openai_key() {
        Some(key) => {
            info!(key = %mask_secret(key), "Registered OpenAI completion provider");
            Some(Arc::new(
                OpenAiProvider::new(key)
                    .with_timeout(Duration::from_secs(config.request_timeout_secs)),
            ))
        }
        None => {
            info!("No OpenAI API key configured; answers will be simulated");
            None
        }
    };

    let ocr: Arc<dyn OcrEngine> = if config.ocr_key_configured() {
        Arc::new(SimulatedOcr::with_credential())
    } else {
        Arc::new(SimulatedOcr::without_credential())
    };

    let settings = AnswerSettings {
        model: config.model.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    let state = GatewayState {
        answer: Arc::new(AnswerService::new(provider, settings)),
        ocr,
        config: Arc::new(config),
    };

    start_server(addr, state).await
}
