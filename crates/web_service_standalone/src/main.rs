use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_service::ServerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "chat-to-note")]
#[command(about = "Turn chat transcripts into Markdown notes with Claude")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Address to bind
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(long, env = "APP_PORT", default_value = "8000")]
    port: u16,

    /// Env file loaded at startup; accepted API keys are written back to it
    #[arg(long, env = "ENV_FILE", default_value = ".env")]
    env_file: PathBuf,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Flags may name a different env file, so peek at it before loading.
    let env_file = Cli::parse().env_file;
    let env_loaded = dotenvy::from_path(&env_file).is_ok();
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if env_loaded {
        tracing::info!("Loaded environment from {}", cli.env_file.display());
    } else {
        tracing::debug!("No env file at {}", cli.env_file.display());
    }

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        env_file: cli.env_file,
    };

    web_service::run(config).await.map_err(|e| {
        tracing::error!("Failed to run web service: {}", e);
        anyhow!(e)
    })
}
