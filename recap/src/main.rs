use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recap::api::{create_router, AppState};
use recap::config::Config;
use recap::llm::LlmProvider;

#[derive(Parser)]
#[command(name = "recap")]
#[command(about = "Summarize meeting transcripts into key points, action items and a PDF report")]
struct Args {
    /// Dotenv file read before the process environment
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Bind host, overrides RECAP_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides RECAP_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_file_loaded = dotenvy::from_path(&args.env_file).is_ok();

    init_tracing();

    if !env_file_loaded {
        tracing::debug!(path = %args.env_file.display(), "No env file loaded");
    }

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Initializing LLM provider: {}...", config.llm.model);
    let llm = LlmProvider::new(&config.llm)?;
    tracing::info!(
        backend = llm.backend().name(),
        base_url = llm.base_url(),
        "LLM provider ready"
    );
    tracing::info!(
        "Reports are written to {}",
        config.report.output_dir.display()
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, llm);
    let app = create_router(state);

    tracing::info!("Recap starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recap=info,tower_http=debug".into());

    let json = std::env::var("RECAP_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
