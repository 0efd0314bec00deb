use std::path::PathBuf;

use anyhow::Result;
use axum::http::Request;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use bizdata_config::AppConfig;
use bizdata_http::{AppState, router};

#[derive(Debug, Parser)]
#[command(
    name = "bizdata",
    version,
    about = "Security lookups scraped from the Bizportal quote site"
)]
struct Cli {
    /// Path to the TOML configuration file (missing file = defaults).
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the HTTP endpoint (default).
    Serve {
        /// Listen address; overrides `server.bind_addr`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one lookup and print the reply.
    Query {
        /// Free-text query, e.g. `אחזקות 5112628`.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level)),
        )
        .init();

    let state = AppState::from_config(&config)?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            serve(state, &bind_addr).await?;
        }
        Commands::Query { text } => {
            let query = text.join(" ");
            let reply = state.service.answer(Some(&query)).await;
            if reply.kind.is_failure() {
                warn!(kind = %reply.kind, "lookup failed");
            }
            println!("{}", reply.text);
        }
    }

    Ok(())
}

async fn serve(state: AppState, bind_addr: &str) -> Result<()> {
    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(addr = %bind_addr, "market data endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping gracefully");
}
