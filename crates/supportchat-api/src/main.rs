//! Support chat CLI and REST API entry point.
//!
//! Binary name: `supportchat`
//!
//! Loads `.env` and configuration, sets up tracing, then dispatches to the
//! requested command or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use state::AppState;
use supportchat_infra::config::load_config;
use supportchat_observe::tracing_setup::{LogOptions, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 if matches!(cli.command, Commands::Serve { .. }) => "info",
        0 => "warn",
        1 => "info,supportchat=debug",
        _ => "trace",
    };
    init_tracing(LogOptions::from_env(filter))
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).await;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::init(&config).await?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!();
                println!(
                    "  {} Support chat API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Send { message, session } => {
            let state = AppState::init(&config).await?;
            cli::chat::send_message(&state, &message, session, cli.json, cli.quiet).await?;
        }

        Commands::History { session_id } => {
            // History needs only the database, not the provider key.
            let repo = state::open_repository(&config).await?;
            cli::chat::show_history(&repo, &session_id, cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
