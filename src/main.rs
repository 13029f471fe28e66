use anyhow::{Context, Result};
use clap::Parser;
use realtime_session_proxy::{router, AppState, Cli, Config, SessionClient};
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let cli = Cli::parse();
    let config = Config::from_env()
        .context("Failed to load application configuration")?
        .with_cli(&cli);

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    if !config.client.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set; the upstream will reject every session request");
    }

    // --- 3. Build the Application ---
    let static_dir = config.static_dir.clone();
    if !static_dir.join(realtime_session_proxy::INDEX_FILE).is_file() {
        tracing::warn!("{} has no index page; GET / will fail", static_dir.display());
    }
    let state = AppState::new(SessionClient::new(config.client), &static_dir);
    let app = router(state);

    // --- 4. Serve ---
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!("Starting server, listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received Ctrl-C, shutting down...");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
