use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use cravt_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().context("failed to load configuration")?;
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /chat will answer with errors");
    }
    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("relay listening on http://{} (model {})", addr, config.model);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

// Resolves when `signal` fires. If the listener could not be installed the
// server keeps running instead of stopping immediately.
async fn shutdown_signal(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
