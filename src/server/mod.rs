pub mod handlers;

use crate::{
    Result,
    completion::{CompletionClient, CompletionSettings},
    config::Config,
    llm::GroqClient,
    shell::DisplayShell,
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(shell: DisplayShell) -> Router {
    let app_state = handlers::AppState { shell };

    Router::new()
        .route("/", get(handlers::render))
        .route("/state", get(handlers::view_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = GroqClient::new(&config.llm)?;
    let client = CompletionClient::new(Arc::new(llm), CompletionSettings::from(&config.llm));

    let shell = DisplayShell::new();
    shell.mount(client)?;

    let app = router(shell.clone());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shell.teardown();
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
