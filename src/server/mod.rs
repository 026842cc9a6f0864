pub mod handlers;
pub mod types;

use crate::gateway::CompletionGateway;
use crate::llm::OpenRouterClient;
use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router: the JSON API routes, permissive CORS, and
/// the static SPA bundle with an index-document fallback so unmatched paths
/// return the entry document (client-side routing), not a 404.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/quiz/generate", post(handlers::generate_quiz))
        .route("/debug/config", get(handlers::debug_config))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One client and gateway for the process lifetime; handlers share them
    // through the state and hold no per-request state of their own.
    let client = OpenRouterClient::new(config.llm.clone());
    let gateway = CompletionGateway::new(Arc::new(client));

    let app_state = AppState {
        gateway: Arc::new(gateway),
        llm: config.llm.clone(),
    };

    let app = router(app_state, &config.server.static_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
