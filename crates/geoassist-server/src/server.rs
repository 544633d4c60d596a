//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use geoassist_core::ChatModel;
use geoassist_retrieval::Corpus;

/// Shared state for the gateway server.
///
/// The corpus is loaded once and read concurrently by any number of request
/// handlers; it is never mutated, so no lock is needed. The model is `None`
/// when upstream credentials are missing, in which case chat requests fail
/// with a configuration error before any upstream call.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub model: Option<Arc<dyn ChatModel>>,
}

impl AppState {
    pub fn new(corpus: Arc<Corpus>, model: Option<Arc<dyn ChatModel>>) -> Self {
        Self { corpus, model }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(super::routes::health_check))
        .route("/api/chat", post(super::routes::chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server.
pub async fn start(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 GeoAssist server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
