//! API route handlers for the gateway.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
};
use futures::{Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;

use geoassist_core::{ChatRequest, StreamEvent};
use geoassist_retrieval::search;

use crate::prompt;
use crate::relay::relay;
use crate::server::AppState;

/// Non-streaming error payload, returned before any stream is opened.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "geoassist-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Chat endpoint: validate, retrieve, assemble context, relay the stream.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    // Validation failures short-circuit before any upstream work
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message is required"));
    }

    let Some(model) = state.model.clone() else {
        return Err(ApiError::server_error("API key not configured"));
    };

    let relevant = search(&state.corpus, &request.message, prompt::TOP_K);
    tracing::debug!(
        "chat request: {} grounding documents for message of {} chars",
        relevant.len(),
        request.message.len()
    );

    let system = prompt::build_system_prompt(&relevant);
    let turns = prompt::build_turns(request.history.as_deref(), &request.message);

    let upstream = model.stream_chat(&system, &turns).await.map_err(|e| {
        tracing::error!("failed to open upstream stream: {e}");
        ApiError::server_error("Failed to reach the assistant")
    })?;

    let events = relay(upstream).map(|event| Ok(sse_event(event)));
    Ok(Sse::new(events))
}

/// Encode a relay event as an SSE frame.
///
/// Deltas carry a JSON payload, the terminal sentinel is the literal `[DONE]`.
fn sse_event(event: StreamEvent) -> Event {
    match event {
        StreamEvent::Delta(text) => {
            Event::default().data(serde_json::json!({ "text": text }).to_string())
        }
        StreamEvent::Done => Event::default().data("[DONE]"),
    }
}
