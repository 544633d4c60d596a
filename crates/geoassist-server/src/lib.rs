//! HTTP gateway for GeoAssist
//!
//! Exposes the chat orchestrator over axum: `POST /api/chat` validates the
//! request, retrieves grounding documents, opens one upstream generation
//! stream and relays it to the caller as Server-Sent Events.

pub mod prompt;
pub mod relay;
pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
