// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use chat::chatbot_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chatbot", post(chatbot_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
