// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, home_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/chat", post(chat_handler))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
