use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub const HOME_TEXT: &str = "Cravt AI Backend работает!";

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("rejected chat body: {}", rejection.body_text());
        AppError::InvalidRequest(rejection.body_text())
    })?;

    let reply = generate_reply(state.provider.as_ref(), &state.model, &payload.message)
        .await
        .inspect_err(|e| tracing::error!("completion failed: {}", e))?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn home_handler() -> &'static str {
    HOME_TEXT
}
