// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to completion provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}

/// Every failure the `/chat` handler can hit.
///
/// All variants render the same way: HTTP 500 with the error text in `reply`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ChatResponse::new(format!("Error: {}", self));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
