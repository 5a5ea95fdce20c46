// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{CompletionProvider, OpenAiClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub model: String,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client =
            OpenAiClient::with_optional_key(config.api_key.clone(), config.base_url.clone());
        Self::new(Arc::new(client), config.model.clone())
    }
}
