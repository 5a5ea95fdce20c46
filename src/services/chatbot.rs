use super::completion::{CompletionProvider, PromptMessage};
use crate::error::ProviderError;

pub const SYSTEM_PROMPT: &str = "Краткие ответы на русском языке.";
pub const MAX_REPLY_TOKENS: u32 = 1000;

/// System instruction first, then the user's message as-is.
pub fn build_prompt(user_msg: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(SYSTEM_PROMPT),
        PromptMessage::user(user_msg),
    ]
}

pub async fn generate_reply(
    provider: &dyn CompletionProvider,
    model: &str,
    user_msg: &str,
) -> Result<String, ProviderError> {
    let prompt = build_prompt(user_msg);
    provider.complete(model, &prompt, MAX_REPLY_TOKENS).await
}
