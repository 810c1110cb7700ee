//! Prompt-to-message relay.
//!
//! Every generation failure is collapsed into [`FALLBACK_MESSAGE`]; the
//! cause only reaches the logs.

use crate::models::Category;
use crate::services::prompt::build_prompt;
use crate::services::providers::{ProviderError, TextProvider};
use serde_json::Value;
use std::sync::Arc;

/// Returned to the caller whenever generation fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Sorry, there was an error processing your request.";

#[derive(Clone)]
pub struct RelayService {
    provider: Arc<dyn TextProvider>,
}

impl RelayService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Generate the coaching message for `payload`, or the fallback text.
    pub async fn message_for(&self, category: Category, payload: &Value) -> String {
        match self.try_generate(category, payload).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    category = %category,
                    error.kind = e.kind(),
                    error = %e,
                    "Generation failed, returning fallback message"
                );
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    async fn try_generate(
        &self,
        category: Category,
        payload: &Value,
    ) -> Result<String, ProviderError> {
        let prompt = build_prompt(payload, category);
        let response = self.provider.generate(&prompt).await?;

        tracing::info!(
            category = %category,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Generation completed"
        );

        if response.text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(response.text)
    }
}
