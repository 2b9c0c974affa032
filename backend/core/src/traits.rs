use async_trait::async_trait;

use crate::error::ProviderError;

/// Trait for chat-completion backends used by the answer service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openai", "mock").
    fn name(&self) -> &str;

    /// Send a single non-streaming completion request.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, ProviderError>;

    /// List the model identifiers the backend exposes.
    ///
    /// Used by the connectivity probe; not part of the answer path.
    async fn list_models(&self) -> Result<Vec<String>, ProviderError>;
}

/// Request to a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
