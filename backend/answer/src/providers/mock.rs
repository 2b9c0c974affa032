use async_trait::async_trait;

use askforge_core::{CompletionProvider, CompletionRequest, CompletionResponse, ProviderError};

/// A mock completion provider that returns canned responses or scripted
/// failures.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    failure: Option<ProviderError>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            failure: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Every call fails with the given error.
    pub fn failing_with(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(CompletionResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Mock response".to_string()),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(vec!["mock".to_string()])
    }
}
