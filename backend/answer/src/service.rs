use std::sync::Arc;

use tracing::{info, warn};

use askforge_core::{AskError, CompletionProvider, CompletionRequest, GeneratedAnswer};

/// Fixed system instruction for every completion call. There is no
/// conversation history; the question is the sole user turn.
const SYSTEM_PROMPT: &str = "You are a helpful assistant that provides accurate answers to \
                             questions. Be concise but thorough.";

/// Completion tunables, normally filled from the runtime config.
#[derive(Debug, Clone)]
pub struct AnswerSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// The answer service: validates a question, forwards it to the completion
/// backend when one is configured, and flattens every backend failure into a
/// renderable [`GeneratedAnswer`].
///
/// Stateless and safe to call concurrently; the provider handle is immutable
/// after construction.
pub struct AnswerService {
    provider: Option<Arc<dyn CompletionProvider>>,
    settings: AnswerSettings,
}

impl AnswerService {
    /// `provider: None` means no credential is configured; every question
    /// then takes the simulated path without network I/O.
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, settings: AnswerSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider(&self) -> Option<&Arc<dyn CompletionProvider>> {
        self.provider.as_ref()
    }

    /// Answer a single question.
    ///
    /// The only error this returns is the empty-question validation failure;
    /// backend failures come back as `Ok` with diagnostic fields set, so the
    /// caller can always render `answer` under a 200 status.
    pub async fn answer(&self, question: &str) -> Result<GeneratedAnswer, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::validation("Question is required"));
        }

        let Some(provider) = &self.provider else {
            info!("No completion backend configured, returning simulated answer");
            return Ok(simulated_answer(question));
        };

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: question.to_string(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        match provider.complete(&request).await {
            Ok(response) => {
                info!(
                    provider = %provider.name(),
                    tokens = response.tokens_used,
                    latency_ms = response.latency_ms,
                    preview = %preview(&response.content),
                    "Completion received"
                );
                Ok(GeneratedAnswer::completed(response.content))
            }
            Err(error) if error.is_auth() => {
                warn!(provider = %provider.name(), error = %error, "Backend rejected credentials");
                Ok(GeneratedAnswer::degraded(
                    "Unable to generate answer: The OpenAI API key appears to be invalid or has \
                     expired. Please check your API key and try again.",
                    "API key authentication failed",
                ))
            }
            Err(error) => {
                let message = error.to_string();
                warn!(provider = %provider.name(), error = %message, "Completion failed");
                Ok(GeneratedAnswer::degraded(
                    format!(
                        "There was an error connecting to the AI service: {message}. \
                         Please try again later."
                    ),
                    "Failed to process question",
                )
                .with_details(message))
            }
        }
    }
}

fn simulated_answer(question: &str) -> GeneratedAnswer {
    GeneratedAnswer::degraded(
        format!(
            "This is a simulated response since the OpenAI API key is not configured. \
             In a production environment, this would be an AI-generated answer to: \"{question}\""
        ),
        "OpenAI API key not configured",
    )
}

/// Truncate an answer for log lines without splitting a UTF-8 character.
fn preview(content: &str) -> String {
    let mut out: String = content.chars().take(50).collect();
    if out.len() < content.len() {
        out.push_str("...");
    }
    out
}
