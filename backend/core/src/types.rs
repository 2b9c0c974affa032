use serde::Serialize;

/// Outcome of one answer-service invocation.
///
/// `answer` is always populated; `error` marks a degraded outcome (simulated
/// reply, auth rejection, backend failure) without implying the HTTP request
/// itself failed. The shape is flattened into the wire response as-is.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedAnswer {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GeneratedAnswer {
    /// A live completion, no diagnostic.
    pub fn completed(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            error: None,
            details: None,
        }
    }

    /// A degraded outcome: explanatory answer plus a diagnostic label.
    pub fn degraded(answer: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            error: Some(error.into()),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_answer_serializes_without_error_fields() {
        let json = serde_json::to_value(GeneratedAnswer::completed("42")).unwrap();
        assert_eq!(json, serde_json::json!({ "answer": "42" }));
    }

    #[test]
    fn degraded_answer_keeps_diagnostics() {
        let json = serde_json::to_value(
            GeneratedAnswer::degraded("explanation", "Failed to process question")
                .with_details("boom"),
        )
        .unwrap();
        assert_eq!(json["error"], "Failed to process question");
        assert_eq!(json["details"], "boom");
    }
}
