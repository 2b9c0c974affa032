use thiserror::Error;

/// Top-level error type for the askforge runtime.
#[derive(Debug, Error)]
pub enum AskError {
    /// A required input was missing or empty. Maps to HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure while parsing or handling a request. Maps to HTTP 500.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AskError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Failure reported by a completion backend.
///
/// Classification is structured where the transport gives us a status code;
/// the substring check in [`ProviderError::is_auth`] exists only for errors
/// that never reached HTTP (connect failures, DNS) and is fragile by nature:
/// any such message containing "auth" is treated as an auth failure.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("authentication rejected by backend: {message}")]
    Auth { message: String },

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request to backend timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed backend response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Build from an HTTP status + body, mapping credential rejections to
    /// the auth variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Auth { message },
            _ => Self::Api { status, message },
        }
    }

    /// Whether this failure should be surfaced as an authentication problem.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::Auth { .. } => true,
            Self::Api { .. } | Self::Timeout | Self::Malformed(_) => false,
            Self::Network(message) => message.to_ascii_lowercase().contains("auth"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_classifies_as_auth() {
        let err = ProviderError::from_status(401, "Incorrect API key provided".into());
        assert!(err.is_auth());
        let err = ProviderError::from_status(403, "forbidden".into());
        assert!(err.is_auth());
    }

    #[test]
    fn server_error_status_is_not_auth() {
        let err = ProviderError::from_status(500, "upstream exploded".into());
        assert!(!err.is_auth());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn network_error_falls_back_to_substring() {
        assert!(ProviderError::Network("proxy authentication required".into()).is_auth());
        assert!(!ProviderError::Network("connection refused".into()).is_auth());
    }

    #[test]
    fn timeout_is_a_generic_backend_failure() {
        assert!(!ProviderError::Timeout.is_auth());
    }

    #[test]
    fn validation_error_displays_bare_message() {
        let err = AskError::validation("Question is required");
        assert_eq!(err.to_string(), "Question is required");
    }
}
