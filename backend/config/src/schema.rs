use std::collections::HashMap;

use serde::Deserialize;

/// Placeholder value shipped in example env files. A key equal to this is
/// treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

/// askforge runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// OpenAI API key; `None` means answers are simulated
    pub openai_api_key: Option<String>,
    /// OCR service API key; only selects which stub branch runs
    pub ocr_api_key: Option<String>,
    /// Completion model identifier
    pub model: String,
    /// Sampling temperature for completions
    pub temperature: f32,
    /// Response-length cap for completions
    pub max_tokens: u32,
    /// Outbound request timeout, seconds
    pub request_timeout_secs: u64,
    /// Log level
    pub log_level: String,
    /// Deployment environment label, reported by the debug endpoint
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            openai_api_key: None,
            ocr_api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables with sensible
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build configuration from a provided variable map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_address: non_empty(vars, "ASKFORGE_BIND").unwrap_or(defaults.bind_address),
            port: parsed(vars, "PORT").unwrap_or(defaults.port),
            openai_api_key: non_empty(vars, "OPENAI_API_KEY"),
            ocr_api_key: non_empty(vars, "OCR_API_KEY"),
            model: non_empty(vars, "ASKFORGE_MODEL").unwrap_or(defaults.model),
            temperature: parsed(vars, "ASKFORGE_TEMPERATURE").unwrap_or(defaults.temperature),
            max_tokens: parsed(vars, "ASKFORGE_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            request_timeout_secs: parsed(vars, "ASKFORGE_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            log_level: non_empty(vars, "RUST_LOG").unwrap_or(defaults.log_level),
            environment: non_empty(vars, "ASKFORGE_ENV").unwrap_or(defaults.environment),
        }
    }

    /// The OpenAI key, if one is actually usable.
    ///
    /// Absent, empty, and placeholder values all mean "not configured" and
    /// route answers down the simulated path without any network I/O.
    pub fn effective_openai_key(&self) -> Option<&str> {
        match self.openai_api_key.as_deref() {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Some(key),
            _ => None,
        }
    }

    pub fn openai_key_configured(&self) -> bool {
        self.effective_openai_key().is_some()
    }

    pub fn ocr_key_configured(&self) -> bool {
        matches!(self.ocr_api_key.as_deref(), Some(key) if !key.is_empty())
    }
}

fn non_empty(vars: &HashMap<String, String>, name: &str) -> Option<String> {
    vars.get(name).filter(|v| !v.is_empty()).cloned()
}

fn parsed<T: std::str::FromStr>(vars: &HashMap<String, String>, name: &str) -> Option<T> {
    vars.get(name).and_then(|v| v.parse().ok())
}
