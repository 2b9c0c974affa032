//! Optical Character Recognition (OCR)
//!
//! The production deployment has no real recognition backend wired up, so the
//! only engine here is [`SimulatedOcr`]: a fixed artificial delay followed by
//! canned placeholder text. The credential check upstream only selects which
//! delay/text pair is used.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::info;

/// Extracts text from an uploaded image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine name (e.g., "simulated").
    fn name(&self) -> &str;

    /// Read all discernible text out of the image bytes.
    async fn extract_text(&self, image: &[u8], mime_type: Option<&str>) -> Result<String>;
}

const UNCONFIGURED_TEXT: &str = "This is a simulated OCR result.\n\
    In a production environment, this would be the actual text extracted from your image.\n\
    The OCR API key is not configured.";

const CONFIGURED_TEXT: &str = "This text was extracted from your uploaded image.\n\
    It would show the actual text recognized by OCR in a production environment.\n\
    For now, please edit this text if needed before submitting your question.";

/// Stand-in OCR engine: sleeps for a fixed processing delay, then returns
/// canned text. Mirrors what a real engine costs without recognizing
/// anything.
pub struct SimulatedOcr {
    delay: Duration,
    text: &'static str,
}

impl SimulatedOcr {
    /// Variant used when no OCR credential is present (~1 s, text states the
    /// key is missing).
    pub fn without_credential() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            text: UNCONFIGURED_TEXT,
        }
    }

    /// Variant used when a credential is present (~2 s, generic placeholder).
    /// Still a stub; the credential changes nothing else.
    pub fn with_credential() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            text: CONFIGURED_TEXT,
        }
    }

    /// Override the artificial delay (tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl OcrEngine for SimulatedOcr {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn extract_text(&self, image: &[u8], mime_type: Option<&str>) -> Result<String> {
        info!(
            bytes = image.len(),
            mime_type = mime_type.unwrap_or("unknown"),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating OCR extraction"
        );
        sleep(self.delay).await;
        Ok(self.text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn unconfigured_variant_mentions_missing_key() {
        let engine = SimulatedOcr::without_credential().with_delay(Duration::ZERO);
        let text = engine.extract_text(b"png-bytes", Some("image/png")).await.unwrap();
        assert!(text.contains("simulated OCR result"));
        assert!(text.contains("not configured"));
    }

    #[tokio::test]
    async fn configured_variant_still_returns_placeholder() {
        let engine = SimulatedOcr::with_credential().with_delay(Duration::ZERO);
        let text = engine.extract_text(b"jpeg-bytes", None).await.unwrap();
        assert!(!text.is_empty());
        assert!(text.contains("extracted from your uploaded image"));
    }

    #[tokio::test]
    async fn extraction_waits_at_least_the_configured_delay() {
        let engine = SimulatedOcr::without_credential().with_delay(Duration::from_millis(50));
        let start = Instant::now();
        engine.extract_text(b"bytes", None).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn default_delays_match_the_two_branches() {
        assert_eq!(SimulatedOcr::without_credential().delay, Duration::from_millis(1000));
        assert_eq!(SimulatedOcr::with_credential().delay, Duration::from_millis(2000));
    }
}
