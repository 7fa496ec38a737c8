//! reqwest client for OpenAI-compatible chat completions.

use std::time::Duration;

use tracing::{debug, error};

use gloss_config::LlmConfig;

use crate::error::LlmError;
use crate::TextGenerator;

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Calls are strictly sequential from the pipeline's point of view; the
/// per-request timeout keeps a stuck service from blocking an
/// invocation forever.
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GenerationClient {
    /// Build a client from config.
    ///
    /// # Errors
    /// `LlmError::ClientBuild` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(LlmError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.temperature,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<serde_json::Value>().await?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(LlmError::MalformedResponse)
    }
}

impl TextGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> String {
        debug!(model = %self.model, prompt, "calling generation service");
        match self.request(prompt).await {
            Ok(text) => {
                debug!(response = %text, "generation service response");
                text
            }
            Err(err) => {
                error!(error = %err, "generation service call failed, substituting empty text");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builds_from_default_config() {
        let client = GenerationClient::new(&LlmConfig::default()).expect("builds");
        assert_eq!(client.base_url, "http://localhost:1234/v1");
        assert_eq!(client.model, "local-model");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = LlmConfig {
            base_url: "http://host:9000/v1/".into(),
            ..LlmConfig::default()
        };
        let client = GenerationClient::new(&config).expect("builds");
        assert_eq!(client.base_url, "http://host:9000/v1");
    }

    #[tokio::test]
    async fn unreachable_service_yields_empty_text() {
        let config = LlmConfig {
            // Reserved TEST-NET address: connection fails fast.
            base_url: "http://192.0.2.1:1/v1".into(),
            timeout_secs: 1,
            ..LlmConfig::default()
        };
        let client = GenerationClient::new(&config).expect("builds");
        assert_eq!(client.generate("hello").await, "");
    }
}
