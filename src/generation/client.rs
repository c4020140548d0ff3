//! Chart generation clients.
//!
//! `ChartGenerator` is the seam between the workflow and the external
//! service; `GeminiClient` is the production implementation and
//! `MockGenerator` the test double.

use async_trait::async_trait;

use super::gemini_types::{GenerateContentRequest, GenerateContentResponse};
use super::GenerationError;
use crate::config;

/// Text generation behind a trait so the workflow and API layer can be
/// exercised without network access.
#[async_trait]
pub trait ChartGenerator: Send + Sync {
    /// Generate chart text for one prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Whether the client has credentials to attempt a call.
    fn is_configured(&self) -> bool;

    /// Cheap upstream connectivity probe.
    async fn probe(&self) -> Result<(), GenerationError> {
        self.generate("Reply with the single word: ready").await?;
        Ok(())
    }
}

/// Gemini HTTP client for chart generation.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client against an explicit endpoint.
    pub fn new(base_url: &str, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client,
            timeout_secs,
        }
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            &config::generation_base_url(),
            config::gemini_api_key(),
            config::gemini_model(),
            config::generation_timeout_secs(),
        )
    }

    /// The model identifier in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ChartGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.is_configured() {
            return Err(GenerationError::NotConfigured);
        }

        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GenerationError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    GenerationError::Timeout(self.timeout_secs)
                } else {
                    GenerationError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ResponseParsing(e.to_string()))?;

        parsed.first_text().ok_or(GenerationError::EmptyResponse)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Mock generator for tests; returns a configured response or failure.
pub struct MockGenerator {
    response: Result<String, String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    /// A generator whose every call fails with an upstream error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl ChartGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GenerationError::Upstream {
                status: 500,
                body: message.clone(),
            }),
        }
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_configured_response() {
        let generator = MockGenerator::new("chart text");
        let result = generator.generate("prompt").await.unwrap();
        assert_eq!(result, "chart text");
    }

    #[tokio::test]
    async fn failing_mock_surfaces_upstream_error() {
        let generator = MockGenerator::failing("model overloaded");
        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenerationError::Upstream { status: 500, .. }));
        assert!(err.to_string().contains("model overloaded"));
    }

    #[tokio::test]
    async fn unconfigured_client_fails_before_any_network_io() {
        let client = GeminiClient::new("http://localhost:9", String::new(), "gemini-2.0-flash".into(), 5);
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenerationError::NotConfigured));
    }

    #[test]
    fn client_trims_trailing_slash_and_builds_url() {
        let client = GeminiClient::new(
            "http://localhost:11000/",
            "key".into(),
            "gemini-2.0-flash".into(),
            5,
        );
        assert_eq!(
            client.generate_url(),
            "http://localhost:11000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn configured_only_with_api_key() {
        let without = GeminiClient::new("http://x", String::new(), "m".into(), 5);
        assert!(!without.is_configured());
        let with = GeminiClient::new("http://x", "key".into(), "m".into(), 5);
        assert!(with.is_configured());
    }
}
