//! Gemini REST client.
//!
//! Talks to the `generateContent` endpoint of the Generative Language API.
//! The reply is unstructured text expected (but not guaranteed) to contain
//! embedded JSON; extraction is the normalizer's job, not the gateway's.

use async_trait::async_trait;
use compass_config::AppConfig;
use compass_core::error::ModelError;
use compass_core::model::{GenerationConfig, TextModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A Gemini text-generation backend.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    generation: GenerationConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with the default endpoint and sampling constants.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(
            api_key,
            model,
            "https://generativelanguage.googleapis.com",
            GenerationConfig::default(),
            std::time::Duration::from_secs(120),
        )
    }

    /// Create a client against a custom base URL (proxies, test servers).
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        generation: GenerationConfig,
        timeout: std::time::Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            generation,
            client,
        }
    }

    /// Build a client from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(
            config.api_key.clone().unwrap_or_default(),
            config.model.clone(),
            config.base_url.clone(),
            GenerationConfig {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
            },
            std::time::Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation.clone(),
        }
    }
}

/// Join the text parts of the first candidate, if any.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    let text = text.trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

#[async_trait]
impl TextModel for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        if self.api_key.is_empty() {
            return Err(ModelError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ModelError::QuotaExceeded);
        }

        if status == 401 || status == 403 {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| parse_api_error(&body))
                .unwrap_or_else(|| "Invalid API key or insufficient permissions".into());
            return Err(ModelError::AuthFailed(message));
        }

        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body).unwrap_or(body);
            warn!(status, message = %message, "Gemini returned error");
            return Err(ModelError::Api {
                status_code: status,
                message,
            });
        }

        let api_response: GenerateResponse =
            response.json().await.map_err(|e| ModelError::Api {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        match extract_text(&api_response) {
            Some(text) => {
                debug!(reply_len = text.len(), "Received generation response");
                Ok(text)
            }
            None => Err(ModelError::EmptyResponse),
        }
    }

    async fn health_check(&self) -> Result<bool, ModelError> {
        if self.api_key.is_empty() {
            return Err(ModelError::MissingApiKey);
        }
        let url = format!("{}/v1beta/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;
        Ok(response.status().is_success())
    }
}

/// Pull the human-readable message out of a Gemini error body.
fn parse_api_error(body: &str) -> Option<String> {
    let parsed: ApiErrorEnvelope = serde_json::from_str(body).ok()?;
    Some(parsed.error.message)
}

// --- Gemini API types (internal) ---

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
    #[serde(default, rename = "finishReason")]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_prompt_and_sampling() {
        let client = GeminiClient::new("key", "gemini-1.5-flash");
        let body = serde_json::to_value(client.request_body("Hello model")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello model");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
    }

    #[test]
    fn parse_generate_response() {
        let data = r#"{
            "candidates": [
                {
                    "content": { "parts": [{"text": "part one "}, {"text": "part two"}] },
                    "finishReason": "STOP"
                }
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(data).unwrap();
        assert_eq!(extract_text(&parsed).as_deref(), Some("part one part two"));
    }

    #[test]
    fn blank_candidate_text_is_empty() {
        let data = r#"{"candidates":[{"content":{"parts":[{"text":"   \n"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(data).unwrap();
        assert!(extract_text(&parsed).is_none());
    }

    #[test]
    fn no_candidates_is_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(&parsed).is_none());
    }

    #[test]
    fn parse_api_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(parse_api_error(body).as_deref(), Some("API key not valid"));
        assert!(parse_api_error("not json").is_none());
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let client = GeminiClient::new("", "gemini-1.5-flash");
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, ModelError::MissingApiKey));
    }

    #[test]
    fn from_config_uses_configured_model() {
        let config = AppConfig {
            api_key: Some("k".into()),
            model: "gemini-1.5-pro".into(),
            ..Default::default()
        };
        let client = GeminiClient::from_config(&config);
        assert_eq!(client.model(), "gemini-1.5-pro");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = GeminiClient::with_base_url(
            "k",
            "m",
            "http://localhost:9999/",
            GenerationConfig::default(),
            std::time::Duration::from_secs(1),
        );
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
