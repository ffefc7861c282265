//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::TextGenerator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Issues exactly one request per `generate` call. There is no retry loop:
/// any transport error, non-success status, or response without usable text
/// surfaces as a single `Generation` error for the caller to present.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { api_key, endpoint: endpoint_url(&config.api_url, &config.model), client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            AppError::config("GEMINI_API_KEY environment variable not set")
        })?;

        Self::new(api_key, config)
    }
}

/// `{base}/models/{model}:generateContent`
fn endpoint_url(base: &Url, model: &str) -> Url {
    let mut url = base.clone();
    let path = format!("{}/models/{}:generateContent", base.path().trim_end_matches('/'), model);
    url.set_path(&path);
    url
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TextGenerator for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        // The client validates nothing about the prompt beyond non-emptiness.
        if prompt.trim().is_empty() {
            return Err(AppError::Validation("Prompt must not be empty".to_string()));
        }

        let request = ApiRequest { contents: vec![Content { parts: vec![Part { text: prompt }] }] };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!("API error ({}): {}", status.as_u16(), body)));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Generation(format!("Failed to parse response: {e}")))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().map(|part| part.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::Generation("Response contained no usable text".to_string()));
        }

        Ok(text)
    }
}
