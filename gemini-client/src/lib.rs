//! # Gemini API client
//!
//! Thin reqwest wrapper around the `generateContent` endpoint with grounding
//! tool support. Provides token masking for safe logging, the wire types, and
//! the [`ModelTransport`] seam so callers can inject a fake for tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

pub mod wire;

pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GroundingChunk,
    GroundingMetadata, GroundingSource, LatLng, Part, RetrievalConfig, SourceRef, Tool, ToolConfig,
};

/// Default API base URL for the generative language service.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}

/// Transport interface for one generateContent exchange. Object safe so the
/// response client can hold `Arc<dyn ModelTransport>` and tests can substitute
/// a fake without any network.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Sends the request to the named model and returns the parsed response.
    /// Errors (network, non-2xx status, parse) propagate unchanged; no retry.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// HTTP Gemini client. Holds the API key for the `x-goog-api-key` header;
/// logs only the masked form.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client using the given API key and the default API base URL.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies or mock servers).
    pub fn with_api_base(api_key: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl ModelTransport for GeminiClient {
    #[tracing::instrument(skip(self, request))]
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.api_base, model);

        tracing::info!(
            model = %model,
            content_count = request.contents.len(),
            api_key = %mask_token(&self.api_key),
            "Gemini generateContent request"
        );

        if let Ok(json) = serde_json::to_string_pretty(request) {
            tracing::debug!(request_json = %json, "Gemini generateContent request JSON");
        }

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("Send generateContent request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, body);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Parse generateContent response")?;

        tracing::info!(
            candidate_count = parsed.candidates.len(),
            "Gemini generateContent response"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // needs a real API key
    async fn test_generate_against_live_api() {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GEMINI_API_KEY").unwrap();
        let client = GeminiClient::new(api_key);
        let request = GenerateContentRequest {
            contents: vec![Content::user("Say hello in one word.")],
            system_instruction: None,
            tools: Vec::new(),
            tool_config: None,
        };
        let response = client.generate("gemini-2.5-flash", &request).await.unwrap();
        assert!(response.text().is_some());
    }
}
