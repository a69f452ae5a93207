use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::Backend;
use super::prompt::Template;
use crate::error::BackendError;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

const NAME: &str = "ollama";

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Local inference server speaking the `/api/generate` protocol.
pub struct OllamaBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: &str, model: &str) -> anyhow::Result<Self> {
        // generation is not time-limited
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: generate_endpoint(base_url),
            model: model.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn default_template(&self) -> Template {
        Template::Terse
    }

    async fn invoke(&self, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.len(),
            "invoking local model"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| BackendError::Request { backend: NAME, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| BackendError::Request { backend: NAME, source })?;

        if !status.is_success() {
            return Err(BackendError::Status {
                backend: NAME,
                status: status.as_u16(),
                body,
            });
        }

        decode_generate_response(&body)
    }
}

/// `OLLAMA_HOST` is often given as a bare `host:port`.
fn generate_endpoint(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.contains("://") {
        format!("{}/api/generate", base)
    } else {
        format!("http://{}/api/generate", base)
    }
}

/// Pulls the `response` text out of a non-streaming generate reply.
pub fn decode_generate_response(body: &str) -> Result<String, BackendError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| BackendError::MalformedResponse {
            backend: NAME,
            detail: format!("body is not JSON: {}", e),
        })?;

    if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        return Err(BackendError::MalformedResponse {
            backend: NAME,
            detail: format!("server reported error: {}", error),
        });
    }

    match value.get("response") {
        Some(serde_json::Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(BackendError::MalformedResponse {
            backend: NAME,
            detail: format!("`response` is not a string: {}", other),
        }),
        None => Err(BackendError::MalformedResponse {
            backend: NAME,
            detail: "missing `response` field".to_string(),
        }),
    }
}
