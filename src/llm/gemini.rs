use anyhow::Context;
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;

use super::Backend;
use super::prompt::Template;
use crate::error::BackendError;

pub const HOSTED_MODEL: &str = "gemini-2.0-flash";

const NAME: &str = "gemini";

/// Hosted Gemini API, authenticated with the stored key.
pub struct GeminiBackend {
    client: rig::providers::gemini::Client,
}

impl GeminiBackend {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: rig::providers::gemini::Client::new(api_key),
        }
    }

    /// Points the client at another Gemini-compatible server.
    pub fn with_base_url(api_key: &str, base_url: &str) -> anyhow::Result<Self> {
        let client = rig::providers::gemini::Client::builder(api_key)
            .base_url(base_url)
            .build()
            .context("Failed to create Gemini client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Backend for GeminiBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn default_template(&self) -> Template {
        Template::Structured
    }

    async fn invoke(&self, prompt: &str) -> Result<String, BackendError> {
        tracing::debug!(model = HOSTED_MODEL, prompt_len = prompt.len(), "invoking hosted model");

        let agent = self.client.agent(HOSTED_MODEL).build();
        agent
            .prompt(prompt)
            .await
            .map_err(|e| BackendError::Hosted {
                backend: NAME,
                detail: e.to_string(),
            })
    }
}
