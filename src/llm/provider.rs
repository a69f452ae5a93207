use async_trait::async_trait;

use super::gemini::GeminiBackend;
use super::ollama::{DEFAULT_OLLAMA_URL, OllamaBackend};
use super::prompt::Template;
use crate::config::Setting;
use crate::error::BackendError;

/// A model-serving system that turns one prompt into analysis text.
#[async_trait]
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Template used when the user does not pick one
    fn default_template(&self) -> Template;

    async fn invoke(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Knobs for building a backend that do not live in the config file.
#[derive(Debug, Clone)]
pub struct BackendOptions {
    pub ollama_url: String,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}

/// The stored setting picks the backend: a model name means the local
/// endpoint, an API key means the hosted API.
pub fn create_backend(
    setting: &Setting,
    options: &BackendOptions,
) -> anyhow::Result<Box<dyn Backend>> {
    match setting {
        Setting::Model(model) => Ok(Box::new(OllamaBackend::new(&options.ollama_url, model)?)),
        Setting::ApiKey(key) => Ok(Box::new(GeminiBackend::new(key))),
    }
}
