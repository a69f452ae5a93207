use std::path::PathBuf;
use thiserror::Error;

/// Failures while persisting or loading the single config setting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration found at {}", path.display())]
    Missing { path: PathBuf },

    #[error("configuration at {} is not readable: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine a per-user configuration directory")]
    NoConfigRoot,
}

/// Failures of a single backend invocation.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {backend} failed: {source}")]
    Request {
        backend: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{backend} returned HTTP {status}: {body}")]
    Status {
        backend: &'static str,
        status: u16,
        body: String,
    },

    #[error("{backend} returned an unexpected response: {detail}")]
    MalformedResponse {
        backend: &'static str,
        detail: String,
    },

    #[error("{backend} call failed: {detail}")]
    Hosted {
        backend: &'static str,
        detail: String,
    },
}
