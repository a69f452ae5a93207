pub mod http;

pub use http::HttpFetcher;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::output::Reporter;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Obtains script text for the pipeline.
///
/// Both operations report their own failures and return `None`, so callers
/// only decide whether to skip the input.
pub struct SourceAcquirer<F> {
    fetcher: F,
}

impl<F: Fetcher> SourceAcquirer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_remote(&self, url: &str, reporter: &mut dyn Reporter) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(text) => {
                tracing::debug!(url, bytes = text.len(), "fetched script");
                Some(text)
            }
            Err(e) => {
                tracing::warn!(url, error = %format!("{:#}", e), "fetch failed, skipping");
                reporter.warn(&format!("Failed fetching {}: {:#}", url, e));
                None
            }
        }
    }

    pub fn read_local(&self, path: &Path, reporter: &mut dyn Reporter) -> Option<String> {
        match read_lossy(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "read script");
                Some(text)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "read failed, skipping");
                reporter.warn(&format!("Failed reading {}: {}", path.display(), e));
                None
            }
        }
    }
}

/// Reads the whole file, replacing invalid UTF-8 instead of failing.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
