use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{ConfigStore, Setting};
use crate::error::BackendError;
use crate::llm::{Backend, BackendOptions, Template, build_prompt, create_backend};
use crate::output::Reporter;
use crate::source::{Fetcher, SourceAcquirer};

/// Which input the user asked to analyze.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Url(String),
    File(PathBuf),
    /// File of newline-delimited URLs
    List(PathBuf),
}

/// Per-run counts, logged when the run finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub analyzed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Persists a setting and tells the user what was stored.
pub fn save_setting(
    store: &ConfigStore,
    setting: &Setting,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    store.save(setting)?;

    match setting {
        Setting::Model(model) => reporter.info(&format!("Default model saved: {}", model)),
        Setting::ApiKey(_) => {
            reporter.info(&format!("API key saved to {}", store.path().display()))
        }
    }

    Ok(())
}

/// Loads the stored setting and builds the backend it selects.
///
/// Fails with [`crate::error::ConfigError::Missing`] when nothing has been
/// configured yet, before anything touches the network.
pub fn connect(store: &ConfigStore, options: &BackendOptions) -> Result<Box<dyn Backend>> {
    let setting = store.load()?;
    create_backend(&setting, options)
}

/// Acquire, prompt, invoke, print. One input at a time.
pub struct Pipeline<F> {
    acquirer: SourceAcquirer<F>,
    backend: Box<dyn Backend>,
    template: Template,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, backend: Box<dyn Backend>, template: Option<Template>) -> Self {
        let template = template.unwrap_or_else(|| backend.default_template());
        Self {
            acquirer: SourceAcquirer::new(fetcher),
            backend,
            template,
        }
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub async fn run(&self, mode: &InputMode, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        tracing::debug!(
            ?mode,
            backend = self.backend.name(),
            template = self.template.as_str(),
            "starting run"
        );

        let mut summary = RunSummary::default();

        match mode {
            InputMode::Url(url) => {
                if let Some(js) = self.acquirer.fetch_remote(url, reporter).await {
                    self.analyze(&js, url, reporter).await?;
                    summary.analyzed += 1;
                } else {
                    summary.skipped += 1;
                }
            }
            InputMode::File(path) => {
                if let Some(js) = self.acquirer.read_local(path, reporter) {
                    self.analyze(&js, &path.display().to_string(), reporter).await?;
                    summary.analyzed += 1;
                } else {
                    summary.skipped += 1;
                }
            }
            InputMode::List(path) => {
                let list = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to open URL list {}", path.display()))?;

                for url in list.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    reporter.info(&format!("Processing {}", url));

                    let Some(js) = self.acquirer.fetch_remote(url, reporter).await else {
                        summary.skipped += 1;
                        continue;
                    };

                    match self.analyze(&js, url, reporter).await {
                        Ok(()) => summary.analyzed += 1,
                        Err(e) => {
                            tracing::warn!(url, error = %e, "analysis failed, continuing");
                            reporter.warn(&format!("Analysis failed for {}: {}", url, e));
                            summary.failed += 1;
                        }
                    }
                }
            }
        }

        tracing::debug!(
            analyzed = summary.analyzed,
            skipped = summary.skipped,
            failed = summary.failed,
            "run finished"
        );

        Ok(summary)
    }

    /// Runs one already-acquired script through the backend.
    pub async fn analyze(
        &self,
        content: &str,
        source_label: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<(), BackendError> {
        let prompt = build_prompt(self.template, content, source_label);
        let text = self.backend.invoke(&prompt).await?;
        reporter.analysis(source_label, &text);
        Ok(())
    }
}
