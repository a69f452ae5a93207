pub mod config;
pub mod driver;
pub mod error;
pub mod llm;
pub mod output;
pub mod source;

pub use config::{ConfigStore, Setting};
pub use driver::{InputMode, Pipeline, RunSummary};
pub use error::{BackendError, ConfigError};
