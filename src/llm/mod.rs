pub mod gemini;
pub mod ollama;
pub mod prompt;
pub mod provider;

pub use prompt::{Template, build_prompt};
pub use provider::{Backend, BackendOptions, create_backend};
