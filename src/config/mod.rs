use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The one value js-analyze remembers between runs.
///
/// Serialized externally tagged, so the file is either `{"model": "..."}` or
/// `{"api_key": "..."}`. Saving one kind replaces the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Model served by the local inference endpoint
    Model(String),
    /// Credential for the hosted model API
    ApiKey(String),
}

impl Setting {
    pub fn key(&self) -> &'static str {
        match self {
            Setting::Model(_) => "model",
            Setting::ApiKey(_) => "api_key",
        }
    }
}

/// Reads and writes `config.json` under an explicit root directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Overwrites the config file with `setting`, creating the root if needed.
    pub fn save(&self, setting: &Setting) -> Result<(), ConfigError> {
        let path = self.path();

        std::fs::create_dir_all(&self.root).map_err(|source| ConfigError::Io {
            path: self.root.clone(),
            source,
        })?;

        let json = serde_json::to_string(setting).map_err(|source| ConfigError::Corrupt {
            path: path.clone(),
            source,
        })?;

        std::fs::write(&path, json).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), key = setting.key(), "saved configuration");
        Ok(())
    }

    pub fn load(&self) -> Result<Setting, ConfigError> {
        let path = self.path();

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing { path });
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let setting: Setting =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Corrupt {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), key = setting.key(), "loaded configuration");
        Ok(setting)
    }
}

/// Per-user config root: `%USERPROFILE%\.js_analyze` on Windows,
/// `~/.config/js_analyze` elsewhere.
pub fn default_root() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoConfigRoot)?;

    if cfg!(windows) {
        Ok(home.join(".js_analyze"))
    } else {
        Ok(home.join(".config").join("js_analyze"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_wire_format() {
        let json = serde_json::to_string(&Setting::Model("llama3".into())).unwrap();
        assert_eq!(json, r#"{"model":"llama3"}"#);

        let json = serde_json::to_string(&Setting::ApiKey("k".into())).unwrap();
        assert_eq!(json, r#"{"api_key":"k"}"#);
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(serde_json::from_str::<Setting>(r#"{"provider":"x"}"#).is_err());
    }

    #[test]
    fn test_default_root_ends_with_app_dir() {
        if let Ok(root) = default_root() {
            let name = root.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name == "js_analyze" || name == ".js_analyze");
        }
    }
}
