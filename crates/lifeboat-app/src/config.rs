use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where to find the model and schema artifacts. Either may be unset, in
/// which case the bundled defaults are used.
///
/// Layering: built-in defaults, then an optional TOML file, then environment
/// overrides. Later layers win.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub model_path: Option<PathBuf>,
    pub schema_path: Option<PathBuf>,
}

/// On-disk shape of the config file; every field optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    model_path: Option<PathBuf>,
    schema_path: Option<PathBuf>,
}

const DEFAULT_CONFIG_FILE: &str = "lifeboat.toml";

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_file_config(&mut self) -> Result<()> {
        let path = match std::env::var("LIFEBOAT_CONFIG") {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                // The default file is optional; an explicit one is not.
                if !default.exists() {
                    return Ok(());
                }
                default
            }
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let file: FileConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        if let Some(p) = file.model_path {
            self.model_path = Some(p);
        }
        if let Some(p) = file.schema_path {
            self.schema_path = Some(p);
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_non_empty("LIFEBOAT_MODEL_PATH") {
            self.model_path = Some(PathBuf::from(v));
        }
        if let Some(v) = env_non_empty("LIFEBOAT_SCHEMA_PATH") {
            self.schema_path = Some(PathBuf::from(v));
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
