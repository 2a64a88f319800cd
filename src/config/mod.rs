mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`) and takes
/// the API key from `GROQ_API_KEY`.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let api_key = env::var(API_KEY_VAR).ok();

    load_from(Path::new(&config_path), api_key).await
}

/// A missing file yields defaults. The resulting config must carry a
/// non-empty API key.
pub async fn load_from(path: &Path, api_key: Option<String>) -> Result<Config> {
    debug!("Loading configuration from: {}", path.display());

    let mut config: Config = match tokio::fs::read_to_string(path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(key) = api_key {
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!("{} is not set", API_KEY_VAR)));
    }

    Ok(config)
}
