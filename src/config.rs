use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::http::parser::HeaderDelimiter;

/// Env var naming an optional YAML config file.
pub const CONFIG_ENV: &str = "RELAY_CONFIG";
/// Env var overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MAX_HEADER_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Cap on an unterminated header block. `None` disables the cap.
    pub max_header_bytes: Option<usize>,
    pub header_delimiter: HeaderDelimiter,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_header_bytes: Some(DEFAULT_MAX_HEADER_BYTES),
            header_delimiter: HeaderDelimiter::Space,
        }
    }
}

impl Config {
    /// Loads the file named by `RELAY_CONFIG` (defaults when unset), then
    /// applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
