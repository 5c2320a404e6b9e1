use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Runtime configuration.
///
/// Loaded from an optional YAML file named by the `CONFIG` environment
/// variable; every field has a default so an empty environment works. The
/// `LISTEN` environment variable overrides the listen address either way.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the TCP listener binds, e.g. "127.0.0.1:8080".
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Rolling deadline for every single-byte read while parsing, in ms.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Where the demo handler persists an uploaded request body.
    #[serde(default = "default_upload_path")]
    pub upload_path: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_read_timeout_ms() -> u64 {
    100
}

fn default_upload_path() -> PathBuf {
    PathBuf::from("tmp")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            read_timeout_ms: default_read_timeout_ms(),
            upload_path: default_upload_path(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
