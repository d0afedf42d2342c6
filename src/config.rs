//! Server configuration.
//!
//! A [`Config`] is built once at startup from, in increasing precedence:
//! built-in defaults, an optional YAML file, environment variables
//! (`LISTEN`, `FILES_DIRECTORY`) and command-line flags. It is then shared
//! read-only with every connection.
//!
//! ```yaml
//! server:
//!   listen_addr: "0.0.0.0:4221"
//!   max_connections: 256
//! files:
//!   directory: "/tmp/data"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::cli::Args;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on connections handled at once; `0` means unbounded.
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root under which every `/files/` name is resolved.
    pub directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_connections: 0,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/"),
        }
    }
}

impl Config {
    /// Resolves the full configuration for the binary.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.apply_args(args);
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Overrides fields from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Some(dir) = lookup("FILES_DIRECTORY") {
            self.files.directory = PathBuf::from(dir);
        }
    }

    /// Overrides fields from explicit command-line flags.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(addr) = &args.listen {
            self.server.listen_addr = addr.clone();
        }
        if let Some(dir) = &args.directory {
            self.files.directory = dir.clone();
        }
        if let Some(max) = args.max_connections {
            self.server.max_connections = max;
        }
    }
}
