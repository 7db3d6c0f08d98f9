//! Simple CLI configuration loader for hotlist
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file (highest priority)
//! 2. Current working directory: ./hotlist.json or ./.hotlist/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/hotlist/config.json or ~/.config/hotlist/config.json
//! 4. Built-in defaults (no files)
//!
//! Flag overrides come last; the flags themselves are environment-backed,
//! so `HOTLIST_*` variables sit between the file and explicit flags.

use anyhow::{Context, Result};
use hotlist_core::ServeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw configuration file format (every field optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Dev server host
    pub host: Option<String>,
    /// Dev server port
    pub port: Option<u16>,
    /// Base path prefixed to hash locations
    pub base: Option<String>,
    /// Backend URL for the API client
    pub server: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file path
    config_override: Option<PathBuf>,
    /// Flag overrides
    host_override: Option<String>,
    port_override: Option<u16>,
    base_override: Option<String>,
    server_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            host_override: None,
            port_override: None,
            base_override: None,
            server_override: None,
        }
    }

    /// Set config file override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set host override
    pub fn with_host_override(mut self, host: String) -> Self {
        self.host_override = Some(host);
        self
    }

    /// Set port override
    pub fn with_port_override(mut self, port: u16) -> Self {
        self.port_override = Some(port);
        self
    }

    /// Set base path override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Set backend URL override
    pub fn with_server_override(mut self, server: String) -> Self {
        self.server_override = Some(server);
        self
    }

    /// Load and resolve the serve configuration
    pub fn load(&self) -> Result<ServeConfig> {
        // Step 1: Find and load base configuration
        let mut raw = if let Some(override_path) = &self.config_override {
            load_from_file(override_path).with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            search_and_load()?
        };

        // Step 2: Apply flag overrides
        if let Some(host) = &self.host_override {
            raw.host = Some(host.clone());
        }
        if let Some(port) = self.port_override {
            raw.port = Some(port);
        }
        if let Some(base) = &self.base_override {
            raw.base = Some(base.clone());
        }
        if let Some(server) = &self.server_override {
            raw.server = Some(server.clone());
        }

        // Step 3: Resolve against defaults
        let mut config = ServeConfig::default();
        if let Some(host) = raw.host {
            config.host = host;
        }
        if let Some(port) = raw.port {
            config.port = port;
        }
        if let Some(base) = raw.base {
            config.base = base;
        }
        config.server = raw.server;

        Ok(config)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn search_and_load() -> Result<RawConfig> {
    for candidate in candidate_paths() {
        if candidate.is_file() {
            return load_from_file(&candidate)
                .with_context(|| format!("Failed to load config: {}", candidate.display()));
        }
    }
    Ok(RawConfig::default())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("hotlist.json"),
        PathBuf::from(".hotlist/config.json"),
    ];

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg).join("hotlist/config.json"));
    } else if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("hotlist/config.json"));
    }

    paths
}

fn load_from_file(path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
