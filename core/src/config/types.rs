//! Serve configuration data structures

use serde::{Deserialize, Serialize};

/// Dev-server and shell configuration
///
/// `host` and `port` are consumed at serve time only; `base` feeds the
/// router's hash history; `server` is the backend the API client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Address the dev server listens on
    pub host: String,

    /// Port the dev server listens on
    pub port: u16,

    /// Base path prefixed to hash locations
    pub base: String,

    /// Backend URL for the API client
    pub server: Option<String>,
}

impl ServeConfig {
    /// Create a configuration with the default values
    pub fn new() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5173,
            base: "/".to_string(),
            server: None,
        }
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the base path
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set the backend URL
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dev_server() {
        let config = ServeConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5173);
        assert_eq!(config.base, "/");
        assert!(config.server.is_none());
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = ServeConfig::new()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_base("/app/")
            .with_server("http://127.0.0.1:8080");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.base, "/app/");
        assert_eq!(config.server.as_deref(), Some("http://127.0.0.1:8080"));
    }
}
