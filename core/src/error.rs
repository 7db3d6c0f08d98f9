//! Error types and handling for Hotlist Core

use thiserror::Error;

/// Result type alias for Hotlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Hotlist Core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table construction errors
    #[error("Route table error: {0}")]
    Table(#[from] TableError),

    /// Navigation-time router errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// View loading errors
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Defects in the route table declaration, reported when the table is built
#[derive(Error, Debug)]
pub enum TableError {
    #[error("No routes declared")]
    NoRoutes,

    #[error("Duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("Duplicate sibling path '{path}' under '{parent}'")]
    DuplicateSiblingPath { path: String, parent: String },

    #[error("Redirect target '{target}' of route '{name}' matches no route")]
    RedirectTargetMissing { name: String, target: String },

    #[error("Redirect target '{target}' of route '{name}' is not one of its children")]
    RedirectOutsideChildren { name: String, target: String },

    #[error("Redirect cycle starting at route '{name}'")]
    RedirectCycle { name: String },
}

/// Errors raised while resolving or performing a navigation
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("No route matches '{path}'")]
    NotFound { path: String },

    #[error("Redirect chain did not terminate at '{path}'")]
    RedirectCycle { path: String },
}

/// Errors raised by the view registry
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("No view registered under '{name}'")]
    NotRegistered { name: String },

    #[error("A view loader is already registered under '{name}'")]
    DuplicateLoader { name: String },

    #[error("Failed to load view '{name}': {message}")]
    LoadFailed { name: String, message: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid configuration format")]
    InvalidFormat,
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
