//! # Hotlist Core
//!
//! Core library for Hotlist - a client-side application shell for the
//! chitchat hot list.
//!
//! This library provides the building blocks of the shell: a declarative
//! route table with validation, a navigation runtime with lazy view loading
//! and history management, a view registry, an application bootstrap, and a
//! preconfigured API client.

// Core modules
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod router;
pub mod views;

// Re-export commonly used types
pub use app::{App, AppBuilder, Outcome};
pub use config::ServeConfig;
pub use error::{Error, Result};
pub use router::{HistoryMode, Navigation, Route, RouteName, RouteTable, Router};
pub use views::{View, ViewLoader, ViewRegistry};

/// Current version of the hotlist-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
