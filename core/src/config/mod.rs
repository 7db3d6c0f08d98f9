//! Minimal configuration module for hotlist-core
//!
//! Only exports pure data types. All loading logic is in the CLI layer.

pub mod types;

pub use types::ServeConfig;
