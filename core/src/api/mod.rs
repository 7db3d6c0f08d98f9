//! Preconfigured HTTP client for the hot list backend
//!
//! The shell core has no dependency on this module; it is wired in by the
//! application when a backend is configured.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{ApiClient, REQUEST_TIMEOUT_MS};
pub use types::{ApiResponse, HotItem};
