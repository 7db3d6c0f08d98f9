//! Router module for client-side route resolution and navigation
//!
//! This module provides the declarative route table, its validation, and
//! the runtime that matches paths, follows redirects, lazily loads views,
//! and keeps navigation history.

pub mod history;
pub mod route;
pub mod router;
pub mod table;

// Re-export commonly used types
pub use history::{HistoryMode, NavigationHistory};
pub use route::{Route, RouteName};
pub use router::{ActivatedRoute, Navigation, Router};
pub use table::{Resolution, RouteTable, TableEntry};
