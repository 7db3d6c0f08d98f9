//! View implementations for the shell
//!
//! Each view is a plain renderable unit behind a lazy loader; the shell
//! assembly registers the loaders without instantiating anything.

pub mod home;
pub mod not_found;

// Re-export commonly used types
pub use home::{HomeView, HomeViewLoader, MainView, MainViewLoader};
pub use not_found::{NotFoundView, NotFoundViewLoader};
