//! View abstractions and the lazy view registry
//!
//! Views are opaque renderable units addressed by registry key. A route
//! declares the key; the view behind it is only instantiated when the
//! route is activated.

pub mod registry;

// Re-export commonly used types
pub use registry::ViewRegistry;

use crate::error::ViewError;
use async_trait::async_trait;
use std::sync::Arc;

/// A self-contained renderable unit
pub trait View: Send + Sync {
    /// Registry key of this view
    fn name(&self) -> &str;

    /// Render the view to text
    ///
    /// `child` carries the rendered output of the nested route below this
    /// one, if any; layout views place it in their outlet.
    fn render(&self, child: Option<&str>) -> String;
}

/// Deferred reference to a view, resolved only at activation time
#[async_trait]
pub trait ViewLoader: Send + Sync {
    /// Registry key of the view this loader produces
    fn view_name(&self) -> &str;

    /// Fetch and instantiate the view
    async fn load(&self) -> Result<Arc<dyn View>, ViewError>;
}
