//! View registry for managing named view loaders

use crate::error::ViewError;
use crate::views::{View, ViewLoader};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Registry mapping view keys to their loaders
///
/// Loading is lazy and cached: a loader runs at most once, on the first
/// activation of a route that references its key.
pub struct ViewRegistry {
    loaders: HashMap<String, Box<dyn ViewLoader>>,
    loaded: Mutex<HashMap<String, Arc<dyn View>>>,
}

impl ViewRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Register a view loader under its key
    pub fn register(&mut self, loader: Box<dyn ViewLoader>) -> Result<(), ViewError> {
        let name = loader.view_name().to_string();
        if self.loaders.contains_key(&name) {
            return Err(ViewError::DuplicateLoader { name });
        }
        self.loaders.insert(name, loader);
        Ok(())
    }

    /// Load the view registered under `name`, instantiating it on first use
    pub async fn load(&self, name: &str) -> Result<Arc<dyn View>, ViewError> {
        if let Some(view) = self.loaded.lock().unwrap().get(name) {
            return Ok(view.clone());
        }

        let loader = self
            .loaders
            .get(name)
            .ok_or_else(|| ViewError::NotRegistered {
                name: name.to_string(),
            })?;

        debug!(view = name, "loading view on first activation");
        let view = loader.load().await?;

        let mut cache = self.loaded.lock().unwrap();
        Ok(cache.entry(name.to_string()).or_insert(view).clone())
    }

    /// Whether a loader is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Whether the view under `name` has already been instantiated
    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.lock().unwrap().contains_key(name)
    }

    /// List all registered view keys
    pub fn list_views(&self) -> Vec<&str> {
        self.loaders.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to help implement view loaders for unit-struct views
#[macro_export]
macro_rules! impl_view_loader {
    ($loader:ident, $view:ident, $name:expr) => {
        pub struct $loader;

        #[async_trait::async_trait]
        impl $crate::views::ViewLoader for $loader {
            fn view_name(&self) -> &str {
                $name
            }

            async fn load(
                &self,
            ) -> std::result::Result<
                std::sync::Arc<dyn $crate::views::View>,
                $crate::error::ViewError,
            > {
                Ok(std::sync::Arc::new($view::new()))
            }
        }
    };
}
