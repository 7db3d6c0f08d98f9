//! Application bootstrap
//!
//! The shell is assembled builder-style: a router is attached to the
//! application root, then `mount` performs the initial navigation and the
//! first render. Mounting without a router attached is an error.

use crate::error::{Error, Result, RouterError};
use crate::router::{ActivatedRoute, Navigation, Router};
use crate::views::{View, ViewLoader};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Outcome of an app-level navigation
#[derive(Debug)]
pub enum Outcome {
    /// The requested route is active
    Activated(ActivatedRoute),
    /// A newer navigation won; nothing changed
    Superseded,
    /// Nothing matched and the fallback view is showing
    Fallback { path: String },
}

/// Builder wiring the application root before the first render
pub struct AppBuilder {
    router: Option<Router>,
    fallback: Option<Box<dyn ViewLoader>>,
}

impl AppBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            router: None,
            fallback: None,
        }
    }

    /// Attach the router
    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Register a fallback view shown when no route matches
    ///
    /// The route table declares no catch-all entry; unmatched navigation
    /// is an application-level decision, and this is it.
    pub fn fallback_view(mut self, loader: Box<dyn ViewLoader>) -> Self {
        self.fallback = Some(loader);
        self
    }

    /// Mount the application: navigate to the entry path and render
    pub async fn mount(self) -> Result<App> {
        let router = self
            .router
            .ok_or_else(|| Error::Generic("cannot mount without a router attached".to_string()))?;

        let app = App {
            router,
            fallback: self.fallback,
            fallback_view: Mutex::new(None),
            fallback_path: Mutex::new(None),
        };

        let entry = app.router.entry_path();
        info!(path = %entry, "mounting application");
        app.navigate(&entry).await?;

        Ok(app)
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The mounted application shell
pub struct App {
    router: Router,
    fallback: Option<Box<dyn ViewLoader>>,
    fallback_view: Mutex<Option<Arc<dyn View>>>,
    fallback_path: Mutex<Option<String>>,
}

impl App {
    /// Start building an application
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Navigate to a path or location
    ///
    /// An unmatched path switches to the fallback view when one is
    /// registered; otherwise the router's error propagates.
    pub async fn navigate(&self, target: &str) -> Result<Outcome> {
        match self.router.navigate(target).await {
            Ok(Navigation::Activated(route)) => {
                *self.fallback_path.lock().unwrap() = None;
                Ok(Outcome::Activated(route))
            }
            Ok(Navigation::Superseded) => Ok(Outcome::Superseded),
            Err(Error::Router(RouterError::NotFound { path })) if self.fallback.is_some() => {
                warn!(%path, "no route matched, showing fallback view");
                self.ensure_fallback_loaded().await?;
                *self.fallback_path.lock().unwrap() = Some(path.clone());
                Ok(Outcome::Fallback { path })
            }
            Err(err) => Err(err),
        }
    }

    /// Go back to the previous route
    pub async fn back(&self) -> Result<Option<ActivatedRoute>> {
        let previous = self.router.back().await?;
        if previous.is_some() {
            *self.fallback_path.lock().unwrap() = None;
        }
        Ok(previous)
    }

    /// Render the active view chain, or the fallback view when showing
    pub fn render(&self) -> String {
        if let Some(path) = self.fallback_path.lock().unwrap().as_deref() {
            if let Some(view) = self.fallback_view.lock().unwrap().as_ref() {
                return view.render(Some(path));
            }
        }

        self.router
            .current()
            .map(|route| route.render())
            .unwrap_or_default()
    }

    /// The router attached to this application
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The active location, formatted per the router's history mode
    pub fn location(&self) -> Option<String> {
        self.router.location()
    }

    async fn ensure_fallback_loaded(&self) -> Result<()> {
        if self.fallback_view.lock().unwrap().is_some() {
            return Ok(());
        }

        let loader = self
            .fallback
            .as_ref()
            .expect("caller checked a fallback is registered");
        let view = loader.load().await?;
        *self.fallback_view.lock().unwrap() = Some(view);
        Ok(())
    }
}
