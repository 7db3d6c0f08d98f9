//! Router runtime for managing navigation state
//!
//! The router consumes a validated route table and a view registry and
//! performs matching, activation, lazy view loading, and history
//! management. Navigation is last-wins: a request superseded by a newer
//! one while its view load was pending commits nothing.

use crate::error::{Error, Result, ViewError};
use crate::router::history::{HistoryMode, NavigationHistory};
use crate::router::route::RouteName;
use crate::router::table::RouteTable;
use crate::views::{View, ViewRegistry};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// A route that has been resolved and whose view chain is instantiated
#[derive(Clone)]
pub struct ActivatedRoute {
    /// Name of the activated leaf entry
    pub name: RouteName,
    /// Concrete active path, after any redirect hops
    pub path: String,
    /// Captured `:param` segment values
    pub params: HashMap<String, String>,
    /// Originally requested path when a redirect was followed
    pub redirected_from: Option<String>,
    views: Vec<Arc<dyn View>>,
}

impl ActivatedRoute {
    /// Render the view chain, feeding each view's output into the outlet
    /// of the view above it
    pub fn render(&self) -> String {
        let mut output: Option<String> = None;
        for view in self.views.iter().rev() {
            output = Some(view.render(output.as_deref()));
        }
        output.unwrap_or_default()
    }

    /// The innermost view of the chain
    pub fn leaf_view(&self) -> Option<&Arc<dyn View>> {
        self.views.last()
    }
}

impl fmt::Debug for ActivatedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivatedRoute")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("redirected_from", &self.redirected_from)
            .field("views", &self.views.len())
            .finish()
    }
}

/// Outcome of a navigation attempt that did not error
#[derive(Debug)]
pub enum Navigation {
    /// The target route is now active
    Activated(ActivatedRoute),
    /// A newer navigation started while this one was loading; nothing
    /// was committed
    Superseded,
}

/// Internal navigation state, guarded by the router's mutex
struct NavState {
    current: Option<ActivatedRoute>,
    history: NavigationHistory,
}

/// Main router struct that manages navigation state and configuration
pub struct Router {
    mode: HistoryMode,
    table: RouteTable,
    registry: ViewRegistry,
    state: Mutex<NavState>,
    epoch: AtomicU64,
}

impl Router {
    /// Create a router from a history mode, a validated table, and the
    /// registry holding a loader for every view key the table references
    pub fn new(mode: HistoryMode, table: RouteTable, registry: ViewRegistry) -> Result<Self> {
        for entry in table.entries() {
            if !registry.contains(entry.view) {
                return Err(Error::View(ViewError::NotRegistered {
                    name: entry.view.to_string(),
                }));
            }
        }

        Ok(Self {
            mode,
            table,
            registry,
            state: Mutex::new(NavState {
                current: None,
                history: NavigationHistory::default(),
            }),
            epoch: AtomicU64::new(0),
        })
    }

    /// Navigate to a path or full location
    ///
    /// Re-navigating to the already-active path returns the current
    /// activation without loading anything or touching the history.
    pub async fn navigate(&self, target: &str) -> Result<Navigation> {
        let path = self.mode.parse(target);
        let generation = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        let resolution = self.table.resolve(&path)?;

        {
            let state = self.state.lock().unwrap();
            if let Some(current) = &state.current {
                if current.path == resolution.path {
                    debug!(path = %current.path, "navigation target already active");
                    return Ok(Navigation::Activated(current.clone()));
                }
            }
        }

        let mut views = Vec::with_capacity(resolution.views.len());
        for key in &resolution.views {
            views.push(self.registry.load(key).await?);
        }

        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) != generation {
            warn!(path = %resolution.path, "navigation superseded before commit");
            return Ok(Navigation::Superseded);
        }

        let activated = ActivatedRoute {
            name: resolution.name,
            path: resolution.path,
            params: resolution.params,
            redirected_from: resolution.redirected_from,
            views,
        };

        if let Some(previous) = state.current.take() {
            state.history.push(previous.path);
        }
        info!(name = %activated.name, path = %activated.path, "route activated");
        state.current = Some(activated.clone());

        Ok(Navigation::Activated(activated))
    }

    /// Navigate to a route by its declared name
    pub async fn navigate_by_name(&self, name: &str) -> Result<Navigation> {
        let path = self
            .table
            .path_of(name)
            .ok_or_else(|| crate::error::RouterError::NotFound {
                path: name.to_string(),
            })?
            .to_string();
        self.navigate(&path).await
    }

    /// Go back to the previous route in history
    ///
    /// Returns `None` when there is no history to pop or when the
    /// activation lost a race against a newer navigation.
    pub async fn back(&self) -> Result<Option<ActivatedRoute>> {
        let previous = { self.state.lock().unwrap().history.pop() };
        let Some(path) = previous else {
            return Ok(None);
        };

        let generation = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let resolution = self.table.resolve(&path)?;

        let mut views = Vec::with_capacity(resolution.views.len());
        for key in &resolution.views {
            views.push(self.registry.load(key).await?);
        }

        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) != generation {
            return Ok(None);
        }

        let activated = ActivatedRoute {
            name: resolution.name,
            path: resolution.path,
            params: resolution.params,
            redirected_from: resolution.redirected_from,
            views,
        };
        state.current = Some(activated.clone());

        Ok(Some(activated))
    }

    /// The currently active route, if any
    pub fn current(&self) -> Option<ActivatedRoute> {
        self.state.lock().unwrap().current.clone()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.state.lock().unwrap().history.can_go_back()
    }

    /// The active path formatted as a location per the history mode
    pub fn location(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .current
            .as_ref()
            .map(|current| self.mode.format(&current.path))
    }

    /// Path of the first declared entry; the bootstrap navigates here
    pub fn entry_path(&self) -> String {
        self.table
            .entries()
            .next()
            .map(|entry| entry.path.to_string())
            .expect("validated tables are never empty")
    }

    /// The route table this router serves
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The history mode this router was created with
    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }

    /// The view registry backing lazy loads
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("mode", &self.mode)
            .field("routes", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouterError;
    use crate::router::route::Route;
    use crate::views::ViewLoader;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    struct TagView {
        name: String,
    }

    impl View for TagView {
        fn name(&self) -> &str {
            &self.name
        }

        fn render(&self, child: Option<&str>) -> String {
            match child {
                Some(inner) => format!("<{}>{}</{}>", self.name, inner, self.name),
                None => format!("<{}/>", self.name),
            }
        }
    }

    struct CountingLoader {
        name: String,
        loads: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ViewLoader for CountingLoader {
        fn view_name(&self) -> &str {
            &self.name
        }

        async fn load(&self) -> std::result::Result<Arc<dyn View>, ViewError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(TagView {
                name: self.name.clone(),
            }))
        }
    }

    struct GatedLoader {
        name: String,
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ViewLoader for GatedLoader {
        fn view_name(&self) -> &str {
            &self.name
        }

        async fn load(&self) -> std::result::Result<Arc<dyn View>, ViewError> {
            self.gate.notified().await;
            Ok(Arc::new(TagView {
                name: self.name.clone(),
            }))
        }
    }

    struct FailingLoader;

    #[async_trait]
    impl ViewLoader for FailingLoader {
        fn view_name(&self) -> &str {
            "broken"
        }

        async fn load(&self) -> std::result::Result<Arc<dyn View>, ViewError> {
            Err(ViewError::LoadFailed {
                name: "broken".to_string(),
                message: "fetch failed".to_string(),
            })
        }
    }

    fn demo_routes() -> Vec<Route> {
        vec![
            Route::new("/", "Home", "home")
                .with_redirect("/index")
                .with_child(Route::new("/index", "Index", "home-main")),
            Route::new("/topic/:id", "Topic", "topic"),
            Route::new("/broken", "Broken", "broken"),
        ]
    }

    fn demo_router() -> (Router, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let mut registry = ViewRegistry::new();
        for name in ["home", "home-main", "topic"] {
            registry
                .register(Box::new(CountingLoader {
                    name: name.to_string(),
                    loads: loads.clone(),
                }))
                .expect("register");
        }
        registry.register(Box::new(FailingLoader)).expect("register");

        let table = RouteTable::new(demo_routes()).expect("valid table");
        let router = Router::new(HistoryMode::hash("/"), table, registry).expect("router");
        (router, loads)
    }

    #[tokio::test]
    async fn root_activates_index_through_redirect() {
        let (router, loads) = demo_router();

        let navigation = router.navigate("/").await.expect("navigate");
        let Navigation::Activated(active) = navigation else {
            panic!("expected activation");
        };

        assert_eq!(active.name.as_str(), "Index");
        assert_eq!(active.path, "/index");
        assert_eq!(active.redirected_from.as_deref(), Some("/"));
        assert_eq!(active.render(), "<home><home-main/></home>");
        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert_eq!(router.location().as_deref(), Some("/#/index"));
    }

    #[tokio::test]
    async fn missing_view_key_fails_router_construction() {
        let table = RouteTable::new(demo_routes()).expect("valid table");
        let err = Router::new(HistoryMode::Memory, table, ViewRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::View(ViewError::NotRegistered { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_path_loads_nothing() {
        let (router, loads) = demo_router();

        let err = router.navigate("/unknown").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Router(RouterError::NotFound { path }) if path == "/unknown"
        ));
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(router.current().is_none());
    }

    #[tokio::test]
    async fn renavigation_to_active_path_is_idempotent() {
        let (router, loads) = demo_router();

        router.navigate("/").await.expect("navigate");
        assert_eq!(loads.load(Ordering::SeqCst), 2);

        // Both the parent path and the concrete child path resolve to the
        // already-active route.
        router.navigate("/").await.expect("navigate");
        router.navigate("/index").await.expect("navigate");

        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert!(!router.can_go_back());
    }

    #[tokio::test]
    async fn history_records_previous_route() {
        let (router, _) = demo_router();

        router.navigate("/").await.expect("navigate");
        router.navigate("/topic/7").await.expect("navigate");
        assert!(router.can_go_back());

        let active = router.back().await.expect("back").expect("previous route");
        assert_eq!(active.path, "/index");
        assert!(!router.can_go_back());
        assert_eq!(router.current().map(|c| c.path), Some("/index".to_string()));
    }

    #[tokio::test]
    async fn back_without_history_is_a_noop() {
        let (router, _) = demo_router();
        assert!(router.back().await.expect("back").is_none());
    }

    #[tokio::test]
    async fn load_failure_surfaces_and_keeps_previous_route() {
        let (router, _) = demo_router();

        router.navigate("/").await.expect("navigate");
        let err = router.navigate("/broken").await.unwrap_err();

        assert!(matches!(
            err,
            Error::View(ViewError::LoadFailed { name, .. }) if name == "broken"
        ));
        assert_eq!(router.current().map(|c| c.path), Some("/index".to_string()));
    }

    #[tokio::test]
    async fn param_segments_reach_the_activation() {
        let (router, _) = demo_router();

        let navigation = router.navigate("/topic/42").await.expect("navigate");
        let Navigation::Activated(active) = navigation else {
            panic!("expected activation");
        };
        assert_eq!(active.params.get("id").map(String::as_str), Some("42"));
    }

    #[tokio::test]
    async fn navigate_by_name_uses_the_declared_path() {
        let (router, _) = demo_router();

        let navigation = router.navigate_by_name("Index").await.expect("navigate");
        let Navigation::Activated(active) = navigation else {
            panic!("expected activation");
        };
        assert_eq!(active.path, "/index");

        let err = router.navigate_by_name("Login").await.unwrap_err();
        assert!(matches!(err, Error::Router(RouterError::NotFound { .. })));
    }

    #[tokio::test]
    async fn pending_navigation_loses_to_a_newer_one() {
        let gate = Arc::new(Notify::new());
        let loads = Arc::new(AtomicUsize::new(0));

        let mut registry = ViewRegistry::new();
        registry
            .register(Box::new(GatedLoader {
                name: "slow".to_string(),
                gate: gate.clone(),
            }))
            .expect("register");
        registry
            .register(Box::new(CountingLoader {
                name: "fast".to_string(),
                loads,
            }))
            .expect("register");

        let table = RouteTable::new(vec![
            Route::new("/slow", "Slow", "slow"),
            Route::new("/fast", "Fast", "fast"),
        ])
        .expect("valid table");
        let router = Arc::new(
            Router::new(HistoryMode::Memory, table, registry).expect("router"),
        );

        let pending = tokio::spawn({
            let router = router.clone();
            async move { router.navigate("/slow").await }
        });
        tokio::task::yield_now().await;

        router.navigate("/fast").await.expect("navigate");
        gate.notify_one();

        let outcome = pending.await.expect("join").expect("navigate");
        assert!(matches!(outcome, Navigation::Superseded));
        assert_eq!(router.current().map(|c| c.path), Some("/fast".to_string()));
    }
}
