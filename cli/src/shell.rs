//! Shell assembly: route table, view registry, router, and mounted app

use crate::views::{HomeViewLoader, MainViewLoader, NotFoundViewLoader};
use hotlist_core::error::Result;
use hotlist_core::router::{HistoryMode, Route, RouteTable, Router};
use hotlist_core::views::ViewRegistry;
use hotlist_core::{App, ServeConfig};

/// The application's route declarations
///
/// `/` is a layout route that immediately redirects into its `/index`
/// child, where the landing page lives.
pub fn routes() -> Vec<Route> {
    vec![Route::new("/", "Home", "home")
        .with_redirect("/index")
        .with_child(Route::new("/index", "Index", "home-main"))]
}

/// Registry with a loader for every view the route table references
pub fn registry() -> Result<ViewRegistry> {
    let mut registry = ViewRegistry::new();
    registry.register(Box::new(HomeViewLoader))?;
    registry.register(Box::new(MainViewLoader))?;
    Ok(registry)
}

/// Build the router for the given serve configuration
pub fn build_router(config: &ServeConfig) -> Result<Router> {
    let table = RouteTable::new(routes())?;
    Router::new(HistoryMode::hash(config.base.clone()), table, registry()?)
}

/// Mount the full application shell, fallback view included
pub async fn mount(config: &ServeConfig) -> Result<App> {
    App::builder()
        .router(build_router(config)?)
        .fallback_view(Box::new(NotFoundViewLoader))
        .mount()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_route_table_is_valid() {
        let table = RouteTable::new(routes()).expect("valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.path_of("Index"), Some("/index"));
    }

    #[test]
    fn every_table_view_has_a_loader() {
        let registry = registry().expect("registry");
        let table = RouteTable::new(routes()).expect("valid table");
        for entry in table.entries() {
            assert!(registry.contains(entry.view), "missing loader: {}", entry.view);
        }
    }

    #[tokio::test]
    async fn the_shell_mounts_on_the_landing_page() {
        let app = mount(&ServeConfig::default()).await.expect("mount");
        assert_eq!(app.location().as_deref(), Some("/#/index"));
        assert!(app.render().contains("Trending now"));
    }
}
