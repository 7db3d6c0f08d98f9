//! Home layout and its default child view

use hotlist_core::impl_view_loader;
use hotlist_core::views::View;

/// Layout view wrapping every page under the home route
pub struct HomeView;

impl HomeView {
    /// Create the layout view
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn name(&self) -> &str {
        "home"
    }

    fn render(&self, child: Option<&str>) -> String {
        let mut output = String::from("=== chitchat hot list ===\n");
        match child {
            Some(inner) => output.push_str(inner),
            None => output.push_str("(empty outlet)"),
        }
        output
    }
}

impl_view_loader!(HomeViewLoader, HomeView, "home");

/// Landing page shown at /index
pub struct MainView;

impl MainView {
    /// Create the landing page view
    pub fn new() -> Self {
        Self
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for MainView {
    fn name(&self) -> &str {
        "home-main"
    }

    fn render(&self, _child: Option<&str>) -> String {
        [
            "Trending now",
            "------------",
            "Enter a path to navigate, :hot to fetch the live hot list,",
            ":routes to list routes, :back to go back, :quit to leave.",
        ]
        .join("\n")
    }
}

impl_view_loader!(MainViewLoader, MainView, "home-main");
