//! Route definitions and utilities
//!
//! This module defines the declarative route entry type used to build
//! the navigation table.

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a route, used for programmatic navigation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteName(pub String);

impl RouteName {
    /// Create a new route name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// View the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A declarative rule mapping a URL path to a view
///
/// The `view` field is a key into the view registry; the view behind it is
/// not instantiated until the route is activated by a navigation.
#[derive(Debug, Clone)]
pub struct Route {
    /// URL path pattern this route matches. Segments starting with `:` are
    /// parameters. A child path starting with `/` is absolute; otherwise it
    /// is joined under the parent path.
    pub path: String,
    /// Unique name for this route
    pub name: RouteName,
    /// Registry key of the view to activate
    pub view: String,
    /// Optional path to re-navigate to instead of activating this entry
    pub redirect: Option<String>,
    /// Ordered nested routes
    pub children: Vec<Route>,
}

impl Route {
    /// Create a new route with the given path, name, and view key
    pub fn new(
        path: impl Into<String>,
        name: impl Into<RouteName>,
        view: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
            redirect: None,
            children: Vec::new(),
        }
    }

    /// Set the redirect target for this route
    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Append a nested child route
    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the nested child routes
    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}
