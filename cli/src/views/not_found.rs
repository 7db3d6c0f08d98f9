//! Fallback view for unmatched paths

use hotlist_core::impl_view_loader;
use hotlist_core::views::View;

/// Shown when no route matches; the outlet carries the missed path
pub struct NotFoundView;

impl NotFoundView {
    /// Create the fallback view
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for NotFoundView {
    fn name(&self) -> &str {
        "not-found"
    }

    fn render(&self, child: Option<&str>) -> String {
        match child {
            Some(path) => format!("404 - no page at '{path}'"),
            None => "404 - page not found".to_string(),
        }
    }
}

impl_view_loader!(NotFoundViewLoader, NotFoundView, "not-found");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_missed_path() {
        assert_eq!(
            NotFoundView::new().render(Some("/login")),
            "404 - no page at '/login'"
        );
    }
}
