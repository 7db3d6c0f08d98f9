//! Route table construction, validation, and path resolution
//!
//! The declaration tree is flattened once into full-path nodes; every
//! invariant is checked at that point so navigation never observes a
//! malformed table.

use crate::error::{RouterError, TableError};
use crate::router::route::{Route, RouteName};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One segment of a declared path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A flattened route node with its full path and ancestor chain
#[derive(Debug, Clone)]
struct FlatRoute {
    name: RouteName,
    full_path: String,
    segments: Vec<Segment>,
    view: String,
    redirect: Option<String>,
    has_children: bool,
    /// Indices into the flattened list, outermost ancestor first, self last
    chain: Vec<usize>,
}

/// Outcome of a successful path resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Name of the matched leaf entry
    pub name: RouteName,
    /// Concrete path that matched, after any redirect hops
    pub path: String,
    /// Captured `:param` segment values
    pub params: HashMap<String, String>,
    /// Originally requested path, when at least one redirect hop was taken
    pub redirected_from: Option<String>,
    /// Registry keys of the matched view chain, outermost first
    pub views: Vec<String>,
}

/// A borrowed view of one table entry, for listing the table
#[derive(Debug, Clone, Copy)]
pub struct TableEntry<'a> {
    /// Full path of the entry
    pub path: &'a str,
    /// Route name
    pub name: &'a RouteName,
    /// View registry key
    pub view: &'a str,
    /// Redirect target, if any
    pub redirect: Option<&'a str>,
    /// Nesting depth (0 for top-level entries)
    pub depth: usize,
}

/// The immutable, validated navigation table
#[derive(Debug, Clone)]
pub struct RouteTable {
    flat: Vec<FlatRoute>,
}

impl RouteTable {
    /// Build and validate a table from a route declaration tree
    pub fn new(routes: Vec<Route>) -> Result<Self, TableError> {
        if routes.is_empty() {
            return Err(TableError::NoRoutes);
        }

        let mut flat = Vec::new();
        flatten(&routes, "", "top-level", &mut Vec::new(), &mut flat)?;

        let mut seen = HashSet::new();
        for node in &flat {
            if !seen.insert(node.name.clone()) {
                return Err(TableError::DuplicateName {
                    name: node.name.to_string(),
                });
            }
        }

        let table = Self { flat };
        table.validate_redirects()?;
        Ok(table)
    }

    /// Resolve a requested path to a route activation target
    ///
    /// Redirect hops are followed transparently. Resolution never touches
    /// the view registry; a miss reports the path that failed to match.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouterError> {
        let first = normalize_path(path);
        let mut requested = first.clone();
        let mut visited = HashSet::new();

        loop {
            let (idx, params) = self.match_path(&requested).ok_or(RouterError::NotFound {
                path: requested.clone(),
            })?;

            if !visited.insert(idx) {
                return Err(RouterError::RedirectCycle { path: requested });
            }

            let node = &self.flat[idx];
            if let Some(target) = &node.redirect {
                debug!(from = %requested, to = %target, "following redirect");
                requested = normalize_path(target);
                continue;
            }

            let redirected_from = (requested != first).then(|| first.clone());
            return Ok(Resolution {
                name: node.name.clone(),
                path: requested,
                params,
                redirected_from,
                views: node.chain.iter().map(|&i| self.flat[i].view.clone()).collect(),
            });
        }
    }

    /// Full path declared for a named route, for programmatic navigation
    pub fn path_of(&self, name: &str) -> Option<&str> {
        self.flat
            .iter()
            .find(|node| node.name.as_str() == name)
            .map(|node| node.full_path.as_str())
    }

    /// Iterate the flattened entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = TableEntry<'_>> {
        self.flat.iter().map(|node| TableEntry {
            path: &node.full_path,
            name: &node.name,
            view: &node.view,
            redirect: node.redirect.as_deref(),
            depth: node.chain.len() - 1,
        })
    }

    /// Number of entries in the table, nested entries included
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    fn match_path(&self, path: &str) -> Option<(usize, HashMap<String, String>)> {
        let segments = split_segments(path);

        'outer: for (idx, node) in self.flat.iter().enumerate() {
            if node.segments.len() != segments.len() {
                continue;
            }
            let mut params = HashMap::new();
            for (pattern, segment) in node.segments.iter().zip(&segments) {
                match pattern {
                    Segment::Literal(literal) => {
                        if literal != segment {
                            continue 'outer;
                        }
                    }
                    Segment::Param(key) => {
                        params.insert(key.clone(), segment.clone());
                    }
                }
            }
            return Some((idx, params));
        }
        None
    }

    fn validate_redirects(&self) -> Result<(), TableError> {
        for (idx, node) in self.flat.iter().enumerate() {
            let Some(target) = &node.redirect else {
                continue;
            };

            let normalized = normalize_path(target);
            let (target_idx, _) =
                self.match_path(&normalized)
                    .ok_or_else(|| TableError::RedirectTargetMissing {
                        name: node.name.to_string(),
                        target: target.clone(),
                    })?;

            // A parent redirect must land on one of its own descendants,
            // otherwise navigation to the parent dead-ends.
            if node.has_children {
                let target_node = &self.flat[target_idx];
                let is_descendant = target_idx != idx && target_node.chain.contains(&idx);
                if !is_descendant {
                    return Err(TableError::RedirectOutsideChildren {
                        name: node.name.to_string(),
                        target: target.clone(),
                    });
                }
            }
        }

        // Follow every chain to its end; a repeated node is a cycle.
        for (start, node) in self.flat.iter().enumerate() {
            if node.redirect.is_none() {
                continue;
            }
            let mut visited = HashSet::from([start]);
            let mut current = start;
            while let Some(target) = &self.flat[current].redirect {
                let (next, _) = self
                    .match_path(&normalize_path(target))
                    .expect("redirect targets checked above");
                if !visited.insert(next) {
                    return Err(TableError::RedirectCycle {
                        name: node.name.to_string(),
                    });
                }
                current = next;
            }
        }

        Ok(())
    }
}

fn flatten(
    routes: &[Route],
    parent_path: &str,
    parent_label: &str,
    ancestors: &mut Vec<usize>,
    flat: &mut Vec<FlatRoute>,
) -> Result<(), TableError> {
    let mut sibling_paths = HashSet::new();

    for route in routes {
        let full_path = join_path(parent_path, &route.path);
        if !sibling_paths.insert(full_path.clone()) {
            return Err(TableError::DuplicateSiblingPath {
                path: full_path,
                parent: parent_label.to_string(),
            });
        }

        let idx = flat.len();
        let mut chain = ancestors.clone();
        chain.push(idx);

        flat.push(FlatRoute {
            name: route.name.clone(),
            segments: parse_segments(&full_path),
            full_path: full_path.clone(),
            view: route.view.clone(),
            redirect: route.redirect.clone(),
            has_children: !route.children.is_empty(),
            chain,
        });

        if !route.children.is_empty() {
            ancestors.push(idx);
            flatten(&route.children, &full_path, route.name.as_str(), ancestors, flat)?;
            ancestors.pop();
        }
    }

    Ok(())
}

/// Normalize a path: leading slash, no trailing slash, no empty segments
pub(crate) fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize_path(child)
    } else {
        normalize_path(&format!("{parent}/{child}"))
    }
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_segments(path: &str) -> Vec<Segment> {
    split_segments(path)
        .into_iter()
        .map(|segment| match segment.strip_prefix(':') {
            Some(key) => Segment::Param(key.to_string()),
            None => Segment::Literal(segment),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_table() -> RouteTable {
        RouteTable::new(vec![Route::new("/", "Home", "home")
            .with_redirect("/index")
            .with_child(Route::new("/index", "Index", "home-main"))])
        .expect("demo table is valid")
    }

    #[test]
    fn root_redirects_to_index() {
        let table = demo_table();
        let resolution = table.resolve("/").expect("resolves");

        assert_eq!(resolution.name.as_str(), "Index");
        assert_eq!(resolution.path, "/index");
        assert_eq!(resolution.redirected_from.as_deref(), Some("/"));
        assert_eq!(resolution.views, vec!["home", "home-main"]);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let table = demo_table();
        let err = table.resolve("/unknown").unwrap_err();
        assert!(matches!(err, RouterError::NotFound { path } if path == "/unknown"));
    }

    #[test]
    fn direct_child_path_matches_without_redirect() {
        let table = demo_table();
        let resolution = table.resolve("/index").expect("resolves");

        assert_eq!(resolution.name.as_str(), "Index");
        assert!(resolution.redirected_from.is_none());
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let table = demo_table();
        let resolution = table.resolve("/index/").expect("resolves");
        assert_eq!(resolution.path, "/index");
    }

    #[test]
    fn relative_child_paths_join_under_parent() {
        let table = RouteTable::new(vec![Route::new("/topics", "Topics", "topics")
            .with_redirect("/topics/trending")
            .with_child(Route::new("trending", "Trending", "topics-trending"))])
        .expect("valid");

        let resolution = table.resolve("/topics").expect("resolves");
        assert_eq!(resolution.path, "/topics/trending");
        assert_eq!(resolution.name.as_str(), "Trending");
    }

    #[test]
    fn param_segments_capture_values() {
        let table = RouteTable::new(vec![
            Route::new("/", "Home", "home")
                .with_redirect("/index")
                .with_child(Route::new("/index", "Index", "home-main")),
            Route::new("/topic/:id", "Topic", "topic"),
        ])
        .expect("valid");

        let resolution = table.resolve("/topic/42").expect("resolves");
        assert_eq!(resolution.name.as_str(), "Topic");
        assert_eq!(resolution.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = RouteTable::new(vec![]).unwrap_err();
        assert!(matches!(err, TableError::NoRoutes));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "Home", "home")
                .with_redirect("/index")
                .with_child(Route::new("/index", "Home", "home-main")),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateName { name } if name == "Home"));
    }

    #[test]
    fn duplicate_sibling_paths_are_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/index", "A", "a"),
            Route::new("/index", "B", "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateSiblingPath { path, .. } if path == "/index"));
    }

    #[test]
    fn missing_redirect_target_is_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "Home", "home").with_redirect("/nowhere")
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::RedirectTargetMissing { target, .. } if target == "/nowhere"));
    }

    #[test]
    fn parent_redirect_must_stay_within_children() {
        let err = RouteTable::new(vec![
            Route::new("/", "Home", "home")
                .with_redirect("/elsewhere")
                .with_child(Route::new("/index", "Index", "home-main")),
            Route::new("/elsewhere", "Elsewhere", "elsewhere"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::RedirectOutsideChildren { .. }));
    }

    #[test]
    fn redirect_cycle_is_rejected_at_build_time() {
        let err = RouteTable::new(vec![
            Route::new("/a", "A", "a").with_redirect("/b"),
            Route::new("/b", "B", "b").with_redirect("/a"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::RedirectCycle { .. }));
    }

    #[test]
    fn table_entries_list_in_declaration_order() {
        let table = demo_table();
        let entries: Vec<_> = table.entries().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "/");
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[1].path, "/index");
        assert_eq!(entries[1].depth, 1);
    }

    #[test]
    fn path_of_finds_named_routes() {
        let table = demo_table();
        assert_eq!(table.path_of("Index"), Some("/index"));
        assert_eq!(table.path_of("Login"), None);
    }
}
