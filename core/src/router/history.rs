//! History mode and the navigation history stack
//!
//! The history mode controls how the active path is represented as an
//! address-bar style location; the history stack backs `go back`.

/// Strategy for representing navigable state as a location string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Hash-based locations of the form `{base}#{path}`
    Hash { base: String },
    /// In-memory navigation with no location formatting
    Memory,
}

impl HistoryMode {
    /// Create a hash history mode with the given base path
    pub fn hash(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = if base.is_empty() { "/".to_string() } else { base };
        Self::Hash { base }
    }

    /// Format an active path as a full location
    pub fn format(&self, path: &str) -> String {
        match self {
            Self::Hash { base } => format!("{base}#{path}"),
            Self::Memory => path.to_string(),
        }
    }

    /// Extract the navigation path from a location
    ///
    /// Accepts plain paths as well as full hash locations; everything
    /// before the first `#` is the base and is ignored.
    pub fn parse(&self, location: &str) -> String {
        let path = match location.split_once('#') {
            Some((_, fragment)) => fragment,
            None => location,
        };
        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }
}

impl Default for HistoryMode {
    fn default() -> Self {
        Self::hash("/")
    }
}

/// Bounded stack of previously active paths, most recent first
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<String>,
    max_entries: usize,
}

impl NavigationHistory {
    /// Create a history stack holding at most `max_entries` paths
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Push a path as the most recent entry
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.insert(0, path.into());
        if self.entries.len() > self.max_entries {
            self.entries.truncate(self.max_entries);
        }
    }

    /// Pop the most recent entry
    pub fn pop(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Check if there is anything to go back to
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// The recorded paths, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(50) // Default history limit
    }
}
