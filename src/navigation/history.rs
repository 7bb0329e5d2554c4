//! In-memory navigation history

use std::collections::BTreeSet;

use super::router::{NavOptions, Navigator};

/// A [`Navigator`] that keeps history in memory
///
/// Entries form a stack with a cursor, like a browser session history:
/// pushing drops any forward entries, `back` and `forward` move the cursor
/// and stop at either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    prefetched: BTreeSet<String>,
    refreshes: usize,
    last_scroll: Option<bool>,
}

impl MemoryHistory {
    /// Start a history at the given path
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            prefetched: BTreeSet::new(),
            refreshes: 0,
            last_scroll: None,
        }
    }

    /// Path of the current entry
    pub fn current(&self) -> &str {
        self.entries.get(self.cursor).map(String::as_str).unwrap_or("/")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn is_prefetched(&self, href: &str) -> bool {
        self.prefetched.contains(href)
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Scroll flag passed with the most recent push or replace
    pub fn last_scroll(&self) -> Option<bool> {
        self.last_scroll
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryHistory {
    fn push(&mut self, href: &str, options: NavOptions) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(href.to_string());
        self.cursor = self.entries.len() - 1;
        self.last_scroll = options.scroll;
    }

    fn replace(&mut self, href: &str, options: NavOptions) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = href.to_string(),
            None => self.entries.push(href.to_string()),
        }
        self.last_scroll = options.scroll;
    }

    fn prefetch(&mut self, href: &str) {
        self.prefetched.insert(href.to_string());
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
        }
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
