//! The current location and its non-navigating history updates.

use std::sync::{Arc, PoisonError, RwLock};

/// Where the current `path?query#hash` lives.
///
/// `replace` must overwrite the current history entry without a navigation:
/// no reload and no new back-stack entry.
pub trait Location {
    fn href(&self) -> String;

    fn replace(&self, href: &str);

    /// Read-modify-write of the current href.
    ///
    /// The provided version is only atomic under single-threaded use;
    /// implementations shared across threads override it.
    fn update(&self, f: &mut dyn FnMut(&str) -> String) {
        let next = f(&self.href());
        self.replace(&next);
    }
}

impl<L: Location + ?Sized> Location for &L {
    fn href(&self) -> String {
        (**self).href()
    }

    fn replace(&self, href: &str) {
        (**self).replace(href)
    }

    fn update(&self, f: &mut dyn FnMut(&str) -> String) {
        (**self).update(f)
    }
}

impl<L: Location + ?Sized> Location for Arc<L> {
    fn href(&self) -> String {
        (**self).href()
    }

    fn replace(&self, href: &str) {
        (**self).replace(href)
    }

    fn update(&self, f: &mut dyn FnMut(&str) -> String) {
        (**self).update(f)
    }
}

#[derive(Debug)]
struct HistoryState {
    current: String,
    back: Vec<String>,
    replaces: u64,
}

/// In-memory browser history: a current entry plus a back stack.
///
/// All access goes through one `RwLock`, and [`Location::update`] holds the
/// write lock for the whole read-modify-write, so concurrent writers touching
/// different query keys never lose each other's changes.
#[derive(Debug)]
pub struct MemoryHistory {
    state: RwLock<HistoryState>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(HistoryState {
                current: initial.into(),
                back: Vec::new(),
                replaces: 0,
            }),
        }
    }

    /// Navigate to `href`, keeping the previous entry on the back stack.
    pub fn push(&self, href: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut state.current, href.into());
        state.back.push(previous);
    }

    /// Number of entries, including the current one.
    pub fn entry_count(&self) -> usize {
        self.state.read().unwrap_or_else(PoisonError::into_inner).back.len() + 1
    }

    /// Number of non-navigating replacements performed so far.
    pub fn replace_count(&self) -> u64 {
        self.state.read().unwrap_or_else(PoisonError::into_inner).replaces
    }

    /// All entries, oldest first, ending with the current one.
    pub fn entries(&self) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries = state.back.clone();
        entries.push(state.current.clone());
        entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for MemoryHistory {
    fn href(&self) -> String {
        self.state.read().unwrap_or_else(PoisonError::into_inner).current.clone()
    }

    fn replace(&self, href: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = href.to_string();
        state.replaces += 1;
    }

    fn update(&self, f: &mut dyn FnMut(&str) -> String) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = f(&state.current);
        state.replaces += 1;
    }
}
