//! Single-select control groups.
//!
//! Category filter buttons and tab buttons share the same rule: at most one
//! control is active, and selecting one deactivates every other.

/// Result of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Previously active control, if any.
    pub previous: Option<usize>,

    /// Newly active control.
    pub current: usize,
}

/// An ordered group of keyed controls with one active member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorGroup {
    keys: Vec<String>,
    active: Option<usize>,
}

impl SelectorGroup {
    /// Create a group with no active control.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Mark `index` active at construction. Out-of-range indices are ignored.
    pub fn with_active(mut self, index: usize) -> Self {
        if index < self.keys.len() {
            self.active = Some(index);
        }
        self
    }

    /// Make `index` the sole active control.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        if index >= self.keys.len() {
            tracing::warn!(index, len = self.keys.len(), "selection out of range");
            return None;
        }

        let previous = self.active.replace(index);
        Some(Selection {
            previous,
            current: index,
        })
    }

    /// Activate the first control carrying `key`.
    ///
    /// When no control carries it the active marker is cleared, since no
    /// control represents the new state.
    pub fn select_key(&mut self, key: &str) -> Option<usize> {
        self.active = self.position(key);
        self.active
    }

    /// Index of the first control carrying `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Index of the active control.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Key of the active control.
    pub fn active_key(&self) -> Option<&str> {
        self.active.map(|i| self.keys[i].as_str())
    }

    /// Key of the control at `index`.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Whether the control at `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
