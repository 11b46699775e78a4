//! One-shot observation bookkeeping.
//!
//! Reveal animations and counters each fire once, the first time their
//! element enters the viewport, and then stop listening. [`OnceObserver`]
//! tracks which keys are still waiting.

use std::{collections::HashSet, hash::Hash};

#[derive(Debug, Clone)]
pub struct OnceObserver<K> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash> OnceObserver<K> {
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }

    /// Start waiting for `key`. Returns false if it was already observed.
    pub fn observe(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    /// Report a visibility change for `key`.
    ///
    /// Returns true exactly once per observed key: on its first intersecting
    /// notification, which also stops observing it.
    pub fn notify(&mut self, key: &K, intersecting: bool) -> bool {
        intersecting && self.pending.remove(key)
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    /// Number of keys still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<K: Eq + Hash> Default for OnceObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for OnceObserver<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut observer: OnceObserver<usize> = (0..3).collect();
        assert_eq!(observer.pending(), 3);

        assert!(observer.notify(&1, true));
        assert!(!observer.notify(&1, true));
        assert!(!observer.is_observed(&1));
        assert_eq!(observer.pending(), 2);
    }

    #[test]
    fn test_ignores_non_intersecting() {
        let mut observer = OnceObserver::new();
        observer.observe("hero");

        assert!(!observer.notify(&"hero", false));
        assert!(observer.is_observed(&"hero"));
        assert!(observer.notify(&"hero", true));
    }

    #[test]
    fn test_unknown_key() {
        let mut observer: OnceObserver<u32> = OnceObserver::default();
        assert!(!observer.notify(&7, true));
    }

    #[test]
    fn test_observe_twice() {
        let mut observer = OnceObserver::new();
        assert!(observer.observe(4));
        assert!(!observer.observe(4));
        assert_eq!(observer.pending(), 1);
    }
}
