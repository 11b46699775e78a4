//! Staggered entry animation timing.

use crate::config::MotionConfig;

/// Delays for the one-time entry animation.
///
/// The main area is marked loaded after `initial_delay_ms`; card `i` follows
/// `per_item_ms * i` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub initial_delay_ms: u32,
    pub per_item_ms: u32,
}

impl StaggerSchedule {
    pub fn new(initial_delay_ms: u32, per_item_ms: u32) -> Self {
        Self {
            initial_delay_ms,
            per_item_ms,
        }
    }

    /// Delay for item `index`, measured from the main area being marked.
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.per_item_ms.saturating_mul(index)
    }

    /// Delay for item `index`, measured from page setup.
    pub fn absolute_delay_for(&self, index: usize) -> u32 {
        self.initial_delay_ms.saturating_add(self.delay_for(index))
    }

    /// `(index, delay)` pairs for `count` items.
    pub fn plan(&self, count: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..count).map(move |i| (i, self.delay_for(i)))
    }
}

impl From<&MotionConfig> for StaggerSchedule {
    fn from(motion: &MotionConfig) -> Self {
        Self::new(motion.main_delay_ms, motion.card_stagger_ms)
    }
}
