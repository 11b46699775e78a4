//! Count-up animation for numeric statistics.
//!
//! A counter advances one fixed step per animation frame and lands exactly on
//! its target on the last frame.

/// One frame of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Show `value` and schedule another frame.
    Continue(u64),
    /// Show the target; no further frames.
    Done(u64),
}

impl Tick {
    /// Value to display for this frame.
    pub fn value(self) -> u64 {
        match self {
            Tick::Continue(v) | Tick::Done(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    current: u64,
    step: u64,
    finished: bool,
}

impl CounterAnimation {
    /// Count from zero to `target` in roughly `frames` frames.
    pub fn new(target: u64, frames: u32) -> Self {
        let frames = u64::from(frames.max(1));
        let step = ((target as f64) / (frames as f64)).round() as u64;

        Self {
            target,
            current: 0,
            step: step.max(1),
            finished: false,
        }
    }

    /// Parse a target from markup.
    ///
    /// Missing, non-numeric, negative or non-finite values count to zero;
    /// fractions round to the nearest integer.
    pub fn parse_target(raw: &str) -> u64 {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => n.round() as u64,
            _ => 0,
        }
    }

    /// Advance one frame.
    ///
    /// Calling again after [`Tick::Done`] keeps returning `Done`.
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Done(self.target);
        }

        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.finished = true;
            Tick::Done(self.target)
        } else {
            Tick::Continue(self.current)
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        Some(self.tick().value())
    }
}
