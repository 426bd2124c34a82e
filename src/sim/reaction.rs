//! Rolling window of reaction times

use std::collections::VecDeque;

use crate::consts::REACTION_HISTORY;

/// Bounded FIFO of reaction times in seconds; the oldest entry is evicted
/// once the window is full.
#[derive(Debug, Clone)]
pub struct ReactionTimes {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Default for ReactionTimes {
    fn default() -> Self {
        Self::with_capacity(REACTION_HISTORY)
    }
}

impl ReactionTimes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, seconds: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(seconds);
    }

    /// Mean in seconds, `None` when empty
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Mean rounded to whole milliseconds
    pub fn average_ms(&self) -> Option<u64> {
        self.average().map(|s| (s * 1000.0).round() as u64)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
