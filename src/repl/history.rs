//! Session history of successful calculations.
//!
//! In-memory only; nothing is persisted between sessions.

use std::collections::VecDeque;

use crate::calculation::Calculation;

/// Calculations in the order they were performed.
///
/// A non-zero `limit` caps the length; the oldest entry is dropped first.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<Calculation>,
    limit: usize,
}

impl History {
    /// Create a history keeping at most `limit` entries (0 = unlimited).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, calculation: Calculation) {
        if self.limit > 0 && self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(calculation);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Calculation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
