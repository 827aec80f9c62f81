// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_SIZE_MAX;

/// Previously accepted lines, oldest first.
///
/// A read session only ever borrows the entries (as a slice, for browsing). Lines are
/// appended by [`crate::ReadlineContext`] after a session completes, so a session never
/// sees the history change under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_size: HISTORY_SIZE_MAX,
        }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.set_max_size(max_size);
        self
    }

    #[must_use]
    pub fn max_size(&self) -> usize { self.max_size }

    /// Oldest entries are dropped if there are now too many.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        self.evict_oldest();
    }

    /// Append entries, in order. Empty and repeated lines are kept as is.
    pub fn add<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self.evict_oldest();
    }

    #[must_use]
    pub fn all(&self) -> &[String] { &self.entries }

    pub fn clear(&mut self) { self.entries.clear(); }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    fn evict_oldest(&mut self) {
        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }
    }
}
