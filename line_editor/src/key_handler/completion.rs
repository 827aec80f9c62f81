// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::KeyHandler;
use crate::ok;
use std::io;

/// Chars that end the word being completed, unless a provider says otherwise.
pub const DEFAULT_SEPARATORS: [char; 5] = [' ', '.', '/', '\\', ':'];

/// Supplies candidates for <kbd>Tab</kbd> completion.
///
/// Any `Fn(&str, usize) -> Option<Vec<String>>` closure is a provider that uses the
/// [`DEFAULT_SEPARATORS`].
pub trait CompletionProvider {
    /// The word being completed starts just past the last of these chars in the line.
    fn separators(&self) -> &[char] { &DEFAULT_SEPARATORS }

    /// Given the whole line and the offset where the word being completed starts,
    /// return the candidates to cycle through. [None] or an empty list means there is
    /// nothing to complete.
    fn get_suggestions(&self, text: &str, start_offset: usize) -> Option<Vec<String>>;
}

impl<F> CompletionProvider for F
where
    F: Fn(&str, usize) -> Option<Vec<String>>,
{
    fn get_suggestions(&self, text: &str, start_offset: usize) -> Option<Vec<String>> {
        self(text, start_offset)
    }
}

/// Present while the user is cycling through completions. `candidates` is never empty,
/// and `index` is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionState {
    candidates: Vec<String>,
    index: usize,
    start_offset: usize,
}

impl CompletionState {
    /// Positioned on the first candidate. [None] if there are no candidates.
    #[must_use]
    pub fn new(candidates: Vec<String>, start_offset: usize) -> Option<Self> {
        (!candidates.is_empty()).then_some(Self {
            candidates,
            index: 0,
            start_offset,
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] { &self.candidates }

    #[must_use]
    pub fn index(&self) -> usize { self.index }

    /// Where the word being completed starts in the line.
    #[must_use]
    pub fn start_offset(&self) -> usize { self.start_offset }

    #[must_use]
    pub fn current(&self) -> &str { &self.candidates[self.index] }

    pub fn advance(&mut self) { self.index = (self.index + 1) % self.candidates.len(); }

    pub fn retreat(&mut self) {
        self.index = match self.index {
            0 => self.candidates.len() - 1,
            it => it - 1,
        };
    }
}

impl KeyHandler<'_> {
    /// Start completing, or advance to the next candidate if already completing.
    pub(super) fn complete_next(&mut self) -> io::Result<()> {
        if let Some(state) = self.completion_state.as_mut() {
            state.advance();
            tracing::debug!(message = "complete next", index = state.index);
            return self.substitute_completion();
        }

        let Some(provider) = self.completion_provider else {
            return ok!();
        };
        if !self.buffer.is_end_of_line() {
            return ok!();
        }

        let text = self.buffer.text();
        let separators = provider.separators();
        let start_offset = self
            .buffer
            .chars()
            .iter()
            .rposition(|ch| separators.contains(ch))
            .map_or(0, |it| it + 1);

        let candidates = provider
            .get_suggestions(&text, start_offset)
            .unwrap_or_default();
        let Some(state) = CompletionState::new(candidates, start_offset) else {
            tracing::debug!(message = "no completions", text = ?text);
            return ok!();
        };

        tracing::debug!(
            message = "completion start",
            start_offset,
            candidates = ?state.candidates
        );
        self.completion_state = Some(state);
        self.substitute_completion()
    }

    /// Go back to the previous candidate. Only does something while completing.
    pub(super) fn complete_previous(&mut self) -> io::Result<()> {
        let Some(state) = self.completion_state.as_mut() else {
            return ok!();
        };
        state.retreat();
        tracing::debug!(message = "complete previous", index = state.index);
        self.substitute_completion()
    }

    /// Replace everything from the start of the word to the cursor with the current
    /// candidate.
    fn substitute_completion(&mut self) -> io::Result<()> {
        let Some(state) = self.completion_state.as_ref() else {
            return ok!();
        };
        let count = self.buffer.cursor().saturating_sub(state.start_offset);
        let candidate = state.current().to_string();
        self.buffer.delete_before_cursor(self.surface, count)?;
        self.buffer.write_str(self.surface, &candidate)
    }
}
