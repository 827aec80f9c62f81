// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::completion::{CompletionProvider, CompletionState};
use crate::{EditAction, Key, KeyBindingTable, KeyDescriptor, KeyEvent, LineBuffer,
            ReadlineError, SpecialKey, TerminalSurface, ok};
use std::fmt::{Debug, Formatter};

/// Holds everything that lives for exactly one read session: the line being edited,
/// the history browsing index, and the completion cycling state. The surface, history,
/// completion provider and bindings are borrowed from the session.
pub struct KeyHandler<'a> {
    pub(super) surface: &'a mut dyn TerminalSurface,
    pub(super) buffer: LineBuffer,
    pub(super) history: &'a [String],
    /// In `0..=history.len()`, where `history.len()` means "not browsing".
    pub(super) history_index: usize,
    pub(super) completion_provider: Option<&'a dyn CompletionProvider>,
    pub(super) completion_state: Option<CompletionState>,
    pub(super) bindings: &'a KeyBindingTable,
}

impl Debug for KeyHandler<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHandler")
            .field("buffer", &self.buffer)
            .field("history_index", &self.history_index)
            .field("history_len", &self.history.len())
            .field("completion_state", &self.completion_state)
            .finish_non_exhaustive()
    }
}

impl<'a> KeyHandler<'a> {
    pub fn new(
        surface: &'a mut dyn TerminalSurface,
        history: &'a [String],
        completion_provider: Option<&'a dyn CompletionProvider>,
        bindings: &'a KeyBindingTable,
    ) -> Self {
        Self {
            surface,
            buffer: LineBuffer::new(),
            history,
            history_index: history.len(),
            completion_provider,
            completion_state: None,
            bindings,
        }
    }

    /// Handle a single key: run its bound action (or self-insert it), then flush the
    /// surface.
    pub fn handle(&mut self, event: &KeyEvent) -> Result<(), ReadlineError> {
        if self.completion_state.is_some() && event.key != Key::SpecialKey(SpecialKey::Tab)
        {
            tracing::debug!(message = "completion reset");
            self.completion_state = None;
        }

        let descriptor = KeyDescriptor::from(event);
        let maybe_action = self.bindings.get(&descriptor);
        tracing::trace!(
            message = "handle key",
            descriptor = %descriptor,
            action = ?maybe_action
        );

        match maybe_action {
            Some(action) => self.dispatch(action)?,
            None => self.self_insert(event)?,
        }

        self.surface.flush()?;
        ok!()
    }

    /// Move to the end of the line, end the row on the surface, and return the text.
    ///
    /// A non-empty line that exactly fills its last row has already wrapped the cursor
    /// to column 0, so no line break is written in that case.
    pub fn accept(&mut self) -> Result<String, ReadlineError> {
        self.buffer.move_end(self.surface)?;
        let already_wrapped = !self.buffer.is_empty() && self.surface.cursor_left() == 0;
        if !already_wrapped {
            self.surface.write_line("")?;
        }
        self.surface.flush()?;
        Ok(self.text())
    }

    /// Called when the display changes size.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ReadlineError> {
        tracing::debug!(message = "resize", width, height);
        self.surface.set_buffer_size(width, height)?;
        ok!()
    }

    #[must_use]
    pub fn text(&self) -> String { self.buffer.text() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.buffer.cursor() }

    #[must_use]
    pub fn buffer(&self) -> &LineBuffer { &self.buffer }

    #[must_use]
    pub fn surface(&self) -> &dyn TerminalSurface { &*self.surface }

    #[must_use]
    pub fn history_index(&self) -> usize { self.history_index }

    #[must_use]
    pub fn completion_state(&self) -> Option<&CompletionState> {
        self.completion_state.as_ref()
    }

    fn dispatch(&mut self, action: EditAction) -> Result<(), ReadlineError> {
        let surface = &mut *self.surface;
        match action {
            EditAction::MoveLeft => self.buffer.move_left(surface)?,
            EditAction::MoveRight => self.buffer.move_right(surface)?,
            EditAction::MoveHome => self.buffer.move_home(surface)?,
            EditAction::MoveEnd => self.buffer.move_end(surface)?,
            EditAction::DeleteBefore => self.buffer.delete_before(surface)?,
            EditAction::DeleteAt => self.buffer.delete_at(surface)?,
            EditAction::ClearLine => self.buffer.clear_line(surface)?,
            EditAction::DeleteToEnd => self.buffer.delete_to_end(surface)?,
            EditAction::DeleteToStart => {
                self.buffer.delete_before_cursor(surface, self.buffer.cursor())?;
            }
            EditAction::ClearScreen => self.clear_screen()?,
            EditAction::DeletePreviousWord => self.delete_previous_word()?,
            EditAction::TransposeChars => self.transpose_chars()?,
            EditAction::WordBackward => self.word_backward()?,
            EditAction::WordForward => self.word_forward()?,
            EditAction::CapitalizeChar => self.capitalize_char()?,
            EditAction::UppercaseWord => self.uppercase_word()?,
            EditAction::LowercaseWord => self.lowercase_word()?,
            EditAction::PreviousHistory => self.previous_history()?,
            EditAction::NextHistory => self.next_history()?,
            EditAction::CompleteNext => self.complete_next()?,
            EditAction::CompletePrevious => self.complete_previous()?,
        }
        ok!()
    }

    /// Keys without a literal (navigation, command chords) insert nothing.
    fn self_insert(&mut self, event: &KeyEvent) -> Result<(), ReadlineError> {
        if let Some(ch) = event.literal {
            self.buffer.insert_char(self.surface, ch)?;
        }
        ok!()
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeyBindingTable, KeyEvent, KeyHandler, ModifierKeysMask, SpecialKey,
                SurfaceMock, TerminalSurface, key_event};
    use pretty_assertions::assert_eq;

    fn type_text(handler: &mut KeyHandler<'_>, text: &str) {
        for ch in text.chars() {
            handler.handle(&key_event!(@char ch)).unwrap();
        }
    }

    #[test]
    fn test_typing_builds_the_line() {
        let mut surface = SurfaceMock::new("> ", (10, 5));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);

        type_text(&mut handler, "Hello World!");

        assert_eq!(handler.text(), "Hello World!");
        assert_eq!(handler.cursor(), 12);
        assert_eq!(handler.surface().cursor_left(), 4);
        assert_eq!(handler.surface().cursor_top(), 1);
    }

    #[test]
    fn test_keys_without_literal_insert_nothing() {
        let mut surface = SurfaceMock::new("", (20, 2));
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);

        let ctrl_z = key_event!(@char ModifierKeysMask::new().with_ctrl(), 'z');
        handler.handle(&ctrl_z).unwrap();
        handler.handle(&key_event!(@special SpecialKey::Insert)).unwrap();
        handler.handle(&KeyEvent::from_function_key(ModifierKeysMask::new(), 3)).unwrap();

        assert_eq!(handler.text(), "");
    }

    #[test]
    fn test_empty_table_self_inserts_everything() {
        let mut surface = SurfaceMock::new("", (20, 2));
        let bindings = KeyBindingTable::empty();
        let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);

        type_text(&mut handler, "ab");
        handler.handle(&key_event!(@special SpecialKey::Backspace)).unwrap();

        assert_eq!(handler.text(), "ab");
    }

    #[test]
    fn test_accept_moves_to_end_and_ends_row() {
        let mut surface = SurfaceMock::new("> ", (20, 3));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        {
            let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);
            type_text(&mut handler, "abc");
            handler.handle(&key_event!(@special SpecialKey::Home)).unwrap();
            assert_eq!(handler.accept().unwrap(), "abc");
        }
        assert_eq!(surface.cursor(), (0, 1));
        assert_eq!(surface.screen_text(), "> abc");
    }

    #[test]
    fn test_accept_line_that_exactly_fills_row_adds_no_blank_row() {
        let mut surface = SurfaceMock::new("> ", (5, 4));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        {
            let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);
            type_text(&mut handler, "abc");
            assert_eq!(handler.surface().cursor_left(), 0);
            assert_eq!(handler.accept().unwrap(), "abc");
        }
        assert_eq!(surface.cursor(), (0, 1));
        assert_eq!(surface.screen_text(), "> abc");
    }

    #[test]
    fn test_accept_empty_line_with_empty_prompt_still_ends_row() {
        let mut surface = SurfaceMock::new("", (5, 4));
        let bindings = KeyBindingTable::new();
        {
            let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);
            assert_eq!(handler.accept().unwrap(), "");
        }
        assert_eq!(surface.cursor(), (0, 1));
    }

    #[test]
    fn test_resize() {
        let mut surface = SurfaceMock::new("", (20, 3));
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);

        handler.resize(40, 10).unwrap();
        assert_eq!(handler.surface().buffer_width(), 40);
        assert_eq!(handler.surface().buffer_height(), 10);
    }
}
