// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::KeyHandler;
use crate::ok;
use std::io;

impl KeyHandler<'_> {
    /// Replace the line with the next older entry. No-op at the oldest entry.
    pub(super) fn previous_history(&mut self) -> io::Result<()> {
        if self.history_index == 0 {
            return ok!();
        }
        self.history_index -= 1;
        tracing::debug!(message = "previous history", index = self.history_index);
        let entry = &self.history[self.history_index];
        self.buffer.write_new_string(self.surface, entry)
    }

    /// Replace the line with the next newer entry. Going past the newest entry clears
    /// the line. No-op when not browsing.
    pub(super) fn next_history(&mut self) -> io::Result<()> {
        if self.history_index >= self.history.len() {
            return ok!();
        }
        self.history_index += 1;
        tracing::debug!(message = "next history", index = self.history_index);
        match self.history.get(self.history_index) {
            Some(entry) => self.buffer.write_new_string(self.surface, entry),
            None => self.buffer.clear_line(self.surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeyBindingTable, KeyHandler, SpecialKey, SurfaceMock, TerminalSurface,
                key_event};
    use pretty_assertions::assert_eq;

    fn up(handler: &mut KeyHandler<'_>) {
        handler.handle(&key_event!(@special SpecialKey::UpArrow)).unwrap();
    }

    fn down(handler: &mut KeyHandler<'_>) {
        handler.handle(&key_event!(@special SpecialKey::DownArrow)).unwrap();
    }

    #[test]
    fn test_browse_older_and_newer() {
        let history = ["a", "b", "c"].map(String::from);
        let mut surface = SurfaceMock::new("> ", (20, 3));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &history, None, &bindings);
        assert_eq!(handler.history_index(), 3);

        up(&mut handler);
        assert_eq!(handler.text(), "c");
        up(&mut handler);
        assert_eq!(handler.text(), "b");
        assert_eq!(handler.cursor(), 1);

        down(&mut handler);
        assert_eq!(handler.text(), "c");
        down(&mut handler);
        assert_eq!(handler.text(), "");
        assert_eq!(handler.history_index(), 3);

        // Not browsing, so nothing happens.
        down(&mut handler);
        assert_eq!(handler.text(), "");
    }

    #[test]
    fn test_stops_at_oldest() {
        let history = ["a", "b", "c"].map(String::from);
        let mut surface = SurfaceMock::new("> ", (20, 3));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &history, None, &bindings);

        for _ in 0..5 {
            up(&mut handler);
        }
        assert_eq!(handler.text(), "a");
        assert_eq!(handler.history_index(), 0);
        assert_eq!(handler.surface().cursor_left(), 3);
    }

    #[test]
    fn test_empty_history_is_a_no_op() {
        let mut surface = SurfaceMock::new("> ", (20, 3));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);

        handler.handle(&key_event!(@char 'x')).unwrap();
        up(&mut handler);
        down(&mut handler);
        assert_eq!(handler.text(), "x");
    }

    #[test]
    fn test_recalled_entry_redraws_over_longer_line() {
        let history = [String::from("ls")];
        let mut surface = SurfaceMock::new("> ", (6, 4));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        {
            let mut handler = KeyHandler::new(&mut surface, &history, None, &bindings);
            for ch in "cargo build".chars() {
                handler.handle(&key_event!(@char ch)).unwrap();
            }
            up(&mut handler);
            assert_eq!(handler.text(), "ls");
        }
        assert_eq!(surface.screen_text(), "> ls");
        assert_eq!(surface.cursor(), (4, 0));
    }
}
