// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::{LineBuffer, restore_after_write};
use crate::{TerminalSurface, ok};
use std::io;

impl LineBuffer {
    pub fn insert_char(
        &mut self,
        surface: &mut dyn TerminalSurface,
        ch: char,
    ) -> io::Result<()> {
        let mut encoded = [0; 4];
        self.write_str(surface, ch.encode_utf8(&mut encoded))
    }

    /// Insert `text` at the cursor, and leave the cursor just past it.
    ///
    /// At the end of the line this is a plain append. Otherwise the inserted text and
    /// the old tail are redrawn together (reflowing any wrapped rows), and the physical
    /// cursor is brought back.
    pub fn write_str(
        &mut self,
        surface: &mut dyn TerminalSurface,
        text: &str,
    ) -> io::Result<()> {
        let new_chars: Vec<char> = text.chars().collect();
        let count = new_chars.len();
        if count == 0 {
            return ok!();
        }

        if self.is_end_of_line() {
            self.chars.extend(new_chars);
            self.cursor = self.len();
            return surface.write(text);
        }

        let saved = (surface.cursor_left(), surface.cursor_top());
        self.chars.splice(self.cursor..self.cursor, new_chars);
        let redraw: String = self.chars[self.cursor..].iter().collect();
        surface.write(&redraw)?;
        restore_after_write(surface, saved, self.len() - self.cursor)?;

        // Physical cursor is back at the insertion point, step over the new text.
        self.move_to(surface, self.cursor + count)
    }

    /// Backspace. No-op at the start of the line.
    pub fn delete_before(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        self.delete_before_cursor(surface, 1)
    }

    /// Delete. No-op at the end of the line.
    pub fn delete_at(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        if self.is_end_of_line() {
            return ok!();
        }
        self.chars.remove(self.cursor);
        self.redraw_tail(surface, 1)
    }

    /// Delete up to `count` chars before the cursor, with a single redraw. The result
    /// is the same as `count` backspaces.
    pub fn delete_before_cursor(
        &mut self,
        surface: &mut dyn TerminalSurface,
        count: usize,
    ) -> io::Result<()> {
        let count = count.min(self.cursor);
        if count == 0 {
            return ok!();
        }
        self.move_to(surface, self.cursor - count)?;
        self.chars.drain(self.cursor..self.cursor + count);
        self.redraw_tail(surface, count)
    }

    /// Delete from the cursor to the end of the line.
    pub fn delete_to_end(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        let count = self.len() - self.cursor;
        if count == 0 {
            return ok!();
        }
        self.chars.truncate(self.cursor);
        self.redraw_tail(surface, count)
    }

    /// Erase the whole line. Leaves the cursor where the line starts.
    pub fn clear_line(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        self.move_home(surface)?;
        self.delete_to_end(surface)
    }

    /// Replace the whole line with `text`, leaving the cursor at its end.
    pub fn write_new_string(
        &mut self,
        surface: &mut dyn TerminalSurface,
        text: &str,
    ) -> io::Result<()> {
        self.clear_line(surface)?;
        self.write_str(surface, text)
    }

    /// Overwrite the char under the cursor. Neither the length nor the cursor change.
    /// No-op at the end of the line.
    pub fn replace_char_at_cursor(
        &mut self,
        surface: &mut dyn TerminalSurface,
        ch: char,
    ) -> io::Result<()> {
        let Some(slot) = self.chars.get_mut(self.cursor) else {
            return ok!();
        };
        *slot = ch;

        let saved = (surface.cursor_left(), surface.cursor_top());
        let mut encoded = [0; 4];
        surface.write(ch.encode_utf8(&mut encoded))?;
        restore_after_write(surface, saved, 1)
    }

    /// Redraw from the cursor to the end of the line, then blank out the `erase_count`
    /// cells that the line no longer covers. The physical cursor does not move.
    fn redraw_tail(
        &self,
        surface: &mut dyn TerminalSurface,
        erase_count: usize,
    ) -> io::Result<()> {
        let saved = (surface.cursor_left(), surface.cursor_top());
        let tail: String = self.chars[self.cursor..].iter().collect();
        surface.write(&tail)?;
        surface.erase(erase_count)?;
        restore_after_write(surface, saved, self.len() - self.cursor + erase_count)
    }
}
