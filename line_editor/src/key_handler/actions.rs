// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::KeyHandler;
use crate::ok;
use std::io;

impl KeyHandler<'_> {
    /// Clear the line, clear the display, and write the prompt again at the top.
    pub(super) fn clear_screen(&mut self) -> io::Result<()> {
        self.buffer.clear_line(self.surface)?;
        self.surface.clear()?;
        self.surface.write_prompt()
    }

    /// Delete backward up to (not including) the nearest space. If the char before the
    /// cursor is a space, nothing is deleted.
    pub(super) fn delete_previous_word(&mut self) -> io::Result<()> {
        let count = self.buffer.chars()[..self.buffer.cursor()]
            .iter()
            .rev()
            .take_while(|ch| **ch != ' ')
            .count();
        self.buffer.delete_before_cursor(self.surface, count)
    }

    /// Swap the two chars around the cursor (the last two chars if the cursor is at the
    /// end), then put the cursor one past the swap.
    pub(super) fn transpose_chars(&mut self) -> io::Result<()> {
        let len = self.buffer.len();
        let cursor = self.buffer.cursor();
        if self.buffer.is_start_of_line() || len < 2 {
            return ok!();
        }

        let (first, second) = if self.buffer.is_end_of_line() {
            (cursor - 2, cursor - 1)
        } else {
            (cursor - 1, cursor)
        };
        let mut chars = self.buffer.chars().to_vec();
        chars.swap(first, second);
        let swapped: String = chars.into_iter().collect();

        self.buffer.write_new_string(self.surface, &swapped)?;
        self.buffer.move_to(self.surface, (cursor + 1).min(len))
    }

    pub(super) fn word_backward(&mut self) -> io::Result<()> {
        let target = find_word_backward(self.buffer.chars(), self.buffer.cursor());
        self.buffer.move_to(self.surface, target)
    }

    pub(super) fn word_forward(&mut self) -> io::Result<()> {
        if self.buffer.is_last_char() {
            return self.buffer.move_end(self.surface);
        }
        let target = find_word_forward(self.buffer.chars(), self.buffer.cursor());
        self.buffer.move_to(self.surface, target)
    }

    /// Upper case the char under the cursor, then go to the end of the word. No-op on a
    /// blank.
    pub(super) fn capitalize_char(&mut self) -> io::Result<()> {
        if self.buffer.is_blank() {
            return ok!();
        }
        let Some(ch) = self.buffer.char_at(self.buffer.cursor()) else {
            return ok!();
        };

        self.buffer
            .replace_char_at_cursor(self.surface, to_upper_single(ch))?;
        self.buffer.move_right(self.surface)?;

        let target = find_end_of_word(self.buffer.chars(), self.buffer.cursor());
        self.buffer.move_to(self.surface, target)
    }

    pub(super) fn uppercase_word(&mut self) -> io::Result<()> {
        self.map_to_end_of_word(to_upper_single)
    }

    pub(super) fn lowercase_word(&mut self) -> io::Result<()> {
        self.map_to_end_of_word(to_lower_single)
    }

    /// Replace and advance, one char at a time, until a blank or the end of the line.
    fn map_to_end_of_word(&mut self, mapper: fn(char) -> char) -> io::Result<()> {
        while !self.buffer.is_blank()
            && let Some(ch) = self.buffer.char_at(self.buffer.cursor())
        {
            self.buffer.replace_char_at_cursor(self.surface, mapper(ch))?;
            self.buffer.move_right(self.surface)?;
        }
        ok!()
    }
}

/// Step left once, skip back over blanks, then go back to the start of that word.
fn find_word_backward(chars: &[char], cursor: usize) -> usize {
    let len = chars.len();
    let is_blank = |index: usize| chars.get(index).is_none_or(|ch| *ch == ' ');

    let mut index = cursor.saturating_sub(1);
    while index != 0 && index != len && is_blank(index) {
        index -= 1;
    }
    while index != 0 && chars[index - 1] != ' ' {
        index -= 1;
    }
    index
}

/// Go to the last char of the current word, step right once, then skip over blanks.
fn find_word_forward(chars: &[char], cursor: usize) -> usize {
    let len = chars.len();

    let mut index = cursor.min(len);
    while index + 1 < len && chars[index + 1] != ' ' {
        index += 1;
    }
    index = (index + 1).min(len);
    while index != 0 && index != len && chars[index] == ' ' {
        index += 1;
    }
    index
}

/// The first blank (or the end of the line) at or after `cursor`.
fn find_end_of_word(chars: &[char], cursor: usize) -> usize {
    chars
        .iter()
        .enumerate()
        .skip(cursor)
        .find(|(_, ch)| **ch == ' ')
        .map_or(chars.len(), |(index, _)| index)
}

/// Chars whose upper case form is more than one char (eg: `ß`) are left alone.
fn to_upper_single(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

fn to_lower_single(ch: char) -> char {
    let mut it = ch.to_lowercase();
    match (it.next(), it.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyBindingTable, KeyEvent, ModifierKeysMask, SpecialKey, SurfaceMock,
                TerminalSurface, key_event};
    use pretty_assertions::assert_eq;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    fn ctrl(ch: char) -> KeyEvent { key_event!(@char ModifierKeysMask::new().with_ctrl(), ch) }

    fn alt(ch: char) -> KeyEvent { key_event!(@char ModifierKeysMask::new().with_alt(), ch) }

    /// Type `text` then move to `cursor`, and run `keys`. Returns the text, the logical
    /// cursor, and the physical cursor.
    fn run(
        text: &str,
        cursor: usize,
        keys: &[KeyEvent],
    ) -> (String, usize, (usize, usize), SurfaceMock) {
        let mut surface = SurfaceMock::new("> ", (8, 6));
        surface.write_prompt().unwrap();
        let bindings = KeyBindingTable::new();
        let (text, logical) = {
            let mut handler = KeyHandler::new(&mut surface, &[], None, &bindings);
            for ch in text.chars() {
                handler.handle(&key_event!(@char ch)).unwrap();
            }
            handler.buffer.move_to(handler.surface, cursor).unwrap();
            for key in keys {
                handler.handle(key).unwrap();
            }
            (handler.text(), handler.cursor())
        };
        let physical = surface.cursor();
        (text, logical, physical, surface)
    }

    /// Where the physical cursor must be for a logical offset, with the 2 char prompt on
    /// the 8 column display used by [`run`].
    fn physical_for(offset: usize) -> (usize, usize) { ((offset + 2) % 8, (offset + 2) / 8) }

    #[test]
    fn test_find_word_forward() {
        let line = chars("hello  big world");
        assert_eq!(find_word_forward(&line, 0), 7);
        assert_eq!(find_word_forward(&line, 5), 7);
        assert_eq!(find_word_forward(&line, 7), 11);
        assert_eq!(find_word_forward(&line, 11), 16);
        assert_eq!(find_word_forward(&line, 16), 16);
        assert_eq!(find_word_forward(&[], 0), 0);
    }

    #[test]
    fn test_find_word_backward() {
        let line = chars("hello  big world");
        assert_eq!(find_word_backward(&line, 16), 11);
        assert_eq!(find_word_backward(&line, 11), 7);
        assert_eq!(find_word_backward(&line, 9), 7);
        assert_eq!(find_word_backward(&line, 7), 0);
        assert_eq!(find_word_backward(&line, 0), 0);
        assert_eq!(find_word_backward(&[], 0), 0);
    }

    #[test]
    fn test_word_motion_stays_in_bounds() {
        for text in ["", " ", "a", "  a  ", "a b c", "   ", "ab  cd  "] {
            let line = chars(text);
            for start in 0..=line.len() {
                let mut forward = start;
                let mut backward = start;
                for _ in 0..=line.len() + 1 {
                    forward = find_word_forward(&line, forward);
                    backward = find_word_backward(&line, backward);
                    assert!(forward <= line.len());
                    assert!(backward <= line.len());
                }
                assert_eq!(forward, line.len());
                assert_eq!(backward, 0);
            }
        }
    }

    #[test]
    fn test_word_keys_move_physical_cursor() {
        let ctrl_left =
            key_event!(@special ModifierKeysMask::new().with_ctrl(), SpecialKey::LeftArrow);
        let (_, logical, physical, _) = run("one two three", 13, &[ctrl_left, alt('b')]);
        assert_eq!(logical, 4);
        assert_eq!(physical, physical_for(4));

        let ctrl_right =
            key_event!(@special ModifierKeysMask::new().with_ctrl(), SpecialKey::RightArrow);
        let (_, logical, physical, _) = run("one two three", 0, &[ctrl_right, alt('f')]);
        assert_eq!(logical, 8);
        assert_eq!(physical, physical_for(8));
    }

    #[test]
    fn test_word_forward_from_last_char_goes_to_end() {
        let (_, logical, physical, _) = run("one two", 6, &[alt('f')]);
        assert_eq!(logical, 7);
        assert_eq!(physical, physical_for(7));

        let (_, logical, _, _) = run("one two", 7, &[alt('f')]);
        assert_eq!(logical, 7);
    }

    #[test]
    fn test_case_keys_stop_on_blank() {
        let (text, logical, _, _) = run("ab cd", 2, &[alt('u'), alt('c')]);
        assert_eq!(text, "ab cd");
        assert_eq!(logical, 2);

        let (text, logical, _, _) = run("ab", 2, &[alt('l')]);
        assert_eq!(text, "ab");
        assert_eq!(logical, 2);
    }

    #[test]
    fn test_delete_previous_word() {
        let (text, logical, physical, _) = run("git commit", 10, &[ctrl('w')]);
        assert_eq!(text, "git ");
        assert_eq!(logical, 4);
        assert_eq!(physical, physical_for(4));

        // Char before the cursor is a space, so nothing happens.
        let (text, logical, _, _) = run("git commit", 4, &[ctrl('w')]);
        assert_eq!(text, "git commit");
        assert_eq!(logical, 4);

        let (text, logical, _, _) = run("git commit", 7, &[ctrl('w')]);
        assert_eq!(text, "git mit");
        assert_eq!(logical, 4);
    }

    #[test]
    fn test_kill_to_start_and_end() {
        let (text, logical, physical, surface) = run("hello world", 6, &[ctrl('u')]);
        assert_eq!(text, "world");
        assert_eq!(logical, 0);
        assert_eq!(physical, physical_for(0));
        assert_eq!(surface.screen_text(), "> world");

        let (text, logical, physical, surface) = run("hello world", 5, &[ctrl('k')]);
        assert_eq!(text, "hello");
        assert_eq!(logical, 5);
        assert_eq!(physical, physical_for(5));
        assert_eq!(surface.screen_text(), "> hello");
    }

    #[test]
    fn test_transpose() {
        let (text, logical, physical, _) = run("ab", 2, &[ctrl('t')]);
        assert_eq!(text, "ba");
        assert_eq!(logical, 2);
        assert_eq!(physical, physical_for(2));

        let (text, logical, physical, _) = run("abcd", 1, &[ctrl('t')]);
        assert_eq!(text, "bacd");
        assert_eq!(logical, 2);
        assert_eq!(physical, physical_for(2));

        let (text, logical, _, _) = run("abc", 2, &[ctrl('t')]);
        assert_eq!(text, "acb");
        assert_eq!(logical, 3);
    }

    #[test]
    fn test_transpose_no_ops() {
        let (text, logical, _, _) = run("ab", 0, &[ctrl('t')]);
        assert_eq!((text.as_str(), logical), ("ab", 0));

        let (text, logical, _, _) = run("a", 1, &[ctrl('t')]);
        assert_eq!((text.as_str(), logical), ("a", 1));
    }

    #[test]
    fn test_transpose_across_wrap() {
        // "> abcdef" fills the first row exactly.
        let (text, logical, physical, surface) = run("abcdefgh", 6, &[ctrl('t')]);
        assert_eq!(text, "abcdegfh");
        assert_eq!(logical, 7);
        assert_eq!(physical, physical_for(7));
        assert_eq!(surface.screen_text(), "> abcdeg\nfh");
    }

    #[test]
    fn test_capitalize_char() {
        let (text, logical, physical, _) = run("hello world", 0, &[alt('c')]);
        assert_eq!(text, "Hello world");
        assert_eq!(logical, 5);
        assert_eq!(physical, physical_for(5));

        let (text, logical, _, _) = run("hello world", 5, &[alt('c')]);
        assert_eq!(text, "hello world");
        assert_eq!(logical, 5);
    }

    #[test]
    fn test_upper_and_lower_case_word() {
        let (text, logical, physical, surface) = run("hello world", 6, &[alt('u')]);
        assert_eq!(text, "hello WORLD");
        assert_eq!(logical, 11);
        assert_eq!(physical, physical_for(11));
        assert_eq!(surface.screen_text(), "> hello\nWORLD");

        let (text, logical, _, _) = run("HELLO WORLD", 1, &[alt('l')]);
        assert_eq!(text, "Hello WORLD");
        assert_eq!(logical, 5);
    }

    #[test]
    fn test_case_mapping_is_single_char() {
        assert_eq!(to_upper_single('a'), 'A');
        assert_eq!(to_upper_single('ß'), 'ß');
        assert_eq!(to_lower_single('Q'), 'q');
        assert_eq!(to_upper_single('1'), '1');
    }

    #[test]
    fn test_clear_screen() {
        let (text, logical, physical, surface) = run("abc", 3, &[ctrl('l')]);
        assert_eq!(text, "");
        assert_eq!(logical, 0);
        assert_eq!(physical, (2, 0));
        assert_eq!(surface.clear_count, 1);
        assert_eq!(surface.screen_text(), ">");
    }

    #[test]
    fn test_escape_clears_line() {
        let escape = key_event!(@special SpecialKey::Escape);
        let (text, logical, physical, surface) = run("a longer line", 4, &[escape]);
        assert_eq!(text, "");
        assert_eq!(logical, 0);
        assert_eq!(physical, physical_for(0));
        assert_eq!(surface.screen_text(), ">");
    }
}
