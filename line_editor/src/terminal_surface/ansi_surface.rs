// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EchoMode, TerminalSurface, ok};
use crossterm::{QueueableCommand,
                cursor::MoveTo,
                style::Print,
                terminal::{Clear, ClearType}};
use std::io::{self, Stdout, Write};

/// A [`TerminalSurface`] that emits ANSI escape sequences (via `crossterm` commands) to
/// any [Write] implementor.
///
/// The cursor position is tracked here rather than queried from the terminal, so that
/// handling a key never needs a round trip to the terminal. Everything is queued and
/// only goes out on [`TerminalSurface::flush`].
///
/// The terminal must be in raw mode, since rows are ended with `\r\n`.
#[derive(Debug)]
pub struct AnsiSurface<W: Write> {
    writer: W,
    prompt: String,
    echo_mode: EchoMode,
    cursor_left: usize,
    cursor_top: usize,
    width: usize,
    height: usize,
}

impl AnsiSurface<Stdout> {
    /// Use the real terminal size and the real cursor position. Raw mode has to be
    /// enabled before calling this, otherwise the cursor position can't be read.
    pub fn try_new_stdout(prompt: impl Into<String>) -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        let (left, top) = crossterm::cursor::position()?;
        Ok(Self::new(
            io::stdout(),
            prompt,
            (usize::from(width), usize::from(height)),
            (usize::from(left), usize::from(top)),
        ))
    }
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(
        writer: W,
        prompt: impl Into<String>,
        (width, height): (usize, usize),
        (left, top): (usize, usize),
    ) -> Self {
        Self {
            writer,
            prompt: prompt.into(),
            echo_mode: EchoMode::default(),
            cursor_left: left,
            cursor_top: top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_echo_mode(mut self, echo_mode: EchoMode) -> Self {
        self.echo_mode = echo_mode;
        self
    }

    /// Queue `output`, which occupies `cell_count` cells, and advance the tracked cursor
    /// according to the wrap contract.
    fn print(&mut self, output: &str, cell_count: usize) -> io::Result<()> {
        if cell_count == 0 {
            return ok!();
        }

        self.writer.queue(Print(output))?;

        let width = self.width.max(1);
        let linear = self.cursor_top * width + self.cursor_left + cell_count;
        self.cursor_left = linear % width;
        self.cursor_top = (linear / width).min(self.height.saturating_sub(1));

        // Filling the last column leaves the terminal in its pending wrap state. Move to
        // the start of the next row, where the wrap contract says the cursor is.
        if self.cursor_left == 0 {
            self.writer.queue(Print("\r\n"))?;
        }

        ok!()
    }
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

impl<W: Write> TerminalSurface for AnsiSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.writer
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        self.cursor_left = 0;
        self.cursor_top = 0;
        ok!()
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        let prompt = self.prompt.clone();
        self.print(&prompt, prompt.chars().count())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let output = self.echo_mode.apply(text);
        self.print(&output, text.chars().count())
    }

    fn erase(&mut self, count: usize) -> io::Result<()> {
        self.print(&" ".repeat(count), count)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        let already_wrapped = !text.is_empty() && self.cursor_left == 0;
        if !already_wrapped {
            self.writer.queue(Print("\r\n"))?;
            self.cursor_left = 0;
            self.cursor_top = (self.cursor_top + 1).min(self.height.saturating_sub(1));
        }
        ok!()
    }

    fn cursor_left(&self) -> usize { self.cursor_left }

    fn cursor_top(&self) -> usize { self.cursor_top }

    fn buffer_width(&self) -> usize { self.width }

    fn buffer_height(&self) -> usize { self.height }

    fn set_cursor_position(&mut self, left: usize, top: usize) -> io::Result<()> {
        self.cursor_left = left.min(self.width.saturating_sub(1));
        self.cursor_top = top.min(self.height.saturating_sub(1));
        self.writer
            .queue(MoveTo(to_u16(self.cursor_left), to_u16(self.cursor_top)))?;
        ok!()
    }

    fn set_buffer_size(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.width = width;
        self.height = height;
        ok!()
    }

    fn flush(&mut self) -> io::Result<()> { self.writer.flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdoutMock;
    use pretty_assertions::assert_eq;

    fn surface(stdout_mock: &StdoutMock, width: usize) -> AnsiSurface<StdoutMock> {
        AnsiSurface::new(stdout_mock.clone(), "> ", (width, 4), (0, 0))
    }

    #[test]
    fn test_write_tracks_cursor() {
        let stdout_mock = StdoutMock::default();
        let mut surface = surface(&stdout_mock, 10);

        surface.write_prompt().unwrap();
        surface.write("abc").unwrap();
        surface.flush().unwrap();

        assert_eq!((surface.cursor_left(), surface.cursor_top()), (5, 0));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "> abc");
    }

    #[test]
    fn test_write_to_last_column_moves_to_next_row() {
        let stdout_mock = StdoutMock::default();
        let mut surface = surface(&stdout_mock, 5);

        surface.write("abcde").unwrap();
        surface.flush().unwrap();

        assert_eq!((surface.cursor_left(), surface.cursor_top()), (0, 1));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "abcde\r\n");
    }

    #[test]
    fn test_write_scrolls_at_bottom() {
        let stdout_mock = StdoutMock::default();
        let mut surface = surface(&stdout_mock, 5);

        surface.set_cursor_position(3, 3).unwrap();
        surface.write("abcd").unwrap();

        assert_eq!((surface.cursor_left(), surface.cursor_top()), (2, 3));
    }

    #[test]
    fn test_masked_echo() {
        let stdout_mock = StdoutMock::default();
        let mut surface = surface(&stdout_mock, 10).with_echo_mode(EchoMode::password());

        surface.write_prompt().unwrap();
        surface.write("pw").unwrap();
        surface.erase(2).unwrap();
        surface.flush().unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "> **  "
        );
        assert_eq!(surface.cursor_left(), 6);
    }

    #[test]
    fn test_clear_and_write_line() {
        let stdout_mock = StdoutMock::default();
        let mut surface = surface(&stdout_mock, 10);

        surface.write("abc").unwrap();
        surface.clear().unwrap();
        assert_eq!((surface.cursor_left(), surface.cursor_top()), (0, 0));

        surface.write_line("xy").unwrap();
        assert_eq!((surface.cursor_left(), surface.cursor_top()), (0, 1));

        // Already at the start of a row, so no extra blank row.
        surface.write_line("0123456789").unwrap();
        assert_eq!((surface.cursor_left(), surface.cursor_top()), (0, 2));
    }
}
