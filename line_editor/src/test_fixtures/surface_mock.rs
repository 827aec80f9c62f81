// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EchoMode, TerminalSurface, ok};
use std::io;

/// A [`TerminalSurface`] backed by a virtual grid of characters. It honors the wrap
/// contract exactly (including scrolling at the bottom), so tests can assert both what
/// is on screen and where the physical cursor is.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMock {
    pub rows: Vec<Vec<char>>,
    pub prompt: String,
    pub echo_mode: EchoMode,
    /// How many times the display scrolled up by one row.
    pub scroll_count: usize,
    /// How many times [`TerminalSurface::clear`] was called.
    pub clear_count: usize,
    cursor_left: usize,
    cursor_top: usize,
    width: usize,
    height: usize,
}

impl SurfaceMock {
    /// A blank grid of `width` x `height` (both at least 1), cursor at `(0, 0)`.
    pub fn new(prompt: impl Into<String>, (width, height): (usize, usize)) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            rows: vec![vec![' '; width]; height],
            prompt: prompt.into(),
            echo_mode: EchoMode::default(),
            scroll_count: 0,
            clear_count: 0,
            cursor_left: 0,
            cursor_top: 0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_echo_mode(mut self, echo_mode: EchoMode) -> Self {
        self.echo_mode = echo_mode;
        self
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { (self.cursor_left, self.cursor_top) }

    /// The given row, with trailing blanks removed.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|it| it.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// All the rows joined with `\n`, with trailing blanks and trailing empty rows
    /// removed.
    #[must_use]
    pub fn screen_text(&self) -> String {
        let rows: Vec<String> = (0..self.height).map(|row| self.row_text(row)).collect();
        rows.join("\n").trim_end().to_string()
    }

    fn put_char(&mut self, ch: char) {
        self.rows[self.cursor_top][self.cursor_left] = ch;
        self.cursor_left += 1;
        if self.cursor_left == self.width {
            self.new_line();
        }
    }

    fn new_line(&mut self) {
        self.cursor_left = 0;
        self.cursor_top += 1;
        if self.cursor_top == self.height {
            self.rows.remove(0);
            self.rows.push(vec![' '; self.width]);
            self.cursor_top = self.height - 1;
            self.scroll_count += 1;
        }
    }
}

impl TerminalSurface for SurfaceMock {
    fn clear(&mut self) -> io::Result<()> {
        self.rows = vec![vec![' '; self.width]; self.height];
        self.cursor_left = 0;
        self.cursor_top = 0;
        self.clear_count += 1;
        ok!()
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        let prompt = self.prompt.clone();
        prompt.chars().for_each(|ch| self.put_char(ch));
        ok!()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.echo_mode
            .apply(text)
            .chars()
            .for_each(|ch| self.put_char(ch));
        ok!()
    }

    fn erase(&mut self, count: usize) -> io::Result<()> {
        (0..count).for_each(|_| self.put_char(' '));
        ok!()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        let already_wrapped = !text.is_empty() && self.cursor_left == 0;
        if !already_wrapped {
            self.new_line();
        }
        ok!()
    }

    fn cursor_left(&self) -> usize { self.cursor_left }

    fn cursor_top(&self) -> usize { self.cursor_top }

    fn buffer_width(&self) -> usize { self.width }

    fn buffer_height(&self) -> usize { self.height }

    fn set_cursor_position(&mut self, left: usize, top: usize) -> io::Result<()> {
        self.cursor_left = left.min(self.width - 1);
        self.cursor_top = top.min(self.height - 1);
        ok!()
    }

    fn set_buffer_size(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.width = width.max(1);
        self.height = height.max(1);
        self.rows.resize(self.height, vec![]);
        for row in &mut self.rows {
            row.resize(self.width, ' ');
        }
        self.cursor_left = self.cursor_left.min(self.width - 1);
        self.cursor_top = self.cursor_top.min(self.height - 1);
        ok!()
    }
}
