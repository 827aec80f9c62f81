// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ok;
use std::io;

/// The screen primitives that the editor needs from the host. The core never touches a
/// physical device directly, it only talks to a `&mut dyn TerminalSurface`.
///
/// Coordinates are zero based: `left` is the column and `top` is the row.
///
/// # Wrap contract
///
/// Writing `n` characters from `(left, top)` must leave the cursor at the linear
/// position `top * width + left + n`, ie: column `linear % width` and row
/// `linear / width`. When that row falls below the last row of the display, the
/// display scrolls up and the row is clamped to `height - 1`.
///
/// In particular a write that ends exactly on the last column leaves the cursor at
/// column `0` of the next row (real terminals leave it parked on the last column, so
/// implementations backed by one have to account for this).
///
/// [`crate::LineBuffer`] relies on this contract to keep the logical offset and the
/// physical cursor in sync.
pub trait TerminalSurface {
    /// Clear the whole display and move the cursor to `(0, 0)`.
    fn clear(&mut self) -> io::Result<()>;

    /// Write the prompt at the cursor. The prompt is never masked.
    fn write_prompt(&mut self) -> io::Result<()>;

    /// Write text at the cursor, following the wrap contract.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Overwrite `count` cells with blanks from the cursor, following the wrap contract.
    /// Unlike [`TerminalSurface::write`], the blanks are never masked.
    fn erase(&mut self, count: usize) -> io::Result<()> { self.write(&" ".repeat(count)) }

    /// Write text at the cursor and then move to the start of the next row.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    fn cursor_left(&self) -> usize;

    fn cursor_top(&self) -> usize;

    fn buffer_width(&self) -> usize;

    fn buffer_height(&self) -> usize;

    fn set_cursor_position(&mut self, left: usize, top: usize) -> io::Result<()>;

    fn set_buffer_size(&mut self, width: usize, height: usize) -> io::Result<()>;

    /// Push out anything that has been queued. Called once per handled key.
    fn flush(&mut self) -> io::Result<()> { ok!() }
}

/// How text (but not the prompt) is echoed by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    #[default]
    Plain,
    /// Every character is displayed as the given mask character. Used for passwords.
    Masked(char),
}

pub const DEFAULT_PASSWORD_MASK: char = '*';

impl EchoMode {
    #[must_use]
    pub fn password() -> Self { EchoMode::Masked(DEFAULT_PASSWORD_MASK) }

    /// Apply this echo mode to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match self {
            EchoMode::Plain => text.to_string(),
            EchoMode::Masked(mask) => text.chars().map(|_| *mask).collect(),
        }
    }
}
