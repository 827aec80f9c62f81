// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminalSurface;
use std::io;

/// The line being edited, plus the logical cursor offset into it.
///
/// The physical cursor is never stored here. Every operation that moves the logical
/// cursor also moves the physical cursor of the [`TerminalSurface`] it is given, by
/// applying the wrap contract of that trait to the surface's reported width. So the two
/// coordinate systems can only drift apart if the surface is changed behind the
/// buffer's back.
///
/// Offsets are in [char]s, and each char is assumed to occupy exactly one cell.
///
/// The methods are split across files:
/// - Queries live here.
/// - [`super::cursor`] has the motions.
/// - [`super::edit`] has the mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    pub(super) chars: Vec<char>,
    pub(super) cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn text(&self) -> String { self.chars.iter().collect() }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    /// Logical offset, always in `0..=len()`.
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> { self.chars.get(offset).copied() }

    #[must_use]
    pub fn is_start_of_line(&self) -> bool { self.cursor == 0 }

    #[must_use]
    pub fn is_end_of_line(&self) -> bool { self.cursor == self.len() }

    /// At the end, or on the last character.
    #[must_use]
    pub fn is_last_char(&self) -> bool { self.cursor + 1 >= self.len() }

    /// Past the end, or on a space.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.char_at(self.cursor).is_none_or(|ch| ch == ' ')
    }
}

/// The physical cursor as a single offset from the top left corner of the display.
pub(super) fn linear_position(surface: &dyn TerminalSurface) -> usize {
    surface.cursor_top() * surface.buffer_width() + surface.cursor_left()
}

pub(super) fn set_linear_position(
    surface: &mut dyn TerminalSurface,
    linear: usize,
) -> io::Result<()> {
    let width = surface.buffer_width().max(1);
    surface.set_cursor_position(linear % width, linear / width)
}

/// After writing `written` cells starting at `(left, top)`, put the physical cursor back
/// at `(left, top)`. If the write scrolled the display, that position has moved up by the
/// number of rows scrolled.
pub(super) fn restore_after_write(
    surface: &mut dyn TerminalSurface,
    (left, top): (usize, usize),
    written: usize,
) -> io::Result<()> {
    let width = surface.buffer_width().max(1);
    let expected_row = (top * width + left + written) / width;
    let rows_scrolled = expected_row.saturating_sub(surface.cursor_top());
    surface.set_cursor_position(left, top.saturating_sub(rows_scrolled))
}
