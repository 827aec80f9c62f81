// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::{LineBuffer, linear_position, set_linear_position};
use crate::{TerminalSurface, ok};
use std::io;

impl LineBuffer {
    /// No-op at the start of the line.
    pub fn move_left(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        if self.is_start_of_line() {
            return ok!();
        }

        let (left, top) = (surface.cursor_left(), surface.cursor_top());
        if left == 0 {
            surface.set_cursor_position(
                surface.buffer_width().saturating_sub(1),
                top.saturating_sub(1),
            )?;
        } else {
            surface.set_cursor_position(left - 1, top)?;
        }

        self.cursor -= 1;
        ok!()
    }

    /// No-op at the end of the line.
    pub fn move_right(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        if self.is_end_of_line() {
            return ok!();
        }

        let (left, top) = (surface.cursor_left(), surface.cursor_top());
        if left + 1 >= surface.buffer_width() {
            surface.set_cursor_position(0, top + 1)?;
        } else {
            surface.set_cursor_position(left + 1, top)?;
        }

        self.cursor += 1;
        ok!()
    }

    pub fn move_home(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        self.move_to(surface, 0)
    }

    pub fn move_end(&mut self, surface: &mut dyn TerminalSurface) -> io::Result<()> {
        self.move_to(surface, self.len())
    }

    /// Move to `offset` (clamped to the line) in a single repositioning. The result is
    /// the same as repeated [`Self::move_left`] or [`Self::move_right`].
    pub fn move_to(
        &mut self,
        surface: &mut dyn TerminalSurface,
        offset: usize,
    ) -> io::Result<()> {
        let offset = offset.min(self.len());
        if offset == self.cursor {
            return ok!();
        }

        let linear = linear_position(surface);
        let new_linear = if offset > self.cursor {
            linear + (offset - self.cursor)
        } else {
            linear.saturating_sub(self.cursor - offset)
        };
        set_linear_position(surface, new_linear)?;

        self.cursor = offset;
        ok!()
    }
}

#[cfg(test)]
mod tests {
    use crate::{LineBuffer, SurfaceMock, TerminalSurface};
    use pretty_assertions::assert_eq;

    /// Prompt `"> "` on a display that is 5 columns wide and tall enough to never
    /// scroll, with `text` typed in.
    fn typed(text: &str) -> (LineBuffer, SurfaceMock) {
        let mut surface = SurfaceMock::new("> ", (5, 10));
        surface.write_prompt().unwrap();
        let mut buffer = LineBuffer::new();
        buffer.write_str(&mut surface, text).unwrap();
        (buffer, surface)
    }

    #[test]
    fn test_move_left_wraps_to_previous_row() {
        let (mut buffer, mut surface) = typed("abcdef");
        assert_eq!(surface.cursor(), (3, 1));

        for _ in 0..3 {
            buffer.move_left(&mut surface).unwrap();
        }
        assert_eq!(surface.cursor(), (0, 1));
        assert_eq!(buffer.cursor(), 3);

        buffer.move_left(&mut surface).unwrap();
        assert_eq!(surface.cursor(), (4, 0));
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_move_right_wraps_to_next_row() {
        let (mut buffer, mut surface) = typed("abcdef");
        buffer.move_home(&mut surface).unwrap();
        assert_eq!(surface.cursor(), (2, 0));

        for _ in 0..3 {
            buffer.move_right(&mut surface).unwrap();
        }
        assert_eq!(surface.cursor(), (0, 1));
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_moves_are_clamped() {
        let (mut buffer, mut surface) = typed("ab");
        buffer.move_right(&mut surface).unwrap();
        assert_eq!((buffer.cursor(), surface.cursor()), (2, (4, 0)));

        buffer.move_home(&mut surface).unwrap();
        buffer.move_left(&mut surface).unwrap();
        assert_eq!((buffer.cursor(), surface.cursor()), (0, (2, 0)));

        buffer.move_to(&mut surface, 99).unwrap();
        assert_eq!((buffer.cursor(), surface.cursor()), (2, (4, 0)));
    }

    #[test]
    fn test_move_to_matches_repeated_steps() {
        let text = "the quick brown fox";
        for target in 0..=text.len() {
            let (mut stepped, mut stepped_surface) = typed(text);
            while stepped.cursor() > target {
                stepped.move_left(&mut stepped_surface).unwrap();
            }

            let (mut jumped, mut jumped_surface) = typed(text);
            jumped.move_to(&mut jumped_surface, target).unwrap();

            assert_eq!(jumped.cursor(), stepped.cursor());
            assert_eq!(jumped_surface.cursor(), stepped_surface.cursor());

            // And back out to the end.
            stepped.move_end(&mut stepped_surface).unwrap();
            while jumped.cursor() < text.len() {
                jumped.move_right(&mut jumped_surface).unwrap();
            }
            assert_eq!(jumped_surface.cursor(), stepped_surface.cursor());
        }
    }
}
