// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line buffer and cursor model.
//!
//! Every change to the line, and every move of the logical cursor, goes through
//! [`LineBuffer`], which keeps the physical cursor of the [`TerminalSurface`] in sync.
//!
//! | Module   | Responsibility                                                     |
//! |----------|--------------------------------------------------------------------|
//! | `core`   | [`LineBuffer`] struct, queries, linear position helpers            |
//! | `cursor` | Single step and multi step motions, with wrapping across rows      |
//! | `edit`   | Insert, delete, kill, replace and redraw, with tail reflow         |
//!
//! # Multi step motions
//!
//! A left step from column `0` lands on the last column of the previous row, and a
//! right step from the last column lands on column `0` of the next row. In both cases
//! the linear position (`top * width + left`) changes by exactly one, so moving `n`
//! chars is the same as moving the linear position by `n`. That's how
//! [`LineBuffer::move_to`] gets the same result as repeated stepping in one
//! repositioning.
//!
//! [`TerminalSurface`]: crate::TerminalSurface

// Private modules organized by functional responsibility.
mod core;
mod cursor;
mod edit;

// Public re-exports (expose stable API).
pub use core::*;
