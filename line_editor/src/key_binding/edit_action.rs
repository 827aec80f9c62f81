// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// Every editing action that a key can be bound to. Keys that aren't bound to anything
/// self-insert their literal character instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EditAction {
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// Backspace.
    DeleteBefore,
    DeleteAt,
    /// Clear the line, clear the display, and rewrite the prompt.
    ClearScreen,
    ClearLine,
    PreviousHistory,
    NextHistory,
    /// Kill from the start of the line to the cursor.
    DeleteToStart,
    /// Kill from the cursor to the end of the line.
    DeleteToEnd,
    DeletePreviousWord,
    TransposeChars,
    WordBackward,
    WordForward,
    CapitalizeChar,
    UppercaseWord,
    LowercaseWord,
    CompleteNext,
    CompletePrevious,
}
