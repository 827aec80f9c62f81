// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;

/// Why a read session ended without a line.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ReadlineError {
    /// The terminal surface or the input stream failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    Io(#[from] io::Error),

    /// The user pressed <kbd>Ctrl+C</kbd>.
    #[error("Read was interrupted")]
    #[diagnostic(code(r3bl_line_editor::interrupted))]
    Interrupted,

    /// The input stream ended before <kbd>Enter</kbd> was pressed.
    #[error("Input closed before the line was accepted")]
    #[diagnostic(
        code(r3bl_line_editor::input_closed),
        help("This usually means stdin was closed, or a test input stream ran out")
    )]
    InputClosed,
}
