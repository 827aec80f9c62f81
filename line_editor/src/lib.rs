// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_line_editor`
//!
//! An in-process interactive line editor. It turns a stream of raw key events into an
//! edited line of text, and gives you the shell style editing that users expect:
//!
//! - Cursor motion (character, word, start and end of line).
//! - Kill style deletes (<kbd>Ctrl+U</kbd>, <kbd>Ctrl+K</kbd>, <kbd>Ctrl+W</kbd>).
//! - Case transforms (<kbd>Alt+C</kbd>, <kbd>Alt+U</kbd>, <kbd>Alt+L</kbd>) and
//!   transpose (<kbd>Ctrl+T</kbd>).
//! - Recall of previously accepted lines (history browsing).
//! - Cyclable tab completion (<kbd>Tab</kbd> and <kbd>Shift+Tab</kbd>).
//!
//! All of this happens while the physical terminal cursor stays correctly positioned as
//! the logical text wraps across a fixed width display.
//!
//! # Mental model
//!
//! There are two coordinate systems that have to stay in sync at all times:
//!
//! 1. The logical offset into the one dimensional text buffer ([`LineBuffer`]).
//! 2. The physical `(column, row)` position on the wrapped terminal surface
//!    ([`TerminalSurface`]).
//!
//! Every mutation goes through [`LineBuffer`], which recomputes the physical cursor from
//! the logical offset and the width that the surface reports. The physical position is
//! never stored independently.
//!
//! ```text
//! Session read loop ──▶ KeyHandler::handle(event)
//!                           │
//!                           ├─▶ KeyBindingTable lookup (KeyDescriptor ▶ EditAction)
//!                           │
//!                           └─▶ LineBuffer mutation ──▶ TerminalSurface writes
//! ```
//!
//! # Key bindings
//!
//! | Keys                                      | Action                                  |
//! |-------------------------------------------|-----------------------------------------|
//! | <kbd>Left</kbd>, <kbd>Ctrl+B</kbd>        | Move left                               |
//! | <kbd>Right</kbd>, <kbd>Ctrl+F</kbd>       | Move right                              |
//! | <kbd>Home</kbd>, <kbd>Ctrl+A</kbd>        | Move to start of line                   |
//! | <kbd>End</kbd>, <kbd>Ctrl+E</kbd>         | Move to end of line                     |
//! | <kbd>Backspace</kbd>, <kbd>Ctrl+H</kbd>   | Delete before cursor                    |
//! | <kbd>Delete</kbd>, <kbd>Ctrl+D</kbd>      | Delete at cursor                        |
//! | <kbd>Ctrl+L</kbd>                         | Clear display, rewrite prompt           |
//! | <kbd>Esc</kbd>                            | Clear line                              |
//! | <kbd>Up</kbd>, <kbd>Ctrl+P</kbd>          | Older history entry                     |
//! | <kbd>Down</kbd>, <kbd>Ctrl+N</kbd>        | Newer history entry                     |
//! | <kbd>Ctrl+U</kbd>                         | Delete from start of line to cursor     |
//! | <kbd>Ctrl+K</kbd>                         | Delete from cursor to end of line       |
//! | <kbd>Ctrl+W</kbd>                         | Delete previous word                    |
//! | <kbd>Ctrl+T</kbd>                         | Transpose characters                    |
//! | <kbd>Ctrl+Left</kbd>, <kbd>Alt+B</kbd>    | One word backward                       |
//! | <kbd>Ctrl+Right</kbd>, <kbd>Alt+F</kbd>   | One word forward                        |
//! | <kbd>Alt+C</kbd>                          | Capitalize character, go to end of word |
//! | <kbd>Alt+U</kbd>                          | Upper case to end of word               |
//! | <kbd>Alt+L</kbd>                          | Lower case to end of word               |
//! | <kbd>Tab</kbd>                            | Start or advance completion             |
//! | <kbd>Shift+Tab</kbd>                      | Cycle completion backward               |
//!
//! The <kbd>Ctrl</kbd> letter aliases for motion and history (`A`, `E`, `B`, `F`, `P`,
//! `N`) are only bound when the `emacs` feature (on by default) is enabled.
//!
//! # How to use this crate
//!
//! For most use cases [`ReadlineContext::read_line()`] is all you need. It puts the
//! terminal in raw mode, reads one line from the user, and restores the terminal.
//!
//! ```no_run
//! use r3bl_line_editor::{CompletionProvider, ReadlineContext};
//!
//! struct GitCompletions;
//!
//! impl CompletionProvider for GitCompletions {
//!     fn get_suggestions(&self, text: &str, _start_offset: usize) -> Option<Vec<String>> {
//!         text.starts_with("git ").then(|| {
//!             ["init", "clone", "pull", "push"].map(String::from).to_vec()
//!         })
//!     }
//! }
//!
//! # async fn run() -> miette::Result<()> {
//! let mut context = ReadlineContext::default()
//!     .with_history_enabled(true)
//!     .with_completion_provider(GitCompletions);
//! let line = context.read_line("(prompt)> ", "").await?;
//! println!("{line}");
//! # Ok(())
//! # }
//! ```
//!
//! If you want to supply your own terminal (for testing, or to render into something
//! other than `stdout`), implement [`TerminalSurface`] and call
//! [`ReadlineContext::read()`] with your own input stream. The [`test_fixtures`] module
//! has a [`SurfaceMock`] that does exactly this with a virtual character grid.
//!
//! # Logging
//!
//! The crate logs with [`tracing`]. Use [`try_initialize_logging_global()`] with a
//! [`TracingConfig`] to send the output to a file (recommended, since the terminal is in
//! raw mode while a line is being read), `stderr`, or `stdout`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod decl_macros;
pub mod key_binding;
pub mod key_handler;
pub mod key_input;
pub mod line_buffer;
pub mod log;
pub mod readline_history;
pub mod session;
pub mod terminal_surface;
pub mod test_fixtures;

// Re-export the public API.
pub use key_binding::*;
pub use key_handler::*;
pub use key_input::*;
pub use line_buffer::*;
pub use log::*;
pub use readline_history::*;
pub use session::*;
pub use terminal_surface::*;
pub use test_fixtures::*;

// Type aliases.
use futures_core::Stream;
use std::pin::Pin;

pub type CrosstermEventResult = Result<crossterm::event::Event, std::io::Error>;

pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T>>>;

pub type StdMutex<T> = std::sync::Mutex<T>;

// Constants.
pub const HISTORY_SIZE_MAX: usize = 1_000;
