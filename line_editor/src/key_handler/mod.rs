// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editing engine.
//!
//! [`KeyHandler`] consumes one [`KeyEvent`] at a time. Each event is normalized into a
//! [`KeyDescriptor`], looked up in the [`KeyBindingTable`], and the bound
//! [`EditAction`] is run against the [`LineBuffer`]. Keys without a binding self-insert
//! their literal character (if they have one).
//!
//! | Module        | Responsibility                                                  |
//! |---------------|-----------------------------------------------------------------|
//! | `core`        | [`KeyHandler`] struct, dispatch, accepting the line             |
//! | `actions`     | Motion, kill, transpose and case actions, word boundaries       |
//! | `completion`  | [`CompletionProvider`], [`CompletionState`], Tab cycling        |
//! | `history_nav` | Browsing the history with Up / Down                             |
//!
//! # States
//!
//! The engine is either *normal* or *completing* (a [`CompletionState`] is present).
//! Before every key is dispatched, any key other than <kbd>Tab</kbd> or
//! <kbd>Shift+Tab</kbd> drops the completion state. Browsing history is not a state of
//! its own: it just replaces the line, and the next key edits the new content.
//!
//! Every boundary condition (empty line, cursor at an edge, empty history, no
//! completions) is a silent no-op. The only errors are I/O errors from the surface.
//!
//! [`KeyEvent`]: crate::KeyEvent
//! [`KeyDescriptor`]: crate::KeyDescriptor
//! [`KeyBindingTable`]: crate::KeyBindingTable
//! [`EditAction`]: crate::EditAction
//! [`LineBuffer`]: crate::LineBuffer

// Private modules organized by functional responsibility.
mod actions;
mod completion;
mod core;
mod history_nav;

// Public re-exports (expose stable API).
pub use completion::*;
pub use core::*;
