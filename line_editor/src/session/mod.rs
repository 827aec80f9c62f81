// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The session read loop: one call reads one line.
//!
//! [`ReadlineContext`] is constructed by the host and passed to every read. It owns the
//! [`History`], the (optional) [`CompletionProvider`], and the [`KeyBindingTable`].
//! Nothing here is global, so a host can have as many independent contexts as it
//! likes, as long as only one session per terminal is active at a time.
//!
//! [`History`]: crate::History
//! [`CompletionProvider`]: crate::CompletionProvider
//! [`KeyBindingTable`]: crate::KeyBindingTable

// Attach.
pub mod raw_mode;
pub mod readline_context;
pub mod readline_error;

// Re-export.
pub use raw_mode::*;
pub use readline_context::*;
pub use readline_error::*;
