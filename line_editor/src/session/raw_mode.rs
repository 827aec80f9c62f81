// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::terminal;
use std::io;

/// Puts the terminal in raw mode for as long as it is alive. Drop restores cooked mode.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn try_new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!(message = "raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => tracing::debug!(message = "raw mode disabled"),
            Err(error) => {
                tracing::warn!(message = "failed to disable raw mode", error = ?error);
            }
        }
    }
}
