// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup. Logging is **disabled** until one of the `try_initialize_logging_*`
//! functions is called.
//!
//! While a line is being read the terminal is in raw mode, and anything printed to
//! `stdout` lands in the middle of the line being edited. So a log file is the
//! preferred destination.

// Attach.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
