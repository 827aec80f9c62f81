// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod async_input_stream_mock;
pub mod stdout_mock;
pub mod surface_mock;

// Re-export.
pub use async_input_stream_mock::*;
pub use stdout_mock::*;
pub use surface_mock::*;
