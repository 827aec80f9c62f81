// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod convert_crossterm;
pub mod key;
pub mod key_descriptor;
pub mod key_event;
pub mod modifier_keys_mask;

// Re-export.
pub use convert_crossterm::*;
pub use key::*;
pub use key_descriptor::*;
pub use key_event::*;
pub use modifier_keys_mask::*;
