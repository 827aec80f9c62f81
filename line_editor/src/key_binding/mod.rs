// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod binding_table;
pub mod edit_action;

// Re-export.
pub use binding_table::*;
pub use edit_action::*;
