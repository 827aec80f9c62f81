// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Key, KeyEvent, ModifierKeysMask, SpecialKey};
use std::fmt::{Display, Formatter, Result};

/// Normalized lookup key for the [`crate::KeyBindingTable`].
///
/// Two [`KeyEvent`]s with the same key identity and the same Control / Alt / Shift
/// combination always produce equal descriptors. The literal character plays no part.
///
/// If no modifier is held, or if any modifier outside Control / Alt / Shift is held
/// (Super, Hyper, Meta), the descriptor is the key identity alone. The string form is
/// the modifier names (in the order Control, Alt, Shift) followed by the key identity,
/// eg: `ControlA`, `AltB`, `ShiftTab`, `ControlLeftArrow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyDescriptor {
    pub key: Key,
    pub mask: ModifierKeysMask,
}

impl KeyDescriptor {
    #[must_use]
    pub fn new(mask: ModifierKeysMask, key: impl Into<Key>) -> Self {
        let mask = if mask.is_meta() {
            ModifierKeysMask::new()
        } else {
            mask
        };
        Self {
            key: key.into(),
            mask,
        }
    }

    #[must_use]
    pub fn plain(key: impl Into<Key>) -> Self { Self::new(ModifierKeysMask::new(), key) }

    /// `Control` + letter. The letter's case is ignored.
    #[must_use]
    pub fn ctrl(ch: char) -> Self {
        Self::new(ModifierKeysMask::new().with_ctrl(), Key::from_char(ch))
    }

    /// `Alt` + letter. The letter's case is ignored.
    #[must_use]
    pub fn alt(ch: char) -> Self {
        Self::new(ModifierKeysMask::new().with_alt(), Key::from_char(ch))
    }

    #[must_use]
    pub fn ctrl_special(special_key: SpecialKey) -> Self {
        Self::new(ModifierKeysMask::new().with_ctrl(), special_key)
    }

    #[must_use]
    pub fn shift_special(special_key: SpecialKey) -> Self {
        Self::new(ModifierKeysMask::new().with_shift(), special_key)
    }
}

impl From<&KeyEvent> for KeyDescriptor {
    fn from(event: &KeyEvent) -> Self { Self::new(event.mask, event.key) }
}

impl Display for KeyDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.mask.is_ctrl() {
            write!(f, "Control")?;
        }
        if self.mask.is_alt() {
            write!(f, "Alt")?;
        }
        if self.mask.is_shift() {
            write!(f, "Shift")?;
        }
        write!(f, "{}", self.key)
    }
}
