// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::KeyModifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
    /// Any modifier other than Shift, Control or Alt (Super, Hyper, Meta).
    pub meta_key_state: KeyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl From<bool> for KeyState {
    fn from(pressed: bool) -> Self {
        if pressed {
            KeyState::Pressed
        } else {
            KeyState::NotPressed
        }
    }
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    #[must_use]
    pub fn is_shift(&self) -> bool { self.shift_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_ctrl(&self) -> bool { self.ctrl_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_alt(&self) -> bool { self.alt_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_meta(&self) -> bool { self.meta_key_state == KeyState::Pressed }

    /// `true` when Control is the only modifier held.
    #[must_use]
    pub fn is_ctrl_only(&self) -> bool { *self == Self::new().with_ctrl() }

    /// `true` when Alt is the only modifier held.
    #[must_use]
    pub fn is_alt_only(&self) -> bool { *self == Self::new().with_alt() }
}

impl From<KeyModifiers> for ModifierKeysMask {
    /// Difference in meaning between `intersects` and `contains`:
    /// - `intersects` -> means that the given bit shows up in your variable, but it might
    ///   contain other bits.
    /// - `contains` -> means that your variable ONLY contains these bits.
    /// - Docs: <https://docs.rs/bitflags/latest/bitflags/index.html>
    fn from(other: KeyModifiers) -> ModifierKeysMask {
        ModifierKeysMask {
            shift_key_state: other.intersects(KeyModifiers::SHIFT).into(),
            ctrl_key_state: other.intersects(KeyModifiers::CONTROL).into(),
            alt_key_state: other.intersects(KeyModifiers::ALT).into(),
            meta_key_state: other
                .intersects(KeyModifiers::SUPER | KeyModifiers::HYPER | KeyModifiers::META)
                .into(),
        }
    }
}
