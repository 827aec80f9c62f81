// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};
use strum_macros::{Display as StrumDisplay, EnumIter};

/// The identity of a key, independent of modifiers and of the character it types.
///
/// Letters are stored in upper case so that `a` and `A` share one identity (the
/// difference lives in [`crate::KeyEvent::literal`] and in the Shift modifier). This is
/// what lets `Ctrl+a` and `Ctrl+A` both resolve to the `ControlA` binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
    FunctionKey(u8),
}

/// Non printable keys. The string form of each variant is exactly the identity that is
/// used to build a [`crate::KeyDescriptor`], eg: `LeftArrow`, `ControlLeftArrow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum SpecialKey {
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Home,
    End,
    Backspace,
    Delete,
    Escape,
    Enter,
    Tab,
    Insert,
    PageUp,
    PageDown,
}

impl Key {
    /// Normalize a typed character into a key identity.
    #[must_use]
    pub fn from_char(ch: char) -> Self { Key::Character(ch.to_ascii_uppercase()) }
}

impl From<SpecialKey> for Key {
    fn from(special_key: SpecialKey) -> Self { Key::SpecialKey(special_key) }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Key::Character(ch) => write!(f, "{ch}"),
            Key::SpecialKey(special_key) => write!(f, "{special_key}"),
            Key::FunctionKey(number) => write!(f, "F{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_letters_share_identity() {
        assert_eq!(Key::from_char('a'), Key::from_char('A'));
        assert_eq!(Key::from_char('1'), Key::Character('1'));
        assert_eq!(Key::from_char('é'), Key::Character('é'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::from_char('b').to_string(), "B");
        assert_eq!(Key::FunctionKey(12).to_string(), "F12");
        assert_eq!(Key::from(SpecialKey::LeftArrow).to_string(), "LeftArrow");
    }

    #[test]
    fn test_special_key_names_have_no_spaces() {
        for special_key in SpecialKey::iter() {
            let name = special_key.to_string();
            assert!(!name.is_empty());
            assert!(!name.contains(' '), "{name}");
        }
    }
}
