// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Key, ModifierKeysMask, SpecialKey};

/// Examples.
///
/// ```
/// use r3bl_line_editor::*;
///
/// let a = key_event!(@char 'a');
/// assert_eq!(a.literal, Some('a'));
///
/// let ctrl_a = key_event!(@char ModifierKeysMask::new().with_ctrl(), 'a');
/// assert_eq!(ctrl_a.literal, None);
///
/// let shift_tab = key_event!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Tab);
/// assert_eq!(KeyDescriptor::from(&shift_tab).to_string(), "ShiftTab");
/// ```
#[macro_export]
macro_rules! key_event {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyEvent::from_char($crate::ModifierKeysMask::new(), $arg_char)
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyEvent::from_char($arg_modifiers, $arg_char)
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyEvent::from_special($crate::ModifierKeysMask::new(), $arg_special)
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyEvent::from_special($arg_modifiers, $arg_special)
    };
}

/// A single key press as the editor sees it: which key, which modifiers, and the
/// character it types (if any).
///
/// `literal` is absent for navigation keys, for control characters, and for chords
/// where the only modifier is Control or Alt (those are commands, not text). It is the
/// only thing that self-insert ever writes into the line.
///
/// Please use the [`crate::key_event!`] macro instead of building this by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub mask: ModifierKeysMask,
    pub literal: Option<char>,
}

impl KeyEvent {
    #[must_use]
    pub fn from_char(mask: ModifierKeysMask, ch: char) -> Self {
        let is_command_chord = mask.is_ctrl_only() || mask.is_alt_only();
        let literal = (!is_command_chord && !ch.is_control()).then_some(ch);
        Self {
            key: Key::from_char(ch),
            mask,
            literal,
        }
    }

    #[must_use]
    pub fn from_special(mask: ModifierKeysMask, special_key: SpecialKey) -> Self {
        Self {
            key: Key::SpecialKey(special_key),
            mask,
            literal: None,
        }
    }

    #[must_use]
    pub fn from_function_key(mask: ModifierKeysMask, number: u8) -> Self {
        Self {
            key: Key::FunctionKey(number),
            mask,
            literal: None,
        }
    }
}
