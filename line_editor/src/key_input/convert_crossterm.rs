// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyEvent, ModifierKeysMask, SpecialKey};
use crossterm::event::{KeyCode, KeyEventKind};
use miette::Diagnostic;

/// Convert a [`crossterm::event::KeyEvent`] into a [`KeyEvent`].
///
/// Returns [None] for key releases and for keys the editor has no identity for (media
/// keys, lone modifier keys, caps lock, etc).
///
/// `Press` and `Repeat` are both accepted, so holding down a key repeats its action. In
/// terminals that do NOT support the [kitty keyboard
/// protocol](https://sw.kovidgoyal.net/kitty/keyboard-protocol/), in other words most
/// terminals, the `kind` is always `Press`.
#[must_use]
pub fn convert_key_event(event: &crossterm::event::KeyEvent) -> Option<KeyEvent> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    let mask = ModifierKeysMask::from(event.modifiers);

    let special = |special_key| Some(KeyEvent::from_special(mask, special_key));

    match event.code {
        KeyCode::Char(ch) => Some(KeyEvent::from_char(mask, ch)),
        KeyCode::F(number) => Some(KeyEvent::from_function_key(mask, number)),
        KeyCode::Left => special(SpecialKey::LeftArrow),
        KeyCode::Right => special(SpecialKey::RightArrow),
        KeyCode::Up => special(SpecialKey::UpArrow),
        KeyCode::Down => special(SpecialKey::DownArrow),
        KeyCode::Home => special(SpecialKey::Home),
        KeyCode::End => special(SpecialKey::End),
        KeyCode::Backspace => special(SpecialKey::Backspace),
        KeyCode::Delete => special(SpecialKey::Delete),
        KeyCode::Esc => special(SpecialKey::Escape),
        KeyCode::Enter => special(SpecialKey::Enter),
        KeyCode::Tab => special(SpecialKey::Tab),
        // Terminals report Shift+Tab as its own key code.
        KeyCode::BackTab => Some(KeyEvent::from_special(
            mask.with_shift(),
            SpecialKey::Tab,
        )),
        KeyCode::Insert => special(SpecialKey::Insert),
        KeyCode::PageUp => special(SpecialKey::PageUp),
        KeyCode::PageDown => special(SpecialKey::PageDown),
        _ => None,
    }
}

/// A crossterm key event that [`convert_key_event`] drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Unsupported key event: {code:?} ({kind:?})")]
#[diagnostic(code(r3bl_line_editor::unsupported_key_event))]
pub struct UnsupportedKeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
}

impl TryFrom<crossterm::event::KeyEvent> for KeyEvent {
    type Error = UnsupportedKeyEvent;

    fn try_from(event: crossterm::event::KeyEvent) -> Result<Self, Self::Error> {
        convert_key_event(&event).ok_or(UnsupportedKeyEvent {
            code: event.code,
            kind: event.kind,
        })
    }
}
