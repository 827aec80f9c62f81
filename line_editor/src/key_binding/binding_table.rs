// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditAction, KeyDescriptor, SpecialKey};
use std::collections::HashMap;

/// Maps a [`KeyDescriptor`] to the [`EditAction`] it triggers. Built once per read
/// session. Hosts can [`bind`](Self::bind) and [`unbind`](Self::unbind) keys before
/// handing the table to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindingTable {
    bindings: HashMap<KeyDescriptor, EditAction>,
}

impl Default for KeyBindingTable {
    fn default() -> Self { Self::new() }
}

impl KeyBindingTable {
    /// The canonical bindings.
    #[must_use]
    pub fn new() -> Self {
        use SpecialKey::{Backspace, Delete, DownArrow, End, Escape, Home, LeftArrow,
                         RightArrow, Tab, UpArrow};

        let mut it = Self {
            bindings: HashMap::new(),
        };

        // Motion.
        it.bind(KeyDescriptor::plain(LeftArrow), EditAction::MoveLeft);
        it.bind(KeyDescriptor::plain(RightArrow), EditAction::MoveRight);
        it.bind(KeyDescriptor::plain(Home), EditAction::MoveHome);
        it.bind(KeyDescriptor::plain(End), EditAction::MoveEnd);
        it.bind(KeyDescriptor::ctrl_special(LeftArrow), EditAction::WordBackward);
        it.bind(KeyDescriptor::ctrl_special(RightArrow), EditAction::WordForward);
        it.bind(KeyDescriptor::alt('b'), EditAction::WordBackward);
        it.bind(KeyDescriptor::alt('f'), EditAction::WordForward);

        // Deletion.
        it.bind(KeyDescriptor::plain(Backspace), EditAction::DeleteBefore);
        it.bind(KeyDescriptor::ctrl('h'), EditAction::DeleteBefore);
        it.bind(KeyDescriptor::plain(Delete), EditAction::DeleteAt);
        it.bind(KeyDescriptor::ctrl('d'), EditAction::DeleteAt);
        it.bind(KeyDescriptor::plain(Escape), EditAction::ClearLine);
        it.bind(KeyDescriptor::ctrl('l'), EditAction::ClearScreen);
        it.bind(KeyDescriptor::ctrl('u'), EditAction::DeleteToStart);
        it.bind(KeyDescriptor::ctrl('k'), EditAction::DeleteToEnd);
        it.bind(KeyDescriptor::ctrl('w'), EditAction::DeletePreviousWord);

        // Transforms.
        it.bind(KeyDescriptor::ctrl('t'), EditAction::TransposeChars);
        it.bind(KeyDescriptor::alt('c'), EditAction::CapitalizeChar);
        it.bind(KeyDescriptor::alt('u'), EditAction::UppercaseWord);
        it.bind(KeyDescriptor::alt('l'), EditAction::LowercaseWord);

        // History.
        it.bind(KeyDescriptor::plain(UpArrow), EditAction::PreviousHistory);
        it.bind(KeyDescriptor::plain(DownArrow), EditAction::NextHistory);

        // Completion.
        it.bind(KeyDescriptor::plain(Tab), EditAction::CompleteNext);
        it.bind(KeyDescriptor::shift_special(Tab), EditAction::CompletePrevious);

        #[cfg(feature = "emacs")]
        {
            it.bind(KeyDescriptor::ctrl('a'), EditAction::MoveHome);
            it.bind(KeyDescriptor::ctrl('e'), EditAction::MoveEnd);
            it.bind(KeyDescriptor::ctrl('b'), EditAction::MoveLeft);
            it.bind(KeyDescriptor::ctrl('f'), EditAction::MoveRight);
            it.bind(KeyDescriptor::ctrl('p'), EditAction::PreviousHistory);
            it.bind(KeyDescriptor::ctrl('n'), EditAction::NextHistory);
        }

        it
    }

    /// An empty table. Every key self-inserts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Returns the action that was previously bound to `descriptor`, if any.
    pub fn bind(
        &mut self,
        descriptor: KeyDescriptor,
        action: EditAction,
    ) -> Option<EditAction> {
        self.bindings.insert(descriptor, action)
    }

    pub fn unbind(&mut self, descriptor: &KeyDescriptor) -> Option<EditAction> {
        self.bindings.remove(descriptor)
    }

    #[must_use]
    pub fn get(&self, descriptor: &KeyDescriptor) -> Option<EditAction> {
        self.bindings.get(descriptor).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.bindings.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }
}
