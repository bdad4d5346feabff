// SPDX-License-Identifier: GPL-3.0-only

//! Named editor actions.

use crate::editor::buffer::TextBuffer;
use crate::input::NamedKey;

/// An edit applied to a [`TextBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Replace the selection with text, or insert at the caret
    Insert(String),
    /// Delete the selection or the character before the caret
    Backspace,
    /// Delete the selection or the character after the caret
    Delete,
    /// Move the caret to the start
    Home,
    /// Move the caret to the end
    End,
    /// Move the caret one character left
    Left,
    /// Move the caret one character right
    Right,
    /// Select the given character range
    Select { start: usize, end: usize },
}

impl EditorAction {
    /// Creates an insert action.
    pub fn insert(text: impl Into<String>) -> Self {
        EditorAction::Insert(text.into())
    }

    /// Returns true for actions that only move the caret.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            EditorAction::Home | EditorAction::End | EditorAction::Left | EditorAction::Right
        )
    }

    /// Maps a functional key to the action it triggers.
    ///
    /// `tab_text` is what Tab inserts. Keys without an editing meaning
    /// (modifiers, Caps Lock) return `None`.
    pub fn for_key(key: NamedKey, tab_text: &str) -> Option<Self> {
        match key {
            NamedKey::Enter => Some(EditorAction::insert("\n")),
            NamedKey::Tab => Some(EditorAction::insert(tab_text)),
            NamedKey::Backspace => Some(EditorAction::Backspace),
            NamedKey::Delete => Some(EditorAction::Delete),
            NamedKey::ArrowUp => Some(EditorAction::Home),
            NamedKey::ArrowDown => Some(EditorAction::End),
            NamedKey::ArrowLeft => Some(EditorAction::Left),
            NamedKey::ArrowRight => Some(EditorAction::Right),
            _ => None,
        }
    }

    /// Applies the action to a buffer.
    pub fn apply(&self, buffer: &mut TextBuffer) {
        match self {
            EditorAction::Insert(text) => buffer.insert(text),
            EditorAction::Backspace => buffer.backspace(),
            EditorAction::Delete => buffer.delete_forward(),
            EditorAction::Home => buffer.move_home(),
            EditorAction::End => buffer.move_end(),
            EditorAction::Left => buffer.move_left(),
            EditorAction::Right => buffer.move_right(),
            EditorAction::Select { start, end } => buffer.select(*start, *end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functional_key_mapping() {
        assert_eq!(
            EditorAction::for_key(NamedKey::Tab, "    "),
            Some(EditorAction::insert("    "))
        );
        assert_eq!(
            EditorAction::for_key(NamedKey::Enter, "    "),
            Some(EditorAction::insert("\n"))
        );
        assert_eq!(EditorAction::for_key(NamedKey::ArrowUp, ""), Some(EditorAction::Home));
        assert_eq!(EditorAction::for_key(NamedKey::ArrowDown, ""), Some(EditorAction::End));
        assert_eq!(EditorAction::for_key(NamedKey::ControlLeft, ""), None);
        assert_eq!(EditorAction::for_key(NamedKey::CapsLock, ""), None);
    }

    #[test]
    fn apply_sequence() {
        let mut buf = TextBuffer::new();
        for action in [
            EditorAction::insert("abc"),
            EditorAction::Home,
            EditorAction::Right,
            EditorAction::Delete,
            EditorAction::End,
            EditorAction::Backspace,
            EditorAction::insert("\n"),
        ] {
            action.apply(&mut buf);
        }
        assert_eq!(buf.text(), "a\n");
        assert_eq!(buf.caret(), 2);
    }

    #[test]
    fn navigation_classification() {
        assert!(EditorAction::Left.is_navigation());
        assert!(!EditorAction::Backspace.is_navigation());
        assert!(!EditorAction::Select { start: 0, end: 0 }.is_navigation());
    }
}
