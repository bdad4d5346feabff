// SPDX-License-Identifier: GPL-3.0-only

//! Classification of key identifiers the controller treats specially.
//!
//! Most keys are looked up in the layout table and either type a glyph or
//! are inert. A small set of identifiers carry meaning of their own
//! (modifiers, editing keys, arrows); this module recognises them.
//!
//! Identifiers follow the physical key-code naming used by the layout table
//! (`"ShiftLeft"`, `"ArrowUp"`, ...). Matching is exact and case-sensitive.

use crate::layout::KeyIdentifier;

/// A key with behaviour beyond "type my glyph".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    CapsLock,
    ShiftLeft,
    ShiftRight,
    AltLeft,
    AltRight,
    ControlLeft,
    ControlRight,
    MetaLeft,
    MetaRight,
    Enter,
    Tab,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl NamedKey {
    /// Every named key, in declaration order.
    pub const ALL: [NamedKey; 17] = [
        NamedKey::CapsLock,
        NamedKey::ShiftLeft,
        NamedKey::ShiftRight,
        NamedKey::AltLeft,
        NamedKey::AltRight,
        NamedKey::ControlLeft,
        NamedKey::ControlRight,
        NamedKey::MetaLeft,
        NamedKey::MetaRight,
        NamedKey::Enter,
        NamedKey::Tab,
        NamedKey::Backspace,
        NamedKey::Delete,
        NamedKey::ArrowUp,
        NamedKey::ArrowDown,
        NamedKey::ArrowLeft,
        NamedKey::ArrowRight,
    ];

    /// Returns the key identifier string for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            NamedKey::CapsLock => "CapsLock",
            NamedKey::ShiftLeft => "ShiftLeft",
            NamedKey::ShiftRight => "ShiftRight",
            NamedKey::AltLeft => "AltLeft",
            NamedKey::AltRight => "AltRight",
            NamedKey::ControlLeft => "ControlLeft",
            NamedKey::ControlRight => "ControlRight",
            NamedKey::MetaLeft => "MetaLeft",
            NamedKey::MetaRight => "MetaRight",
            NamedKey::Enter => "Enter",
            NamedKey::Tab => "Tab",
            NamedKey::Backspace => "Backspace",
            NamedKey::Delete => "Delete",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::ArrowLeft => "ArrowLeft",
            NamedKey::ArrowRight => "ArrowRight",
        }
    }

    /// Returns true for either Shift key.
    pub fn is_shift(self) -> bool {
        matches!(self, NamedKey::ShiftLeft | NamedKey::ShiftRight)
    }

    /// Returns true for either Alt key.
    pub fn is_alt(self) -> bool {
        matches!(self, NamedKey::AltLeft | NamedKey::AltRight)
    }

    /// Returns true for the four arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            NamedKey::ArrowUp | NamedKey::ArrowDown | NamedKey::ArrowLeft | NamedKey::ArrowRight
        )
    }
}

impl From<NamedKey> for KeyIdentifier {
    fn from(key: NamedKey) -> Self {
        KeyIdentifier::new(key.as_str())
    }
}

/// Classifies a key identifier.
///
/// Returns `None` for ordinary keys (letters, digits, punctuation, space)
/// and for identifiers this crate has never heard of.
pub fn classify_key(id: &str) -> Option<NamedKey> {
    NamedKey::ALL.into_iter().find(|key| key.as_str() == id)
}

// ============================================================================
// Unit Tests
// ============================================================================
