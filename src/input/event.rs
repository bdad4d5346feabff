// SPDX-License-Identifier: GPL-3.0-only

//! Discrete key events fed into the keyboard controller.
//!
//! Events look the same whether they come from hardware or from a pointer
//! click on a rendered key; only [`EventSource`] tells them apart, and only
//! the navigation policy looks at it.

use crate::input::keycode::{classify_key, NamedKey};
use crate::layout::KeyIdentifier;

/// Whether the key went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    Release,
}

/// Where an event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSource {
    /// A physical key on a real keyboard
    #[default]
    Hardware,
    /// Generated by software, e.g. a click on a rendered key
    Synthetic,
}

/// Modifier keys physically held when the event was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierSnapshot {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierSnapshot {
    /// Returns true if Ctrl or Meta together with Alt are held.
    pub fn is_language_combo(&self) -> bool {
        (self.ctrl || self.meta) && self.alt
    }
}

/// A single key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The physical key
    pub key: KeyIdentifier,
    /// Press or release
    pub phase: KeyPhase,
    /// Modifiers held at the time of the event
    pub modifiers: ModifierSnapshot,
    /// True for auto-repeat presses generated while a key is held
    pub repeat: bool,
    /// Hardware or synthetic origin
    pub source: EventSource,
}

impl InputEvent {
    /// Creates a hardware press with no modifiers held.
    #[must_use]
    pub fn press(key: impl Into<KeyIdentifier>) -> Self {
        Self {
            key: key.into(),
            phase: KeyPhase::Press,
            modifiers: ModifierSnapshot::default(),
            repeat: false,
            source: EventSource::Hardware,
        }
    }

    /// Creates a hardware release with no modifiers held.
    #[must_use]
    pub fn release(key: impl Into<KeyIdentifier>) -> Self {
        Self {
            phase: KeyPhase::Release,
            ..Self::press(key)
        }
    }

    /// Replaces the modifier snapshot.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSnapshot) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the Shift flag of the snapshot.
    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.modifiers.shift = shift;
        self
    }

    /// Marks the event as an auto-repeat.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Marks the event as synthetic.
    #[must_use]
    pub fn synthetic(mut self) -> Self {
        self.source = EventSource::Synthetic;
        self
    }

    /// Returns the named key this event is for, if any.
    pub fn named_key(&self) -> Option<NamedKey> {
        classify_key(self.key.as_str())
    }

    /// Returns true if Shift was held.
    pub fn shift_held(&self) -> bool {
        self.modifiers.shift
    }

    /// Returns true if this is a press that should switch layouts.
    pub fn language_toggle_requested(&self) -> bool {
        self.phase == KeyPhase::Press && !self.repeat && self.modifiers.is_language_combo()
    }

    /// Returns true if this is a press that should toggle Caps Lock.
    pub fn caps_toggle_requested(&self) -> bool {
        self.phase == KeyPhase::Press
            && !self.repeat
            && self.named_key() == Some(NamedKey::CapsLock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let event = InputEvent::release("ShiftLeft").with_shift(true).repeated().synthetic();
        assert_eq!(event.phase, KeyPhase::Release);
        assert!(event.shift_held());
        assert!(event.repeat);
        assert_eq!(event.source, EventSource::Synthetic);
        assert_eq!(event.named_key(), Some(NamedKey::ShiftLeft));
    }

    #[test]
    fn caps_toggle_only_on_fresh_press() {
        assert!(InputEvent::press("CapsLock").caps_toggle_requested());
        assert!(!InputEvent::press("CapsLock").repeated().caps_toggle_requested());
        assert!(!InputEvent::release("CapsLock").caps_toggle_requested());
        assert!(!InputEvent::press("KeyA").caps_toggle_requested());
    }

    #[test]
    fn language_combo_needs_ctrl_or_meta_with_alt() {
        let ctrl_alt = ModifierSnapshot {
            ctrl: true,
            alt: true,
            ..ModifierSnapshot::default()
        };
        let meta_alt = ModifierSnapshot {
            meta: true,
            alt: true,
            ..ModifierSnapshot::default()
        };
        let alt_only = ModifierSnapshot {
            alt: true,
            ..ModifierSnapshot::default()
        };

        assert!(InputEvent::press("AltLeft").with_modifiers(ctrl_alt).language_toggle_requested());
        assert!(InputEvent::press("ControlLeft").with_modifiers(meta_alt).language_toggle_requested());
        assert!(!InputEvent::press("AltLeft").with_modifiers(alt_only).language_toggle_requested());
        assert!(
            !InputEvent::press("AltLeft")
                .with_modifiers(ctrl_alt)
                .repeated()
                .language_toggle_requested()
        );
        assert!(!InputEvent::release("AltLeft").with_modifiers(ctrl_alt).language_toggle_requested());
    }
}
