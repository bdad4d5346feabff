// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state management for keyboard input.
//!
//! This module tracks the three pieces of state that decide what every key
//! shows and types:
//!
//! - **Caps Lock**: toggled by a press, persists until toggled again
//! - **Shift**: active only while held
//! - **Language**: which of the two layouts is active, flipped by a toggle
//!
//! Repeat filtering happens before these transitions are called; every call
//! here is a real transition.
//!
//! # Example
//!
//! ```rust,ignore
//! use dualboard::input::ModifierState;
//! use dualboard::layout::Layout;
//!
//! let mut state = ModifierState::new(Layout::Latin);
//!
//! state.press_shift();
//! assert!(state.is_upper_case());
//!
//! state.toggle_caps(true);
//! assert!(!state.is_upper_case());
//! ```

use std::collections::BTreeMap;

use crate::input::glyph::{display_label, is_upper_case, resolve_glyph, GlyphResolution};
use crate::layout::{KeyDefinition, KeyIdentifier, Layout, LayoutTable};

/// Tracks Caps Lock, Shift and the active layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    /// Whether Caps Lock is on
    caps_active: bool,

    /// Whether Shift is currently held
    shift_active: bool,

    /// The active layout
    language: Layout,
}

impl ModifierState {
    /// Creates a state with Caps Lock and Shift off and the given layout.
    #[must_use]
    pub fn new(language: Layout) -> Self {
        Self {
            caps_active: false,
            shift_active: false,
            language,
        }
    }

    /// Returns true if Caps Lock is on.
    #[must_use]
    pub fn caps_active(&self) -> bool {
        self.caps_active
    }

    /// Returns true if Shift is held.
    #[must_use]
    pub fn shift_active(&self) -> bool {
        self.shift_active
    }

    /// Returns the active layout.
    #[must_use]
    pub fn language(&self) -> Layout {
        self.language
    }

    /// Returns true if letters currently resolve upper case.
    #[must_use]
    pub fn is_upper_case(&self) -> bool {
        is_upper_case(self.caps_active, self.shift_active)
    }

    /// Inverts Caps Lock.
    ///
    /// `shift_held` is the Shift state reported with the Caps press; glyphs
    /// are recomputed under it, so it is recorded as the current Shift state.
    ///
    /// # Returns
    ///
    /// `true` if Caps Lock is now on
    pub fn toggle_caps(&mut self, shift_held: bool) -> bool {
        self.caps_active = !self.caps_active;
        self.shift_active = shift_held;
        self.caps_active
    }

    /// Marks Shift as held.
    pub fn press_shift(&mut self) {
        self.shift_active = true;
    }

    /// Marks Shift as released.
    pub fn release_shift(&mut self) {
        self.shift_active = false;
    }

    /// Switches to the other layout.
    ///
    /// `shift_held` is recorded the same way as for [`toggle_caps`](Self::toggle_caps).
    ///
    /// # Returns
    ///
    /// The newly active layout
    pub fn toggle_language(&mut self, shift_held: bool) -> Layout {
        self.language = self.language.toggled();
        self.shift_active = shift_held;
        self.language
    }

    /// Resolves a single key under the current state.
    #[must_use]
    pub fn resolve(&self, id: &str, def: &KeyDefinition) -> GlyphResolution {
        resolve_glyph(id, def, self.language, self.caps_active, self.shift_active)
    }

    /// Computes the label every key in the table currently displays.
    #[must_use]
    pub fn glyphs(&self, table: &LayoutTable) -> BTreeMap<KeyIdentifier, String> {
        table
            .iter()
            .map(|(id, def)| {
                let label = display_label(
                    id.as_str(),
                    def,
                    self.language,
                    self.caps_active,
                    self.shift_active,
                );
                (id.clone(), label)
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LayoutTable {
        LayoutTable::new("test")
            .with_key("KeyQ", KeyDefinition::character("q", "й"))
            .with_key("Digit1", KeyDefinition::character("1", "1"))
            .with_key("Slash", KeyDefinition::character("/", "."))
            .with_key("Enter", KeyDefinition::functional("Enter"))
    }

    /// Test initial state
    #[test]
    fn test_new() {
        let state = ModifierState::new(Layout::Cyrillic);
        assert!(!state.caps_active());
        assert!(!state.shift_active());
        assert_eq!(state.language(), Layout::Cyrillic);
        assert_eq!(ModifierState::default().language(), Layout::Latin);
    }

    /// Test Caps Lock persists until toggled again
    #[test]
    fn test_toggle_caps() {
        let mut state = ModifierState::new(Layout::Latin);

        assert!(state.toggle_caps(false));
        assert!(state.caps_active());
        assert!(state.is_upper_case());

        assert!(!state.toggle_caps(false));
        assert!(!state.caps_active());
        assert!(!state.is_upper_case());
    }

    /// Test the Shift snapshot reported with a Caps press is recorded
    #[test]
    fn test_toggle_caps_records_shift_snapshot() {
        let mut state = ModifierState::new(Layout::Latin);
        state.toggle_caps(true);
        assert!(state.shift_active());
        assert!(!state.is_upper_case(), "Caps and Shift cancel out");
    }

    /// Test Shift press and release do not accumulate
    #[test]
    fn test_shift_press_release() {
        let mut state = ModifierState::new(Layout::Latin);

        state.press_shift();
        state.press_shift();
        assert!(state.shift_active());

        state.release_shift();
        assert!(!state.shift_active(), "One release clears Shift");
    }

    /// Test language toggling
    #[test]
    fn test_toggle_language() {
        let mut state = ModifierState::new(Layout::Latin);
        assert_eq!(state.toggle_language(false), Layout::Cyrillic);
        assert_eq!(state.toggle_language(false), Layout::Latin);
    }

    /// Test glyph map follows every transition
    #[test]
    fn test_glyphs_recompute() {
        let table = table();
        let mut state = ModifierState::new(Layout::Latin);

        let glyphs = state.glyphs(&table);
        assert_eq!(glyphs["KeyQ"], "q");
        assert_eq!(glyphs["Digit1"], "1");
        assert_eq!(glyphs["Enter"], "Enter");

        state.press_shift();
        let glyphs = state.glyphs(&table);
        assert_eq!(glyphs["KeyQ"], "Q");
        assert_eq!(glyphs["Digit1"], "!");
        assert_eq!(glyphs["Slash"], "?");

        state.toggle_language(true);
        let glyphs = state.glyphs(&table);
        assert_eq!(glyphs["KeyQ"], "Й");
        assert_eq!(glyphs["Slash"], ",");
        assert_eq!(glyphs.len(), table.len());
    }

    /// Test single-key resolution uses the stored state
    #[test]
    fn test_resolve() {
        let table = table();
        let mut state = ModifierState::new(Layout::Latin);
        state.toggle_caps(false);

        let def = table.get("KeyQ").unwrap();
        assert_eq!(state.resolve("KeyQ", def), GlyphResolution::Glyph("Q".into()));

        let def = table.get("Enter").unwrap();
        assert_eq!(state.resolve("Enter", def), GlyphResolution::Functional);
    }
}
