// SPDX-License-Identifier: GPL-3.0-only

//! Glyph resolution: what a key shows and types under a modifier snapshot.
//!
//! Resolution is a pure function of the key's table entry, its identifier,
//! the active layout, and the `(caps_active, shift_held)` snapshot:
//!
//! - Functional keys never resolve to text.
//! - Keys in the symbol shift table pick their unshifted or shifted glyph
//!   from Shift alone.
//! - Every other key takes its base glyph and is upper-cased when exactly
//!   one of Caps Lock and Shift is active.

use crate::input::symbols::symbol_shift;
use crate::layout::{KeyDefinition, Layout};

/// What a key resolves to under the current modifier snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphResolution {
    /// The key displays and types this string.
    Glyph(String),
    /// The key triggers an editor action (or nothing) instead of typing.
    Functional,
}

impl GlyphResolution {
    /// Returns the glyph text, or `None` for functional keys.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GlyphResolution::Glyph(text) => Some(text),
            GlyphResolution::Functional => None,
        }
    }
}

/// Returns true when letters should be shown upper case.
pub fn is_upper_case(caps_active: bool, shift_held: bool) -> bool {
    caps_active != shift_held
}

/// Resolves one key.
pub fn resolve_glyph(
    id: &str,
    def: &KeyDefinition,
    layout: Layout,
    caps_active: bool,
    shift_held: bool,
) -> GlyphResolution {
    if def.func {
        return GlyphResolution::Functional;
    }

    if let Some(pair) = symbol_shift(id, layout) {
        return GlyphResolution::Glyph(pair.pick(shift_held).to_string());
    }

    let base = def.glyph(layout);
    let text = if is_upper_case(caps_active, shift_held) {
        base.to_uppercase()
    } else {
        base.to_lowercase()
    };
    GlyphResolution::Glyph(text)
}

/// Returns the label a key should display.
///
/// Character keys show their resolved glyph; functional keys show their
/// table label for the active layout unchanged.
pub fn display_label(
    id: &str,
    def: &KeyDefinition,
    layout: Layout,
    caps_active: bool,
    shift_held: bool,
) -> String {
    match resolve_glyph(id, def, layout, caps_active, shift_held) {
        GlyphResolution::Glyph(text) => text,
        GlyphResolution::Functional => def.glyph(layout).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> KeyDefinition {
        KeyDefinition::character("q", "й")
    }

    fn text(resolution: GlyphResolution) -> String {
        resolution.as_text().expect("expected a glyph").to_string()
    }

    #[test]
    fn case_follows_caps_xor_shift() {
        let cases = [
            (false, false, "q"),
            (true, false, "Q"),
            (true, true, "q"),
            (false, true, "Q"),
        ];
        for (caps, shift, expected) in cases {
            assert_eq!(
                text(resolve_glyph("KeyQ", &letter(), Layout::Latin, caps, shift)),
                expected,
                "caps={caps} shift={shift}"
            );
        }
    }

    #[test]
    fn cyrillic_letters_change_case() {
        assert_eq!(text(resolve_glyph("KeyQ", &letter(), Layout::Cyrillic, true, false)), "Й");
        let yo = KeyDefinition::character("`", "ё");
        assert_eq!(text(resolve_glyph("Backquote", &yo, Layout::Cyrillic, false, true)), "Ё");
    }

    #[test]
    fn digits_ignore_caps() {
        let one = KeyDefinition::character("1", "1");
        assert_eq!(text(resolve_glyph("Digit1", &one, Layout::Latin, true, false)), "1");
        assert_eq!(text(resolve_glyph("Digit1", &one, Layout::Latin, true, true)), "!");
        assert_eq!(text(resolve_glyph("Digit1", &one, Layout::Cyrillic, false, true)), "!");
    }

    #[test]
    fn cyrillic_bracket_falls_back_to_case_rule() {
        let bracket = KeyDefinition::character("[", "х");
        assert_eq!(text(resolve_glyph("BracketLeft", &bracket, Layout::Latin, false, true)), "{");
        assert_eq!(text(resolve_glyph("BracketLeft", &bracket, Layout::Cyrillic, false, true)), "Х");
        assert_eq!(text(resolve_glyph("BracketLeft", &bracket, Layout::Cyrillic, false, false)), "х");
    }

    #[test]
    fn slash_uses_layout_specific_pair() {
        let slash = KeyDefinition::character("/", ".");
        assert_eq!(text(resolve_glyph("Slash", &slash, Layout::Latin, false, true)), "?");
        assert_eq!(text(resolve_glyph("Slash", &slash, Layout::Cyrillic, false, true)), ",");
        assert_eq!(text(resolve_glyph("Slash", &slash, Layout::Cyrillic, true, false)), ".");
    }

    #[test]
    fn functional_keys_do_not_resolve() {
        let enter = KeyDefinition::functional("Enter");
        assert_eq!(
            resolve_glyph("Enter", &enter, Layout::Latin, false, true),
            GlyphResolution::Functional
        );
        assert_eq!(display_label("Enter", &enter, Layout::Latin, true, true), "Enter");
    }

    #[test]
    fn space_is_unaffected_by_case() {
        let space = KeyDefinition::character(" ", " ");
        assert_eq!(text(resolve_glyph("Space", &space, Layout::Latin, true, false)), " ");
    }
}
