// SPDX-License-Identifier: GPL-3.0-only

//! Shift table for the digit row and punctuation keys.
//!
//! These keys do not follow the letter case rule: Shift swaps them to a
//! different symbol and Caps Lock has no effect. Some punctuation positions
//! only carry a symbol pair in the Latin layout because the Cyrillic layout
//! puts letters there; those keys have no entry for Cyrillic and resolve as
//! letters instead.

use crate::layout::Layout;

/// The glyph pair a key shows without and with Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPair {
    pub unshifted: &'static str,
    pub shifted: &'static str,
}

impl ShiftPair {
    const fn new(unshifted: &'static str, shifted: &'static str) -> Self {
        Self { unshifted, shifted }
    }

    /// Picks the glyph for the given Shift state.
    pub fn pick(&self, shift_held: bool) -> &'static str {
        if shift_held { self.shifted } else { self.unshifted }
    }
}

/// Shift pairs for one key position, per layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolShift {
    pub key: &'static str,
    pub latin: Option<ShiftPair>,
    pub cyrillic: Option<ShiftPair>,
}

impl SymbolShift {
    const fn both(key: &'static str, unshifted: &'static str, shifted: &'static str) -> Self {
        let pair = ShiftPair::new(unshifted, shifted);
        Self {
            key,
            latin: Some(pair),
            cyrillic: Some(pair),
        }
    }

    const fn latin_only(key: &'static str, unshifted: &'static str, shifted: &'static str) -> Self {
        Self {
            key,
            latin: Some(ShiftPair::new(unshifted, shifted)),
            cyrillic: None,
        }
    }

    /// Returns the pair for the given layout, if this position has one there.
    pub fn for_layout(&self, layout: Layout) -> Option<ShiftPair> {
        match layout {
            Layout::Latin => self.latin,
            Layout::Cyrillic => self.cyrillic,
        }
    }
}

/// The standard digit-row and punctuation shift table.
pub const SYMBOL_SHIFTS: &[SymbolShift] = &[
    SymbolShift::both("Digit1", "1", "!"),
    SymbolShift::both("Digit2", "2", "@"),
    SymbolShift::both("Digit3", "3", "#"),
    SymbolShift::both("Digit4", "4", "$"),
    SymbolShift::both("Digit5", "5", "%"),
    SymbolShift::both("Digit6", "6", "^"),
    SymbolShift::both("Digit7", "7", "&"),
    SymbolShift::both("Digit8", "8", "*"),
    SymbolShift::both("Digit9", "9", "("),
    SymbolShift::both("Digit0", "0", ")"),
    SymbolShift::both("Minus", "-", "_"),
    SymbolShift::both("Equal", "=", "+"),
    SymbolShift::both("Backslash", "\\", "|"),
    SymbolShift::latin_only("Backquote", "`", "~"),
    SymbolShift::latin_only("BracketLeft", "[", "{"),
    SymbolShift::latin_only("BracketRight", "]", "}"),
    SymbolShift::latin_only("Semicolon", ";", ":"),
    SymbolShift::latin_only("Quote", "'", "\""),
    SymbolShift::latin_only("Comma", ",", "<"),
    SymbolShift::latin_only("Period", ".", ">"),
    SymbolShift {
        key: "Slash",
        latin: Some(ShiftPair::new("/", "?")),
        cyrillic: Some(ShiftPair::new(".", ",")),
    },
];

/// Looks up the shift pair for a key under a layout.
///
/// Returns `None` when the key should be resolved with the case rule.
pub fn symbol_shift(key: &str, layout: Layout) -> Option<ShiftPair> {
    SYMBOL_SHIFTS
        .iter()
        .find(|entry| entry.key == key)
        .and_then(|entry| entry.for_layout(layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_shift_the_same_in_both_layouts() {
        for layout in [Layout::Latin, Layout::Cyrillic] {
            let pair = symbol_shift("Digit2", layout).expect("digit row is in the table");
            assert_eq!(pair.pick(false), "2");
            assert_eq!(pair.pick(true), "@");
        }
    }

    #[test]
    fn latin_only_keys_have_no_cyrillic_entry() {
        for key in ["Backquote", "BracketLeft", "BracketRight", "Semicolon", "Quote", "Comma", "Period"] {
            assert!(symbol_shift(key, Layout::Latin).is_some(), "{key} missing for Latin");
            assert!(symbol_shift(key, Layout::Cyrillic).is_none(), "{key} should fall back for Cyrillic");
        }
    }

    #[test]
    fn slash_differs_per_layout() {
        let latin = symbol_shift("Slash", Layout::Latin).unwrap();
        assert_eq!((latin.pick(false), latin.pick(true)), ("/", "?"));

        let cyrillic = symbol_shift("Slash", Layout::Cyrillic).unwrap();
        assert_eq!((cyrillic.pick(false), cyrillic.pick(true)), (".", ","));
    }

    #[test]
    fn letters_are_not_in_the_table() {
        assert!(symbol_shift("KeyA", Layout::Latin).is_none());
        assert!(symbol_shift("Space", Layout::Cyrillic).is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in SYMBOL_SHIFTS.iter().enumerate() {
            assert!(
                SYMBOL_SHIFTS[i + 1..].iter().all(|b| b.key != a.key),
                "duplicate entry for {}",
                a.key
            );
        }
    }
}
