// SPDX-License-Identifier: GPL-3.0-only

//! Input interpretation for the dualboard keyboard.
//!
//! This module turns key events into glyphs. It owns no editing logic: the
//! keyboard controller asks it what a key means and hands the result to the
//! text buffer.
//!
//! # Features
//!
//! - **Key classification**: recognise modifier, editing and arrow keys by identifier
//! - **Modifier state**: Caps Lock (toggle), Shift (hold) and the active layout
//! - **Glyph resolution**: case rule for letters, shift table for digits and punctuation
//! - **Events**: the press/release shape shared by hardware and synthetic sources
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use dualboard::input::ModifierState;
//! use dualboard::layout::{default_table, Layout};
//!
//! let table = default_table()?.into_table();
//! let mut state = ModifierState::new(Layout::Latin);
//!
//! state.press_shift();
//! let glyphs = state.glyphs(&table);
//! assert_eq!(glyphs["Digit1"], "!");
//! assert_eq!(glyphs["KeyQ"], "Q");
//! ```

// Sub-modules
pub mod event;
pub mod glyph;
pub mod keycode;
pub mod modifier;
pub mod symbols;

// Re-export public API
pub use event::{EventSource, InputEvent, KeyPhase, ModifierSnapshot};
pub use glyph::{resolve_glyph, GlyphResolution};
pub use keycode::{classify_key, NamedKey};
pub use modifier::ModifierState;
pub use symbols::{symbol_shift, ShiftPair};

// ============================================================================
// Module Tests
// ============================================================================
