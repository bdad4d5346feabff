// SPDX-License-Identifier: GPL-3.0-only

//! Dualboard - A bilingual on-screen keyboard engine
//!
//! This crate models a virtual keyboard with English (Latin) and Russian
//! (Cyrillic) layouts bound to a text buffer. It decides what every key
//! shows and what it does; drawing the keys is left to a renderer that
//! receives render frames.
//!
//! # Architecture
//!
//! Input arrives as a stream of feed items (key events or editor actions)
//! and is applied one item at a time by a [`keyboard::Keyboard`]:
//!
//! 1. **Modifiers**: Caps Lock, Shift and the active layout are updated.
//! 2. **Glyphs**: every key's label is recomputed from the layout table.
//! 3. **Editing**: the key's text or action is applied to the buffer.
//! 4. **Rendering**: a frame describing the result goes to the render sink.
//!
//! The active layout survives restarts through a preference store.
//!
//! # Modules
//!
//! - `app_settings`: Centralized application constants
//! - `config`: User configuration loaded from JSON
//! - `editor`: Text buffer and editing actions
//! - `feed`: Ordered input feed, async driver and script parser
//! - `i18n`: Localization support using fluent translations
//! - `input`: Key classification, modifier state and glyph resolution
//! - `keyboard`: The controller tying everything together
//! - `layout`: Layout table types, parsing and validation
//! - `render`: Render frames and sinks
//! - `state`: Preference persistence

pub mod app_settings;
pub mod config;
pub mod editor;
pub mod feed;
pub mod i18n;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod render;
pub mod state;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================
