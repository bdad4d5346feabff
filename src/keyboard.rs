// SPDX-License-Identifier: GPL-3.0-only

//! The keyboard controller.
//!
//! [`Keyboard`] owns one modifier state, one text buffer, the set of held
//! keys, the layout table, a preference store and a render sink. It
//! applies one event at a time: modifier update, glyph recompute, buffer
//! edit, then a render frame. Nothing else can mutate its state.

use std::collections::BTreeSet;

use crate::config::{Config, NavigationPolicy};
use crate::editor::{EditorAction, TextBuffer};
use crate::input::glyph::display_label;
use crate::input::{GlyphResolution, InputEvent, KeyPhase, ModifierState, NamedKey};
use crate::layout::{KeyDefinition, KeyIdentifier, Layout, LayoutTable};
use crate::render::{RenderFrame, RenderSink};
use crate::state::PreferenceStore;

/// Behaviour knobs for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSettings {
    /// Which sources may navigate with arrow keys
    pub navigation: NavigationPolicy,
    /// Text inserted by Tab
    pub tab_text: String,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for KeyboardSettings {
    fn from(config: &Config) -> Self {
        Self {
            navigation: config.navigation,
            tab_text: config.tab_text.clone(),
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Unknown key, or an event with no effect at all
    Ignored,
    /// The key is held (or released) but triggers nothing
    Held,
    /// Alt pressed on its own; swallowed
    Suppressed,
    /// Caps Lock flipped; carries the new state
    CapsToggled(bool),
    /// Shift pressed or released; carries the new state
    ShiftChanged(bool),
    /// Layout switched; carries the new layout
    LanguageToggled(Layout),
    /// A character key typed this text
    Typed(String),
    /// A functional key or programmatic call applied this action
    Edited(EditorAction),
}

/// An on-screen keyboard bound to a text buffer.
#[derive(Debug)]
pub struct Keyboard<P, S> {
    table: LayoutTable,
    modifiers: ModifierState,
    buffer: TextBuffer,
    pressed: BTreeSet<KeyIdentifier>,
    preferences: P,
    sink: S,
    settings: KeyboardSettings,
}

impl<P, S> Keyboard<P, S>
where
    P: PreferenceStore,
    S: RenderSink,
{
    /// Creates a keyboard with an empty buffer.
    ///
    /// The starting layout is read from `preferences`; Caps Lock and Shift
    /// start off.
    pub fn new(table: LayoutTable, preferences: P, sink: S, settings: KeyboardSettings) -> Self {
        let language = preferences.language();
        tracing::info!(
            "Keyboard ready: table '{}' with {} keys, layout {}",
            table.name,
            table.len(),
            language
        );

        Self {
            table,
            modifiers: ModifierState::new(language),
            buffer: TextBuffer::new(),
            pressed: BTreeSet::new(),
            preferences,
            sink,
            settings,
        }
    }

    /// Replaces the buffer with `text`, caret at its end.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer = TextBuffer::from_text(text);
        self
    }

    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn settings(&self) -> &KeyboardSettings {
        &self.settings
    }

    /// Keys currently drawn as held.
    pub fn pressed(&self) -> &BTreeSet<KeyIdentifier> {
        &self.pressed
    }

    /// Returns the label a key currently shows.
    pub fn glyph(&self, id: &str) -> Option<String> {
        let def = self.table.get(id)?;
        Some(display_label(
            id,
            def,
            self.modifiers.language(),
            self.modifiers.caps_active(),
            self.modifiers.shift_active(),
        ))
    }

    /// Builds the current render frame.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            language: self.modifiers.language(),
            caps_active: self.modifiers.caps_active(),
            shift_active: self.modifiers.shift_active(),
            glyphs: self.modifiers.glyphs(&self.table),
            pressed: self.pressed.clone(),
            content: self.buffer.text(),
            selection: self.buffer.selection(),
        }
    }

    /// Sends the current frame to the sink.
    pub fn render(&mut self) {
        let frame = self.frame();
        self.sink.render(&frame);
    }

    /// Handles one key event.
    ///
    /// Events for keys missing from the table change nothing and render
    /// nothing.
    pub fn handle_event(&mut self, event: &InputEvent) -> KeyOutcome {
        let Some(def) = self.table.get(event.key.as_str()).cloned() else {
            tracing::trace!("Ignoring key not in table: {}", event.key);
            return KeyOutcome::Ignored;
        };

        let outcome = match event.phase {
            KeyPhase::Press => self.handle_press(event, &def),
            KeyPhase::Release => self.handle_release(event),
        };

        if outcome != KeyOutcome::Ignored {
            self.render();
        }
        outcome
    }

    /// Applies an editor action directly, bypassing key handling.
    ///
    /// Navigation through this path is not subject to the navigation policy.
    /// Selection ranges come from outside, so they are clamped to the buffer
    /// and put in order before being applied.
    pub fn apply(&mut self, action: &EditorAction) -> KeyOutcome {
        let action = match *action {
            EditorAction::Select { start, end } => self.bounded_selection(start, end),
            _ => action.clone(),
        };

        action.apply(&mut self.buffer);
        tracing::debug!("Applied {:?}, caret at {}", action, self.buffer.caret());
        self.render();
        KeyOutcome::Edited(action)
    }

    fn bounded_selection(&self, start: usize, end: usize) -> EditorAction {
        let len = self.buffer.len();
        let (a, b) = (start.min(len), end.min(len));
        let bounded = EditorAction::Select {
            start: a.min(b),
            end: a.max(b),
        };

        if (start, end) != (a.min(b), a.max(b)) {
            tracing::debug!("Selection {}..{} adjusted for buffer of length {}", start, end, len);
        }
        bounded
    }

    fn handle_press(&mut self, event: &InputEvent, def: &KeyDefinition) -> KeyOutcome {
        let named = event.named_key();

        if named == Some(NamedKey::CapsLock) {
            if !event.caps_toggle_requested() {
                return KeyOutcome::Ignored;
            }
            let on = self.modifiers.toggle_caps(event.shift_held());
            tracing::debug!("Caps Lock {}", if on { "on" } else { "off" });
            return KeyOutcome::CapsToggled(on);
        }

        self.pressed.insert(event.key.clone());

        if event.language_toggle_requested() {
            return self.toggle_language(event.shift_held());
        }

        if named.is_some_and(NamedKey::is_alt) {
            return KeyOutcome::Suppressed;
        }

        if let GlyphResolution::Glyph(text) = self.modifiers.resolve(event.key.as_str(), def) {
            self.buffer.insert(&text);
            return KeyOutcome::Typed(text);
        }

        match named {
            Some(key) if key.is_shift() => {
                if event.repeat {
                    return KeyOutcome::Held;
                }
                self.modifiers.press_shift();
                tracing::debug!("Shift held");
                KeyOutcome::ShiftChanged(true)
            }
            Some(key) => self.dispatch(key, event),
            None => KeyOutcome::Held,
        }
    }

    fn handle_release(&mut self, event: &InputEvent) -> KeyOutcome {
        let named = event.named_key();

        if named == Some(NamedKey::CapsLock) {
            return KeyOutcome::Ignored;
        }

        self.pressed.remove(&event.key);

        if named.is_some_and(NamedKey::is_shift) {
            self.modifiers.release_shift();
            tracing::debug!("Shift released");
            return KeyOutcome::ShiftChanged(false);
        }

        KeyOutcome::Held
    }

    fn dispatch(&mut self, key: NamedKey, event: &InputEvent) -> KeyOutcome {
        let Some(action) = EditorAction::for_key(key, &self.settings.tab_text) else {
            return KeyOutcome::Held;
        };

        if action.is_navigation() && !self.settings.navigation.allows(event.source) {
            tracing::trace!("Navigation from {:?} not allowed: {}", event.source, key.as_str());
            return KeyOutcome::Held;
        }

        action.apply(&mut self.buffer);
        KeyOutcome::Edited(action)
    }

    fn toggle_language(&mut self, shift_held: bool) -> KeyOutcome {
        let language = self.modifiers.toggle_language(shift_held);
        tracing::info!("Switched layout to {}", language);

        if let Err(e) = self.preferences.set_language(language) {
            tracing::warn!("Failed to save layout preference: {}", e);
        }

        KeyOutcome::LanguageToggled(language)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
