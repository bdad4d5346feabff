// SPDX-License-Identifier: GPL-3.0-only

//! Text buffer with a caret/selection model.
//!
//! Content is stored as a `Vec<char>` so every position is a plain character
//! offset. The selection is a half-open range `[start, end)`; when
//! `start == end` it is a caret. Every operation leaves
//! `0 <= start <= end <= len` intact.

use std::fmt;

/// A selection range in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A collapsed selection at `pos`.
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns true if the selection is a caret.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }
}

/// Editable text with a caret or selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    content: Vec<char>,
    selection: Selection,
}

impl TextBuffer {
    /// Creates an empty buffer with the caret at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `text` with the caret at its end.
    pub fn from_text(text: &str) -> Self {
        let content: Vec<char> = text.chars().collect();
        let end = content.len();
        Self {
            content,
            selection: Selection::caret(end),
        }
    }

    /// Returns the content as a `String`.
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the selection start, which is the caret when nothing is selected.
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_caret()
    }

    /// Returns the selected text.
    pub fn selected_text(&self) -> String {
        self.content[self.selection.start..self.selection.end]
            .iter()
            .collect()
    }

    /// Sets the selection.
    ///
    /// A range outside the buffer or with `start > end` is an invariant
    /// violation: it panics in debug builds and is clamped to the buffer
    /// then reordered in release builds.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.content.len();
        debug_assert!(
            start <= end && end <= len,
            "malformed selection {}..{} for buffer of length {}",
            start,
            end,
            len
        );

        let (start, end) = clamp_selection(start, end, len);
        self.selection = Selection { start, end };
    }

    /// Selects the entire content.
    pub fn select_all(&mut self) {
        self.selection = Selection {
            start: 0,
            end: self.content.len(),
        };
    }

    /// Replaces the selection with `text`, or inserts it at the caret.
    ///
    /// The caret ends up directly after the inserted text.
    pub fn insert(&mut self, text: &str) {
        let Selection { start, end } = self.selection;
        let inserted: Vec<char> = text.chars().collect();
        let caret = start + inserted.len();

        self.content.splice(start..end, inserted);
        self.selection = Selection::caret(caret);
    }

    /// Deletes the selection, or the character before the caret.
    pub fn backspace(&mut self) {
        if self.has_selection() {
            self.insert("");
            return;
        }

        let caret = self.selection.start;
        if caret == 0 {
            return;
        }
        self.content.remove(caret - 1);
        self.selection = Selection::caret(caret - 1);
    }

    /// Deletes the selection, or the character after the caret.
    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            self.insert("");
            return;
        }

        let caret = self.selection.start;
        if caret < self.content.len() {
            self.content.remove(caret);
        }
    }

    /// Collapses the selection and moves the caret to the start.
    pub fn move_home(&mut self) {
        self.selection = Selection::caret(0);
    }

    /// Collapses the selection and moves the caret to the end.
    pub fn move_end(&mut self) {
        self.selection = Selection::caret(self.content.len());
    }

    /// Collapses the selection one character left of its start.
    pub fn move_left(&mut self) {
        let pos = self.selection.start.saturating_sub(1);
        self.selection = Selection::caret(pos);
    }

    /// Collapses the selection one character right of its end.
    pub fn move_right(&mut self) {
        let pos = (self.selection.end + 1).min(self.content.len());
        self.selection = Selection::caret(pos);
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.content {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Clamps both ends into `[0, len]` then orders them.
fn clamp_selection(start: usize, end: usize, len: usize) -> (usize, usize) {
    let start = start.min(len);
    let end = end.min(len);
    if start <= end { (start, end) } else { (end, start) }
}
