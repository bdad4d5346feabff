// SPDX-License-Identifier: GPL-3.0-only

//! Text buffer editing for the dualboard keyboard.
//!
//! [`TextBuffer`] holds the typed text and its caret or selection;
//! [`EditorAction`] names the edits the keyboard controller can dispatch.

pub mod action;
pub mod buffer;

pub use action::EditorAction;
pub use buffer::{Selection, TextBuffer};
