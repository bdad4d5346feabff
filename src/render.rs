// SPDX-License-Identifier: GPL-3.0-only

//! Render frames handed to whatever draws the keyboard.
//!
//! The controller never draws anything. After each event that changed
//! state it builds a [`RenderFrame`] with every key's current label, the
//! pressed keys and the buffer, and passes it to a [`RenderSink`].

use std::collections::{BTreeMap, BTreeSet};

use futures::channel::mpsc;

use crate::editor::Selection;
use crate::layout::{KeyIdentifier, Layout, LayoutTable};

/// Everything a renderer needs to draw the keyboard and text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Active layout
    pub language: Layout,
    /// Caps Lock indicator
    pub caps_active: bool,
    /// Shift indicator
    pub shift_active: bool,
    /// Current label of every key in the table
    pub glyphs: BTreeMap<KeyIdentifier, String>,
    /// Keys currently held down (Caps Lock is never in here)
    pub pressed: BTreeSet<KeyIdentifier>,
    /// Buffer content
    pub content: String,
    /// Buffer selection
    pub selection: Selection,
}

impl RenderFrame {
    /// Returns the label of a key.
    pub fn glyph(&self, id: &str) -> Option<&str> {
        self.glyphs.get(id).map(String::as_str)
    }

    /// Returns true if the key is drawn as held.
    pub fn is_pressed(&self, id: &str) -> bool {
        self.pressed.contains(id)
    }

    /// Returns the labels of each table row, in row order.
    ///
    /// Keys missing from the frame are skipped.
    pub fn rows(&self, table: &LayoutTable) -> Vec<Vec<String>> {
        table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|id| self.glyphs.get(id).cloned())
                    .collect()
            })
            .collect()
    }
}

/// Receives render frames.
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Collects every frame; useful for tests and replay.
impl RenderSink for Vec<RenderFrame> {
    fn render(&mut self, frame: &RenderFrame) {
        self.push(frame.clone());
    }
}

impl<F> RenderSink for F
where
    F: FnMut(&RenderFrame),
{
    fn render(&mut self, frame: &RenderFrame) {
        self(frame)
    }
}

/// Forwards frames to another task.
///
/// A closed receiver is logged once per frame and otherwise ignored; the
/// keyboard keeps working without a renderer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RenderFrame>,
}

impl ChannelSink {
    /// Creates a sink and the receiver its frames arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RenderFrame>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }
}

impl RenderSink for ChannelSink {
    fn render(&mut self, frame: &RenderFrame) {
        if let Err(e) = self.tx.unbounded_send(frame.clone()) {
            tracing::warn!("Render channel closed, dropping frame: {}", e);
        }
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &RenderFrame) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::KeyDefinition;
    use futures::StreamExt;

    fn frame() -> RenderFrame {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(KeyIdentifier::new("KeyQ"), "q".to_string());
        glyphs.insert(KeyIdentifier::new("Enter"), "Enter".to_string());
        RenderFrame {
            language: Layout::Latin,
            caps_active: false,
            shift_active: false,
            glyphs,
            pressed: BTreeSet::from([KeyIdentifier::new("KeyQ")]),
            content: "q".into(),
            selection: Selection::caret(1),
        }
    }

    #[test]
    fn frame_accessors() {
        let frame = frame();
        assert_eq!(frame.glyph("KeyQ"), Some("q"));
        assert_eq!(frame.glyph("KeyW"), None);
        assert!(frame.is_pressed("KeyQ"));
        assert!(!frame.is_pressed("Enter"));
    }

    #[test]
    fn frame_rows_follow_table_order() {
        let mut table = LayoutTable::new("t")
            .with_key("KeyQ", KeyDefinition::character("q", "й"))
            .with_key("Enter", KeyDefinition::functional("Enter"));
        table.rows = vec![vec!["Enter".into(), "KeyQ".into()]];

        assert_eq!(frame().rows(&table), vec![vec!["Enter".to_string(), "q".to_string()]]);
    }

    #[test]
    fn vec_and_closure_sinks() {
        let mut frames: Vec<RenderFrame> = Vec::new();
        frames.render(&frame());
        assert_eq!(frames.len(), 1);

        let mut count = 0;
        {
            let mut sink = |_: &RenderFrame| count += 1;
            sink.render(&frame());
            sink.render(&frame());
        }
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn channel_sink_delivers_frames() {
        let (mut sink, mut rx) = ChannelSink::new();
        sink.render(&frame());
        drop(sink);

        assert_eq!(rx.next().await, Some(frame()));
        assert_eq!(rx.next().await, None);
    }

    #[test]
    fn channel_sink_survives_closed_receiver() {
        let (mut sink, rx) = ChannelSink::new();
        drop(rx);
        sink.render(&frame());
    }
}
