// SPDX-License-Identifier: GPL-3.0-only

//! The input feed.
//!
//! Anything that drives the keyboard does so through [`FeedItem`]s: key
//! events from hardware or pointer shims, and editor actions from
//! programmatic callers. [`drive`] applies a stream of them strictly in
//! order, finishing each before pulling the next.
//!
//! The line-oriented script format used by the binary lives here too:
//!
//! ```text
//! # comments and blank lines are skipped
//! down ShiftLeft shift
//! tap KeyQ shift
//! up ShiftLeft
//! tap AltLeft ctrl alt
//! tap ArrowLeft synthetic
//! type hello
//! select 0 5
//! home
//! ```

use std::fmt;

use futures::{Stream, StreamExt};

use crate::editor::EditorAction;
use crate::input::{InputEvent, ModifierSnapshot};
use crate::keyboard::{KeyOutcome, Keyboard};
use crate::render::RenderSink;
use crate::state::PreferenceStore;

/// One unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    /// A key press or release
    Key(InputEvent),
    /// A direct editor action
    Edit(EditorAction),
}

impl From<InputEvent> for FeedItem {
    fn from(event: InputEvent) -> Self {
        FeedItem::Key(event)
    }
}

impl From<EditorAction> for FeedItem {
    fn from(action: EditorAction) -> Self {
        FeedItem::Edit(action)
    }
}

impl<P, S> Keyboard<P, S>
where
    P: PreferenceStore,
    S: RenderSink,
{
    /// Applies one feed item.
    pub fn feed(&mut self, item: &FeedItem) -> KeyOutcome {
        match item {
            FeedItem::Key(event) => self.handle_event(event),
            FeedItem::Edit(action) => self.apply(action),
        }
    }
}

/// Applies every item of `items` to `keyboard`, in arrival order.
///
/// Returns the number of items applied once the stream ends.
pub async fn drive<P, S, St>(keyboard: &mut Keyboard<P, S>, items: St) -> usize
where
    P: PreferenceStore,
    S: RenderSink,
    St: Stream<Item = FeedItem>,
{
    let mut items = std::pin::pin!(items);
    let mut applied = 0;

    while let Some(item) = items.next().await {
        let outcome = keyboard.feed(&item);
        tracing::trace!("{:?} -> {:?}", item, outcome);
        applied += 1;
    }

    tracing::debug!("Input feed ended after {} items", applied);
    applied
}

// ============================================================================
// Script parsing
// ============================================================================

/// Errors from parsing a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The first word is not a known command.
    UnknownCommand(String),
    /// A command is missing an argument.
    MissingArgument { command: &'static str, argument: &'static str },
    /// A modifier or flag word is not recognised.
    UnknownFlag(String),
    /// A position is not a non-negative integer.
    InvalidNumber(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand(cmd) => write!(f, "unknown command '{}'", cmd),
            ScriptError::MissingArgument { command, argument } => {
                write!(f, "'{}' needs a {} argument", command, argument)
            }
            ScriptError::UnknownFlag(flag) => write!(f, "unknown flag '{}'", flag),
            ScriptError::InvalidNumber(text) => write!(f, "'{}' is not a position", text),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parses one script line into the feed items it stands for.
///
/// Blank lines and `#` comments yield no items; `tap` yields a press and a
/// release.
pub fn parse_script_line(line: &str) -> Result<Vec<FeedItem>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Vec::new());
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };

    let items = match command {
        "down" => vec![FeedItem::Key(parse_key_event(command_name(command), rest, true)?)],
        "up" => vec![FeedItem::Key(parse_key_event(command_name(command), rest, false)?)],
        "tap" => {
            let press = parse_key_event("tap", rest, true)?;
            let mut release = InputEvent::release(press.key.clone())
                .with_modifiers(press.modifiers);
            release.source = press.source;
            vec![FeedItem::Key(press), FeedItem::Key(release)]
        }
        "type" => {
            // Only the single separator after the command is dropped.
            let after = &line.trim_start()[command.len()..];
            let separator = after.chars().next().map_or(0, char::len_utf8);
            let text = &after[separator..];
            vec![FeedItem::Edit(EditorAction::insert(text.trim_end_matches(['\r', '\n'])))]
        }
        "select" => {
            let mut words = rest.split_whitespace();
            let start = parse_position(words.next(), "start")?;
            let end = parse_position(words.next(), "end")?;
            vec![FeedItem::Edit(EditorAction::Select { start, end })]
        }
        "home" => vec![FeedItem::Edit(EditorAction::Home)],
        "end" => vec![FeedItem::Edit(EditorAction::End)],
        "left" => vec![FeedItem::Edit(EditorAction::Left)],
        "right" => vec![FeedItem::Edit(EditorAction::Right)],
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    Ok(items)
}

fn command_name(command: &str) -> &'static str {
    match command {
        "down" => "down",
        "up" => "up",
        _ => "tap",
    }
}

fn parse_key_event(command: &'static str, rest: &str, press: bool) -> Result<InputEvent, ScriptError> {
    let mut words = rest.split_whitespace();
    let key = words.next().ok_or(ScriptError::MissingArgument {
        command,
        argument: "key",
    })?;

    let mut event = if press {
        InputEvent::press(key)
    } else {
        InputEvent::release(key)
    };
    let mut modifiers = ModifierSnapshot::default();

    for flag in words {
        match flag {
            "shift" => modifiers.shift = true,
            "ctrl" => modifiers.ctrl = true,
            "alt" => modifiers.alt = true,
            "meta" => modifiers.meta = true,
            "repeat" => event = event.repeated(),
            "synthetic" => event = event.synthetic(),
            other => return Err(ScriptError::UnknownFlag(other.to_string())),
        }
    }

    Ok(event.with_modifiers(modifiers))
}

fn parse_position(word: Option<&str>, argument: &'static str) -> Result<usize, ScriptError> {
    let word = word.ok_or(ScriptError::MissingArgument {
        command: "select",
        argument,
    })?;
    word.parse()
        .map_err(|_| ScriptError::InvalidNumber(word.to_string()))
}
