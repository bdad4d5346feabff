// SPDX-License-Identifier: GPL-3.0-only

//! Dualboard command line driver
//!
//! Reads input script lines from stdin (see [`dualboard::feed`] for the
//! format), applies them to a keyboard and prints every render frame.
//! Diagnostics go to stderr, frames and the final buffer to stdout.

use std::path::PathBuf;

use dualboard::app_settings;
use dualboard::config::Config;
use dualboard::feed::{self, FeedItem, parse_script_line};
use dualboard::fl;
use dualboard::i18n;
use dualboard::keyboard::{Keyboard, KeyboardSettings};
use dualboard::layout::{self, LayoutTable};
use dualboard::render::RenderFrame;
use dualboard::state::{JsonFilePreferences, MemoryPreferences, PreferenceStore};
use futures::SinkExt;
use futures::channel::mpsc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dualboard=info".parse()?),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let config = Config::discover(std::env::var_os(app_settings::CONFIG_ENV_VAR).map(PathBuf::from))?;
    let table = load_table(&config)?;

    let preferences: Box<dyn PreferenceStore> = match &config.preferences_path {
        Some(path) => Box::new(JsonFilePreferences::open(path)?),
        None => Box::new(MemoryPreferences::new()),
    };

    let rows_table = table.clone();
    let sink = move |frame: &RenderFrame| print_frame(&rows_table, frame);

    let mut keyboard = Keyboard::new(table, preferences, sink, KeyboardSettings::from(&config))
        .with_text(&config.initial_text);

    eprintln!("{}", fl!("language-hint"));
    keyboard.render();

    let (mut tx, rx) = mpsc::channel::<FeedItem>(app_settings::FEED_CHANNEL_CAPACITY);

    let reader = async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut number = 0usize;

        while let Some(line) = lines.next_line().await? {
            number += 1;
            match parse_script_line(&line) {
                Ok(items) => {
                    for item in items {
                        if tx.send(item).await.is_err() {
                            return Ok(());
                        }
                    }
                }
                Err(e) => tracing::warn!(
                    "{}",
                    fl!("script-error", line = number, error = e.to_string())
                ),
            }
        }

        Ok::<(), std::io::Error>(())
    };

    let (read, applied) = futures::join!(reader, feed::drive(&mut keyboard, rx));
    read?;

    tracing::info!("Applied {} inputs", applied);
    println!("{}", keyboard.buffer());

    Ok(())
}

fn load_table(config: &Config) -> Result<LayoutTable, layout::ParseError> {
    let result = match &config.layout_path {
        Some(path) => layout::parse_layout_file(path)?,
        None => layout::default_table()?,
    };

    for warning in &result.warnings {
        tracing::warn!("Layout table: {}", warning);
    }

    let table = result.into_table();
    tracing::info!(
        "{}",
        fl!("layout-loaded", name = table.name.clone(), count = table.len())
    );
    Ok(table)
}

fn print_frame(table: &LayoutTable, frame: &RenderFrame) {
    for row in frame.rows(table) {
        println!("{}", row.join(" "));
    }
    println!("{}", i18n::status_line(frame));
    println!("> {:?} [{}..{}]", frame.content, frame.selection.start, frame.selection.end);
}
