// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Preference key under which the active layout is stored.
pub const LANGUAGE_KEY: &str = "lang";

/// File name of the embedded default layout table.
pub const DEFAULT_LAYOUT: &str = "en_ru.json";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dualboard.json";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "DUALBOARD_CONFIG";

/// Text inserted by the Tab key unless configured otherwise.
pub const DEFAULT_TAB_TEXT: &str = "    ";

/// Capacity of the channel between the stdin reader and the feed driver.
pub const FEED_CHANNEL_CAPACITY: usize = 64;
