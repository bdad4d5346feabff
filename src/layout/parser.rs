// SPDX-License-Identifier: GPL-3.0-only

//! Layout table loading from JSON.
//!
//! Tables can come from a file on disk or from the table embedded in the
//! binary. Both paths go through the same deserialization and validation.

use crate::app_settings;
use crate::layout::types::{LayoutTable, ParseError, ParseResult};
use crate::layout::validation::validate_table;
use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::path::Path;

/// Layout tables compiled into the binary.
#[derive(RustEmbed)]
#[folder = "resources/layouts/"]
struct EmbeddedLayouts;

/// Parses a layout table from a JSON file.
///
/// Distinguishes I/O failures from JSON failures and attaches the path to
/// validation errors.
///
/// # Example
///
/// ```rust,ignore
/// use dualboard::layout::parse_layout_file;
///
/// match parse_layout_file("resources/layouts/en_ru.json") {
///     Ok(result) => {
///         for warning in &result.warnings {
///             eprintln!("{}", warning);
///         }
///         println!("Loaded {} keys", result.table.len());
///     }
///     Err(e) => eprintln!("Failed to load layout table: {}", e),
/// }
/// ```
pub fn parse_layout_file(path: impl AsRef<Path>) -> Result<ParseResult<LayoutTable>, ParseError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, &display))?;

    let table: LayoutTable = serde_json::from_str(&json_str)
        .map_err(|e| ParseError::json_error_with_path(e, &display))?;

    validate_table(table).map_err(|e| e.with_path(display))
}

/// Parses a layout table from a JSON string.
pub fn parse_layout_from_string(json: &str) -> Result<ParseResult<LayoutTable>, ParseError> {
    let table: LayoutTable = serde_json::from_str(json).map_err(ParseError::json_error)?;
    validate_table(table)
}

/// Loads a table embedded in the binary by file name.
pub fn parse_embedded_layout(name: &str) -> Result<ParseResult<LayoutTable>, ParseError> {
    let file = EmbeddedLayouts::get(name).ok_or_else(|| {
        ParseError::io_error_with_path(
            io::Error::new(io::ErrorKind::NotFound, "no embedded layout table with this name"),
            name,
        )
    })?;

    let table: LayoutTable = serde_json::from_slice(&file.data)
        .map_err(|e| ParseError::json_error_with_path(e, name))?;

    validate_table(table).map_err(|e| e.with_path(name))
}

/// Loads the default English/Russian table.
pub fn default_table() -> Result<ParseResult<LayoutTable>, ParseError> {
    parse_embedded_layout(app_settings::DEFAULT_LAYOUT)
}

/// Lists the names of all embedded tables.
pub fn embedded_layout_names() -> Vec<String> {
    EmbeddedLayouts::iter().map(|name| name.into_owned()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Layout;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_TABLE: &str = r#"{
        "name": "Small",
        "version": "1.0",
        "keys": {
            "KeyQ": {"en": "q", "ru": "й"},
            "CapsLock": {"func": true, "en": "Caps Lock", "ru": "Caps Lock"},
            "ShiftLeft": {"func": true, "en": "Shift", "ru": "Shift"},
            "ShiftRight": {"func": true, "en": "Shift", "ru": "Shift"},
            "Backspace": {"func": true, "en": "Backspace", "ru": "Backspace"},
            "Enter": {"func": true, "en": "Enter", "ru": "Enter"}
        },
        "rows": [["KeyQ", "Enter"]]
    }"#;

    /// Test 1: Parse valid JSON string
    #[test]
    fn test_parse_valid_json_string() {
        let result = parse_layout_from_string(SMALL_TABLE).expect("Should parse valid JSON");
        assert!(!result.has_warnings(), "{:?}", result.warnings);

        let table = result.into_table();
        assert_eq!(table.name, "Small");
        assert_eq!(table.len(), 6);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.get("KeyQ").unwrap().glyph(Layout::Cyrillic), "й");
    }

    /// Test 2: Handle missing file with I/O error
    #[test]
    fn test_parse_missing_file() {
        let err = parse_layout_file("/nonexistent/path/to/table.json").unwrap_err();
        let display_str = format!("{}", err);

        match &err {
            ParseError::IoError {
                file_path,
                suggestion,
                ..
            } => {
                assert!(file_path.is_some(), "Error should include file path");
                assert!(suggestion.is_some(), "Error should include suggestion");
                assert!(display_str.contains("I/O error"));
                assert!(display_str.contains("/nonexistent/path/to/table.json"));
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    /// Test 3: Parse from a file on disk
    #[test]
    fn test_parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL_TABLE.as_bytes()).unwrap();

        let result = parse_layout_file(file.path()).expect("Should parse file");
        assert_eq!(result.table.name, "Small");
    }

    /// Test 4: Malformed JSON in a file reports path and line
    #[test]
    fn test_malformed_file_reports_line() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\n  \"name\": \"Broken\",\n  \"keys\": {\n    \"KeyQ\": {\"en\": \"q\"\n}")
            .unwrap();

        let err = parse_layout_file(file.path()).unwrap_err();
        match err {
            ParseError::JsonError {
                file_path,
                line_number,
                ..
            } => {
                assert_eq!(file_path, Some(file.path().display().to_string()));
                assert!(line_number.is_some());
            }
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }

    /// Test 5: Validation errors from a file carry its path
    #[test]
    fn test_validation_error_has_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "Empty", "version": "1.0", "keys": {}}"#)
            .unwrap();

        let err = parse_layout_file(file.path()).unwrap_err();
        match err {
            ParseError::ValidationError { file_path, .. } => {
                assert_eq!(file_path, Some(file.path().display().to_string()));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    /// Test 6: The embedded default table loads cleanly
    #[test]
    fn test_default_table() {
        let result = default_table().expect("default table should load");
        assert!(
            !result.has_warnings(),
            "default table should not warn: {:?}",
            result.warnings
        );

        let table = result.table;
        assert_eq!(table.len(), 64);
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.get("KeyF").unwrap().glyph(Layout::Cyrillic), "а");
        assert!(table.get("Tab").unwrap().func);
        assert!(!table.get("Space").unwrap().func);
    }

    /// Test 7: Unknown embedded names are I/O errors
    #[test]
    fn test_unknown_embedded_layout() {
        let err = parse_embedded_layout("missing.json").unwrap_err();
        assert!(matches!(err, ParseError::IoError { .. }));
        assert!(embedded_layout_names().contains(&app_settings::DEFAULT_LAYOUT.to_string()));
    }
}
