// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the key layout table.
//!
//! This module defines the key identifier and layout types shared by the
//! modifier state machine and the keyboard controller, the layout table
//! itself, and the error and validation types returned when a table is
//! loaded from JSON.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal error that prevents the table from being used
    Error,
    /// Non-fatal issue that should be addressed
    Warning,
}

/// A validation issue discovered while loading a layout table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Severity level (Error or Warning)
    pub severity: Severity,
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the field that caused the issue (e.g., "keys[KeyQ].ru")
    pub field_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to the validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns true if this issue prevents the table from being used.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };

        write!(f, "[{}] {}: {}", severity_str, self.field_path, self.message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for layout table loading.
///
/// Each variant carries enough context (file path, JSON line number,
/// suggestion) to produce a useful message without the caller having to
/// re-derive it.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error occurred while reading a layout file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// Validation errors found after parsing
    ValidationError {
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
        /// Optional file path being validated
        file_path: Option<String>,
    },
}

impl ParseError {
    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(
        source: serde_json::Error,
        file_path: impl Into<String>,
    ) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation_error(issues: Vec<ValidationIssue>) -> Self {
        Self::ValidationError {
            issues,
            file_path: None,
        }
    }

    /// Attaches a file path to the error if it does not already carry one.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            ParseError::ValidationError {
                issues,
                file_path: None,
            } => ParseError::ValidationError {
                issues,
                file_path: Some(path.into()),
            },
            other => other,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::ValidationError { issues, file_path } => {
                write!(f, "Validation failed")?;
                if let Some(path) = file_path {
                    write!(f, " for file '{}'", path)?;
                }
                writeln!(f, " with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, issue)?;
                    if i + 1 < issues.len() {
                        writeln!(f)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::IoError { source, .. } => Some(source),
            ParseError::JsonError { source, .. } => Some(source),
            ParseError::ValidationError { .. } => None,
        }
    }
}

// ============================================================================
// ParseResult Type
// ============================================================================

/// Result of successfully loading a table, with any non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// The successfully parsed table
    pub table: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<ValidationIssue>,
}

impl<T> ParseResult<T> {
    /// Creates a new parse result with warnings.
    pub fn with_warnings(table: T, warnings: Vec<ValidationIssue>) -> Self {
        Self { table, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consumes the result and returns the table, discarding warnings.
    pub fn into_table(self) -> T {
        self.table
    }
}

// ============================================================================
// Key and Layout Types
// ============================================================================

/// Stable token naming a physical key, e.g. `"KeyQ"` or `"ShiftLeft"`.
///
/// The identifier is the same under both layouts; only the glyph looked up
/// with it changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for KeyIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for KeyIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The active glyph set.
///
/// Serialized with the short language tags used by the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Latin (English QWERTY) glyphs
    #[default]
    #[serde(rename = "en")]
    Latin,
    /// Cyrillic (Russian JCUKEN) glyphs
    #[serde(rename = "ru")]
    Cyrillic,
}

impl Layout {
    /// Returns the other layout.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Layout::Latin => Layout::Cyrillic,
            Layout::Cyrillic => Layout::Latin,
        }
    }

    /// Returns the tag stored in the preference store.
    pub fn tag(self) -> &'static str {
        match self {
            Layout::Latin => "en",
            Layout::Cyrillic => "ru",
        }
    }

    /// Reads a stored preference value.
    ///
    /// Only `"ru"` selects Cyrillic; a missing or unrecognised value
    /// falls back to Latin.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("ru") => Layout::Cyrillic,
            _ => Layout::Latin,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of the layout table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    /// Whether the key triggers an editor action instead of emitting text.
    #[serde(default)]
    pub func: bool,

    /// Base glyph (or label, for functional keys) under the Latin layout
    #[serde(rename = "en")]
    pub latin: String,

    /// Base glyph (or label, for functional keys) under the Cyrillic layout
    #[serde(rename = "ru")]
    pub cyrillic: String,
}

impl KeyDefinition {
    /// Creates a character-producing key.
    pub fn character(latin: impl Into<String>, cyrillic: impl Into<String>) -> Self {
        Self {
            func: false,
            latin: latin.into(),
            cyrillic: cyrillic.into(),
        }
    }

    /// Creates a functional key with the same label in both layouts.
    pub fn functional(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            func: true,
            latin: label.clone(),
            cyrillic: label,
        }
    }

    /// Returns the base glyph for the given layout.
    pub fn glyph(&self, layout: Layout) -> &str {
        match layout {
            Layout::Latin => &self.latin,
            Layout::Cyrillic => &self.cyrillic,
        }
    }
}

/// Immutable mapping from key identifier to its glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutTable {
    /// Table name
    pub name: String,

    /// Table version
    #[serde(default)]
    pub version: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Key definitions indexed by identifier
    #[serde(default)]
    pub keys: BTreeMap<KeyIdentifier, KeyDefinition>,

    /// Visual rows, top to bottom, for renderers that lay keys out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<KeyIdentifier>>,
}

impl LayoutTable {
    /// Creates an empty table with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0".into(),
            ..Self::default()
        }
    }

    /// Adds or replaces a key definition, returning `self` for chaining.
    pub fn with_key(mut self, id: impl Into<KeyIdentifier>, def: KeyDefinition) -> Self {
        self.keys.insert(id.into(), def);
        self
    }

    /// Looks up a key definition.
    pub fn get(&self, id: &str) -> Option<&KeyDefinition> {
        self.keys.get(id)
    }

    /// Returns true if the table defines the key.
    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    /// Iterates over all keys in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyIdentifier, &KeyDefinition)> {
        self.keys.iter()
    }

    /// Returns the number of keys in the table.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
