// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for key layout tables.
//!
//! Validation is permissive: anything the controller can still work with is
//! reported as a warning, and only tables that would make glyph resolution
//! ill-defined are rejected.

use crate::input::keycode::NamedKey;
use crate::layout::types::{
    KeyDefinition, Layout, LayoutTable, ParseError, ParseResult, Severity, ValidationIssue,
};

/// Keys the controller gives special meaning to.
const SPECIAL_KEYS: [NamedKey; 5] = [
    NamedKey::CapsLock,
    NamedKey::ShiftLeft,
    NamedKey::ShiftRight,
    NamedKey::Backspace,
    NamedKey::Enter,
];

/// Validates a table and returns it with warnings.
///
/// Returns a `ValidationError` carrying every error-severity issue if the
/// table cannot be used.
pub fn validate_table(table: LayoutTable) -> Result<ParseResult<LayoutTable>, ParseError> {
    let mut issues = Vec::new();

    validate_metadata(&table, &mut issues);
    validate_keys(&table, &mut issues);
    validate_rows(&table, &mut issues);
    validate_special_keys(&table, &mut issues);

    let (errors, warnings): (Vec<_>, Vec<_>) =
        issues.into_iter().partition(ValidationIssue::is_error);

    if !errors.is_empty() {
        return Err(ParseError::validation_error(errors));
    }

    Ok(ParseResult::with_warnings(table, warnings))
}

/// Checks table-level fields.
pub fn validate_metadata(table: &LayoutTable, issues: &mut Vec<ValidationIssue>) {
    if table.name.is_empty() {
        issues.push(
            ValidationIssue::new(Severity::Warning, "Layout table name is empty", "name")
                .with_suggestion("Provide a descriptive name for the table"),
        );
    }

    if table.version.is_empty() {
        issues.push(
            ValidationIssue::new(Severity::Warning, "Layout table version is empty", "version")
                .with_suggestion("Use semantic versioning (e.g., '1.0', '1.0.0')"),
        );
    }

    if table.is_empty() {
        issues.push(
            ValidationIssue::new(Severity::Error, "Layout table defines no keys", "keys")
                .with_suggestion("Add at least one entry under \"keys\""),
        );
    }
}

/// Checks every key's glyphs.
pub fn validate_keys(table: &LayoutTable, issues: &mut Vec<ValidationIssue>) {
    for (id, def) in table.iter() {
        if def.func {
            continue;
        }
        for layout in [Layout::Latin, Layout::Cyrillic] {
            validate_character_glyph(id.as_str(), def, layout, issues);
        }
    }
}

fn validate_character_glyph(
    id: &str,
    def: &KeyDefinition,
    layout: Layout,
    issues: &mut Vec<ValidationIssue>,
) {
    let glyph = def.glyph(layout);
    let path = format!("keys[{}].{}", id, layout.tag());

    match glyph.chars().count() {
        0 => issues.push(
            ValidationIssue::new(Severity::Error, "Character key has an empty glyph", path)
                .with_suggestion("Provide the character this key types, or mark it \"func\": true"),
        ),
        1 => {}
        n => issues.push(ValidationIssue::new(
            Severity::Warning,
            format!("Character key glyph '{}' is {} characters long", glyph, n),
            path,
        )),
    }
}

/// Checks that rows only reference defined keys.
pub fn validate_rows(table: &LayoutTable, issues: &mut Vec<ValidationIssue>) {
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, id) in row.iter().enumerate() {
            if !table.contains(id.as_str()) {
                issues.push(
                    ValidationIssue::new(
                        Severity::Error,
                        format!("Row references unknown key '{}'", id),
                        format!("rows[{}][{}]", row_idx, col_idx),
                    )
                    .with_suggestion("Add the key under \"keys\" or remove it from the row"),
                );
            }
        }
    }
}

/// Warns about missing or mis-classified keys the controller handles specially.
pub fn validate_special_keys(table: &LayoutTable, issues: &mut Vec<ValidationIssue>) {
    for named in SPECIAL_KEYS {
        let id = named.as_str();
        match table.get(id) {
            None => issues.push(ValidationIssue::new(
                Severity::Warning,
                format!("Table has no '{}' key", id),
                format!("keys[{}]", id),
            )),
            Some(def) if !def.func => issues.push(
                ValidationIssue::new(
                    Severity::Warning,
                    format!("'{}' is not marked functional and will type its label", id),
                    format!("keys[{}].func", id),
                )
                .with_suggestion("Set \"func\": true"),
            ),
            Some(_) => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::KeyDefinition;

    fn complete_table() -> LayoutTable {
        LayoutTable::new("test")
            .with_key("KeyQ", KeyDefinition::character("q", "й"))
            .with_key("CapsLock", KeyDefinition::functional("Caps Lock"))
            .with_key("ShiftLeft", KeyDefinition::functional("Shift"))
            .with_key("ShiftRight", KeyDefinition::functional("Shift"))
            .with_key("Backspace", KeyDefinition::functional("Backspace"))
            .with_key("Enter", KeyDefinition::functional("Enter"))
    }

    /// Test a complete table validates without warnings
    #[test]
    fn test_complete_table_has_no_warnings() {
        let result = validate_table(complete_table()).expect("table should be valid");
        assert!(
            !result.has_warnings(),
            "unexpected warnings: {:?}",
            result.warnings
        );
    }

    /// Test empty tables are rejected
    #[test]
    fn test_empty_table_is_error() {
        let err = validate_table(LayoutTable::new("empty")).unwrap_err();
        match err {
            ParseError::ValidationError { issues, .. } => {
                assert!(issues.iter().any(|i| i.field_path == "keys"));
            }
            _ => panic!("Expected ValidationError variant"),
        }
    }

    /// Test an empty character glyph is fatal
    #[test]
    fn test_empty_glyph_is_error() {
        let table = complete_table().with_key("KeyW", KeyDefinition::character("w", ""));
        let err = validate_table(table).unwrap_err();
        match err {
            ParseError::ValidationError { issues, .. } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field_path, "keys[KeyW].ru");
            }
            _ => panic!("Expected ValidationError variant"),
        }
    }

    /// Test multi-character glyphs only warn
    #[test]
    fn test_long_glyph_is_warning() {
        let table = complete_table().with_key("KeyW", KeyDefinition::character("ww", "ц"));
        let result = validate_table(table).expect("table should still load");
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.warnings[0].field_path, "keys[KeyW].en");
    }

    /// Test rows referencing unknown keys are fatal
    #[test]
    fn test_unknown_row_key_is_error() {
        let mut table = complete_table();
        table.rows = vec![vec!["KeyQ".into(), "KeyZ".into()]];
        let err = validate_table(table).unwrap_err();
        assert!(err.to_string().contains("rows[0][1]"));
    }

    /// Test missing and mis-classified special keys produce warnings
    #[test]
    fn test_special_key_warnings() {
        let mut table = complete_table();
        table.keys.remove("CapsLock");
        table = table.with_key("Enter", KeyDefinition::character("\n", "\n"));

        let result = validate_table(table).expect("table should still load");
        let paths: Vec<&str> = result
            .warnings
            .iter()
            .map(|w| w.field_path.as_str())
            .collect();
        assert!(paths.contains(&"keys[CapsLock]"));
        assert!(paths.contains(&"keys[Enter].func"));
    }
}
