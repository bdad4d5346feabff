// SPDX-License-Identifier: GPL-3.0-only

//! Key layout table for the dualboard keyboard.
//!
//! The layout table maps each physical key identifier to its Latin and
//! Cyrillic base glyphs and marks which keys are functional. It is immutable
//! once loaded; the modifier state machine consults it and the renderer
//! reads its row order.
//!
//! # Example Usage
//!
//! ## Loading the Embedded Table
//!
//! ```rust,ignore
//! use dualboard::layout::default_table;
//!
//! let table = default_table()?.into_table();
//! println!("{} keys", table.len());
//! ```
//!
//! ## Loading a Custom Table
//!
//! ```rust,ignore
//! use dualboard::layout::{parse_layout_file, ParseError};
//!
//! match parse_layout_file("my_table.json") {
//!     Ok(result) => {
//!         for warning in &result.warnings {
//!             eprintln!("Warning: {}", warning);
//!         }
//!     }
//!     Err(ParseError::JsonError { line_number, .. }) => {
//!         eprintln!("Syntax error near line {:?}", line_number);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Table Format
//!
//! ```json
//! {
//!     "name": "English / Russian",
//!     "version": "1.0",
//!     "keys": {
//!         "KeyQ": {"en": "q", "ru": "й"},
//!         "Enter": {"func": true, "en": "Enter", "ru": "Enter"}
//!     },
//!     "rows": [["KeyQ", "Enter"]]
//! }
//! ```

// Sub-modules
pub mod parser;
pub mod types;
pub mod validation;

// Re-export public API - Error handling types
pub use types::{ParseError, ParseResult, Severity, ValidationIssue};

// Re-export public API - Parser functions
pub use parser::{
    default_table, embedded_layout_names, parse_embedded_layout, parse_layout_file,
    parse_layout_from_string,
};

// Re-export public API - Data structures
pub use types::{KeyDefinition, KeyIdentifier, Layout, LayoutTable};
