//! # fods
//!
//! Generate Flat OpenDocument Spreadsheet (`.fods`) documents from rows of
//! typed cells. The output opens (and recalculates) in LibreOffice and other
//! OpenDocument-aware office suites.
//!
//! ## Features
//!
//! - Text, float, date, time, currency and percentage cells
//! - `input` / `calculated` style overlays
//! - Formulas, either function calls or raw expressions
//! - Named ranges declared per cell
//! - JSON input (arrays of rows)
//!
//! ## Example
//!
//! ```rust
//! use fods::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.push_row([
//!     Cell::value("42.3324", ValueType::Float).in_range("value"),
//!     Cell::value("42.3324", ValueType::Float),
//!     Cell::formula("SUM", [range_reference(
//!         &Address::new(1, 1).unwrap(),
//!         &Address::new(2, 1).unwrap(),
//!     )]),
//! ]);
//!
//! let document = fods::build_spreadsheet(&sheet).unwrap();
//! assert!(document.contains(r#"table:formula="of:=SUM([.A1:.B1])""#));
//!
//! // Save to file
//! // sheet.save("output.fods").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use fods_core::{
    // Addresses
    address,
    column_letter,
    range_reference,
    Absolute,
    Address,
    // Cell types
    Cell,
    CellStyle,
    // Error types
    Error,
    FormulaArguments,
    FormulaCell,
    // Named ranges
    NamedRange,
    NamedRangeResolver,
    Result,
    Row,
    // Main types
    Spreadsheet,
    ValueCell,
    ValueType,

    // Constants
    MAX_COLUMN,
};

// Re-export writer types
pub use fods_writer::{
    CellRenderer, DataStyle, FodsError, FodsResult, FodsWriteOptions, FodsWriter,
    CALCULATED_STYLE,
};

use std::path::Path;

/// Build a FODS document with default options
pub fn build_spreadsheet(spreadsheet: &Spreadsheet) -> FodsResult<String> {
    FodsWriter::build(spreadsheet, &FodsWriteOptions::default())
}

/// Parse a spreadsheet from its JSON form (an array of rows)
///
/// ```rust
/// let sheet = fods::load_json(r#"[["a", {"value": "1", "valueType": "float"}]]"#).unwrap();
/// assert_eq!(sheet.cell_count(), 2);
/// ```
pub fn load_json(json: &str) -> Result<Spreadsheet> {
    serde_json::from_str(json).map_err(|e| Error::other(format!("Invalid spreadsheet JSON: {}", e)))
}

/// Extension trait for Spreadsheet to add file I/O
pub trait SpreadsheetExt {
    /// Open a spreadsheet from a JSON file
    fn open<P: AsRef<Path>>(path: P) -> Result<Spreadsheet>;

    /// Save the spreadsheet as a `.fods` file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl SpreadsheetExt for Spreadsheet {
    fn open<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("json") => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))?;
                load_json(&text)
            }
            _ => Err(Error::other(format!(
                "Unsupported input format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("fods") => FodsWriter::write_file(self, path, &FodsWriteOptions::default())
                .map_err(|e| match e {
                    FodsError::Core(core) => core,
                    other => Error::other(other.to_string()),
                }),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
