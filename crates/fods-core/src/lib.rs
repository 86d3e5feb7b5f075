//! # fods-core
//!
//! Core data structures for the fods spreadsheet generator.
//!
//! This crate provides the fundamental types used throughout fods:
//! - [`Cell`] - Text, typed value, or formula cells
//! - [`Spreadsheet`] - Rows of cells making up one sheet
//! - [`Address`] - One-letter A1 addresses with `$` markers
//! - [`NamedRangeResolver`] - Groups range declarations into [`NamedRange`]s
//!
//! ## Example
//!
//! ```rust
//! use fods_core::{Cell, CellStyle, NamedRangeResolver, Spreadsheet, ValueType};
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.push_row([
//!     Cell::text("Celsius"),
//!     Cell::value("42.3324", ValueType::Float)
//!         .with_style(CellStyle::Input)
//!         .in_range("celsius"),
//! ]);
//! sheet.push_row([
//!     Cell::text("Fahrenheit"),
//!     Cell::expression("(celsius * (9/5)) + 32"),
//! ]);
//!
//! let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
//! assert_eq!(ranges[0].to_a1_string(), "$B$1");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod named_range;
pub mod spreadsheet;

// Re-exports for convenience
pub use address::{address, column_letter, range_reference, Absolute, Address};
pub use cell::{Cell, CellStyle, FormulaArguments, FormulaCell, ValueCell, ValueType};
pub use error::{Error, Result};
pub use named_range::{NamedRange, NamedRangeResolver};
pub use spreadsheet::{Row, Spreadsheet};

/// Highest column index the one-letter encoding can express (`Z`)
pub const MAX_COLUMN: u32 = 26;
