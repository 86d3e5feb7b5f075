//! Prelude module - common imports for fods users
//!
//! ```rust
//! use fods::prelude::*;
//! ```

pub use crate::{
    range_reference,
    Absolute,
    Address,
    // Cell types
    Cell,
    CellStyle,
    // Error types
    Error,
    FodsError,
    // Writer
    FodsWriteOptions,
    FodsWriter,
    Result,

    // Main types
    Spreadsheet,
    // Extension traits
    SpreadsheetExt,
    ValueType,
};
