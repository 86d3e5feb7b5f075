//! # fods-writer
//!
//! Flat OpenDocument Spreadsheet (`.fods`) writer for fods.
//!
//! The whole document is built in memory by [`FodsWriter::build`]; the
//! `write` helpers only persist that string.

pub mod error;
pub mod options;
pub mod render;
pub mod writer;

mod template;

pub use error::{FodsError, FodsResult};
pub use options::FodsWriteOptions;
pub use render::{CellRenderer, DataStyle, CALCULATED_STYLE};
pub use writer::FodsWriter;
