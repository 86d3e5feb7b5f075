//! Writer options

/// Options for writing FODS documents
#[derive(Debug, Clone)]
pub struct FodsWriteOptions {
    /// Name of the single table (default: `Sheet1`)
    pub sheet_name: String,
    /// Emit a `<table:named-expressions>` block for cells declaring a range
    pub named_ranges: bool,
}

impl Default for FodsWriteOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            named_ranges: true,
        }
    }
}

impl FodsWriteOptions {
    /// Use a different sheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Skip the named-range block
    pub fn without_named_ranges(mut self) -> Self {
        self.named_ranges = false;
        self
    }
}
