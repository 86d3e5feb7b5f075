//! FODS writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fods_core::{NamedRange, NamedRangeResolver, Row, Spreadsheet};
use quick_xml::escape::escape;

use crate::error::FodsResult;
use crate::options::FodsWriteOptions;
use crate::render::CellRenderer;
use crate::template::{DOCUMENT_HEAD, DOCUMENT_TAIL};

/// Flat OpenDocument Spreadsheet writer
pub struct FodsWriter;

impl FodsWriter {
    /// Write a spreadsheet to a file path
    pub fn write_file<P: AsRef<Path>>(
        spreadsheet: &Spreadsheet,
        path: P,
        options: &FodsWriteOptions,
    ) -> FodsResult<()> {
        let file = File::create(path)?;
        Self::write(spreadsheet, BufWriter::new(file), options)
    }

    /// Write a spreadsheet to a writer
    pub fn write<W: Write>(
        spreadsheet: &Spreadsheet,
        mut writer: W,
        options: &FodsWriteOptions,
    ) -> FodsResult<()> {
        let content = Self::build(spreadsheet, options)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Build the whole document as a string
    ///
    /// Nothing is written anywhere; two builds never share state. Fails only
    /// when a cell declaring a named range lies beyond column `Z`.
    pub fn build(spreadsheet: &Spreadsheet, options: &FodsWriteOptions) -> FodsResult<String> {
        let named_ranges = if options.named_ranges {
            NamedRangeResolver::resolve(spreadsheet)?
        } else {
            Vec::new()
        };

        log::debug!(
            "building FODS document: {} rows, {} cells, {} named ranges",
            spreadsheet.row_count(),
            spreadsheet.cell_count(),
            named_ranges.len()
        );

        let mut content = String::from(DOCUMENT_HEAD);

        content.push_str(&format!(
            "            <table:table table:name=\"{}\">\n",
            escape(&options.sheet_name)
        ));
        for row in spreadsheet.rows() {
            content.push_str(&Self::render_row(row));
        }
        content.push_str("            </table:table>\n");

        if !named_ranges.is_empty() {
            Self::write_named_expressions(&mut content, &named_ranges, &options.sheet_name);
        }

        content.push_str(DOCUMENT_TAIL);
        Ok(content)
    }

    fn render_row(row: &Row) -> String {
        let mut content = String::from("                <table:table-row>\n");
        for cell in row {
            content.push_str("                    ");
            content.push_str(&CellRenderer::render(cell));
            content.push('\n');
        }
        content.push_str("                </table:table-row>\n");
        content
    }

    fn write_named_expressions(content: &mut String, ranges: &[NamedRange], sheet_name: &str) {
        let sheet = quote_sheet_name(sheet_name);

        content.push_str("            <table:named-expressions>\n");
        for range in ranges {
            let (start, end) = range.span();
            let base = format!("${}.{}", sheet, range.base_cell());
            let target = if range.is_single_cell() {
                base.clone()
            } else {
                format!("${}.{}:.{}", sheet, start, end)
            };

            content.push_str(&format!(
                "                <table:named-range table:name=\"{}\" table:base-cell-address=\"{}\" table:cell-range-address=\"{}\" />\n",
                escape(range.name()),
                escape(&base),
                escape(&target)
            ));
        }
        content.push_str("            </table:named-expressions>\n");
    }
}

/// Sheet qualifier for cell range addresses; names other than plain
/// identifiers are single-quoted with embedded quotes doubled.
fn quote_sheet_name(name: &str) -> String {
    if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fods_core::{Cell, ValueType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_sheet_name() {
        assert_eq!(quote_sheet_name("Sheet1"), "Sheet1");
        assert_eq!(quote_sheet_name("My Sheet"), "'My Sheet'");
        assert_eq!(quote_sheet_name("Bob's"), "'Bob''s'");
    }

    #[test]
    fn test_render_row() {
        let row = vec![Cell::text("a"), Cell::value("1", ValueType::Float)];
        let rendered = FodsWriter::render_row(&row);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("                <table:table-row>\n"));
        assert!(rendered.ends_with("                </table:table-row>\n"));
    }

    #[test]
    fn test_named_expressions_block() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([
            Cell::value("1", ValueType::Float).in_range("one"),
            Cell::value("1", ValueType::Float).in_range("one"),
            Cell::value("1", ValueType::Float).in_range("one"),
        ]);
        sheet.push_row([Cell::value("5", ValueType::Float).in_range("five")]);

        let doc = FodsWriter::build(&sheet, &FodsWriteOptions::default()).unwrap();
        assert!(doc.contains(
            r#"<table:named-range table:name="one" table:base-cell-address="$Sheet1.$A$1" table:cell-range-address="$Sheet1.$A$1:.$C$1" />"#
        ));
        assert!(doc.contains(
            r#"<table:named-range table:name="five" table:base-cell-address="$Sheet1.$A$2" table:cell-range-address="$Sheet1.$A$2" />"#
        ));
        assert_eq!(doc.matches("<table:named-range ").count(), 2);
        assert!(doc.find("name=\"one\"").unwrap() < doc.find("name=\"five\"").unwrap());
    }

    #[test]
    fn test_named_ranges_disabled() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([Cell::value("1", ValueType::Float).in_range("one")]);

        let options = FodsWriteOptions::default().without_named_ranges();
        let doc = FodsWriter::build(&sheet, &options).unwrap();
        assert!(!doc.contains("named-expressions"));
    }

    #[test]
    fn test_write_to_buffer() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row(["a"]);

        let mut buf = Vec::new();
        FodsWriter::write(&sheet, &mut buf, &FodsWriteOptions::default()).unwrap();
        let expected = FodsWriter::build(&sheet, &FodsWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
