//! Named range resolution
//!
//! Cells declare membership in a named range through their `range` property.
//! [`NamedRangeResolver`] scans a [`Spreadsheet`] once in row-major order and
//! groups the declaring cells by name.
//!
//! The span of a group runs from its first declared member to its last
//! declared member. Members are expected to be declared contiguously; a
//! scattered group still produces a first-to-last span, which may cover
//! cells that never declared the range.

use ahash::AHashMap;

use crate::address::Address;
use crate::error::Result;
use crate::spreadsheet::Spreadsheet;

/// A named range derived from the cells that declared it
///
/// Only [`NamedRangeResolver`] creates these, so every range has at least
/// one member.
///
/// ```compile_fail
/// use fods_core::NamedRange;
///
/// let empty = NamedRange { name: "x".into(), members: vec![] };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRange {
    name: String,
    members: Vec<Address>,
}

impl NamedRange {
    fn new(name: &str, first: Address) -> Self {
        Self {
            name: name.to_string(),
            members: vec![first],
        }
    }

    /// The name (e.g., "celsius", "TaxRate")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member cells in scan order, all in `$A$1` form
    pub fn members(&self) -> &[Address] {
        &self.members
    }

    /// First declared member, used as the base cell of the range
    pub fn base_cell(&self) -> &Address {
        &self.members[0]
    }

    /// First and last declared members
    pub fn span(&self) -> (&Address, &Address) {
        (&self.members[0], &self.members[self.members.len() - 1])
    }

    /// Whether the range refers to a single cell
    pub fn is_single_cell(&self) -> bool {
        self.members.len() == 1
    }

    /// Format as `$A$1` or `$A$1:$C$1`
    pub fn to_a1_string(&self) -> String {
        let (start, end) = self.span();
        if self.is_single_cell() {
            start.to_a1_string()
        } else {
            format!("{}:{}", start, end)
        }
    }
}

/// Groups range declarations of a spreadsheet into [`NamedRange`]s
pub struct NamedRangeResolver;

impl NamedRangeResolver {
    /// Resolve all named ranges, in order of each name's first occurrence
    ///
    /// Fails when a declaring cell sits outside the encodable grid
    /// (column beyond `Z`).
    ///
    /// # Examples
    /// ```
    /// use fods_core::{Cell, NamedRangeResolver, Spreadsheet, ValueType};
    ///
    /// let mut sheet = Spreadsheet::new();
    /// sheet.push_row((0..3).map(|_| Cell::value("1", ValueType::Float).in_range("one")));
    ///
    /// let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
    /// assert_eq!(ranges.len(), 1);
    /// assert_eq!(ranges[0].to_a1_string(), "$A$1:$C$1");
    /// ```
    pub fn resolve(spreadsheet: &Spreadsheet) -> Result<Vec<NamedRange>> {
        let mut ranges: Vec<NamedRange> = Vec::new();
        let mut index_by_name: AHashMap<&str, usize> = AHashMap::new();

        for (row, col, cell) in spreadsheet.iter_cells() {
            let Some(name) = cell.range() else {
                continue;
            };

            let address = Address::absolute(col as u32 + 1, row as u32 + 1)?;

            match index_by_name.get(name) {
                Some(&idx) => ranges[idx].members.push(address),
                None => {
                    index_by_name.insert(name, ranges.len());
                    ranges.push(NamedRange::new(name, address));
                }
            }
        }

        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, ValueType};
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn float(range: &str) -> Cell {
        Cell::value("1", ValueType::Float).in_range(range)
    }

    #[test]
    fn test_single_row_group() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([float("one"), float("one"), float("one")]);

        let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].name(), "one");
        assert_eq!(ranges[0].members().len(), 3);
        assert_eq!(ranges[0].base_cell().to_a1_string(), "$A$1");
        assert_eq!(ranges[0].to_a1_string(), "$A$1:$C$1");
    }

    #[test]
    fn test_single_cell_group() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([Cell::text("Celsius"), float("celsius")]);
        sheet.push_row([Cell::text("Fahrenheit"), Cell::expression("(celsius * (9/5)) + 32")]);

        let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].is_single_cell());
        assert_eq!(ranges[0].to_a1_string(), "$B$1");
    }

    #[test]
    fn test_first_occurrence_order() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([float("beta"), float("alpha")]);
        sheet.push_row([float("beta"), float("alpha")]);
        sheet.push_row([Cell::formula("SUM", ["1"]).in_range("gamma")]);

        let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
        let names: Vec<_> = ranges.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["beta", "alpha", "gamma"]);
        assert_eq!(ranges[0].to_a1_string(), "$A$1:$A$2");
        assert_eq!(ranges[1].to_a1_string(), "$B$1:$B$2");
        assert_eq!(ranges[2].to_a1_string(), "$A$3");
    }

    #[test]
    fn test_span_follows_declaration_order() {
        // Scattered members: the span is first-to-last in scan order,
        // not a geometric bounding box.
        let mut sheet = Spreadsheet::new();
        sheet.push_row([Cell::text("x"), Cell::text("x"), float("r")]);
        sheet.push_row([float("r")]);

        let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
        assert_eq!(ranges[0].to_a1_string(), "$C$1:$A$2");
    }

    #[test]
    fn test_resolved_ranges_are_never_empty() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row([float("a"), Cell::text("x"), float("b")]);
        sheet.push_row([float("a")]);

        let ranges = NamedRangeResolver::resolve(&sheet).unwrap();
        assert_eq!(ranges.len(), 2);
        for range in &ranges {
            assert!(!range.members().is_empty());
            assert_eq!(range.base_cell(), &range.members()[0]);
        }
        assert_eq!(
            ranges[0].members(),
            &[Address::absolute(1, 1).unwrap(), Address::absolute(1, 2).unwrap()]
        );
    }

    #[test]
    fn test_no_ranges() {
        let mut sheet = Spreadsheet::new();
        sheet.push_row(["a", "b"]);
        assert!(NamedRangeResolver::resolve(&sheet).unwrap().is_empty());
    }

    #[test]
    fn test_range_beyond_column_z() {
        let mut row: Vec<Cell> = (0..26).map(|_| Cell::text("x")).collect();
        row.push(float("wide"));
        let sheet = Spreadsheet::from_rows(vec![row]);

        assert_eq!(
            NamedRangeResolver::resolve(&sheet),
            Err(Error::ColumnOutOfRange(27))
        );
    }
}
