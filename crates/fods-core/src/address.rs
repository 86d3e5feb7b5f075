//! A1-style cell addresses
//!
//! Columns and rows are one-based here, matching what a spreadsheet shows.
//! Only single-letter columns (`A` to `Z`) can be encoded.

use crate::error::{Error, Result};
use crate::MAX_COLUMN;
use std::fmt;
use std::str::FromStr;

/// Which axes of an address carry the `$` absolute marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Absolute {
    /// `A1`
    #[default]
    None,
    /// `$A1`
    Column,
    /// `A$1`
    Row,
    /// `$A$1`
    ColumnAndRow,
}

impl Absolute {
    /// Whether the column letter is prefixed with `$`
    pub fn column(self) -> bool {
        matches!(self, Absolute::Column | Absolute::ColumnAndRow)
    }

    /// Whether the row number is prefixed with `$`
    pub fn row(self) -> bool {
        matches!(self, Absolute::Row | Absolute::ColumnAndRow)
    }

    fn from_flags(column: bool, row: bool) -> Self {
        match (column, row) {
            (false, false) => Absolute::None,
            (true, false) => Absolute::Column,
            (false, true) => Absolute::Row,
            (true, true) => Absolute::ColumnAndRow,
        }
    }
}

impl FromStr for Absolute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Absolute::None),
            "column" => Ok(Absolute::Column),
            "row" => Ok(Absolute::Row),
            "both" | "columnandrow" | "column-and-row" => Ok(Absolute::ColumnAndRow),
            other => Err(Error::other(format!("unknown absolute marker '{}'", other))),
        }
    }
}

/// Convert a one-based column index to its letter (1 = A, 26 = Z)
///
/// # Examples
/// ```
/// use fods_core::address::column_letter;
///
/// assert_eq!(column_letter(1).unwrap(), 'A');
/// assert_eq!(column_letter(26).unwrap(), 'Z');
/// assert!(column_letter(0).is_err());
/// assert!(column_letter(27).is_err());
/// ```
pub fn column_letter(column: u32) -> Result<char> {
    if !(1..=MAX_COLUMN).contains(&column) {
        return Err(Error::ColumnOutOfRange(column));
    }
    Ok((b'A' + (column - 1) as u8) as char)
}

/// A validated cell address (e.g. `C7`, `$B$2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    column: u32,
    row: u32,
    absolute: Absolute,
}

impl Address {
    /// Create a relative address, validating both indices
    pub fn new(column: u32, row: u32) -> Result<Self> {
        Self::with_absolute(column, row, Absolute::None)
    }

    /// Create an address with explicit absolute markers
    pub fn with_absolute(column: u32, row: u32, absolute: Absolute) -> Result<Self> {
        column_letter(column)?;
        if row < 1 {
            return Err(Error::RowOutOfRange(row));
        }
        Ok(Self {
            column,
            row,
            absolute,
        })
    }

    /// Create a `$A$1` style address
    pub fn absolute(column: u32, row: u32) -> Result<Self> {
        Self::with_absolute(column, row, Absolute::ColumnAndRow)
    }

    /// One-based column index
    pub fn column(&self) -> u32 {
        self.column
    }

    /// One-based row index
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Absolute markers of this address
    pub fn absolute_markers(&self) -> Absolute {
        self.absolute
    }

    /// Same cell with different absolute markers
    pub fn to_absolute(self, absolute: Absolute) -> Self {
        Self { absolute, ..self }
    }

    /// Parse a single-letter A1 address such as `B2` or `$C$7`
    ///
    /// # Examples
    /// ```
    /// use fods_core::{Absolute, Address};
    ///
    /// let addr = Address::parse("$B2").unwrap();
    /// assert_eq!(addr.column(), 2);
    /// assert_eq!(addr.row(), 2);
    /// assert_eq!(addr.absolute_markers(), Absolute::Column);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut rest = s;

        let col_absolute = match rest.strip_prefix('$') {
            Some(stripped) => {
                rest = stripped;
                true
            }
            None => false,
        };

        let mut chars = rest.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => {
                return Err(Error::InvalidAddress(format!(
                    "no column letter in '{}'",
                    s
                )))
            }
        };
        rest = chars.as_str();

        let row_absolute = match rest.strip_prefix('$') {
            Some(stripped) => {
                rest = stripped;
                true
            }
            None => false,
        };

        if rest.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!("invalid row number in '{}'", s)));
        }
        let row: u32 = rest
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        let column = (letter as u8 - b'A') as u32 + 1;
        Self::with_absolute(column, row, Absolute::from_flags(col_absolute, row_absolute))
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();

        if self.absolute.column() {
            result.push('$');
        }
        // column was validated on construction
        result.push((b'A' + (self.column - 1) as u8) as char);

        if self.absolute.row() {
            result.push('$');
        }
        result.push_str(&self.row.to_string());

        result
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Encode a one-based `(column, row)` pair as an A1 address string
///
/// # Examples
/// ```
/// use fods_core::{address::address, Absolute};
///
/// assert_eq!(address(3, 7, Absolute::None).unwrap(), "C7");
/// assert_eq!(address(3, 7, Absolute::ColumnAndRow).unwrap(), "$C$7");
/// ```
pub fn address(column: u32, row: u32, absolute: Absolute) -> Result<String> {
    Ok(Address::with_absolute(column, row, absolute)?.to_a1_string())
}

/// Build an OpenFormula range operand, e.g. `[.A1:.B1]`
///
/// Intended for formula arguments: `SUM([.A1:.B1])`. A single-cell range
/// collapses to `[.A1]`.
pub fn range_reference(start: &Address, end: &Address) -> String {
    if start == end {
        format!("[.{}]", start)
    } else {
        format!("[.{}:.{}]", start, end)
    }
}
