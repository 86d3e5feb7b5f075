//! Cell types
//!
//! A [`Cell`] is one of three shapes:
//! - [`Cell::Text`] - a bare display string
//! - [`Cell::Value`] - a literal value with a declared [`ValueType`]
//! - [`Cell::Formula`] - a function call or raw expression

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic data kind of a value cell
///
/// Unknown type names are kept in [`ValueType::Other`] and render as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ValueType {
    String,
    Float,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM:SS`
    Time,
    Currency,
    /// Fractional magnitude, `0.4223` displays as `42.23%`
    Percentage,
    Other(String),
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            ValueType::String => "string",
            ValueType::Float => "float",
            ValueType::Date => "date",
            ValueType::Time => "time",
            ValueType::Currency => "currency",
            ValueType::Percentage => "percentage",
            ValueType::Other(name) => name,
        }
    }
}

impl From<&str> for ValueType {
    fn from(s: &str) -> Self {
        match s {
            "string" => ValueType::String,
            "float" => ValueType::Float,
            "date" => ValueType::Date,
            "time" => ValueType::Time,
            "currency" => ValueType::Currency,
            "percentage" => ValueType::Percentage,
            other => ValueType::Other(other.to_string()),
        }
    }
}

impl From<String> for ValueType {
    fn from(s: String) -> Self {
        ValueType::from(s.as_str())
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual overlay applied on top of the data-type style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellStyle {
    /// Value the user is expected to edit
    Input,
    /// Value derived from other cells
    Calculated,
}

/// A literal value with its declared type
///
/// The value is kept as text so no precision or formatting is lost on the
/// way to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValueCell {
    pub value: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value_type: Option<ValueType>,
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "cellStyle", skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<CellStyle>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub range: Option<String>,
}

/// Arguments of a formula cell: one preformatted string or a list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FormulaArguments {
    Single(String),
    List(Vec<String>),
}

impl FormulaArguments {
    /// Join list arguments with the OpenFormula separator `;`
    pub fn joined(&self) -> String {
        match self {
            FormulaArguments::Single(s) => s.clone(),
            FormulaArguments::List(args) => args.join(";"),
        }
    }
}

/// A formula cell
///
/// An empty `function_name` means `arguments` holds a whole expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormulaCell {
    pub function_name: String,
    pub arguments: FormulaArguments,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub range: Option<String>,
}

impl FormulaCell {
    /// Formula text without the `of:=` namespace prefix
    ///
    /// # Examples
    /// ```
    /// use fods_core::Cell;
    ///
    /// let cell = Cell::formula("SUM", ["1", "2"]);
    /// assert_eq!(cell.as_formula().unwrap().expression(), "SUM(1;2)");
    ///
    /// let cell = Cell::expression("(celsius * (9/5)) + 32");
    /// assert_eq!(cell.as_formula().unwrap().expression(), "(celsius * (9/5)) + 32");
    /// ```
    pub fn expression(&self) -> String {
        let args = self.arguments.joined();
        if self.function_name.is_empty() {
            args
        } else {
            format!("{}({})", self.function_name, args)
        }
    }
}

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    Text(String),
    Formula(FormulaCell),
    Value(ValueCell),
}

impl Cell {
    /// Create a bare text cell
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Create a typed value cell
    pub fn value(value: impl Into<String>, value_type: ValueType) -> Self {
        Cell::Value(ValueCell {
            value: value.into(),
            value_type: Some(value_type),
            style: None,
            range: None,
        })
    }

    /// Create a value cell without a declared type
    pub fn untyped(value: impl Into<String>) -> Self {
        Cell::Value(ValueCell {
            value: value.into(),
            value_type: None,
            style: None,
            range: None,
        })
    }

    /// Create a function call formula, e.g. `SUM(A;B)`
    pub fn formula<I, S>(function_name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cell::Formula(FormulaCell {
            function_name: function_name.into(),
            arguments: FormulaArguments::List(arguments.into_iter().map(Into::into).collect()),
            range: None,
        })
    }

    /// Create a raw expression formula with no function wrapper
    pub fn expression(expression: impl Into<String>) -> Self {
        Cell::Formula(FormulaCell {
            function_name: String::new(),
            arguments: FormulaArguments::Single(expression.into()),
            range: None,
        })
    }

    /// Set the style overlay (ignored for text and formula cells)
    pub fn with_style(mut self, style: CellStyle) -> Self {
        if let Cell::Value(v) = &mut self {
            v.style = Some(style);
        }
        self
    }

    /// Declare membership in a named range (ignored for text cells)
    pub fn in_range(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Cell::Value(v) => v.range = Some(name.into()),
            Cell::Formula(f) => f.range = Some(name.into()),
            Cell::Text(_) => {}
        }
        self
    }

    /// Named range this cell belongs to, if any
    pub fn range(&self) -> Option<&str> {
        match self {
            Cell::Value(v) => v.range.as_deref(),
            Cell::Formula(f) => f.range.as_deref(),
            Cell::Text(_) => None,
        }
    }

    pub fn as_formula(&self) -> Option<&FormulaCell> {
        match self {
            Cell::Formula(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ValueCell> {
        match self {
            Cell::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<ValueCell> for Cell {
    fn from(v: ValueCell) -> Self {
        Cell::Value(v)
    }
}

impl From<FormulaCell> for Cell {
    fn from(f: FormulaCell) -> Self {
        Cell::Formula(f)
    }
}
