//! Cell to `<table:table-cell>` rendering

use fods_core::{Cell, CellStyle, FormulaCell, ValueCell, ValueType};
use quick_xml::escape::escape;

/// Style attached to every formula cell
pub const CALCULATED_STYLE: &str = "CALCULATED_STYLE";

/// Data-type styles defined in the document skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStyle {
    Float,
    Date,
    Time,
    Currency,
    Percentage,
}

impl DataStyle {
    /// Base style name as defined in the skeleton
    pub fn base_name(self) -> &'static str {
        match self {
            DataStyle::Float => "FLOAT_STYLE",
            DataStyle::Date => "DATE_STYLE",
            DataStyle::Time => "TIME_STYLE",
            DataStyle::Currency => "EUR_STYLE",
            DataStyle::Percentage => "PERCENTAGE_STYLE",
        }
    }

    /// Style name combined with an optional overlay, e.g. `FLOAT_STYLE_INPUT`
    pub fn style_name(self, overlay: Option<CellStyle>) -> String {
        match overlay {
            None => self.base_name().to_string(),
            Some(CellStyle::Input) => format!("{}_INPUT", self.base_name()),
            Some(CellStyle::Calculated) => format!("{}_CALCULATED", self.base_name()),
        }
    }
}

/// Maps one [`Cell`] to its XML fragment
pub struct CellRenderer;

impl CellRenderer {
    /// Render a cell as a single `<table:table-cell>` element
    pub fn render(cell: &Cell) -> String {
        match cell {
            Cell::Text(text) => Self::string_cell(text),
            Cell::Formula(formula) => Self::formula_cell(formula),
            Cell::Value(value) => Self::value_cell(value),
        }
    }

    fn string_cell(text: &str) -> String {
        format!(
            "<table:table-cell office:value-type=\"string\" calcext:value-type=\"string\"> <text:p>{}</text:p> </table:table-cell>",
            cdata(text)
        )
    }

    fn formula_cell(formula: &FormulaCell) -> String {
        format!(
            "<table:table-cell table:formula=\"of:={}\" table:style-name=\"{}\" />",
            escape(&formula.expression()),
            CALCULATED_STYLE
        )
    }

    fn value_cell(cell: &ValueCell) -> String {
        let value = escape(&cell.value);

        match &cell.value_type {
            Some(ValueType::Float) => format!(
                "<table:table-cell office:value=\"{}\" table:style-name=\"{}\" office:value-type=\"float\" calcext:value-type=\"float\" />",
                value,
                DataStyle::Float.style_name(cell.style)
            ),
            Some(ValueType::Date) => format!(
                "<table:table-cell office:date-value=\"{}\" table:style-name=\"{}\" office:value-type=\"date\" calcext:value-type=\"date\" />",
                value,
                DataStyle::Date.style_name(cell.style)
            ),
            Some(ValueType::Time) => format!(
                "<table:table-cell office:time-value=\"{}\" table:style-name=\"{}\" office:value-type=\"time\" calcext:value-type=\"time\" />",
                escape(&time_duration(&cell.value)),
                DataStyle::Time.style_name(cell.style)
            ),
            Some(ValueType::Currency) => format!(
                "<table:table-cell office:value=\"{}\" table:style-name=\"{}\" office:value-type=\"currency\" office:currency=\"EUR\" calcext:value-type=\"currency\" />",
                value,
                DataStyle::Currency.style_name(cell.style)
            ),
            Some(ValueType::Percentage) => format!(
                "<table:table-cell office:value=\"{}\" table:style-name=\"{}\" office:value-type=\"percentage\" calcext:value-type=\"percentage\" />",
                value,
                DataStyle::Percentage.style_name(cell.style)
            ),
            Some(ValueType::String) | Some(ValueType::Other(_)) | None => {
                Self::string_cell(&cell.value)
            }
        }
    }
}

/// Wrap text in a CDATA section, splitting any embedded `]]>`
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Convert `HH:MM:SS` to an ISO-8601 duration (`PT19H03M00S`)
///
/// Literals that do not have exactly three components are still converted:
/// missing or empty components become `0` and extra ones are dropped.
fn time_duration(value: &str) -> String {
    let components: Vec<&str> = value.split(':').collect();
    if components.len() != 3 {
        log::warn!(
            "expected hh:mm:ss format for time value '{}', got {} component(s)",
            value,
            components.len()
        );
    }

    let part = |i: usize| {
        components
            .get(i)
            .copied()
            .filter(|c| !c.is_empty())
            .unwrap_or("0")
    };
    format!("PT{}H{}M{}S", part(0), part(1), part(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::text("a")),
            r#"<table:table-cell office:value-type="string" calcext:value-type="string"> <text:p><![CDATA[a]]></text:p> </table:table-cell>"#
        );
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let rendered = CellRenderer::render(&Cell::text("a]]>b"));
        assert!(rendered.contains("<![CDATA[a]]]]><![CDATA[>b]]>"));
    }

    #[test]
    fn test_float_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::value("1", ValueType::Float)),
            r#"<table:table-cell office:value="1" table:style-name="FLOAT_STYLE" office:value-type="float" calcext:value-type="float" />"#
        );
    }

    #[test]
    fn test_style_overlay_suffix() {
        let input = Cell::value("42.3324", ValueType::Float).with_style(CellStyle::Input);
        assert!(CellRenderer::render(&input).contains(r#"table:style-name="FLOAT_STYLE_INPUT""#));

        let calculated = Cell::value("2.22", ValueType::Currency).with_style(CellStyle::Calculated);
        assert!(CellRenderer::render(&calculated)
            .contains(r#"table:style-name="EUR_STYLE_CALCULATED""#));
    }

    #[test]
    fn test_date_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::value("2022-02-02", ValueType::Date)),
            r#"<table:table-cell office:date-value="2022-02-02" table:style-name="DATE_STYLE" office:value-type="date" calcext:value-type="date" />"#
        );
    }

    #[test]
    fn test_time_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::value("19:03:00", ValueType::Time)),
            r#"<table:table-cell office:time-value="PT19H03M00S" table:style-name="TIME_STYLE" office:value-type="time" calcext:value-type="time" />"#
        );
    }

    #[test]
    fn test_malformed_time_still_renders() {
        assert_eq!(time_duration("19:03"), "PT19H03M0S");
        assert_eq!(time_duration("1:2:3:4"), "PT1H2M3S");
        assert!(CellRenderer::render(&Cell::value("7", ValueType::Time))
            .contains(r#"office:time-value="PT7H0M0S""#));
    }

    #[test]
    fn test_empty_time_components() {
        assert_eq!(time_duration(""), "PT0H0M0S");
        assert_eq!(time_duration("19::00"), "PT19H0M00S");
        assert!(CellRenderer::render(&Cell::value("", ValueType::Time))
            .contains(r#"office:time-value="PT0H0M0S""#));
    }

    #[test]
    fn test_malformed_time_logs_one_warning() {
        let warnings = capture::warnings_during(|| {
            CellRenderer::render(&Cell::value("19:03", ValueType::Time));
        });
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'19:03'"));

        let warnings = capture::warnings_during(|| {
            CellRenderer::render(&Cell::value("19:03:00", ValueType::Time));
        });
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_currency_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::value("2.22", ValueType::Currency)),
            r#"<table:table-cell office:value="2.22" table:style-name="EUR_STYLE" office:value-type="currency" office:currency="EUR" calcext:value-type="currency" />"#
        );
    }

    #[test]
    fn test_percentage_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::value("0.4223", ValueType::Percentage)),
            r#"<table:table-cell office:value="0.4223" table:style-name="PERCENTAGE_STYLE" office:value-type="percentage" calcext:value-type="percentage" />"#
        );
    }

    #[test]
    fn test_string_fallbacks() {
        let text = CellRenderer::render(&Cell::text("ABBA"));
        assert_eq!(CellRenderer::render(&Cell::value("ABBA", ValueType::String)), text);
        assert_eq!(CellRenderer::render(&Cell::untyped("ABBA")), text);
        assert_eq!(
            CellRenderer::render(&Cell::value("ABBA", ValueType::Other("boolean".into()))),
            text
        );
        // style overlays do not apply to string values
        assert_eq!(
            CellRenderer::render(&Cell::value("ABBA", ValueType::String).with_style(CellStyle::Input)),
            text
        );
    }

    #[test]
    fn test_formula_cell() {
        assert_eq!(
            CellRenderer::render(&Cell::formula("SUM", ["[.A1:.B1]"])),
            r#"<table:table-cell table:formula="of:=SUM([.A1:.B1])" table:style-name="CALCULATED_STYLE" />"#
        );
        assert_eq!(
            CellRenderer::render(&Cell::formula("IF", ["A1<1", "\"x\"", "2"])),
            r#"<table:table-cell table:formula="of:=IF(A1&lt;1;&quot;x&quot;;2)" table:style-name="CALCULATED_STYLE" />"#
        );
    }

    #[test]
    fn test_raw_expression() {
        assert_eq!(
            CellRenderer::render(&Cell::expression("(celsius * (9/5)) + 32")),
            r#"<table:table-cell table:formula="of:=(celsius * (9/5)) + 32" table:style-name="CALCULATED_STYLE" />"#
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let cell = Cell::value("19:03:00", ValueType::Time).with_style(CellStyle::Calculated);
        assert_eq!(CellRenderer::render(&cell), CellRenderer::render(&cell));
    }

    /// Per-thread capture of log records
    mod capture {
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
        }

        struct ThreadLogger;

        impl log::Log for ThreadLogger {
            fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                RECORDS.with(|records| {
                    records
                        .borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }

            fn flush(&self) {}
        }

        static LOGGER: ThreadLogger = ThreadLogger;
        static INIT: Once = Once::new();

        /// Warning messages logged on this thread while `f` runs
        pub fn warnings_during(f: impl FnOnce()) -> Vec<String> {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).unwrap();
                log::set_max_level(log::LevelFilter::Trace);
            });
            RECORDS.with(|records| records.borrow_mut().clear());
            f();
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .drain(..)
                    .filter(|(level, _)| *level == log::Level::Warn)
                    .map(|(_, message)| message)
                    .collect()
            })
        }
    }
}
