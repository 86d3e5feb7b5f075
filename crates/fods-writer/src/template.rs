//! Static document skeleton
//!
//! Namespace declarations and style definitions never depend on the input.
//! Each data-type style comes in three flavours: plain, `_INPUT` and
//! `_CALCULATED`. Formulas use `CALCULATED_STYLE`.

/// Everything up to and including `<office:spreadsheet>`
pub(crate) const DOCUMENT_HEAD: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<office:document xmlns:presentation="urn:oasis:names:tc:opendocument:xmlns:presentation:1.0" xmlns:css3t="http://www.w3.org/TR/css3-text/" xmlns:grddl="http://www.w3.org/2003/g/data-view#" xmlns:xhtml="http://www.w3.org/1999/xhtml" xmlns:formx="urn:openoffice:names:experimental:ooxml-odf-interop:xmlns:form:1.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:chart="urn:oasis:names:tc:opendocument:xmlns:chart:1.0" xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:oooc="http://openoffice.org/2004/calc" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:ooow="http://openoffice.org/2004/writer" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:rpt="http://openoffice.org/2005/report" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" xmlns:config="urn:oasis:names:tc:opendocument:xmlns:config:1.0" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" xmlns:ooo="http://openoffice.org/2004/office" xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:dr3d="urn:oasis:names:tc:opendocument:xmlns:dr3d:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" xmlns:of="urn:oasis:names:tc:opendocument:xmlns:of:1.2" xmlns:calcext="urn:org:documentfoundation:names:experimental:calc:xmlns:calcext:1.0" xmlns:tableooo="http://openoffice.org/2009/table" xmlns:drawooo="http://openoffice.org/2010/draw" xmlns:loext="urn:org:documentfoundation:names:experimental:office:xmlns:loext:1.0" xmlns:dom="http://www.w3.org/2001/xml-events" xmlns:field="urn:openoffice:names:experimental:ooo-ms-interop:xmlns:field:1.0" xmlns:math="http://www.w3.org/1998/Math/MathML" xmlns:form="urn:oasis:names:tc:opendocument:xmlns:form:1.0" xmlns:script="urn:oasis:names:tc:opendocument:xmlns:script:1.0" xmlns:xforms="http://www.w3.org/2002/xforms" office:version="1.3" office:mimetype="application/vnd.oasis.opendocument.spreadsheet">
    <office:automatic-styles>
        <number:number-style style:name="___FLOAT_STYLE" style:volatile="true">
            <number:number number:decimal-places="2" number:min-decimal-places="2" number:min-integer-digits="1" number:grouping="true" />
        </number:number-style>
        <number:number-style style:name="__FLOAT_STYLE">
            <style:text-properties fo:color="#ff0000" />
            <number:text>-</number:text>
            <number:number number:decimal-places="2" number:min-decimal-places="2" number:min-integer-digits="1" number:grouping="true" />
            <style:map style:condition="value()&gt;=0" style:apply-style-name="___FLOAT_STYLE" />
        </number:number-style>
        <number:date-style style:name="__DATE_STYLE">
            <number:year number:style="long" />
            <number:text>-</number:text>
            <number:month number:style="long" />
            <number:text>-</number:text>
            <number:day number:style="long" />
        </number:date-style>
        <number:time-style style:name="__TIME_STYLE">
            <number:hours number:style="long" />
            <number:text>:</number:text>
            <number:minutes number:style="long" />
            <number:text>:</number:text>
            <number:seconds number:style="long" />
        </number:time-style>
        <number:currency-style style:name="___EUR_STYLE" style:volatile="true" number:language="en" number:country="DE">
            <number:number number:decimal-places="2" number:min-decimal-places="2" number:min-integer-digits="1" number:grouping="true" />
            <number:text />
            <number:currency-symbol number:language="de" number:country="DE">€</number:currency-symbol>
        </number:currency-style>
        <number:currency-style style:name="__EUR_STYLE" number:language="en" number:country="DE">
            <style:text-properties fo:color="#ff0000" />
            <number:text>-</number:text>
            <number:number number:decimal-places="2" number:min-decimal-places="2" number:min-integer-digits="1" number:grouping="true" />
            <number:text />
            <number:currency-symbol number:language="de" number:country="DE">€</number:currency-symbol>
            <style:map style:condition="value()&gt;=0" style:apply-style-name="___EUR_STYLE" />
        </number:currency-style>
        <number:percentage-style style:name="__PERCENTAGE_STYLE">
            <number:number number:decimal-places="2" number:min-decimal-places="2" number:min-integer-digits="1" />
            <number:text>%</number:text>
        </number:percentage-style>
        <style:style style:name="FLOAT_STYLE" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__FLOAT_STYLE" />
        <style:style style:name="FLOAT_STYLE_INPUT" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__FLOAT_STYLE">
            <style:table-cell-properties fo:background-color="#ffffcc" />
        </style:style>
        <style:style style:name="FLOAT_STYLE_CALCULATED" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__FLOAT_STYLE">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
        <style:style style:name="DATE_STYLE" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__DATE_STYLE" />
        <style:style style:name="DATE_STYLE_INPUT" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__DATE_STYLE">
            <style:table-cell-properties fo:background-color="#ffffcc" />
        </style:style>
        <style:style style:name="DATE_STYLE_CALCULATED" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__DATE_STYLE">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
        <style:style style:name="TIME_STYLE" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__TIME_STYLE" />
        <style:style style:name="TIME_STYLE_INPUT" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__TIME_STYLE">
            <style:table-cell-properties fo:background-color="#ffffcc" />
        </style:style>
        <style:style style:name="TIME_STYLE_CALCULATED" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__TIME_STYLE">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
        <style:style style:name="EUR_STYLE" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__EUR_STYLE" />
        <style:style style:name="EUR_STYLE_INPUT" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__EUR_STYLE">
            <style:table-cell-properties fo:background-color="#ffffcc" />
        </style:style>
        <style:style style:name="EUR_STYLE_CALCULATED" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__EUR_STYLE">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
        <style:style style:name="PERCENTAGE_STYLE" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__PERCENTAGE_STYLE" />
        <style:style style:name="PERCENTAGE_STYLE_INPUT" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__PERCENTAGE_STYLE">
            <style:table-cell-properties fo:background-color="#ffffcc" />
        </style:style>
        <style:style style:name="PERCENTAGE_STYLE_CALCULATED" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="__PERCENTAGE_STYLE">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
        <style:style style:name="CALCULATED_STYLE" style:family="table-cell" style:parent-style-name="Default">
            <style:table-cell-properties fo:background-color="#dde8f3" />
        </style:style>
    </office:automatic-styles>
    <office:body>
        <office:spreadsheet>
"##;

/// Closes the spreadsheet body and the document
pub(crate) const DOCUMENT_TAIL: &str = r#"        </office:spreadsheet>
    </office:body>
</office:document>
"#;
