//! Common test helpers and utilities.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use shape_catalog::{OutputFormat, ShapeCatalog};

/// Output of the reference scenario in text format.
pub const REFERENCE_TEXT: &str = "\
Shape type: Rectangle
area: 30
perimeter: 22

Shape type: Circle
area: 50.24
perimeter: 25.12

Deleting: Rectangle
Deleting: Circle
";

/// Fixed clock reading used by demo tests.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .expect("valid date")
        .and_hms_opt(8, 30, 0)
        .expect("valid time")
}

/// Reports then disposes `catalog`, returning everything written.
pub fn render(catalog: ShapeCatalog, format: OutputFormat) -> String {
    let mut out = Vec::new();
    catalog.report(&mut out, format).expect("report failed");
    catalog.dispose(&mut out, format).expect("dispose failed");
    String::from_utf8(out).expect("output is UTF-8")
}
