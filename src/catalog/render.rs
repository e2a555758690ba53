//! Rendering of catalog events.
//!
//! The text format reproduces the reference output line for line. Numbers
//! are printed the way a default C++ `ostream` prints them: `%g` with six
//! significant digits, trailing zeros dropped.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Output format for catalog events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Shape type:` blocks followed by `Deleting:` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Something the catalog makes observable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum CatalogEvent<'a> {
    /// A shape was reported.
    Shape {
        /// Shape name.
        name: &'a str,
        /// Area.
        area: f32,
        /// Perimeter.
        perimeter: f32,
    },
    /// A shape is about to be released.
    Deleted {
        /// Shape name.
        name: &'a str,
    },
}

impl CatalogEvent<'_> {
    /// Writes this event to `out` in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or JSON serialization fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self {
            CatalogEvent::Shape {
                name,
                area,
                perimeter,
            } => {
                writeln!(out, "Shape type: {name}")?;
                writeln!(out, "area: {}", format_general(f64::from(*area)))?;
                writeln!(out, "perimeter: {}", format_general(f64::from(*perimeter)))?;
                writeln!(out)?;
            }
            CatalogEvent::Deleted { name } => writeln!(out, "Deleting: {name}")?,
        }
        Ok(())
    }
}

/// Significant digits used by [`format_general`].
const PRECISION: i32 = 6;

/// Mantissa decimals in scientific notation (`PRECISION - 1`).
const SCI_DECIMALS: usize = 5;

/// Formats a number like `printf("%g")`.
///
/// Uses fixed notation when the decimal exponent is in `-4..6`, scientific
/// otherwise, and strips trailing zeros in both cases.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to PRECISION digits, e.g. 999999.7 -> 1e6.
    let sci = format!("{value:.SCI_DECIMALS$e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exp) {
        let decimals = usize::try_from(PRECISION - 1 - exp).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_general_reference_values() {
        assert_eq!(format_general(30.0), "30");
        assert_eq!(format_general(22.0), "22");
        let pi = crate::geometry::Pi::Legacy.value();
        assert_eq!(format_general(f64::from(pi * 4.0 * 4.0)), "50.24");
        assert_eq!(format_general(f64::from(2.0 * pi * 4.0)), "25.12");
    }

    #[test]
    fn test_format_general_rounding_and_notation() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.0), "999999");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001234), "1.234e-05");
        assert_eq!(format_general(1.23456789), "1.23457");
        assert_eq!(format_general(-2.5), "-2.5");
    }

    #[test]
    fn test_format_general_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_text_event_lines() {
        let mut out = Vec::new();
        CatalogEvent::Shape {
            name: "Rectangle",
            area: 30.0,
            perimeter: 22.0,
        }
        .write_to(&mut out, OutputFormat::Text)
        .unwrap();
        CatalogEvent::Deleted { name: "Rectangle" }
            .write_to(&mut out, OutputFormat::Text)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Shape type: Rectangle\narea: 30\nperimeter: 22\n\nDeleting: Rectangle\n"
        );
    }

    #[test]
    fn test_json_event_lines() {
        let mut out = Vec::new();
        CatalogEvent::Deleted { name: "Circle" }
            .write_to(&mut out, OutputFormat::Json)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"event\":\"deleted\",\"name\":\"Circle\"}\n"
        );
    }
}
