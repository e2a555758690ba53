//! Demo driver.
//!
//! Runs the sections the shape catalog is embedded in, in order, on one
//! output stream:
//!
//! 1. banner
//! 2. current date and time (`clock`)
//! 3. factorial table (`factorial`)
//! 4. shape catalog report and teardown
//! 5. `Vec` walkthrough (`vector_tour`)
//!
//! The sections share nothing but the writer.

pub mod clock;
pub mod factorial;
pub mod vector_tour;

use std::io::Write;
use std::time::Duration;

use tracing::info;

use crate::catalog::{OutputFormat, ShapeCatalog};
use crate::error::Result;
use crate::geometry::{Pi, ShapeSpec};

use clock::{Clock, format_timestamp};

/// Width of the banner rule.
const BANNER_WIDTH: usize = 52;

/// Settings for [`run_demo`].
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of factorial lines (`0!` through `(n-1)!`).
    pub factorials: u32,
    /// Pause after each factorial line.
    pub delay: Duration,
    /// Shapes for the catalog section.
    pub shapes: Vec<ShapeSpec>,
    /// π approximation for circles.
    pub pi: Pi,
    /// Catalog output format.
    pub format: OutputFormat,
    /// Words for the `Vec` walkthrough.
    pub words: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            factorials: 5,
            delay: Duration::from_secs(1),
            shapes: ShapeSpec::REFERENCE.to_vec(),
            pi: Pi::Legacy,
            format: OutputFormat::Text,
            words: vector_tour::DEFAULT_WORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Writes `title` underlined with dashes.
pub(crate) fn write_heading<W: Write + ?Sized>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

/// Populates, reports, and disposes a catalog built from `shapes`.
///
/// # Errors
///
/// Returns an error if a shape is invalid or writing fails.
pub fn run_catalog<W: Write + ?Sized>(
    out: &mut W,
    shapes: &[ShapeSpec],
    pi: Pi,
    format: OutputFormat,
) -> Result<()> {
    let catalog = ShapeCatalog::from_specs(shapes.iter().copied(), pi)?;
    catalog.report(out, format)?;
    catalog.dispose(out, format)?;
    Ok(())
}

/// Runs every demo section in order.
///
/// # Errors
///
/// Returns the first error raised by a section.
pub async fn run_demo<W, C>(out: &mut W, clock: &C, config: &DemoConfig) -> Result<()>
where
    W: Write + ?Sized,
    C: Clock + ?Sized,
{
    info!("demo started");
    writeln!(out, "Demonstrating the Rust application")?;
    writeln!(out, "{}", "#".repeat(BANNER_WIDTH))?;

    writeln!(
        out,
        "Current date and time: {}",
        format_timestamp(&clock.now())
    )?;
    writeln!(out)?;

    info!(count = config.factorials, "factorial section");
    factorial::write_factorial_table(out, config.factorials, config.delay).await?;

    info!(count = config.shapes.len(), "shape catalog section");
    write_heading(out, "Executing the shape catalog operations:")?;
    writeln!(out, "Geometric shape operations: ")?;
    writeln!(out)?;
    run_catalog(out, &config.shapes, config.pi, config.format)?;
    writeln!(out)?;

    info!("vector section");
    let words: Vec<&str> = config.words.iter().map(String::as_str).collect();
    vector_tour::write_vector_tour(out, &words)?;

    out.flush()?;
    info!("demo finished");
    Ok(())
}
