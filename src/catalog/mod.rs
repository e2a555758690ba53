//! Shape catalog module.
//!
//! A [`ShapeCatalog`] owns an ordered batch of shapes for one reporting
//! pass. Insertion order is report order and teardown order.
//!
//! # Lifecycle
//!
//! 1. `populate` / `from_specs` builds every shape up front.
//! 2. `report` borrows the catalog and writes each shape's measurements.
//! 3. `dispose` consumes the catalog and writes one `Deleting:` line per
//!    shape before releasing it.
//!
//! Because `dispose` takes the catalog by value, reporting on a disposed
//! catalog is rejected at compile time:
//!
//! ```compile_fail
//! use shape_catalog::catalog::{OutputFormat, ShapeCatalog};
//!
//! let mut out = Vec::new();
//! let catalog = ShapeCatalog::populate();
//! catalog.dispose(&mut out, OutputFormat::Text).unwrap();
//! catalog.report(&mut out, OutputFormat::Text).unwrap();
//! ```
//!
//! # Usage
//!
//! ```
//! use shape_catalog::catalog::{OutputFormat, ShapeCatalog};
//!
//! let mut out = Vec::new();
//! let catalog = ShapeCatalog::populate();
//! catalog.report(&mut out, OutputFormat::Text)?;
//! catalog.dispose(&mut out, OutputFormat::Text)?;
//! assert!(String::from_utf8_lossy(&out).ends_with("Deleting: Circle\n"));
//! # Ok::<(), shape_catalog::Error>(())
//! ```

pub mod render;

pub use render::{CatalogEvent, OutputFormat, format_general};

use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::geometry::{Circle, Pi, Rectangle, Shape, ShapeResult, ShapeSpec};

/// An ordered, exclusively owned collection of shapes.
#[derive(Debug, Default)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Builds the reference catalog: `Rectangle(5, 6)` then `Circle(4)`,
    /// measured with the legacy π.
    pub fn populate() -> Self {
        let shapes = vec![
            Shape::Rectangle(Rectangle::REFERENCE),
            Shape::Circle(Circle::REFERENCE),
        ];
        info!(count = shapes.len(), "populated reference shape catalog");
        Self { shapes }
    }

    /// Builds a catalog from shape specs, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for the first spec whose dimensions are
    /// not positive and finite. No catalog is built in that case.
    pub fn from_specs(specs: impl IntoIterator<Item = ShapeSpec>, pi: Pi) -> ShapeResult<Self> {
        let shapes = specs
            .into_iter()
            .map(|spec| spec.build(pi))
            .collect::<ShapeResult<Vec<_>>>()?;
        info!(count = shapes.len(), ?pi, "populated shape catalog");
        Ok(Self { shapes })
    }

    /// Wraps already-built shapes.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes, in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Writes name, area, and perimeter of every shape in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn report<W: Write + ?Sized>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        debug!(count = self.shapes.len(), ?format, "reporting shapes");
        for shape in &self.shapes {
            CatalogEvent::Shape {
                name: shape.name(),
                area: shape.area(),
                perimeter: shape.perimeter(),
            }
            .write_to(out, format)?;
        }
        Ok(())
    }

    /// Releases every shape in insertion order, announcing each one first.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails. Shapes not yet announced
    /// are still released, and a warning logs how many.
    pub fn dispose<W: Write + ?Sized>(mut self, out: &mut W, format: OutputFormat) -> Result<()> {
        let shapes = std::mem::take(&mut self.shapes);
        let total = shapes.len();
        debug!(count = total, "disposing shapes");
        // Each shape is released at the end of its iteration.
        for (announced, shape) in shapes.into_iter().enumerate() {
            if let Err(e) = (CatalogEvent::Deleted { name: shape.name() }).write_to(out, format) {
                warn!(
                    count = total - announced,
                    error = %e,
                    "shape catalog dispose interrupted; shapes released without notice"
                );
                return Err(e);
            }
        }
        info!("shape catalog disposed");
        Ok(())
    }
}

impl Drop for ShapeCatalog {
    fn drop(&mut self) {
        if !self.shapes.is_empty() {
            warn!(
                count = self.shapes.len(),
                "shape catalog dropped without dispose; shapes released silently"
            );
        }
    }
}
