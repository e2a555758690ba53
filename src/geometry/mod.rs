//! Geometry module.
//!
//! This module defines the closed set of shapes the catalog can hold and
//! the rules for constructing them.
//!
//! # Architecture
//!
//! The geometry module is organized into:
//! - `rectangle`: Rectangle given by length and width
//! - `circle`: Circle given by radius and a π approximation
//! - `spec`: Textual `kind:dims` shape descriptions used for configuration
//!
//! # Usage
//!
//! ```
//! use shape_catalog::geometry::{Pi, Shape};
//!
//! let circle = Shape::circle(4.0, Pi::Legacy)?;
//! assert_eq!(circle.name(), "Circle");
//! assert_eq!(circle.perimeter(), 25.12);
//! # Ok::<(), shape_catalog::error::ShapeError>(())
//! ```

pub mod circle;
pub mod rectangle;
pub mod spec;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use spec::ShapeSpec;

use crate::error::ShapeError;

/// Result type for geometry operations.
pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

/// The value of π used by circles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Pi {
    /// The two-decimal literal `3.14`, matching the reference output.
    #[default]
    Legacy,
    /// `std::f32::consts::PI`.
    Exact,
}

impl Pi {
    /// Returns the numeric value of this approximation.
    #[allow(clippy::approx_constant)]
    pub fn value(self) -> f32 {
        match self {
            Pi::Legacy => 3.14,
            Pi::Exact => std::f32::consts::PI,
        }
    }
}

/// A shape in the catalog.
///
/// The variant is fixed at construction. `area` and `perimeter` dispatch on
/// the variant with an exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A rectangle.
    Rectangle(Rectangle),
    /// A circle.
    Circle(Circle),
}

impl Shape {
    /// Creates a rectangle shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] if either side is not
    /// positive and finite.
    pub fn rectangle(length: f32, width: f32) -> ShapeResult<Self> {
        Rectangle::new(length, width).map(Shape::Rectangle)
    }

    /// Creates a circle shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] if the radius is not
    /// positive and finite.
    pub fn circle(radius: f32, pi: Pi) -> ShapeResult<Self> {
        Circle::new(radius, pi).map(Shape::Circle)
    }

    /// The shape's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => Rectangle::NAME,
            Shape::Circle(_) => Circle::NAME,
        }
    }

    /// The shape's area.
    pub fn area(&self) -> f32 {
        match self {
            Shape::Rectangle(r) => r.area(),
            Shape::Circle(c) => c.area(),
        }
    }

    /// The shape's perimeter.
    pub fn perimeter(&self) -> f32 {
        match self {
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Circle(c) => c.perimeter(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// Checks that a dimension is positive and finite.
pub(crate) fn ensure_positive(
    shape: &'static str,
    dimension: &'static str,
    value: f32,
) -> ShapeResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension {
            shape,
            dimension,
            value,
        })
    }
}

/// Checks that a shape's measurements did not overflow `f32`.
///
/// `dimension`/`value` name the input reported when they did.
pub(crate) fn ensure_measurable(
    shape: &'static str,
    dimension: &'static str,
    value: f32,
    area: f32,
    perimeter: f32,
) -> ShapeResult<()> {
    if area.is_finite() && perimeter.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension {
            shape,
            dimension,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_follows_variant() {
        let shapes = [
            Shape::rectangle(5.0, 6.0).unwrap(),
            Shape::circle(4.0, Pi::Legacy).unwrap(),
        ];
        let summary: Vec<_> = shapes
            .iter()
            .map(|s| (s.name(), s.area(), s.perimeter()))
            .collect();
        assert_eq!(
            summary,
            vec![("Rectangle", 30.0, 22.0), ("Circle", 50.24, 25.12)]
        );
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_pi_values() {
        assert_eq!(Pi::default(), Pi::Legacy);
        assert_eq!(Pi::Legacy.value(), 3.14);
        assert_eq!(Pi::Exact.value(), std::f32::consts::PI);
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("Circle", "radius", 1.5), Ok(1.5));
        for bad in [0.0, -0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert!(ensure_positive("Circle", "radius", bad).is_err());
        }
    }

    #[test]
    fn test_ensure_measurable() {
        assert_eq!(ensure_measurable("Circle", "radius", 4.0, 50.24, 25.12), Ok(()));
        assert!(ensure_measurable("Circle", "radius", 3e38, f32::INFINITY, 1.0).is_err());
        assert!(ensure_measurable("Rectangle", "length", 1e38, 1.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_shapes_rejected() {
        assert!(matches!(
            Shape::rectangle(1e20, 1e20),
            Err(ShapeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Shape::circle(3e38, Pi::Legacy),
            Err(ShapeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_measurements_are_idempotent() {
        let shape = Shape::circle(2.5, Pi::Exact).unwrap();
        let first = (shape.area(), shape.perimeter());
        for _ in 0..3 {
            assert_eq!((shape.area(), shape.perimeter()), first);
        }
    }
}
