//! Textual shape descriptions.
//!
//! A shape spec is `kind:dims`, where `kind` is `rectangle` (or `rect`) or
//! `circle`, and `dims` are the dimensions separated by `x` or `,`:
//!
//! - `rectangle:5x6`
//! - `rect:2.5,4`
//! - `circle:4`
//!
//! Parsing only checks syntax. Dimension validation happens when the spec
//! is built into a [`Shape`], so both paths report the same error.

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

use super::{Pi, Shape, ShapeResult};

/// Construction parameters for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    /// A rectangle of `length × width`.
    Rectangle {
        /// Length.
        length: f32,
        /// Width.
        width: f32,
    },
    /// A circle of `radius`.
    Circle {
        /// Radius.
        radius: f32,
    },
}

impl ShapeSpec {
    /// The reference set: `Rectangle(5, 6)` then `Circle(4)`.
    pub const REFERENCE: [ShapeSpec; 2] = [
        ShapeSpec::Rectangle {
            length: 5.0,
            width: 6.0,
        },
        ShapeSpec::Circle { radius: 4.0 },
    ];

    /// Builds the shape this spec describes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when a dimension is not positive and finite.
    pub fn build(self, pi: Pi) -> ShapeResult<Shape> {
        match self {
            ShapeSpec::Rectangle { length, width } => Shape::rectangle(length, width),
            ShapeSpec::Circle { radius } => Shape::circle(radius, pi),
        }
    }
}

impl FromStr for ShapeSpec {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, dims) = s
            .split_once(':')
            .ok_or_else(|| ShapeError::MalformedSpec(format!("expected kind:dims, got '{s}'")))?;

        let dims = dims
            .split(['x', 'X', ','])
            .map(|d| {
                d.trim().parse::<f32>().map_err(|e| {
                    ShapeError::MalformedSpec(format!("bad dimension '{}' in '{s}': {e}", d.trim()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match (kind.trim().to_lowercase().as_str(), dims.as_slice()) {
            ("rectangle" | "rect", &[length, width]) => Ok(ShapeSpec::Rectangle { length, width }),
            ("circle", &[radius]) => Ok(ShapeSpec::Circle { radius }),
            ("rectangle" | "rect", _) => Err(ShapeError::MalformedSpec(format!(
                "rectangle takes two dimensions, got {} in '{s}'",
                dims.len()
            ))),
            ("circle", _) => Err(ShapeError::MalformedSpec(format!(
                "circle takes one dimension, got {} in '{s}'",
                dims.len()
            ))),
            (other, _) => Err(ShapeError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeSpec::Rectangle { length, width } => write!(f, "rectangle:{length}x{width}"),
            ShapeSpec::Circle { radius } => write!(f, "circle:{radius}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle_forms() {
        let expected = ShapeSpec::Rectangle {
            length: 5.0,
            width: 6.0,
        };
        assert_eq!("rectangle:5x6".parse::<ShapeSpec>().unwrap(), expected);
        assert_eq!("rect:5,6".parse::<ShapeSpec>().unwrap(), expected);
        assert_eq!("Rectangle: 5 X 6".parse::<ShapeSpec>().unwrap(), expected);
    }

    #[test]
    fn test_parse_circle() {
        assert_eq!(
            "circle:4".parse::<ShapeSpec>().unwrap(),
            ShapeSpec::Circle { radius: 4.0 }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "circle".parse::<ShapeSpec>(),
            Err(ShapeError::MalformedSpec(_))
        ));
        assert!(matches!(
            "circle:1x2".parse::<ShapeSpec>(),
            Err(ShapeError::MalformedSpec(_))
        ));
        assert!(matches!(
            "rect:abc,2".parse::<ShapeSpec>(),
            Err(ShapeError::MalformedSpec(_))
        ));
        assert_eq!(
            "hexagon:3".parse::<ShapeSpec>(),
            Err(ShapeError::UnknownKind("hexagon".to_string()))
        );
    }

    #[test]
    fn test_negative_dimension_parses_but_fails_to_build() {
        let spec: ShapeSpec = "circle:-4".parse().unwrap();
        assert!(matches!(
            spec.build(Pi::Legacy),
            Err(ShapeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_reference() {
        let text: Vec<String> = ShapeSpec::REFERENCE.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["rectangle:5x6", "circle:4"]);
    }
}
