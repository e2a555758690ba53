//! Rectangle given by its length and width.

use super::{ShapeResult, ensure_measurable, ensure_positive};

/// A rectangle with positive, finite sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f32,
    width: f32,
}

impl Rectangle {
    /// Display name shared by every rectangle.
    pub const NAME: &'static str = "Rectangle";

    /// The reference rectangle, 5 by 6.
    pub const REFERENCE: Rectangle = Rectangle {
        length: 5.0,
        width: 6.0,
    };

    /// Creates a rectangle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` naming `length` or `width` when that side
    /// is not positive and finite, or naming the longer side when the area
    /// or perimeter overflows `f32`.
    pub fn new(length: f32, width: f32) -> ShapeResult<Self> {
        let rect = Self {
            length: ensure_positive(Self::NAME, "length", length)?,
            width: ensure_positive(Self::NAME, "width", width)?,
        };
        let (dimension, value) = if length >= width {
            ("length", length)
        } else {
            ("width", width)
        };
        ensure_measurable(Self::NAME, dimension, value, rect.area(), rect.perimeter())?;
        Ok(rect)
    }

    /// The length.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// The width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// `length × width`.
    pub fn area(&self) -> f32 {
        self.length * self.width
    }

    /// `2 × length + 2 × width`.
    pub fn perimeter(&self) -> f32 {
        (2.0 * self.length) + (2.0 * self.width)
    }
}
