//! Circle given by its radius.

use super::{Pi, ShapeResult, ensure_measurable, ensure_positive};

/// A circle with a positive, finite radius.
///
/// The π approximation is fixed when the circle is built, so a circle
/// measured twice always reports the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f32,
    pi: Pi,
}

impl Circle {
    /// Display name shared by every circle.
    pub const NAME: &'static str = "Circle";

    /// The reference circle, radius 4 measured with the legacy π.
    pub const REFERENCE: Circle = Circle {
        radius: 4.0,
        pi: Pi::Legacy,
    };

    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when the radius is not positive and
    /// finite, or when the area or perimeter overflows `f32`.
    pub fn new(radius: f32, pi: Pi) -> ShapeResult<Self> {
        let circle = Self {
            radius: ensure_positive(Self::NAME, "radius", radius)?,
            pi,
        };
        ensure_measurable(
            Self::NAME,
            "radius",
            radius,
            circle.area(),
            circle.perimeter(),
        )?;
        Ok(circle)
    }

    /// The radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The π approximation this circle measures with.
    pub fn pi(&self) -> Pi {
        self.pi
    }

    /// `π × r × r`.
    pub fn area(&self) -> f32 {
        self.pi.value() * self.radius * self.radius
    }

    /// `2 × π × r`.
    pub fn perimeter(&self) -> f32 {
        2.0 * self.pi.value() * self.radius
    }
}
