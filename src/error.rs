//! Error types for the shape-catalog crate.
//!
//! This module defines all error types used throughout the crate,
//! organized by subsystem: geometry and the demo driver.

use thiserror::Error;

/// Errors related to shape construction and shape-spec parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A length, width, or radius was non-positive, not finite, or large
    /// enough to overflow the area or perimeter.
    #[error("invalid {dimension} for {shape}: {value} (must be positive with a finite area and perimeter)")]
    InvalidDimension {
        /// The shape being constructed.
        shape: &'static str,
        /// The offending dimension.
        dimension: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The shape kind in a spec is not known.
    #[error("unknown shape kind: {0}")]
    UnknownKind(String),

    /// The spec text could not be parsed.
    #[error("malformed shape spec: {0}")]
    MalformedSpec(String),
}

/// Errors raised by the demo driver sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// The factorial does not fit in a `u64`.
    #[error("factorial of {0} overflows u64")]
    FactorialOverflow(u32),
}

/// A unified error type for the entire crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Geometry-related error.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Demo driver error.
    #[error("demo error: {0}")]
    Demo(#[from] DemoError),

    /// Failed to serialize an event as JSON.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for shape-catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
