//! Shape Catalog
//!
//! An ordered catalog of geometric shapes that polymorphically report their
//! area and perimeter, plus the small demo driver the catalog ships in.
//!
//! # Overview
//!
//! This library provides:
//! - A closed `Shape` type (rectangle, circle) with validated construction
//! - `ShapeCatalog`, which reports and then tears down shapes in insertion order
//! - Text and JSON Lines rendering of catalog events
//! - Demo sections: clock, factorial table, `Vec` walkthrough
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  specs   ┌──────────────┐  events  ┌──────────────┐
//! │   CLI / demo │─────────►│ ShapeCatalog │─────────►│    render    │──► stdout
//! └──────────────┘          └──────┬───────┘          └──────────────┘
//!                                  │ owns
//!                           ┌──────▼───────┐
//!                           │   geometry   │
//!                           │ Rect | Circle│
//!                           └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire crate
//! - [`geometry`] - Shapes, π approximation, shape specs
//! - [`catalog`] - The shape catalog and its rendering
//! - [`demo`] - Demo driver sections
//!
//! # Example
//!
//! ```
//! use shape_catalog::catalog::{OutputFormat, ShapeCatalog};
//!
//! let mut out = Vec::new();
//! let catalog = ShapeCatalog::populate();
//! catalog.report(&mut out, OutputFormat::Text)?;
//! catalog.dispose(&mut out, OutputFormat::Text)?;
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Shape type: Rectangle\narea: 30\n"));
//! # Ok::<(), shape_catalog::Error>(())
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod demo;
pub mod error;
pub mod geometry;

// Re-export commonly used types at the crate root
pub use catalog::{OutputFormat, ShapeCatalog};
pub use error::{Error, Result};
pub use geometry::{Pi, Shape, ShapeSpec};
