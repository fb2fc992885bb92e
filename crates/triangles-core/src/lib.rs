//! Triangle value type with edge validation and shape classification.
//!
//! A [`Triangle`] can only be obtained through [`Triangle::new`], which
//! rejects non-positive edge lengths and degenerate edge combinations before
//! classifying the triangle's [`Shape`].
//!
//! ```rust
//! use triangles_core::{Shape, Triangle};
//!
//! let triangle = Triangle::new(3.0, 5.0, 3.0)?;
//! assert_eq!(triangle.shape(), Shape::Isosceles);
//! # Ok::<(), triangles_core::InvalidTriangle>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;

// Re-export commonly used types for convenience
pub use domain::{Shape, Triangle};
pub use error::InvalidTriangle;
