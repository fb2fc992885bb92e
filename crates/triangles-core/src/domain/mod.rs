//! Core domain types.
//!
//! # Structure
//!
//! - `triangle` - The validated `Triangle` value type
//! - `shape` - Shape classification by edge-length equality

mod shape;
mod triangle;

pub use shape::Shape;
pub use triangle::Triangle;
