//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no validation or classification here.

pub mod tables;

pub use tables::{format_shape_table, separator};
