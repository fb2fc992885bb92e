//! Triangle validation errors.

use thiserror::Error;

/// Edge lengths that cannot form a triangle.
///
/// Both variants carry the three lengths exactly as supplied, in
/// `ab`, `bc`, `ac` order.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidTriangle {
    /// At least one edge length is zero or negative.
    #[error("Edge lengths have to be greater than zero: [{ab}, {bc}, {ac}]")]
    NonPositiveEdge { ab: f64, bc: f64, ac: f64 },

    /// The longest edge is not shorter than the other two combined.
    #[error("Longest edge must be less than the sum of the other two edges: [{ab}, {bc}, {ac}]")]
    InequalityViolated { ab: f64, bc: f64, ac: f64 },
}

impl InvalidTriangle {
    /// The rejected lengths in `[ab, bc, ac]` order.
    pub const fn edge_lengths(&self) -> [f64; 3] {
        match *self {
            Self::NonPositiveEdge { ab, bc, ac } | Self::InequalityViolated { ab, bc, ac } => {
                [ab, bc, ac]
            }
        }
    }
}
