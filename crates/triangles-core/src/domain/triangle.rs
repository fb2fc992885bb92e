//! The validated `Triangle` value type.
//!
//! Edge lengths are checked before any `Triangle` exists, so every instance
//! upholds the triangle invariants for its whole lifetime.

use std::fmt;

use tracing::debug;

use super::Shape;
use crate::error::InvalidTriangle;

/// A triangle with vertices A, B and C, described by the lengths of its
/// edges AB, BC and AC.
///
/// All lengths are strictly positive and the longest is strictly shorter
/// than the sum of the other two. The shape is classified once, at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    ab_edge_length: f64,
    bc_edge_length: f64,
    ac_edge_length: f64,
    shape: Shape,
}

impl Triangle {
    /// Build a triangle from the lengths of its AB, BC and AC edges.
    ///
    /// Lengths may be in any unit as long as all three share it.
    ///
    /// # Errors
    ///
    /// - [`InvalidTriangle::NonPositiveEdge`] if any length is zero or negative.
    /// - [`InvalidTriangle::InequalityViolated`] if the longest edge is not
    ///   strictly shorter than the sum of the other two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triangles_core::{InvalidTriangle, Shape, Triangle};
    ///
    /// let triangle = Triangle::new(7.59, 7.59, 7.59).unwrap();
    /// assert_eq!(triangle.shape(), Shape::Equilateral);
    ///
    /// // Degenerate: 1 + 2 is not greater than 3
    /// assert!(matches!(
    ///     Triangle::new(1.0, 2.0, 3.0),
    ///     Err(InvalidTriangle::InequalityViolated { .. })
    /// ));
    /// ```
    pub fn new(
        ab_edge_length: f64,
        bc_edge_length: f64,
        ac_edge_length: f64,
    ) -> Result<Self, InvalidTriangle> {
        let edges = [ab_edge_length, bc_edge_length, ac_edge_length];

        if let Err(err) = validate_edges(edges) {
            debug!(
                ab = ab_edge_length,
                bc = bc_edge_length,
                ac = ac_edge_length,
                error = %err,
                "Rejected triangle edges"
            );
            return Err(err);
        }

        let shape = classify(edges);
        debug!(
            ab = ab_edge_length,
            bc = bc_edge_length,
            ac = ac_edge_length,
            %shape,
            "Classified triangle"
        );

        Ok(Self {
            ab_edge_length,
            bc_edge_length,
            ac_edge_length,
            shape,
        })
    }

    /// Length of the AB edge.
    pub const fn ab_edge_length(&self) -> f64 {
        self.ab_edge_length
    }

    /// Length of the BC edge.
    pub const fn bc_edge_length(&self) -> f64 {
        self.bc_edge_length
    }

    /// Length of the AC edge.
    pub const fn ac_edge_length(&self) -> f64 {
        self.ac_edge_length
    }

    /// All three lengths in `[ab, bc, ac]` order.
    pub const fn edge_lengths(&self) -> [f64; 3] {
        [self.ab_edge_length, self.bc_edge_length, self.ac_edge_length]
    }

    /// Shape classified at construction.
    pub const fn shape(&self) -> Shape {
        self.shape
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle(ab={}, bc={}, ac={}, shape={})",
            self.ab_edge_length, self.bc_edge_length, self.ac_edge_length, self.shape
        )
    }
}

/// Check positivity first, then the triangle inequality.
///
/// The inequality check alone would also reject non-positive lengths, but
/// the positivity check reports them with a more specific error.
fn validate_edges(edges: [f64; 3]) -> Result<(), InvalidTriangle> {
    let [ab, bc, ac] = edges;

    if edges.iter().any(|&edge| edge <= 0.0) {
        return Err(InvalidTriangle::NonPositiveEdge { ab, bc, ac });
    }

    let mut sorted = edges;
    sorted.sort_by(f64::total_cmp);
    let [shortest, middle, longest] = sorted;

    // Written so that NaN falls through to the error
    if longest < shortest + middle {
        Ok(())
    } else {
        Err(InvalidTriangle::InequalityViolated { ab, bc, ac })
    }
}

/// Classify by the number of distinct lengths, compared exactly.
///
/// No tolerance is applied: lengths differing in the last bit count as
/// different edges.
fn classify(edges: [f64; 3]) -> Shape {
    let mut distinct: Vec<f64> = Vec::with_capacity(edges.len());
    for edge in edges {
        if !distinct.contains(&edge) {
            distinct.push(edge);
        }
    }

    Shape::from_distinct_lengths(distinct.len()).unwrap_or_else(|| {
        unreachable!(
            "three edge lengths produced {} distinct values",
            distinct.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_keep_argument_positions() {
        let triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(triangle.ab_edge_length(), 3.0);
        assert_eq!(triangle.bc_edge_length(), 4.0);
        assert_eq!(triangle.ac_edge_length(), 5.0);
        assert_eq!(triangle.edge_lengths(), [3.0, 4.0, 5.0]);
        assert_eq!(triangle.shape(), Shape::Scalene);
    }

    #[test]
    fn test_display_includes_lengths_and_shape() {
        let triangle = Triangle::new(3.0, 5.0, 3.0).unwrap();
        assert_eq!(
            triangle.to_string(),
            "Triangle(ab=3, bc=5, ac=3, shape=Isosceles)"
        );
    }

    #[test]
    fn test_positivity_checked_before_inequality() {
        // Also violates the inequality, but the positivity error wins
        let result = Triangle::new(0.0, 1.0, 5.0);
        assert!(matches!(
            result,
            Err(InvalidTriangle::NonPositiveEdge { ab, bc, ac }) if ab == 0.0 && bc == 1.0 && ac == 5.0
        ));
    }

    #[test]
    fn test_negative_infinity_is_non_positive() {
        assert!(matches!(
            Triangle::new(f64::NEG_INFINITY, 1.0, 1.0),
            Err(InvalidTriangle::NonPositiveEdge { .. })
        ));
    }

    #[test]
    fn test_nan_rejected_by_inequality() {
        for edges in [
            [f64::NAN, 1.0, 1.0],
            [1.0, f64::NAN, 1.0],
            [1.0, 1.0, -f64::NAN],
        ] {
            assert!(matches!(
                validate_edges(edges),
                Err(InvalidTriangle::InequalityViolated { .. })
            ));
        }
    }

    #[test]
    fn test_infinity_rejected_by_inequality() {
        assert!(matches!(
            Triangle::new(f64::INFINITY, f64::INFINITY, 1.0),
            Err(InvalidTriangle::InequalityViolated { .. })
        ));
    }

    #[test]
    fn test_classify_uses_exact_equality() {
        let nearly_one = 1.0_f64 + f64::EPSILON;
        assert_eq!(classify([1.0, 1.0, 1.0]), Shape::Equilateral);
        assert_eq!(classify([1.0, 1.0, nearly_one]), Shape::Isosceles);
        assert_eq!(classify([1.0, nearly_one, 1.5]), Shape::Scalene);
    }

    #[test]
    fn test_triangle_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Triangle>();
        assert_send_sync::<InvalidTriangle>();
    }
}
