//! Shape classification by edge-length equality.

use std::fmt;

/// The shape of a triangle, determined solely by which of its edge lengths
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// All three edges have the same length.
    Equilateral,
    /// Exactly two edges have the same length.
    Isosceles,
    /// No two edges have the same length.
    Scalene,
}

impl Shape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 3] = [Self::Equilateral, Self::Isosceles, Self::Scalene];

    /// Human-readable label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equilateral => "Equilateral",
            Self::Isosceles => "Isosceles",
            Self::Scalene => "Scalene",
        }
    }

    /// The edge-equality rule that defines this shape.
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Equilateral => "all three edges are the same length",
            Self::Isosceles => "exactly two edges are the same length",
            Self::Scalene => "no two edges are the same length",
        }
    }

    /// Map a count of distinct edge lengths to a shape.
    ///
    /// Returns `None` for counts a three-edged triangle cannot produce.
    pub(crate) const fn from_distinct_lengths(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Equilateral),
            2 => Some(Self::Isosceles),
            3 => Some(Self::Scalene),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Shape::Equilateral.label(), "Equilateral");
        assert_eq!(Shape::Isosceles.label(), "Isosceles");
        assert_eq!(Shape::Scalene.label(), "Scalene");
    }

    #[test]
    fn test_display_matches_label() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string(), shape.label());
        }
    }

    #[test]
    fn test_from_distinct_lengths() {
        assert_eq!(Shape::from_distinct_lengths(1), Some(Shape::Equilateral));
        assert_eq!(Shape::from_distinct_lengths(2), Some(Shape::Isosceles));
        assert_eq!(Shape::from_distinct_lengths(3), Some(Shape::Scalene));
        assert_eq!(Shape::from_distinct_lengths(0), None);
        assert_eq!(Shape::from_distinct_lengths(4), None);
    }
}
