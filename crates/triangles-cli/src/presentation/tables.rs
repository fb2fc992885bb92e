//! Table formatting utilities for CLI output.

use triangles_core::Shape;

/// A horizontal separator line of the given width.
///
/// ```rust
/// use triangles_cli::presentation::separator;
///
/// assert_eq!(separator(4), "----");
/// ```
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render shapes as a two-column table of label and defining rule.
pub fn format_shape_table(shapes: &[Shape]) -> String {
    const HEADER: (&str, &str) = ("SHAPE", "RULE");

    let label_width = shapes
        .iter()
        .map(|shape| shape.label().len())
        .chain(std::iter::once(HEADER.0.len()))
        .max()
        .unwrap_or_default();
    let rule_width = shapes
        .iter()
        .map(|shape| shape.rule().len())
        .chain(std::iter::once(HEADER.1.len()))
        .max()
        .unwrap_or_default();

    let mut lines = vec![
        format!("{:<label_width$}  {}", HEADER.0, HEADER.1),
        format!("{}  {}", separator(label_width), separator(rule_width)),
    ];
    lines.extend(
        shapes
            .iter()
            .map(|shape| format!("{:<label_width$}  {}", shape.label(), shape.rule())),
    );

    lines.join("\n")
}
