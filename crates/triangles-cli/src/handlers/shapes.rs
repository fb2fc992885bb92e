//! Shapes command handler.

use std::io::Write;

use triangles_core::Shape;

use crate::error::CliError;
use crate::presentation::format_shape_table;

/// Execute the shapes command.
pub fn execute(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", format_shape_table(&Shape::ALL))?;
    Ok(())
}
