//! Classify command handler.

use std::io::Write;

use triangles_core::Triangle;

use crate::error::CliError;

/// Arguments for the classify command.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyArgs {
    pub ab: f64,
    pub bc: f64,
    pub ac: f64,
    pub details: bool,
}

/// Execute the classify command.
///
/// Prints the shape label, or the full triangle when `details` is set.
pub fn execute(out: &mut impl Write, args: ClassifyArgs) -> Result<(), CliError> {
    let triangle = Triangle::new(args.ab, args.bc, args.ac)?;

    if args.details {
        writeln!(out, "{triangle}")?;
    } else {
        writeln!(out, "{}", triangle.shape())?;
    }
    Ok(())
}
