//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Build domain values from CLI input
//! 2. Call into `triangles-core`
//! 3. Format output for the terminal
//!
//! Output goes to a caller-supplied writer so handlers can be tested
//! without a terminal.

pub mod classify;
pub mod shapes;
