//! Error types and diagnostics.
//!
//! This module defines the two kinds of failure the crate knows about:
//!
//! - `Error` - a malformed plan was being built (unknown type names,
//!   operands attached twice, bad node handles)
//! - `Log` - a checker finding with a `Severity`, collected rather than thrown
//!
//! Both carry a short name and an optional suggestion for display.

pub mod errors;

#[cfg(test)]
mod tests;
