//! Expression trees and their type rules.
//!
//! Expressions live in an `ExprArena` and are addressed by `ExprId`. Each
//! node is a leaf, unary or binary operator; operands point back to their
//! parent by handle. This module provides:
//!
//! - Per-operator result and operand types
//! - Variable-aware result typing against a plan's variable table
//! - Type intersection over the `ExprType` lattice
//! - Reduction of constant string expressions to static names
//! - The element vocabulary used by plan documents

pub mod elements;
pub mod expr;
pub mod types;
pub mod vocabulary;
