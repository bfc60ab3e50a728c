//! Plan model consumed by the checker.
//!
//! A `Plan` owns its declaration table, its nodes and the expression arena
//! their conditions and actions point into. Nodes refer to their parent and
//! children by `NodeId`; `NodeRef` pairs a node with its plan to answer
//! scope questions:
//!
//! - Variable lookup through the enclosing nodes
//! - Which node names are visible from a node
//! - Plan-wide variable lookup for expression typing

pub mod action;
pub mod decls;
pub mod node;
pub mod plan;
pub mod vars;
