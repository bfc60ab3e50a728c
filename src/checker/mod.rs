//! Static checks over a built plan.
//!
//! Three independent passes, each returning its own list of `Log`s:
//!
//! - Declaration redundancy: no two declarations share a name
//! - Node/declaration consistency: commands and lookups match their declaration
//! - Variable accessibility: references resolve, conditions are boolean and
//!   assignments agree in type
//!
//! `check_plan` runs all of them and concatenates the results. Nothing here
//! mutates the plan or stops early on a finding.

pub mod checker;
pub mod compare;
pub mod references;
pub mod type_check;
