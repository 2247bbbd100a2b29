//! Derived player statistics.
//!
//! Only maximum resource pools live here for now. They are pure functions of
//! vocation and experience level and are never the source of truth.

pub mod resources;

pub use resources::{LinearFormula, ResourceKind, ResourceMaximums, VocationFormula};
