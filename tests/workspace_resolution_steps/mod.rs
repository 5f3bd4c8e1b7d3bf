//! Step definitions for workspace resolution BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
