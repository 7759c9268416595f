//! The reset ("nuke") protocol
//!
//! A reset runs in three phases, each owned by one component:
//!
//! 1. [`resolver::TagResolver`] picks the last known good build tag.
//! 2. [`safety::SafetyGate`] refuses ineligible branches and surfaces pending migrations.
//! 3. [`executor::ResetExecutor`] deletes and recreates the branch at the tag.
//!
//! Nothing is mutated before phase 3 starts.

pub mod error;
pub mod executor;
pub mod request;
pub mod resolver;
pub mod safety;
pub mod step;
