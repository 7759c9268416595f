//! Value types and algorithms
//!
//! - `branch`: Branch name validation
//! - `migrations`: Pending migration detection between two refs
//! - `nuke`: The reset protocol (tag resolution, safety gate, executor)
//! - `tags`: Build tag naming and ordering

pub mod branch;
pub mod migrations;
pub mod nuke;
pub mod tags;
