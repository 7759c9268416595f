//! Porcelain commands (user-facing workflows)
//!
//! ## Commands
//!
//! - `nuke`: Reset an aggregate branch to its last known good build tag

pub mod nuke;
