//! Command implementations
//!
//! - `plumbing`: Inspection commands (build-tags)
//! - `porcelain`: User-facing workflows (nuke)

pub mod plumbing;
pub mod porcelain;
