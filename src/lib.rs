//! gitnuke: reset a broken aggregate branch to its last known good build
//!
//! The crate is split the same way the command is put together:
//!
//! - `areas`: repository-level services (git execution, refs, config, console, workspace)
//! - `artifacts`: value types and algorithms (build tags, migrations, the reset protocol)
//! - `commands`: subcommand implementations, as `impl Repository` blocks

pub mod areas;
pub mod artifacts;
pub mod commands;
