//! Core repository components
//!
//! This module contains the services every command is built from:
//!
//! - `config`: Tool configuration loaded from `.gitnuke.yml`
//! - `console`: Operator interaction (messages, questions, confirmations)
//! - `git`: Execution of the system `git` binary
//! - `refs`: Tag listing and branch reference mutations
//! - `repository`: High-level repository coordination
//! - `workspace`: Working tree probes

pub mod config;
pub mod console;
pub mod git;
pub mod refs;
pub mod repository;
pub mod workspace;
