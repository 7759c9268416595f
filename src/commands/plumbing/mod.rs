//! Plumbing commands
//!
//! Low-level helpers that expose the data the porcelain commands act on.

pub mod build_tags;
