//! Pending migration detection
//!
//! A migration that exists on the branch being reset but not at the build tag may
//! already have run against shared databases. Resetting the branch drops the
//! migration file, so it has to be reverted by hand first, newest first.

use crate::artifacts::migrations::VERSION_PLACEHOLDER;
use std::path::{Path, PathBuf};

/// A migration file that differs between the build tag and the branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMigration {
    path: PathBuf,
    version: String,
}

impl PendingMigration {
    /// Derive the version from the leading `_`-separated segment of the file name
    ///
    /// `db/migrate/20230101_add_col.rb` has version `20230101`.
    pub fn from_path(path: &str) -> Self {
        let path = PathBuf::from(path);
        let version = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
            .split('_')
            .next()
            .unwrap_or_default()
            .to_string();

        PendingMigration { path, version }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn revert_command(&self, template: &str) -> String {
        template.replace(VERSION_PLACEHOLDER, &self.version)
    }
}

/// The migrations changed between a build tag and a branch, in diff order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationHazard {
    migrations: Vec<PendingMigration>,
}

impl MigrationHazard {
    /// Parse `git diff --name-only` output
    pub fn from_diff_output(output: &str) -> Self {
        MigrationHazard {
            migrations: output
                .split_whitespace()
                .map(PendingMigration::from_path)
                .collect(),
        }
    }

    /// Add the migrations of `other` that are not listed yet, keeping their order
    pub fn merge(mut self, other: MigrationHazard) -> Self {
        for migration in other.migrations {
            if !self.migrations.iter().any(|known| known.path == migration.path) {
                self.migrations.push(migration);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Migrations in the order they have to be reverted: most recent first
    pub fn in_revert_order(&self) -> impl Iterator<Item = &PendingMigration> {
        self.migrations.iter().rev()
    }
}
