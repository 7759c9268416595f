//! Tool configuration
//!
//! Read from `.gitnuke.yml` at the repository root. Every key is optional:
//!
//! ```yaml
//! base_branch: master
//! remote: origin
//! aggregate_branches: [staging, prototype]
//! build_tag:
//!   prefix: builds
//!   separator: /
//! migrations:
//!   path: db/migrate
//!   revert_command: rake db:migrate:down VERSION={version}
//! ```
//!
//! Build tags are `<prefix><separator><branch><separator><suffix>`, and the suffix must
//! not contain the separator: with `separator: '-'`, `build-staging-2024-01-01` is not
//! a build tag of `staging`. Pick a separator that never occurs in tag suffixes.

use crate::artifacts::migrations::{DEFAULT_MIGRATIONS_PATH, DEFAULT_REVERT_COMMAND};
use crate::artifacts::tags::build_tag::BuildTagConvention;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".gitnuke.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Neutral branch the operator is left on
    pub base_branch: String,
    /// Shared remote holding the aggregate branches
    pub remote: String,
    /// Branches that may be reset
    pub aggregate_branches: Vec<String>,
    pub build_tag: BuildTagConvention,
    pub migrations: MigrationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationSettings {
    /// Migrations directory, relative to the repository root
    pub path: PathBuf,
    /// Shown once per pending migration, `{version}` is replaced
    pub revert_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_branch: "master".to_string(),
            remote: "origin".to_string(),
            aggregate_branches: vec!["staging".to_string(), "prototype".to_string()],
            build_tag: BuildTagConvention::default(),
            migrations: MigrationSettings::default(),
        }
    }
}

impl Default for MigrationSettings {
    fn default() -> Self {
        MigrationSettings {
            path: PathBuf::from(DEFAULT_MIGRATIONS_PATH),
            revert_command: DEFAULT_REVERT_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Load the config of the repository at `root`, falling back to defaults
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file at {:?}", path))?;

        Self::from_yaml(&content).with_context(|| format!("invalid config file at {:?}", path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // an empty file deserializes to a unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_branch.trim().is_empty() {
            anyhow::bail!("base_branch cannot be empty");
        }

        if self.remote.trim().is_empty() {
            anyhow::bail!("remote cannot be empty");
        }

        if self.build_tag.prefix.is_empty() || self.build_tag.separator.is_empty() {
            anyhow::bail!("build_tag prefix and separator cannot be empty");
        }

        if self.is_aggregate_branch(&self.base_branch) {
            anyhow::bail!(
                "base branch {} cannot also be an aggregate branch",
                self.base_branch
            );
        }

        Ok(())
    }

    pub fn is_aggregate_branch(&self, name: &str) -> bool {
        self.aggregate_branches.iter().any(|branch| branch == name)
    }
}
