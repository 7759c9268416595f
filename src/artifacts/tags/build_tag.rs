//! Build tags
//!
//! A build tag marks a commit that passed the build for one branch. Tag names follow
//! the convention `<prefix><sep><branch><sep><suffix>`, e.g. `builds/staging/2024-01-01-12-00-00`.
//!
//! ## Ordering
//!
//! Tags of one branch are ordered by plain lexicographic comparison of their full
//! name. The suffix is expected to sort in creation order (timestamps or zero-padded
//! sequence numbers); no semantic version parsing is attempted.
//!
//! ## Suffixes
//!
//! The suffix may not contain the separator, which is what keeps tags of `release-x`
//! away from `release`. With `-` as the separator a tag like `build-staging-2024-01-01`
//! is therefore not a build tag of `staging`; such tags are skipped and logged at
//! debug level. Use a separator that never occurs in suffixes (the default `/` with
//! dashed timestamps) or a suffix free of it (`build-staging-20240101`).

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::tags::{DEFAULT_BUILD_TAG_PREFIX, DEFAULT_BUILD_TAG_SEPARATOR};
use serde::{Deserialize, Serialize};

/// A build tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildTag(String);

impl BuildTag {
    pub fn new(name: impl Into<String>) -> Self {
        BuildTag(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BuildTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuildTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Naming convention shared by every build tag of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildTagConvention {
    pub prefix: String,
    pub separator: String,
}

impl Default for BuildTagConvention {
    fn default() -> Self {
        BuildTagConvention {
            prefix: DEFAULT_BUILD_TAG_PREFIX.to_string(),
            separator: DEFAULT_BUILD_TAG_SEPARATOR.to_string(),
        }
    }
}

impl BuildTagConvention {
    /// The name every build tag of `branch` starts with, trailing separator included
    pub fn branch_prefix(&self, branch: &BranchName) -> String {
        format!(
            "{}{sep}{}{sep}",
            self.prefix,
            branch,
            sep = self.separator
        )
    }

    /// Check whether `tag_name` is a build tag of exactly `branch`
    ///
    /// The part after the branch prefix must be non-empty and free of separators,
    /// otherwise `build-release-x-001` would be taken as a tag of `release` when the
    /// separator is `-`.
    pub fn matches(&self, tag_name: &str, branch: &BranchName) -> bool {
        if self.separator.is_empty() {
            return false;
        }

        tag_name
            .strip_prefix(&self.branch_prefix(branch))
            .is_some_and(|suffix| !suffix.is_empty() && !suffix.contains(&self.separator))
    }

    /// Select the build tags of `branch`, sorted oldest first
    pub fn tags_for_branch<I, S>(&self, tag_names: I, branch: &BranchName) -> Vec<BuildTag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let branch_prefix = self.branch_prefix(branch);
        let mut tags = tag_names
            .into_iter()
            .filter(|name| {
                let name = name.as_ref();
                let matched = self.matches(name, branch);
                if !matched && name.starts_with(&branch_prefix) {
                    tracing::debug!(
                        tag = name,
                        %branch,
                        separator = %self.separator,
                        "skipping tag whose suffix contains the separator"
                    );
                }
                matched
            })
            .map(|name| BuildTag::new(name.as_ref()))
            .collect::<Vec<_>>();

        tags.sort();
        tags
    }
}
