use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::tags::build_tag::BuildTag;

/// What the operator asked for: reset `bad_branch` to the latest build of `good_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    bad_branch: BranchName,
    good_branch: BranchName,
}

impl ResetRequest {
    /// Build a request from the operator's destination answer; blank means `bad_branch`
    pub fn new(bad_branch: BranchName, destination: &str) -> anyhow::Result<Self> {
        let destination = destination.trim();

        let good_branch = if destination.is_empty() {
            bad_branch.clone()
        } else {
            BranchName::try_parse(destination.to_string())?
        };

        Ok(ResetRequest {
            bad_branch,
            good_branch,
        })
    }

    pub fn bad_branch(&self) -> &BranchName {
        &self.bad_branch
    }

    pub fn good_branch(&self) -> &BranchName {
        &self.good_branch
    }

    pub fn resolve(self, target_tag: BuildTag) -> ResetTarget {
        ResetTarget {
            bad_branch: self.bad_branch,
            good_branch: self.good_branch,
            target_tag,
        }
    }
}

/// A request whose destination has been resolved to a build tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTarget {
    bad_branch: BranchName,
    good_branch: BranchName,
    target_tag: BuildTag,
}

impl ResetTarget {
    pub fn bad_branch(&self) -> &BranchName {
        &self.bad_branch
    }

    pub fn good_branch(&self) -> &BranchName {
        &self.good_branch
    }

    pub fn target_tag(&self) -> &BuildTag {
        &self.target_tag
    }
}
