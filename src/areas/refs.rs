//! Git references (branches, tags, remote branches)
//!
//! Every ref read or write of the reset protocol lives here, one method per git
//! command. The methods do not decide whether a failure is acceptable; that is
//! up to the caller.
//!
//! ## Commands
//!
//! | Method | git |
//! |---|---|
//! | `fetch_tags` | `fetch <remote> --tags` |
//! | `list_tags` | `tag --list` |
//! | `branch_exists` | `rev-parse --verify --quiet refs/heads/<branch>` |
//! | `remote_branch_exists` | `rev-parse --verify --quiet refs/remotes/<remote>/<branch>` |
//! | `changed_paths` | `diff --name-only <from>...<to> -- <path>` |
//! | `checkout` | `checkout <branch>` |
//! | `delete_branch` | `branch --delete --force <branch>` |
//! | `delete_remote_branch` | `push <remote> --delete <branch>` |
//! | `create_branch_at` | `checkout -b <branch> <start>` |
//! | `publish` | `push --set-upstream <remote> <branch>` |

use crate::areas::git::{ExecutionError, Git, StepOutcome};
use crate::artifacts::branch::branch_name::BranchName;
use std::path::Path;

pub struct Refs {
    git: Git,
    remote: String,
}

impl Refs {
    pub fn new(git: Git, remote: String) -> Self {
        Refs { git, remote }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Refresh the local view of the remote's tags
    pub fn fetch_tags(&self) -> Result<(), ExecutionError> {
        self.git.run(["fetch", self.remote.as_str(), "--tags"])?;
        Ok(())
    }

    pub fn list_tags(&self) -> Result<Vec<String>, ExecutionError> {
        Ok(self
            .git
            .run(["tag", "--list"])?
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    pub fn branch_exists(&self, branch: &BranchName) -> Result<bool, ExecutionError> {
        self.ref_exists(&format!("refs/heads/{branch}"))
    }

    /// Whether the remote-tracking copy of `branch` exists, as of the last fetch
    pub fn remote_branch_exists(&self, branch: &BranchName) -> Result<bool, ExecutionError> {
        self.ref_exists(&format!("refs/remotes/{}/{branch}", self.remote))
    }

    fn ref_exists(&self, full_ref: &str) -> Result<bool, ExecutionError> {
        match self.git.run(["rev-parse", "--verify", "--quiet", full_ref]) {
            Ok(_) => Ok(true),
            Err(ExecutionError::Failed { .. }) => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Every existing copy of `branch`: the remote-tracking one first, then the local one
    ///
    /// When neither exists the remote-tracking name is returned anyway, so that
    /// commands given it fail with git's own error.
    pub fn branch_refs(&self, branch: &BranchName) -> Result<Vec<String>, ExecutionError> {
        let remote_ref = format!("{}/{}", self.remote, branch);
        let mut refs = Vec::new();

        if self.remote_branch_exists(branch)? {
            refs.push(remote_ref.clone());
        }
        if self.branch_exists(branch)? {
            refs.push(branch.to_string());
        }
        if refs.is_empty() {
            refs.push(remote_ref);
        }

        Ok(refs)
    }

    /// Paths under `path` changed on `to` since it diverged from `from`
    pub fn changed_paths(&self, from: &str, to: &str, path: &Path) -> Result<String, ExecutionError> {
        let range = format!("{from}...{to}");
        let path = path.to_string_lossy();

        self.git
            .run(["diff", "--name-only", range.as_str(), "--", &*path])
    }

    pub fn checkout(&self, branch: &str) -> Result<(), ExecutionError> {
        self.git.run(["checkout", branch])?;
        Ok(())
    }

    pub fn delete_branch(&self, branch: &BranchName) -> StepOutcome {
        self.git
            .run_tolerating_absence(["branch", "--delete", "--force", branch.as_ref()])
    }

    pub fn delete_remote_branch(&self, branch: &BranchName) -> StepOutcome {
        self.git
            .run_tolerating_absence(["push", self.remote.as_str(), "--delete", branch.as_ref()])
    }

    /// Create `branch` at `start_point` and check it out
    pub fn create_branch_at(&self, branch: &BranchName, start_point: &str) -> Result<(), ExecutionError> {
        self.git.run(["checkout", "-b", branch.as_ref(), start_point])?;
        Ok(())
    }

    /// Push `branch` to the remote and track it
    pub fn publish(&self, branch: &BranchName) -> Result<(), ExecutionError> {
        self.git
            .run(["push", "--set-upstream", self.remote.as_str(), branch.as_ref()])?;
        Ok(())
    }
}
