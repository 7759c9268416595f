use crate::areas::git::ExecutionError;
use crate::artifacts::nuke::step::{ResetProgress, ResetStep};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NukeError {
    /// No build tag exists for the destination branch
    #[error("No known good tag found for branch: {branch}.  Verify tag exists via `git tag -l`")]
    Resolution { branch: String },

    /// The branch to reset is not an aggregate branch
    #[error(
        "Invalid aggregate branch: {branch} must be one of supported aggregate branches {}",
        .supported.join(", ")
    )]
    Eligibility {
        branch: String,
        supported: Vec<String>,
    },

    /// A read-only git command failed before anything was mutated
    #[error("could not {action}: {source}")]
    Git {
        action: &'static str,
        #[source]
        source: ExecutionError,
    },

    /// A reset step failed, leaving the branch partially reset
    #[error("resetting {branch} stopped at step '{step}' ({progress}): {source}")]
    Step {
        branch: String,
        step: ResetStep,
        progress: ResetProgress,
        #[source]
        source: ExecutionError,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NukeError {
    /// True when branch refs were changed before the error occurred
    pub fn is_partially_applied(&self) -> bool {
        matches!(self, NukeError::Step { progress, .. } if progress.has_mutated_refs())
    }
}
