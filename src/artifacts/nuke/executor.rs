//! The mutating half of a reset
//!
//! The six steps are not atomic and nothing is rolled back. A failing step stops the
//! reset and the error reports which steps already ran, so the operator can finish
//! or repair the branch by hand. Once the base branch has been checked out, the
//! operator is switched back to it whatever happens to the steps in between.

use crate::areas::console::Style;
use crate::areas::git::{ExecutionError, StepOutcome};
use crate::areas::repository::Repository;
use crate::artifacts::nuke::error::NukeError;
use crate::artifacts::nuke::request::ResetTarget;
use crate::artifacts::nuke::step::{ResetProgress, ResetStep, StepStatus};
use colored::Colorize;
use derive_new::new;

#[derive(new)]
pub struct ResetExecutor<'r> {
    repository: &'r Repository,
}

/// The step that stopped a reset and the git error behind it
struct StepFailure {
    step: ResetStep,
    source: ExecutionError,
}

impl StepFailure {
    fn into_error(self, target: &ResetTarget, progress: ResetProgress) -> NukeError {
        NukeError::Step {
            branch: target.bad_branch().to_string(),
            step: self.step,
            progress,
            source: self.source,
        }
    }
}

impl ResetExecutor<'_> {
    /// Recreate `target.bad_branch()` at `target.target_tag()`, locally and on the remote
    pub fn execute(&self, target: &ResetTarget) -> Result<ResetProgress, NukeError> {
        let refs = self.repository.refs();
        let base_branch = self.repository.config().base_branch.as_str();
        let mut progress = ResetProgress::default();

        self.repository.console().say(
            &format!(
                "Resetting {} branch to {}",
                target.bad_branch().as_ref().green(),
                target.target_tag().name().green()
            ),
            Style::Plain,
        )?;

        // still on the original branch, nothing to switch back from
        if let Err(failure) = self.required(target, &mut progress, ResetStep::CheckoutBaseBranch, || {
            refs.checkout(base_branch)
        }) {
            return Err(failure.into_error(target, progress));
        }

        let recreated = self.recreate_branch(target, &mut progress);
        let returned = self.return_to_base_branch(&mut progress);

        match recreated {
            Ok(()) => {
                returned?;
                Ok(progress)
            }
            Err(failure) => {
                if let Err(error) = returned {
                    tracing::warn!(%error, "could not report the base branch checkout");
                }
                Err(failure.into_error(target, progress))
            }
        }
    }

    fn recreate_branch(
        &self,
        target: &ResetTarget,
        progress: &mut ResetProgress,
    ) -> Result<(), StepFailure> {
        let refs = self.repository.refs();
        let bad_branch = target.bad_branch();

        self.tolerated(target, progress, ResetStep::DeleteLocalBranch, || {
            refs.delete_branch(bad_branch)
        })?;
        self.tolerated(target, progress, ResetStep::DeleteRemoteBranch, || {
            refs.delete_remote_branch(bad_branch)
        })?;
        self.required(target, progress, ResetStep::CreateBranchAtTag, || {
            refs.create_branch_at(bad_branch, target.target_tag().name())
        })?;
        self.required(target, progress, ResetStep::PublishBranch, || {
            refs.publish(bad_branch)
        })
    }

    /// Best-effort: failing to switch back only leaves the operator on another branch
    fn return_to_base_branch(&self, progress: &mut ResetProgress) -> anyhow::Result<()> {
        let base_branch = self.repository.config().base_branch.as_str();

        match self.repository.refs().checkout(base_branch) {
            Ok(()) => progress.record(ResetStep::ReturnToBaseBranch, StepStatus::Applied),
            Err(error) => {
                tracing::warn!(%error, "could not switch back to the base branch");
                self.repository.console().say(
                    &format!("Warning: could not switch back to {base_branch}: {error}"),
                    Style::Warning,
                )?;
            }
        }

        Ok(())
    }

    fn required<F>(
        &self,
        target: &ResetTarget,
        progress: &mut ResetProgress,
        step: ResetStep,
        run: F,
    ) -> Result<(), StepFailure>
    where
        F: FnOnce() -> Result<(), ExecutionError>,
    {
        tracing::info!(%step, branch = %target.bad_branch(), "running reset step");

        run().map_err(|source| StepFailure { step, source })?;
        progress.record(step, StepStatus::Applied);

        Ok(())
    }

    fn tolerated<F>(
        &self,
        target: &ResetTarget,
        progress: &mut ResetProgress,
        step: ResetStep,
        run: F,
    ) -> Result<(), StepFailure>
    where
        F: FnOnce() -> StepOutcome,
    {
        tracing::info!(%step, branch = %target.bad_branch(), "running reset step");

        match run() {
            StepOutcome::Done => progress.record(step, StepStatus::Applied),
            StepOutcome::NotApplicable(reason) => {
                tracing::debug!(%step, %reason, "nothing to delete");
                progress.record(step, StepStatus::Skipped);
            }
            StepOutcome::Fatal(source) => return Err(StepFailure { step, source }),
        }

        Ok(())
    }
}
