use crate::areas::console::Style;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::nuke::error::NukeError;
use crate::artifacts::nuke::executor::ResetExecutor;
use crate::artifacts::nuke::request::{ResetRequest, ResetTarget};
use crate::artifacts::nuke::resolver::TagResolver;
use crate::artifacts::nuke::safety::SafetyGate;

/// How a nuke ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NukeOutcome {
    Reset(ResetTarget),
    /// The operator did not confirm the destination tag
    Declined,
    /// The operator did not override the pending migrations warning
    HazardDeclined,
}

impl Repository {
    /// Reset `bad_branch` to the latest build tag of `destination` (or of itself)
    pub fn nuke(&self, bad_branch: &str, destination: Option<&str>) -> Result<NukeOutcome, NukeError> {
        let bad_branch = BranchName::try_parse(bad_branch.to_string())?;

        let destination = match destination {
            Some(destination) => destination.to_string(),
            None => self.console().ask(
                &format!("What branch do you want to reset {bad_branch} to? (default: {bad_branch})"),
                Style::Plain,
            )?,
        };
        let request = ResetRequest::new(bad_branch, &destination)?;

        let target_tag = TagResolver::new(self).resolve_latest_tag(request.good_branch())?;

        let confirmed = self.console().confirm(
            &format!("Reset {} to {}? (y/n)", request.bad_branch(), target_tag),
            Style::Success,
        )?;
        if !confirmed {
            tracing::info!(branch = %request.bad_branch(), "reset declined");
            return Ok(NukeOutcome::Declined);
        }

        let gate = SafetyGate::new(self);
        gate.assert_aggregate_branch(request.bad_branch())?;
        if !gate.check_migration_hazard(&target_tag, request.bad_branch())? {
            tracing::info!(branch = %request.bad_branch(), "reset declined over pending migrations");
            return Ok(NukeOutcome::HazardDeclined);
        }

        let target = request.resolve(target_tag);
        ResetExecutor::new(self).execute(&target)?;

        Ok(NukeOutcome::Reset(target))
    }
}
