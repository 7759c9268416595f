//! Pre-flight checks of a reset
//!
//! Both checks are read-only and run after the operator confirmed the target tag
//! but before the first mutating git command.

use crate::areas::console::Style;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::migrations::hazard::MigrationHazard;
use crate::artifacts::nuke::error::NukeError;
use crate::artifacts::tags::build_tag::BuildTag;
use derive_new::new;

#[derive(new)]
pub struct SafetyGate<'r> {
    repository: &'r Repository,
}

impl SafetyGate<'_> {
    /// Refuse to reset anything but a configured aggregate branch
    pub fn assert_aggregate_branch(&self, branch: &BranchName) -> Result<(), NukeError> {
        let config = self.repository.config();

        if config.is_aggregate_branch(branch.as_ref()) {
            return Ok(());
        }

        Err(NukeError::Eligibility {
            branch: branch.to_string(),
            supported: config.aggregate_branches.clone(),
        })
    }

    /// Check for migrations on `bad_branch` that are missing at `good_tag`
    ///
    /// Returns whether the reset may proceed: true when there is nothing to revert,
    /// otherwise the operator's answer after the hazard has been shown.
    pub fn check_migration_hazard(
        &self,
        good_tag: &BuildTag,
        bad_branch: &BranchName,
    ) -> Result<bool, NukeError> {
        let hazard = self.find_migration_hazard(good_tag, bad_branch)?;

        if hazard.is_empty() {
            return Ok(true);
        }

        tracing::warn!(%bad_branch, count = hazard.len(), "branch carries pending migrations");
        self.present_hazard(bad_branch, &hazard)?;

        Ok(self.repository.console().confirm(
            &format!("Are you sure you want to nuke {bad_branch}? (y/n)"),
            Style::Success,
        )?)
    }

    pub fn find_migration_hazard(
        &self,
        good_tag: &BuildTag,
        bad_branch: &BranchName,
    ) -> Result<MigrationHazard, NukeError> {
        let migrations_path = &self.repository.config().migrations.path;

        if !self.repository.workspace().exists(migrations_path) {
            tracing::debug!(path = %migrations_path.display(), "no migrations directory, skipping hazard check");
            return Ok(MigrationHazard::default());
        }

        // the remote copy was refreshed by the tag fetch, the local one may hold unpushed work
        let refs = self.repository.refs();
        let bad_refs = refs.branch_refs(bad_branch).map_err(|source| NukeError::Git {
            action: "resolve the branch to reset",
            source,
        })?;

        let mut hazard = MigrationHazard::default();
        for bad_ref in &bad_refs {
            let changed = refs
                .changed_paths(good_tag.name(), bad_ref, migrations_path)
                .map_err(|source| NukeError::Git {
                    action: "list migrations changed since the build tag",
                    source,
                })?;
            hazard = hazard.merge(MigrationHazard::from_diff_output(&changed));
        }

        Ok(hazard)
    }

    fn present_hazard(&self, bad_branch: &BranchName, hazard: &MigrationHazard) -> anyhow::Result<()> {
        let revert_command = &self.repository.config().migrations.revert_command;
        let mut console = self.repository.console();

        console.say(
            &format!(
                "{bad_branch} contains migrations that may need to be reverted.  \
                Ensure any reversible migrations are reverted on affected databases before nuking."
            ),
            Style::Danger,
        )?;
        console.say("Example commands to revert outdated migrations:", Style::Plain)?;

        for migration in hazard.in_revert_order() {
            console.say(&migration.revert_command(revert_command), Style::Plain)?;
        }

        Ok(())
    }
}
