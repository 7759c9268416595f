use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::nuke::error::NukeError;
use crate::artifacts::tags::build_tag::BuildTag;
use derive_new::new;

/// Finds the last known good build of a branch
#[derive(new)]
pub struct TagResolver<'r> {
    repository: &'r Repository,
}

impl TagResolver<'_> {
    /// All build tags of `branch`, oldest first, after refreshing tags from the remote
    pub fn build_tags_for_branch(&self, branch: &BranchName) -> Result<Vec<BuildTag>, NukeError> {
        let refs = self.repository.refs();

        refs.fetch_tags().map_err(|source| NukeError::Git {
            action: "fetch tags from the remote",
            source,
        })?;
        let tag_names = refs.list_tags().map_err(|source| NukeError::Git {
            action: "list tags",
            source,
        })?;

        Ok(self
            .repository
            .config()
            .build_tag
            .tags_for_branch(tag_names, branch))
    }

    pub fn resolve_latest_tag(&self, branch: &BranchName) -> Result<BuildTag, NukeError> {
        let latest = self
            .build_tags_for_branch(branch)?
            .pop()
            .ok_or_else(|| NukeError::Resolution {
                branch: branch.to_string(),
            })?;

        tracing::info!(%branch, tag = %latest, "resolved last known good build");
        Ok(latest)
    }
}
