use crate::areas::console::Style;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::nuke::error::NukeError;
use crate::artifacts::nuke::resolver::TagResolver;

impl Repository {
    /// Print the build tags of `branch`, oldest first
    pub fn build_tags(&self, branch: &str) -> Result<(), NukeError> {
        let branch = BranchName::try_parse(branch.to_string())?;
        let tags = TagResolver::new(self).build_tags_for_branch(&branch)?;

        if tags.is_empty() {
            return Err(NukeError::Resolution {
                branch: branch.to_string(),
            });
        }

        let mut console = self.console();
        for tag in &tags {
            console.say(tag.name(), Style::Plain)?;
        }

        Ok(())
    }
}
