use std::fmt;

/// One mutating step of a reset, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    CheckoutBaseBranch,
    DeleteLocalBranch,
    DeleteRemoteBranch,
    CreateBranchAtTag,
    PublishBranch,
    ReturnToBaseBranch,
}

impl fmt::Display for ResetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ResetStep::CheckoutBaseBranch => "check out base branch",
            ResetStep::DeleteLocalBranch => "delete local branch",
            ResetStep::DeleteRemoteBranch => "delete remote branch",
            ResetStep::CreateBranchAtTag => "create branch at build tag",
            ResetStep::PublishBranch => "publish branch",
            ResetStep::ReturnToBaseBranch => "return to base branch",
        };

        write!(f, "{description}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Applied,
    /// The ref the step acts on did not exist
    Skipped,
}

/// Steps of a reset that have finished so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetProgress {
    steps: Vec<(ResetStep, StepStatus)>,
}

impl ResetProgress {
    pub fn record(&mut self, step: ResetStep, status: StepStatus) {
        self.steps.push((step, status));
    }

    pub fn steps(&self) -> &[(ResetStep, StepStatus)] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Switching branches changes no refs; every other applied step does
    pub fn has_mutated_refs(&self) -> bool {
        self.steps.iter().any(|(step, status)| {
            *status == StepStatus::Applied
                && !matches!(
                    step,
                    ResetStep::CheckoutBaseBranch | ResetStep::ReturnToBaseBranch
                )
        })
    }
}

impl fmt::Display for ResetProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "no steps completed");
        }

        let steps = self
            .steps
            .iter()
            .map(|(step, status)| match status {
                StepStatus::Applied => step.to_string(),
                StepStatus::Skipped => format!("{step} (skipped, nothing to delete)"),
            })
            .collect::<Vec<_>>();

        write!(f, "completed: {}", steps.join(", "))
    }
}
