//! Git command execution
//!
//! Every read and write this tool performs goes through the system `git` binary.
//! [`CommandRunner`] is the seam between the tool and the process table, so the reset
//! protocol can be exercised against scripted git responses.
//!
//! ## Failure classification
//!
//! Some steps are expected to fail when the ref they act on does not exist (deleting
//! a branch that was never checked out locally, for instance). [`Git::run_tolerating_absence`]
//! separates those failures from real ones by inspecting git's error output, which is
//! why git always runs with `LC_ALL=C`.

use derive_new::new;
use std::path::Path;
use thiserror::Error;

const GIT_PROGRAM: &str = "git";

/// git's error output when the ref a deletion targets is not there
const ABSENT_REF_REGEX: &str =
    r"(?m)^error: branch '[^']+' not found|remote ref does not exist";

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        CommandOutput::new(true, stdout.into(), String::new())
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        CommandOutput::new(false, String::new(), stderr.into())
    }
}

/// Runs external programs on behalf of the tool
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> std::io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> std::io::Result<CommandOutput> {
        // stdin is not inherited, so git can never steal an answer meant for the operator
        let output = std::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .env("LC_ALL", "C")
            .output()?;

        Ok(CommandOutput::new(
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to run `git {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`git {command}` failed: {detail}")]
    Failed { command: String, detail: String },
}

impl ExecutionError {
    pub fn command(&self) -> &str {
        match self {
            ExecutionError::Spawn { command, .. } | ExecutionError::Failed { command, .. } => {
                command
            }
        }
    }

    /// True when git reported that the targeted ref does not exist
    pub fn is_absent_ref(&self) -> bool {
        match self {
            ExecutionError::Spawn { .. } => false,
            ExecutionError::Failed { detail, .. } => regex::Regex::new(ABSENT_REF_REGEX)
                .map(|re| re.is_match(detail))
                .unwrap_or(false),
        }
    }
}

/// Result of a step whose precondition may legitimately not hold
#[derive(Debug)]
pub enum StepOutcome {
    Done,
    /// The ref the step acts on is absent; nothing to do
    NotApplicable(ExecutionError),
    Fatal(ExecutionError),
}

/// The `git` binary, bound to one working directory
pub struct Git {
    runner: Box<dyn CommandRunner>,
    path: Box<Path>,
}

impl Git {
    pub fn new(runner: Box<dyn CommandRunner>, path: Box<Path>) -> Self {
        Git { runner, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a git command and return its stdout
    pub fn run<I, S>(&self, args: I) -> Result<String, ExecutionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>();
        let command = args.join(" ");

        tracing::debug!(%command, "running git");

        let output = self
            .runner
            .run(GIT_PROGRAM, &args, &self.path)
            .map_err(|source| ExecutionError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.success {
            return Ok(output.stdout);
        }

        let detail = match (output.stderr.trim(), output.stdout.trim()) {
            ("", "") => "exited with a non-zero status".to_string(),
            ("", stdout) => stdout.to_string(),
            (stderr, _) => stderr.to_string(),
        };
        tracing::debug!(%command, %detail, "git failed");

        Err(ExecutionError::Failed { command, detail })
    }

    /// Run a git command whose failure is expected when the ref it targets is absent
    pub fn run_tolerating_absence<I, S>(&self, args: I) -> StepOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.run(args) {
            Ok(_) => StepOutcome::Done,
            Err(error) if error.is_absent_ref() => StepOutcome::NotApplicable(error),
            Err(error) => StepOutcome::Fatal(error),
        }
    }
}
