use assert_cmd::Command;
use std::path::Path;

pub fn run_gitnuke_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitnuke").expect("Failed to find gitnuke binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> std::process::Command {
    let mut cmd = std::process::Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("LC_ALL", "C"),
    ]);
    cmd.args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run git and return its trimmed stdout, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");

    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn git_commit(dir: &Path, message: &str) -> String {
    git(dir, &["add", "--all"]);
    git(dir, &["commit", "--quiet", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

/// The commit a remote branch points to, if it exists
pub fn remote_branch_oid(dir: &Path, branch: &str) -> Option<String> {
    let refname = format!("refs/heads/{branch}");
    let listing = git(dir, &["ls-remote", "origin", refname.as_str()]);

    listing
        .split_whitespace()
        .next()
        .map(|oid| oid.to_string())
}

pub fn local_branch_oid(dir: &Path, branch: &str) -> Option<String> {
    let refname = format!("refs/heads/{branch}");
    let output = run_git_command(dir, &["rev-parse", "--verify", "--quiet", refname.as_str()])
        .output()
        .expect("Failed to run git");

    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn current_branch(dir: &Path) -> String {
    git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}
