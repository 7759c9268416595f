use crate::common::command::{remote_branch_oid, run_gitnuke_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repository::{AggregateRepository, aggregate_repository};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn branch_without_build_tags_fails(
    aggregate_repository: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;

    run_gitnuke_command(repository.path(), &["nuke", "prototype", "-d", "prototype"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("(y/n)").not())
        .stderr(predicate::str::contains(
            "No known good tag found for branch: prototype.  Verify tag exists via `git tag -l`",
        ));

    Ok(())
}

#[rstest]
fn non_aggregate_branch_is_refused_after_confirmation(
    aggregate_repository: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;

    run_gitnuke_command(repository.path(), &["nuke", "master", "-d", "staging"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid aggregate branch: master must be one of supported aggregate branches staging",
        ));

    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );

    Ok(())
}

#[rstest]
fn invalid_branch_name_is_rejected(
    aggregate_repository: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;

    run_gitnuke_command(repository.path(), &["nuke", "stag..ing", "-d", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));

    Ok(())
}

#[rstest]
fn invalid_config_file_is_rejected(
    aggregate_repository: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;
    write_file(FileSpec::new(
        repository.path().join(".gitnuke.yml"),
        "aggregate_branches: [master, staging]\n".to_string(),
    ));

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"))
        .stderr(predicate::str::contains(
            "base branch master cannot also be an aggregate branch",
        ));

    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );

    Ok(())
}
