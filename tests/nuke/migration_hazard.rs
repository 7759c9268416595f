use crate::common::command::{git, local_branch_oid, remote_branch_oid, run_gitnuke_command};
use crate::common::repository::{AggregateRepository, aggregate_repository_with_migrations};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const WARNING: &str = "staging contains migrations that may need to be reverted.";
const REVERT_COMMAND: &str = "rake db:migrate:down VERSION=20230101";

#[rstest]
fn declining_the_hazard_aborts_the_reset(
    aggregate_repository_with_migrations: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository_with_migrations;

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WARNING))
        .stdout(predicate::str::contains(REVERT_COMMAND))
        .stdout(predicate::str::contains(
            "Are you sure you want to nuke staging? (y/n)",
        ))
        .stdout(predicate::str::contains("Resetting").not());

    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );

    Ok(())
}

#[rstest]
fn accepting_the_hazard_resets_the_branch(
    aggregate_repository_with_migrations: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository_with_migrations;

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(REVERT_COMMAND));

    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.good_oid.clone())
    );

    Ok(())
}

#[rstest]
fn hazard_is_found_on_remote_branch_when_local_copy_is_missing(
    aggregate_repository_with_migrations: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository_with_migrations;
    git(repository.path(), &["branch", "--delete", "--force", "staging"]);

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WARNING))
        .stdout(predicate::str::contains(REVERT_COMMAND));

    assert_eq!(
        local_branch_oid(repository.path(), "staging"),
        Some(repository.good_oid.clone())
    );

    Ok(())
}

#[rstest]
fn hazard_is_found_when_local_copy_is_behind_the_remote(
    aggregate_repository_with_migrations: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository_with_migrations;
    // only the remote branch carries the migration now
    git(
        repository.path(),
        &["branch", "--force", "staging", repository.good_oid.as_str()],
    );

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WARNING))
        .stdout(predicate::str::contains(REVERT_COMMAND));

    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );

    Ok(())
}
