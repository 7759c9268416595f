use crate::common::command::{current_branch, local_branch_oid, remote_branch_oid, run_gitnuke_command};
use crate::common::repository::{AggregateRepository, aggregate_repository};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::explicit_no("n\n")]
#[case::anything_but_yes("maybe\n")]
#[case::closed_input("")]
fn declined_reset_leaves_branches_untouched(
    aggregate_repository: AggregateRepository,
    #[case] answer: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin(answer.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resetting").not());

    assert_eq!(
        local_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );
    assert_eq!(
        remote_branch_oid(repository.path(), "staging"),
        Some(repository.bad_oid.clone())
    );
    assert_eq!(current_branch(repository.path()), "master");

    Ok(())
}
