use crate::common::command::{current_branch, local_branch_oid, remote_branch_oid, run_gitnuke_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repository::{AggregateRepository, aggregate_repository};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::os::unix::fs::PermissionsExt;

// refuses to create branches, deleting them still works
const REJECT_CREATION_HOOK: &str = r#"#!/bin/sh
while read old new ref; do
    if [ "$old" = "0000000000000000000000000000000000000000" ]; then
        echo "creating $ref is not allowed" >&2
        exit 1
    fi
done
"#;

#[rstest]
fn failed_publish_returns_to_base_branch(
    aggregate_repository: AggregateRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = aggregate_repository;
    let hook = repository.origin().join("hooks").join("pre-receive");
    write_file(FileSpec::new(hook.clone(), REJECT_CREATION_HOOK.to_string()));
    std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o755))?;

    run_gitnuke_command(repository.path(), &["nuke", "staging", "-d", "staging"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "resetting staging stopped at step 'publish branch'",
        ));

    // recreated locally, missing on the remote, and the operator is back on master
    assert_eq!(
        local_branch_oid(repository.path(), "staging"),
        Some(repository.good_oid.clone())
    );
    assert_eq!(remote_branch_oid(repository.path(), "staging"), None);
    assert_eq!(current_branch(repository.path()), "master");

    Ok(())
}
