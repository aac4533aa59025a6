use crate::common::command::{
    init_repository_dir, read_branch_commit, read_head, repository_dir, run_tin_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn checkout_branch_switches_head_and_restores_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tin_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_tin_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"))
        .stdout(predicate::str::contains("Checked out files from commit"));

    assert_eq!(read_head(init_repository_dir.path()), "feature");

    Ok(())
}

#[rstest]
fn checkout_commit_hash_detaches_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let commit_hash = read_branch_commit(init_repository_dir.path(), "master");

    run_tin_command(init_repository_dir.path(), &["checkout", &commit_hash])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Checked out commit {} (detached HEAD)",
            &commit_hash[..7]
        )));

    assert_eq!(read_head(init_repository_dir.path()), commit_hash);

    Ok(())
}

#[rstest]
fn checkout_unknown_target_reports_and_changes_nothing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tin_command(init_repository_dir.path(), &["checkout", "no-such-thing"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "error: unknown branch or commit 'no-such-thing'",
        ));

    assert_eq!(read_head(init_repository_dir.path()), "master");
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join("1.txt"))?,
        "one"
    );

    Ok(())
}

#[rstest]
fn checkout_overwrites_uncommitted_changes_without_warning(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    // dirty the working tree, then check out the current branch again;
    // restoration is a deliberate unconditional overwrite
    write_file(FileSpec::new(
        init_repository_dir.path().join("1.txt"),
        "uncommitted edit".to_string(),
    ));

    run_tin_command(init_repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning").not());

    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join("1.txt"))?,
        "one"
    );

    Ok(())
}

#[rstest]
fn checkout_restores_nested_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let nested = init_repository_dir.path().join("notes").join("2.txt");
    std::fs::remove_file(&nested)?;
    std::fs::remove_dir(init_repository_dir.path().join("notes"))?;

    run_tin_command(init_repository_dir.path(), &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&nested)?, "two");

    Ok(())
}

#[rstest]
fn checkout_before_any_commit_finds_no_branch_file(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tin_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    // master is the current branch but has no pointer file until a commit
    run_tin_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "error: unknown branch or commit 'master'",
        ));

    Ok(())
}
