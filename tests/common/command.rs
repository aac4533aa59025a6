use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_tin_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("notes").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    run_tin_command(repository_dir.path(), &["add", "1.txt", "notes/2.txt"])
        .assert()
        .success();

    run_tin_command(repository_dir.path(), &["commit", "Initial", "commit"])
        .assert()
        .success();

    repository_dir
}

pub fn run_tin_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tin").expect("Failed to find tin binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Read the raw HEAD file (branch name while attached, commit hash while
/// detached)
pub fn read_head(dir: &Path) -> String {
    let head_path = dir.join(".tin").join("HEAD");
    std::fs::read_to_string(head_path)
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

/// Read the commit hash a branch points to
pub fn read_branch_commit(dir: &Path, branch: &str) -> String {
    let branch_path = dir.join(".tin").join("branches").join(branch);
    std::fs::read_to_string(branch_path)
        .expect("Failed to read branch file")
        .trim()
        .to_string()
}

pub fn branch_file_exists(dir: &Path, branch: &str) -> bool {
    dir.join(".tin").join("branches").join(branch).is_file()
}

/// Parse the staging index into its path-to-hash entries
pub fn read_index(dir: &Path) -> serde_json::Map<String, serde_json::Value> {
    let index_path = dir.join(".tin").join("index");
    if !index_path.exists() {
        return serde_json::Map::new();
    }

    let content = std::fs::read_to_string(index_path).expect("Failed to read index");
    if content.is_empty() {
        return serde_json::Map::new();
    }

    serde_json::from_str::<serde_json::Value>(&content)
        .expect("Malformed index")
        .as_object()
        .expect("Index is not a JSON object")
        .clone()
}

/// Parse a stored commit record by its full hash
pub fn read_commit(dir: &Path, commit_hash: &str) -> serde_json::Value {
    let commit_path = dir.join(".tin").join("commits").join(commit_hash);
    let content = std::fs::read_to_string(commit_path).expect("Failed to read commit file");
    serde_json::from_str(&content).expect("Malformed commit")
}

pub fn count_stored_objects(dir: &Path) -> usize {
    let objects_path = dir.join(".tin").join("objects");
    if !objects_path.exists() {
        return 0;
    }

    std::fs::read_dir(objects_path)
        .expect("Failed to list objects")
        .count()
}

pub fn count_stored_commits(dir: &Path) -> usize {
    let commits_path = dir.join(".tin").join("commits");
    if !commits_path.exists() {
        return 0;
    }

    std::fs::read_dir(commits_path)
        .expect("Failed to list commits")
        .count()
}
