//! End-to-end tests for the mdtoc CLI binary

#![cfg(feature = "cli")]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run the mdtoc binary in `dir` and return (exit_code, stdout, stderr)
fn run_mdtoc(dir: &Path, args: &[&str]) -> (i32, String, String) {
    run_mdtoc_with_stdin(dir, args, None)
}

fn run_mdtoc_with_stdin(dir: &Path, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mdtoc"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute mdtoc binary");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

const POST: &str = "# Hello\n\nText.\n\n## Setup\n\n## Setup\n";

#[test]
fn test_cli_version() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["--version"]);
    assert_eq!(code, 0, "--version should exit 0");
    assert!(stdout.contains("mdtoc"));
}

#[test]
fn test_cli_requires_input() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _stdout, stderr) = run_mdtoc(dir.path(), &[]);
    assert_eq!(code, 1);
    assert!(stderr.contains("FILES argument required"));
}

#[test]
fn test_cli_text_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), POST).unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "post.md:1: # Hello (#hello)\npost.md:5: ## Setup (#setup)\npost.md:7: ## Setup (#setup-1)\n"
    );
}

#[test]
fn test_cli_text_output_with_title() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), "Intro.\n\n## Setup\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "--title", "Post"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "post.md: # Post (#title)\npost.md:3: ## Setup (#setup)\n");
}

#[test]
fn test_cli_explicit_ids_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), "# Hello {#intro}\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "post.md:1: # Hello {#intro} (#hello-intro)\n");

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "--explicit-ids"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "post.md:1: # Hello (#intro)\n");
}

#[test]
fn test_cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), POST).unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "-o", "json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = &parsed["results"]["post.md"]["toc"]["entries"];
    assert_eq!(entries.as_array().unwrap().len(), 3);
    assert_eq!(entries[2]["fragment"], "#setup-1");
}

#[test]
fn test_cli_markdown_with_title_and_level_style() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), POST).unwrap();

    let (code, stdout, _stderr) = run_mdtoc(
        dir.path(),
        &["post.md", "-o", "markdown", "--title", "Post", "--suffix-style", "level"],
    );
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "- [Post](#title)\n- [Hello](#hello)\n  - [Setup](#setup)\n  - [Setup](#setup-subsection-1)\n"
    );
}

#[test]
fn test_cli_discovers_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.md"), POST).unwrap();
    std::fs::write(dir.path().join(".mdtoc.toml"), "suffix_style = \"level\"\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(#setup-subsection-1)"));
}

#[test]
fn test_cli_directory_and_ignore() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");
    std::fs::create_dir_all(&posts).unwrap();
    std::fs::write(posts.join("a.mdx"), "# A\n").unwrap();
    std::fs::write(posts.join("b.md"), "# B\n").unwrap();
    std::fs::write(posts.join("notes.txt"), "# Not markdown\n").unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["posts", "--ignore", "**/b.md"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("# A (#a)"));
    assert!(!stdout.contains("# B"));
    assert!(!stdout.contains("Not markdown"));
}

#[test]
fn test_cli_add_ids_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _stderr) =
        run_mdtoc_with_stdin(dir.path(), &["--stdin", "--add-ids"], Some("# A\ntext\n# A\n"));
    assert_eq!(code, 0);
    assert_eq!(stdout, "# A {#a}\ntext\n# A {#a-1}\n");
}

#[test]
fn test_cli_add_ids_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.md");
    std::fs::write(&path, POST).unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "--add-ids"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Updated: post.md"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Hello {#hello}\n\nText.\n\n## Setup {#setup}\n\n## Setup {#setup-1}\n"
    );

    // Second run has nothing to do
    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "--add-ids"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("All headings already have ids."));
}

#[test]
fn test_cli_add_ids_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.md");
    std::fs::write(&path, POST).unwrap();

    let (code, stdout, _stderr) = run_mdtoc(dir.path(), &["post.md", "--add-ids", "--dry-run"]);
    assert_eq!(code, 1, "dry run with pending changes should exit 1");
    assert!(stdout.contains("Would update: post.md"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), POST);
}

#[test]
fn test_cli_init() {
    let dir = tempfile::tempdir().unwrap();

    let (code, _stdout, _stderr) = run_mdtoc(dir.path(), &["init", "--format", "yaml", "--output", ".mdtoc.yaml"]);
    assert_eq!(code, 0);
    let written = std::fs::read_to_string(dir.path().join(".mdtoc.yaml")).unwrap();
    assert!(written.contains("suffix_style: numeric"));
    assert!(mdtoc::Config::from_file(dir.path().join(".mdtoc.yaml")).is_ok());

    let (code, _stdout, stderr) = run_mdtoc(dir.path(), &["init", "--format", "yaml", "--output", ".mdtoc.yaml"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));
}
