//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn codeweave() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("codeweave"))
}

#[test]
fn test_cli_version() {
    let mut cmd = codeweave();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("codeweave"));
}

#[test]
fn test_cli_help_lists_subcommands() {
    let mut cmd = codeweave();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_parse_writes_named_blocks_to_disk() {
    let tmp = TempDir::new().expect("tmp");
    let response = tmp.path().join("response.md");
    fs::write(
        &response,
        "Sure! Here is your site:\n\n```index.html\n<html><body>hi</body></html>\n```\n\n```styles.css\nbody { margin: 0; }\n```\n",
    )
    .expect("write response");

    let out = tmp.path().join("site");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["parse", response.to_str().expect("utf8"), "--out", out.to_str().expect("utf8")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 file(s)"))
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("styles.css"));

    let html = fs::read_to_string(out.join("index.html")).expect("read html");
    assert_eq!(html, "<html><body>hi</body></html>");
    let css = fs::read_to_string(out.join("styles.css")).expect("read css");
    assert_eq!(css, "body { margin: 0; }");
}

#[test]
fn test_parse_reads_stdin_and_names_typed_blocks() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["parse", "-"]);
    cmd.write_stdin("```html\n<div>hi</div>\n```\n```css\nbody{margin:0}\n```\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("styles.css"));
}

#[test]
fn test_parse_unfenced_input_falls_back_to_single_file() {
    let tmp = TempDir::new().expect("tmp");
    let out = tmp.path().join("out");
    let response = tmp.path().join("response.txt");
    fs::write(&response, "const x = 1; document.write(x);").expect("write");

    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["parse", response.to_str().expect("utf8"), "--out", out.to_str().expect("utf8")]);
    cmd.assert().success().stdout(predicate::str::contains("script.js"));

    assert_eq!(
        fs::read_to_string(out.join("script.js")).expect("read"),
        "const x = 1; document.write(x);"
    );
}

#[test]
fn test_parse_missing_file_fails() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["parse", "absent.md"]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed reading response file"));
}

#[test]
fn test_projects_empty_database() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("projects.sqlite");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["projects", "--db", db.to_str().expect("utf8")]);
    cmd.assert().success().stdout(predicate::str::contains("No projects for local"));
}

#[test]
fn test_show_unknown_project_fails() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("projects.sqlite");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["show", "missing-id", "--db", db.to_str().expect("utf8")]);
    cmd.assert().failure().stderr(predicate::str::contains("missing-id"));
}

#[test]
fn test_delete_unknown_project_fails() {
    let tmp = TempDir::new().expect("tmp");
    let db = tmp.path().join("projects.sqlite");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["delete", "missing-id", "--db", db.to_str().expect("utf8")]);
    cmd.assert().failure().stderr(predicate::str::contains("missing-id"));
}

#[test]
fn test_generate_without_token_fails_before_any_network_call() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.env_remove("GITHUB_TOKEN");
    cmd.args(["generate", "a bakery site"]);
    cmd.assert().failure().stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn test_generate_rejects_ephemeral_with_project() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.args(["generate", "x", "--ephemeral", "--project", "p1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot combine --ephemeral with --project"));
}

#[test]
fn test_config_file_changes_token_error_message() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("codeweave.toml"), "token_env = 'WEAVE_KEY'\n").expect("write");

    let mut cmd = codeweave();
    cmd.current_dir(tmp.path());
    cmd.env_remove("WEAVE_KEY");
    cmd.args(["generate", "a site"]);
    cmd.assert().failure().stderr(predicate::str::contains("WEAVE_KEY"));
}
