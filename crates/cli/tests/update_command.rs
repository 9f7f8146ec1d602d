use assert_cmd::prelude::*;
use insta::assert_snapshot;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_vault() -> TempDir {
    let tmp = tempdir().unwrap();
    write_file(&tmp.path().join("Home.md"), "# Home");
    write_file(&tmp.path().join("Projects/plan.md"), "# Plan");
    write_file(&tmp.path().join("Projects/logo.png"), "png");
    write_file(&tmp.path().join(".obsidian/app.json"), "{}");
    tmp
}

fn vaultmap(vault: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vaultmap"));
    cmd.arg("--vault").arg(vault);
    cmd
}

#[test]
fn update_creates_then_updates() {
    let vault = sample_vault();
    let map = vault.path().join("Vault Map.md");

    vaultmap(vault.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Map created at"))
        .stdout(predicate::str::contains("(2 files)"));
    assert!(map.is_file());

    write_file(&vault.path().join("Inbox/idea.md"), "# Idea");
    vaultmap(vault.path())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Map updated at"))
        .stdout(predicate::str::contains("(3 files)"));

    let content = fs::read_to_string(map).unwrap();
    assert!(content.contains("- 📝 [[idea]] *(Inbox/idea.md)*"));
    assert!(!content.contains("[[Vault Map]]"));
}

#[test]
fn update_reports_json() {
    let vault = sample_vault();

    let output = vaultmap(vault.path()).args(["update", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["action"], "created");
    assert_eq!(value["files_listed"], 2);
    assert!(value["path"].as_str().unwrap().ends_with("Vault Map.md"));
}

#[test]
fn update_to_stdout_does_not_write() {
    let vault = sample_vault();

    let output = vaultmap(vault.path()).args(["update", "--stdout"]).output().unwrap();
    assert!(output.status.success());
    assert!(!vault.path().join("Vault Map.md").exists());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let re = Regex::new(r"(?m)^\*Generated automatically: .*\*$").unwrap();
    let stdout = re.replace(&stdout, "*Generated automatically: [TIMESTAMP]*");

    assert_snapshot!(stdout, @r"
# Vault Map

*Generated automatically: [TIMESTAMP]*

**Total files:** 2

## 📁 Root folder

*Files: 1*

- 📝 [[Home]]

## 📁 Projects

*Files: 1*

- 📝 [[plan]] *(Projects/plan.md)*
");
}

#[test]
fn update_follows_stored_settings() {
    let vault = sample_vault();
    write_file(
        &vault.path().join(".vaultmap/settings.toml"),
        "map_file_name = \"Index\"\ninclude_images = true\ngroup_by_folder = false\n",
    );

    vaultmap(vault.path()).arg("update").assert().success();

    let content = fs::read_to_string(vault.path().join("Index.md")).unwrap();
    assert!(content.starts_with("# Index\n"));
    assert!(content.contains("**Total files:** 3"));
    assert!(content.contains("## All files"));
    assert!(content.contains("- 🖼️ [[logo]] *(Projects/logo.png)*"));
}

#[test]
fn update_fails_for_missing_vault() {
    let tmp = tempdir().unwrap();

    vaultmap(&tmp.path().join("missing"))
        .arg("update")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to update map"));
}
