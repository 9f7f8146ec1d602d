use std::fs;
use std::path::Path;

use chrono::Utc;
use tempfile::TempDir;
use vaultmap_core::map::{MapAction, MapError, create_map, lookup_map, map_path, update_map};
use vaultmap_core::settings::MapSettings;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn sample_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Home.md", "# Home");
    write(dir.path(), "Projects/plan.md", "# Plan");
    write(dir.path(), ".obsidian/app.json", "{}");
    dir
}

#[test]
fn update_creates_missing_map_then_modifies_it() {
    let vault = sample_vault();
    let settings = MapSettings::default();

    assert!(lookup_map(vault.path(), &settings).is_none());

    let first = update_map(vault.path(), &settings, &Utc::now()).unwrap();
    assert_eq!(first.action, MapAction::Created);
    assert_eq!(first.files_listed, 2);
    assert_eq!(first.path, map_path(vault.path(), &settings));

    let content = fs::read_to_string(&first.path).unwrap();
    assert!(content.starts_with("# Vault Map\n"));
    assert!(content.contains("- 📝 [[plan]] *(Projects/plan.md)*"));
    assert!(!content.contains("app"));

    // The map does not list itself on the next run
    let second = update_map(vault.path(), &settings, &Utc::now()).unwrap();
    assert_eq!(second.action, MapAction::Updated);
    assert_eq!(second.files_listed, 2);
    assert!(!fs::read_to_string(&second.path).unwrap().contains("[[Vault Map]]"));
}

#[test]
fn update_picks_up_new_files() {
    let vault = sample_vault();
    let settings = MapSettings::default();
    update_map(vault.path(), &settings, &Utc::now()).unwrap();

    write(vault.path(), "Inbox/idea.md", "# Idea");
    let outcome = update_map(vault.path(), &settings, &Utc::now()).unwrap();

    assert_eq!(outcome.files_listed, 3);
    assert!(fs::read_to_string(&outcome.path).unwrap().contains("[[idea]]"));
}

#[test]
fn create_overwrites_existing_document() {
    let vault = sample_vault();
    let settings = MapSettings { map_file_name: "Maps/Index".into(), ..MapSettings::default() };
    write(vault.path(), "Maps/Index.md", "stale content");

    let outcome = create_map(vault.path(), &settings, &Utc::now()).unwrap();

    assert_eq!(outcome.action, MapAction::Created);
    let content = fs::read_to_string(vault.path().join("Maps/Index.md")).unwrap();
    assert!(content.starts_with("# Maps/Index\n"));
    assert!(!content.contains("stale content"));
}

#[test]
fn create_makes_parent_folders() {
    let vault = sample_vault();
    let settings = MapSettings { map_file_name: "Meta/Maps/Vault".into(), ..MapSettings::default() };

    let outcome = update_map(vault.path(), &settings, &Utc::now()).unwrap();
    assert!(outcome.path.ends_with("Meta/Maps/Vault.md"));
    assert!(outcome.path.is_file());
}

#[test]
fn unusable_map_path_is_treated_as_absent_and_write_fails() {
    let vault = sample_vault();
    let settings = MapSettings::default();
    fs::create_dir_all(vault.path().join("Vault Map.md")).unwrap();

    assert!(lookup_map(vault.path(), &settings).is_none());

    let err = update_map(vault.path(), &settings, &Utc::now()).unwrap_err();
    assert!(matches!(err, MapError::Write { .. }));
}

#[test]
fn missing_vault_is_a_scan_error() {
    let vault = TempDir::new().unwrap();
    let root = vault.path().join("gone");

    let err = update_map(&root, &MapSettings::default(), &Utc::now()).unwrap_err();
    assert!(matches!(err, MapError::Scan(_)));
}

#[test]
fn map_names_leaving_the_vault_write_the_default_document() {
    let outer = TempDir::new().unwrap();
    let vault = outer.path().join("vault");
    write(&vault, "Home.md", "# Home");

    for name in ["../escaped", "/tmp/escaped", "Maps/../../escaped"] {
        let settings = MapSettings { map_file_name: name.into(), ..MapSettings::default() };

        assert_eq!(map_path(&vault, &settings), vault.join("Vault Map.md"));
        let outcome = update_map(&vault, &settings, &Utc::now()).unwrap();
        assert_eq!(outcome.path, vault.join("Vault Map.md"));
        assert!(lookup_map(&vault, &settings).is_some());
    }

    assert!(!outer.path().join("escaped.md").exists());
}
