// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn finds_config_in_current_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "version = 1\n").unwrap();

    let found = find_config(dir.path());
    assert_eq!(found, Some(config_path));
}

#[test]
fn finds_config_in_parent_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "version = 1\n").unwrap();

    let subdir = dir.path().join("sutras").join("heart");
    fs::create_dir_all(&subdir).unwrap();

    let found = find_config(&subdir);
    assert_eq!(found, Some(config_path));
}

#[test]
fn stops_at_git_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), None);
}

#[test]
fn finds_config_at_git_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "version = 1\n").unwrap();

    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), Some(config_path));
}

#[test]
fn ignores_directory_named_like_config() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();

    assert_eq!(find_config(dir.path()), None);
}

#[test]
fn explicit_path_wins() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "version = 1\n").unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "version = 1\n").unwrap();

    let resolved = resolve_config(Some(&explicit), dir.path()).unwrap();
    assert_eq!(resolved, Some(explicit));
}

#[test]
fn explicit_missing_path_is_config_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let err = resolve_config(Some(&missing), dir.path()).unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}
