//! Unit tests for configuration and root folder resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate LADLE_ROOT_FOLDER or LADLE_ROOT are marked with
//! #[serial] to ensure they run sequentially, not in parallel.

use ladle_common::config::{
    CompiledDefaults, LoggingConfig, RootFolderInitializer, RootFolderResolver, TomlConfig,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert_eq!(defaults.log_level, "info");
    assert!(defaults.log_file.is_none());
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var("LADLE_ROOT_FOLDER");
    env::remove_var("LADLE_ROOT");

    let resolver = RootFolderResolver::new("test-module");
    let root_folder = resolver.resolve();

    assert!(!root_folder.as_os_str().is_empty());

    let defaults = CompiledDefaults::for_current_platform();
    assert_eq!(root_folder, defaults.root_folder);
}

#[test]
#[serial]
fn test_resolver_env_var_ladle_root_folder() {
    let test_path = "/tmp/ladle-test-env-folder";
    env::set_var("LADLE_ROOT_FOLDER", test_path);

    let resolver = RootFolderResolver::new("test-module");
    let root_folder = resolver.resolve();

    assert_eq!(root_folder, PathBuf::from(test_path));

    env::remove_var("LADLE_ROOT_FOLDER");
}

#[test]
#[serial]
fn test_resolver_ladle_root_folder_takes_precedence() {
    env::remove_var("LADLE_ROOT_FOLDER");
    env::remove_var("LADLE_ROOT");

    env::set_var("LADLE_ROOT_FOLDER", "/tmp/ladle-priority-1");
    env::set_var("LADLE_ROOT", "/tmp/ladle-priority-2");

    let resolver = RootFolderResolver::new("test-module");
    let root_folder = resolver.resolve();

    assert_eq!(root_folder, PathBuf::from("/tmp/ladle-priority-1"));

    env::remove_var("LADLE_ROOT_FOLDER");
    env::remove_var("LADLE_ROOT");
}

#[test]
#[serial]
fn test_cli_override_beats_env_var() {
    env::set_var("LADLE_ROOT_FOLDER", "/tmp/ladle-from-env");

    let resolver = RootFolderResolver::new("test-module")
        .with_cli_override(Some(PathBuf::from("/tmp/ladle-from-cli")));
    let root_folder = resolver.resolve();

    assert_eq!(root_folder, PathBuf::from("/tmp/ladle-from-cli"));

    env::remove_var("LADLE_ROOT_FOLDER");
}

#[test]
#[serial]
fn test_resolver_missing_config_file_does_not_error() {
    env::remove_var("LADLE_ROOT_FOLDER");
    env::remove_var("LADLE_ROOT");

    // Use a module name that definitely won't have a config file
    let resolver = RootFolderResolver::new("nonexistent-test-module-12345");

    // Should not panic - should return compiled default
    let root_folder = resolver.resolve();

    assert!(!root_folder.as_os_str().is_empty());

    let defaults = CompiledDefaults::for_current_platform();
    assert_eq!(root_folder, defaults.root_folder);
}

#[test]
fn test_initializer_database_path() {
    let root = PathBuf::from("/tmp/ladle-test-root");
    let initializer = RootFolderInitializer::new(root.clone());

    let db_path = initializer.database_path();
    assert_eq!(db_path, root.join("ladle.db"));
}

#[test]
fn test_initializer_database_exists() {
    let root = PathBuf::from("/tmp/ladle-test-nonexistent");
    let initializer = RootFolderInitializer::new(root);

    assert!(!initializer.database_exists());
}

#[test]
fn test_initializer_creates_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested-root");

    let initializer = RootFolderInitializer::new(root.clone());
    let result = initializer.ensure_directory_exists();

    assert!(result.is_ok(), "Failed to create directory: {:?}", result.err());
    assert!(root.exists(), "Directory was not created");
    assert!(root.is_dir(), "Created path is not a directory");
}

#[test]
fn test_initializer_idempotent_directory_creation() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("idempotent-root");

    let initializer = RootFolderInitializer::new(root.clone());

    // First call - should create
    assert!(initializer.ensure_directory_exists().is_ok());

    // Second call - should succeed (idempotent)
    assert!(initializer.ensure_directory_exists().is_ok());

    assert!(root.exists());
}

#[test]
fn test_initializer_nested_directory_creation() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("level1").join("level2");

    let initializer = RootFolderInitializer::new(root.clone());
    let result = initializer.ensure_directory_exists();

    assert!(result.is_ok(), "Failed to create nested directories: {:?}", result.err());
    assert!(root.is_dir(), "Nested directory was not created");
}

#[test]
fn test_toml_roundtrip() {
    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/recipes")),
        logging: LoggingConfig::default(),
    };

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: TomlConfig = toml::from_str(&toml_str).unwrap();

    assert_eq!(parsed.root_folder, Some(PathBuf::from("/recipes")));
}

#[test]
fn test_toml_missing_fields_use_defaults() {
    let toml_str = r#"
        root_folder = "/recipes"
    "#;

    let config: TomlConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/recipes")));
    assert!(config.logging.file.is_none());
}
