//! Environment precedence for loader configuration
//!
//! Runs in its own test binary because it sets a process environment variable.

use numlib_host::{LoaderConfig, LIBRARY_PATH_ENV};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_env_library_path_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numlib.toml");
    fs::write(
        &path,
        r#"
        library_path = "/from/toml.so"
        search_paths = ["/from/toml/dir"]
        "#,
    )
    .unwrap();

    // without the variable the file decides
    std::env::remove_var(LIBRARY_PATH_ENV);
    let config = LoaderConfig::from_file(&path).unwrap();
    assert_eq!(config.candidates()[0], PathBuf::from("/from/toml.so"));

    std::env::set_var(LIBRARY_PATH_ENV, "/from/env.so");
    let config = LoaderConfig::from_file(&path).unwrap();
    std::env::remove_var(LIBRARY_PATH_ENV);

    assert_eq!(config.library_path, Some(PathBuf::from("/from/env.so")));
    assert_eq!(config.candidates()[0], PathBuf::from("/from/env.so"));
    // the file's search directories still apply
    assert_eq!(config.search_paths[0], PathBuf::from("/from/toml/dir"));
}
