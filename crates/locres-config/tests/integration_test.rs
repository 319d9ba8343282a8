//! Integration tests for locres-config crate.
//!
//! These tests load configuration files from disk and check path resolution
//! and error reporting.

use locres_common::test_utils::{create_temp_dir, write_raw_file};
use locres_config::{ConfigError, ConfigLoader};

#[test]
fn test_load_resolves_relative_paths() {
    let dir = create_temp_dir();
    let path = write_raw_file(
        dir.path(),
        "locres.toml",
        r#"
[locales]
directory = "locale"

[[locales.files]]
locale = "en-US"
path = "/opt/locale/en-US.toml"
"#,
    );

    let config = ConfigLoader::new(&path).load().unwrap();

    assert_eq!(config.locales.directory, Some(dir.path().join("locale")));
    assert_eq!(
        config.locales.files[0].path,
        std::path::PathBuf::from("/opt/locale/en-US.toml")
    );
    assert_eq!(config.locales.extension, "toml");
}

#[test]
fn test_load_missing_file() {
    let dir = create_temp_dir();
    let err = ConfigLoader::new(dir.path().join("absent.toml")).load().unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_runs_validation() {
    let dir = create_temp_dir();
    let path = write_raw_file(dir.path(), "locres.toml", "[locales]\nextension = \"\"\n");

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_load_malformed_file() {
    let dir = create_temp_dir();
    let path = write_raw_file(dir.path(), "locres.toml", "[locales\n");

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("locres.toml"));
}
