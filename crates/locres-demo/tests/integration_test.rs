//! Integration tests for locres-demo crate.
//!
//! These tests drive the demo end to end against locale files on disk,
//! including the bundled sample configuration.

use locres_common::test_utils::{create_temp_dir, init_test_logging, write_locale_file, write_raw_file};
use locres_config::{Config, LocaleFileConfig, CONFIG_ENV_VAR};
use locres_demo::{
    bundled_config_path, load_config, submit_approval, DemoApp, DemoError, APPROVAL_FAILED, UNKNOWN_KEY,
};
use locres_i18n::missing_placeholder;

#[test]
fn test_run_with_directory() {
    init_test_logging();
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.toml", &[("efast.err.in.approval", "Approval failed")]);
    write_locale_file(dir.path(), "zh-CN.toml", &[("efast.err.in.approval", "审批失败")]);
    write_raw_file(dir.path(), "notes.txt", "ignored");

    let mut config = Config::default();
    config.locales.directory = Some(dir.path().to_path_buf());

    let app = DemoApp::new(config);
    assert_eq!(app.load_resources().unwrap(), 2);

    let lines = app.run().unwrap();
    let missing = missing_placeholder(UNKNOWN_KEY.as_str());
    assert_eq!(lines[0], "en-US: Approval failed");
    assert_eq!(lines[1], format!("en-US: {missing}"));
    assert_eq!(lines[2], "zh-CN: 审批失败");
    assert_eq!(lines[3], format!("zh-CN: {missing}"));
    assert_eq!(lines[4], "a.test:314");
    assert_eq!(lines[5], "client error: efast.err.in.approval");
    assert!(lines[6].contains("\"message\":\"Approval failed\""));
}

#[test]
fn test_configured_file_failure_is_fatal() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.locales.files.push(LocaleFileConfig {
        locale: "en-US".parse().unwrap(),
        path: dir.path().join("missing.toml"),
    });

    let app = DemoApp::new(config);
    assert!(matches!(app.load_resources(), Err(DemoError::I18n(_))));
}

#[test]
fn test_directory_file_failure_is_skipped() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.toml", &[("efast.err.in.approval", "Approval failed")]);
    write_raw_file(dir.path(), "zh-CN.toml", "not = = toml");

    let mut config = Config::default();
    config.locales.directory = Some(dir.path().to_path_buf());

    let app = DemoApp::new(config);
    assert_eq!(app.load_resources().unwrap(), 1);
    assert!(!app.registry().has_locale("zh-CN"));
}

#[test]
fn test_submit_approval_is_client_error() {
    let err = submit_approval().unwrap_err();
    assert!(err.is_client());
    assert_eq!(err.resource_key(), &APPROVAL_FAILED);
    assert_eq!(err.tag(), "eofs");
}

#[test]
fn test_bundled_sample_configuration() {
    let config = load_config(Some(bundled_config_path())).unwrap();

    let app = DemoApp::new(config);
    assert_eq!(app.load_resources().unwrap(), 2);
    assert_eq!(app.registry().localize("zh-CN", &APPROVAL_FAILED), "审批失败");
    assert_eq!(
        app.registry().localize("en-US", "efast.err.storage"),
        "Storage is temporarily unavailable"
    );
}

#[test]
fn test_without_argument_falls_back_to_bundled_configuration() {
    if std::env::var_os(CONFIG_ENV_VAR).is_some() {
        return;
    }

    let config = load_config(None).unwrap();
    assert!(config.locales.directory.is_some());

    let app = DemoApp::new(config);
    assert_eq!(app.load_resources().unwrap(), 2);
    let lines = app.run().unwrap();
    assert!(lines.iter().any(|line| line == "zh-CN: 审批失败"));
}

#[test]
fn test_explicit_missing_configuration_is_an_error() {
    let dir = create_temp_dir();
    let result = load_config(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(DemoError::Config(_))));
}
