//! Integration tests for locres-i18n crate.
//!
//! These tests exercise file and directory ingestion against real files on
//! disk, plus the load/lookup properties of the registry.

use locres_common::test_utils::{create_temp_dir, init_test_logging, write_locale_file, write_raw_file};
use locres_common::LocaleTag;
use locres_i18n::{missing_placeholder, I18nError, LocaleRegistry};
use proptest::prelude::*;
use std::sync::Arc;

const APPROVAL: &str = "efast.err.in.approval";

fn tag(s: &str) -> LocaleTag {
    s.parse().unwrap()
}

#[test]
fn test_load_file_per_locale() {
    init_test_logging();
    let dir = create_temp_dir();
    let en = write_locale_file(dir.path(), "en-US.toml", &[(APPROVAL, "Approval failed")]);
    let zh = write_locale_file(dir.path(), "zh-CN.toml", &[(APPROVAL, "审批失败")]);

    let registry = LocaleRegistry::new();
    assert_eq!(registry.load_file(&tag("en-US"), &en).unwrap(), 1);
    assert_eq!(registry.load_file(&tag("zh-CN"), &zh).unwrap(), 1);

    assert_eq!(registry.localize("en-US", APPROVAL), "Approval failed");
    assert_eq!(registry.localize("zh-CN", APPROVAL), "审批失败");

    let missing = registry.localize("en-US", "nonexistent.key");
    assert!(!missing.is_empty());
    assert!(missing.contains("nonexistent.key"));
}

#[test]
fn test_load_file_errors() {
    let dir = create_temp_dir();
    let registry = LocaleRegistry::new();

    let err = registry
        .load_file(&tag("en-US"), dir.path().join("absent.toml"))
        .unwrap_err();
    assert!(matches!(err, I18nError::ResourceRead { .. }));

    let broken = write_raw_file(dir.path(), "en-US.toml", "key = \"unterminated");
    let err = registry.load_file(&tag("en-US"), &broken).unwrap_err();
    assert!(matches!(err, I18nError::ResourceParse { .. }));
    assert!(!registry.has_locale("en-US"));
}

#[test]
fn test_load_dir_derives_tags_and_skips_foreign_files() {
    init_test_logging();
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.toml", &[(APPROVAL, "Approval failed")]);
    write_locale_file(dir.path(), "zh-CN.toml", &[(APPROVAL, "审批失败")]);
    write_locale_file(dir.path(), "de-DE.json", &[(APPROVAL, "ignored")]);
    write_raw_file(dir.path(), "README", "not a locale");
    write_raw_file(dir.path(), ".toml", "x = \"hidden\"");
    std::fs::create_dir(dir.path().join("fr-FR.toml")).unwrap();

    let registry = LocaleRegistry::new();
    let report = registry.load_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, vec![tag("en-US"), tag("zh-CN")]);
    assert_eq!(report.skipped.len(), 4);
    assert!(report.is_complete());
    assert_eq!(registry.locales(), vec![tag("en-US"), tag("zh-CN")]);
    assert!(!registry.has_locale("de-DE"));
    assert!(!registry.has_locale("fr-FR"));
    assert_eq!(registry.localize("zh-CN", APPROVAL), "审批失败");
}

#[test]
fn test_load_dir_partial_success() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.toml", &[(APPROVAL, "Approval failed")]);
    write_raw_file(dir.path(), "ja-JP.toml", "= broken");
    write_locale_file(dir.path(), "zh-CN.toml", &[(APPROVAL, "审批失败")]);

    let registry = LocaleRegistry::new();
    let report = registry.load_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, vec![tag("en-US"), tag("zh-CN")]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("ja-JP.toml"));
    assert!(report.failures[0].error.is_resource_load());
    assert!(report.failures[0].error.path().ends_with("ja-JP.toml"));
    assert!(!report.is_complete());
}

#[cfg(unix)]
#[test]
fn test_load_dir_skips_non_utf8_file_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = create_temp_dir();
    let ff = dir.path().join(OsStr::from_bytes(b"\xff.toml"));
    let fe = dir.path().join(OsStr::from_bytes(b"\xfe.toml"));
    std::fs::write(&ff, "a = \"from-ff\"").unwrap();
    std::fs::write(&fe, "b = \"from-fe\"").unwrap();
    write_locale_file(dir.path(), "en-US.toml", &[(APPROVAL, "Approval failed")]);

    let registry = LocaleRegistry::new();
    let report = registry.load_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, vec![tag("en-US")]);
    assert_eq!(report.skipped.len(), 2);
    assert!(report.skipped.contains(&ff));
    assert!(report.skipped.contains(&fe));
    assert_eq!(registry.locales(), vec![tag("en-US")]);
}

#[test]
fn test_load_dir_missing_directory() {
    let dir = create_temp_dir();
    let registry = LocaleRegistry::new();

    let err = registry.load_dir(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, I18nError::DirectoryRead { .. }));
}

#[test]
fn test_load_dir_merges_into_existing_tables() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.toml", &[(APPROVAL, "Approval rejected")]);

    let registry = LocaleRegistry::new();
    registry
        .load_str(&tag("en-US"), "inline", "\"efast.err.in.approval\" = \"Approval failed\"\nother = \"Kept\"")
        .unwrap();
    registry.load_dir(dir.path()).unwrap();

    assert_eq!(registry.localize("en-US", APPROVAL), "Approval rejected");
    assert_eq!(registry.localize("en-US", "other"), "Kept");
}

#[test]
fn test_custom_extension() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en-US.lang", &[(APPROVAL, "Approval failed")]);
    write_locale_file(dir.path(), "zh-CN.toml", &[(APPROVAL, "审批失败")]);

    let registry = LocaleRegistry::with_extension("lang");
    let report = registry.load_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, vec![tag("en-US")]);
    assert_eq!(registry.extension(), "lang");
}

#[test]
fn test_concurrent_readers_and_writers() {
    let registry = Arc::new(LocaleRegistry::new());
    let en = tag("en-US");
    registry.load_str(&en, "seed", "a = \"0\"\nb = \"0\"").unwrap();

    std::thread::scope(|scope| {
        for round in 0..4 {
            let registry = Arc::clone(&registry);
            let en = en.clone();
            scope.spawn(move || {
                for i in 0..50 {
                    let content = format!("a = \"{round}-{i}\"\nb = \"{round}-{i}\"");
                    registry.load_str(&en, "writer", &content).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                for _ in 0..200 {
                    assert!(registry.contains("en-US", "a"));
                    assert_ne!(registry.localize("en-US", "b"), missing_placeholder("b"));
                }
            });
        }
    });

    assert_eq!(registry.entry_count("en-US"), 2);
}

proptest! {
    #[test]
    fn prop_loaded_values_round_trip(
        locale in "[a-z]{2}-[A-Z]{2}",
        entries in prop::collection::hash_map("[a-z][a-z0-9_.]{0,12}[a-z0-9]", "[a-zA-Z0-9 ,.!?\u{4e00}-\u{4e20}]{0,24}", 1..8),
    ) {
        let registry = LocaleRegistry::new();
        let locale = tag(&locale);
        let content: String = entries
            .iter()
            .map(|(key, value)| format!("\"{key}\" = \"{value}\"\n"))
            .collect();
        registry.load_str(&locale, "generated", &content).unwrap();

        for (key, value) in &entries {
            prop_assert_eq!(&registry.localize(&locale, key), value);
        }
    }

    #[test]
    fn prop_second_load_wins(first in "[a-zA-Z ]{0,16}", second in "[a-zA-Z ]{0,16}") {
        let registry = LocaleRegistry::new();
        let en = tag("en-US");
        registry.load_str(&en, "first", &format!("k = \"{first}\"")).unwrap();
        registry.load_str(&en, "second", &format!("k = \"{second}\"")).unwrap();
        prop_assert_eq!(registry.localize(&en, "k"), second);
    }

    #[test]
    fn prop_miss_never_empty(locale in "[a-z]{2}", key in "[a-z.]{1,20}") {
        let registry = LocaleRegistry::new();
        let result = registry.localize(&locale, &key);
        prop_assert!(!result.is_empty());
        prop_assert!(result.contains(&key));
    }
}
