//! Locale registry: owner of every per-locale resource table

use crate::error::{I18nError, I18nResult};
use crate::reader;
use crate::table::ResourceTable;
use dashmap::DashMap;
use locres_common::{locale_tag_from_path, LocaleTag};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File extension recognised by [`LocaleRegistry::load_dir`] unless overridden.
pub const DEFAULT_EXTENSION: &str = "toml";

/// Placeholder returned by [`LocaleRegistry::localize`] when a key cannot be resolved.
#[must_use]
pub fn missing_placeholder(key: &str) -> String {
    format!("[missing: {key}]")
}

/// A file that [`LocaleRegistry::load_dir`] could not ingest.
#[derive(Debug)]
pub struct LoadFailure {
    /// File (or directory, for enumeration errors) that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: I18nError,
}

/// Outcome of a directory ingestion.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Locales loaded, in file-name order
    pub loaded: Vec<LocaleTag>,
    /// Entries ignored because they are not locale files
    pub skipped: Vec<PathBuf>,
    /// Locale files that failed to load
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Whether every locale file in the directory loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Owns one [`ResourceTable`] per locale tag.
///
/// The application constructs a single registry and shares it (usually as an
/// `Arc<LocaleRegistry>`). Locking is per locale: a file is parsed before its
/// table is locked, then merged in a single write, so readers never see a
/// partially merged table.
#[derive(Debug)]
pub struct LocaleRegistry {
    tables: DashMap<LocaleTag, ResourceTable>,
    extension: String,
}

impl LocaleRegistry {
    /// Create an empty registry that recognises `.toml` locale files.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    /// Create an empty registry that recognises locale files with `extension`.
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            tables: DashMap::new(),
            extension: extension.into(),
        }
    }

    /// Extension recognised by directory ingestion.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Load a locale definition file and merge it into `locale`'s table.
    ///
    /// Existing keys are overwritten. Returns the number of entries merged.
    pub fn load_file(&self, locale: &LocaleTag, path: impl AsRef<Path>) -> I18nResult<usize> {
        let path = path.as_ref();
        let table = reader::read_file(path)?;
        let merged = self.merge(locale, table);

        info!("Loaded {} entries for locale {} from {:?}", merged, locale, path);
        Ok(merged)
    }

    /// Merge in-memory locale definition content into `locale`'s table.
    pub fn load_str(&self, locale: &LocaleTag, source_name: &str, content: &str) -> I18nResult<usize> {
        let table = reader::read_str(source_name, content)?;
        let merged = self.merge(locale, table);

        debug!("Loaded {} entries for locale {} from {}", merged, locale, source_name);
        Ok(merged)
    }

    /// Load every locale file directly inside `dir`.
    ///
    /// The locale tag is the file name without its extension. Entries with a
    /// different extension, an unusable stem, or that are not regular files
    /// are skipped. A file that fails to load is recorded in the report and
    /// the remaining files are still processed. Only a failure to enumerate
    /// `dir` itself is returned as an error.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> I18nResult<LoadReport> {
        let dir = dir.as_ref();
        debug!("Scanning locale directory: {:?}", dir);

        let entries = fs::read_dir(dir).map_err(|source| I18nError::DirectoryRead {
            path: dir.display().to_string(),
            source,
        })?;

        let mut report = LoadReport::default();
        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(source) => report.failures.push(LoadFailure {
                    path: dir.to_path_buf(),
                    error: I18nError::DirectoryRead {
                        path: dir.display().to_string(),
                        source,
                    },
                }),
            }
        }
        paths.sort();

        for path in paths {
            // Non UTF-8 names cannot be used verbatim as a tag.
            let tag = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| locale_tag_from_path(name, &self.extension));

            let Some(tag) = tag.filter(|_| path.is_file()) else {
                debug!("Skipping {:?}: not a .{} locale file", path, self.extension);
                report.skipped.push(path);
                continue;
            };

            match self.load_file(&tag, &path) {
                Ok(_) => report.loaded.push(tag),
                Err(error) => {
                    warn!("Failed to load locale {} from {:?}: {}", tag, path, error);
                    report.failures.push(LoadFailure { path, error });
                }
            }
        }

        info!(
            "Loaded {} locales from {:?} ({} skipped, {} failed)",
            report.loaded.len(),
            dir,
            report.skipped.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Resolve `key` in `locale`'s table.
    ///
    /// Lookup is exact: there is no fallback to another locale. A miss is not
    /// an error; it yields [`missing_placeholder`] so the caller always has
    /// something visible to render.
    pub fn localize(&self, locale: impl AsRef<str>, key: impl AsRef<str>) -> String {
        let (locale, key) = (locale.as_ref(), key.as_ref());
        self.try_localize(locale, key).unwrap_or_else(|| {
            warn!("Message '{}' not found for locale {}", key, locale);
            missing_placeholder(key)
        })
    }

    /// Resolve `key` in `locale`'s table, returning `None` on a miss.
    pub fn try_localize(&self, locale: impl AsRef<str>, key: impl AsRef<str>) -> Option<String> {
        self.tables
            .get(locale.as_ref())
            .and_then(|table| table.get(key.as_ref()).map(str::to_string))
    }

    /// Whether `locale` has an entry for `key`.
    pub fn contains(&self, locale: impl AsRef<str>, key: impl AsRef<str>) -> bool {
        self.tables
            .get(locale.as_ref())
            .is_some_and(|table| table.contains(key.as_ref()))
    }

    /// Whether a table exists for `locale`.
    pub fn has_locale(&self, locale: impl AsRef<str>) -> bool {
        self.tables.contains_key(locale.as_ref())
    }

    /// All loaded locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<LocaleTag> {
        let mut locales: Vec<LocaleTag> = self.tables.iter().map(|entry| entry.key().clone()).collect();
        locales.sort();
        locales
    }

    /// Number of entries loaded for `locale`.
    pub fn entry_count(&self, locale: impl AsRef<str>) -> usize {
        self.tables.get(locale.as_ref()).map_or(0, |table| table.len())
    }

    fn merge(&self, locale: &LocaleTag, table: ResourceTable) -> usize {
        self.tables.entry(locale.clone()).or_default().merge(table)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
