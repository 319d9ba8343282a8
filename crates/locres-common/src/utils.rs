//! Path and file name helpers.

use crate::types::LocaleTag;

/// Returns the final component of `path`.
///
/// This is a pure string operation: everything after the last path separator,
/// or the whole input when there is none. `../a/a.test:314` gives `a.test:314`.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(std::path::is_separator).next().unwrap_or(path)
}

/// Splits a file name into its stem and extension at the last `.`.
///
/// A leading dot does not start an extension, so `.toml` has no extension.
#[must_use]
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// Derives a locale tag from a locale definition file path.
///
/// Returns `None` when the extension is not `extension`, the stem is empty,
/// or the stem is not a valid locale tag. `locale/zh-CN.toml` with extension
/// `toml` yields `zh-CN`.
#[must_use]
pub fn locale_tag_from_path(path: &str, extension: &str) -> Option<LocaleTag> {
    let (stem, ext) = split_extension(file_name(path));
    if ext != Some(extension) {
        return None;
    }
    LocaleTag::new(stem).ok()
}
