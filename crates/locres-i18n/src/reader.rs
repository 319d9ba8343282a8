//! Locale definition file reading
//!
//! A locale file is a TOML document whose string leaves become table
//! entries. Nested tables are flattened into dotted keys, so the two
//! documents below produce the same entry `efast.err.in.approval`:
//!
//! ```toml
//! "efast.err.in.approval" = "Approval failed"
//! ```
//!
//! ```toml
//! [efast.err.in]
//! approval = "Approval failed"
//! ```
//!
//! Non-string leaves are skipped.

use crate::error::{I18nError, I18nResult};
use crate::table::ResourceTable;
use std::fs;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, warn};

/// Read and parse a locale definition file.
pub fn read_file(path: &Path) -> I18nResult<ResourceTable> {
    debug!("Reading resource file: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| I18nError::ResourceRead {
        path: path.display().to_string(),
        source,
    })?;

    read_str(&path.display().to_string(), &content)
}

/// Parse locale definition content. `source_name` is used in errors and logs.
pub fn read_str(source_name: &str, content: &str) -> I18nResult<ResourceTable> {
    let document: Table = content.parse().map_err(|source| I18nError::ResourceParse {
        path: source_name.to_string(),
        source,
    })?;

    let mut table = ResourceTable::new();
    let mut shadowed = Vec::new();
    flatten_into(&mut table, &mut shadowed, None, document, source_name);
    Ok(table)
}

/// Flattens `document` into `table`, collecting keys that were written more than once.
fn flatten_into(
    table: &mut ResourceTable,
    shadowed: &mut Vec<String>,
    prefix: Option<&str>,
    document: Table,
    source_name: &str,
) {
    for (key, value) in document {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };

        match value {
            Value::String(text) => {
                if let Some(previous) = table.insert(full_key.clone(), text) {
                    warn!(
                        "Key '{}' defined more than once in {}, dropping '{}'",
                        full_key, source_name, previous
                    );
                    shadowed.push(full_key);
                }
            }
            Value::Table(nested) => flatten_into(table, shadowed, Some(&full_key), nested, source_name),
            other => {
                warn!(
                    "Skipping non-string value for '{}' in {} ({})",
                    full_key,
                    source_name,
                    other.type_str()
                );
            }
        }
    }
}
