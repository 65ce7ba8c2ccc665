//! JSON serialization of the lookup table.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ConvertError;
use crate::models::LookupTable;

/// Render the table as two-space indented JSON with a trailing newline.
/// Non-ASCII text is written as-is.
pub fn to_json(table: &LookupTable) -> Result<String, ConvertError> {
    let mut json = serde_json::to_string_pretty(table)?;
    json.push('\n');
    Ok(json)
}

/// Write the table to `path`, creating the parent directory if needed.
pub fn write_json(table: &LookupTable, path: &Path) -> Result<(), ConvertError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            info!("Creating output directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| ConvertError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let json = to_json(table)?;
    fs::write(path, json).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} postal codes to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRow;
    use crate::normalize::normalize;
    use tempfile::TempDir;

    #[test]
    fn test_empty_table_is_empty_object() {
        assert_eq!(to_json(&LookupTable::new()).unwrap(), "{}\n");
    }

    #[test]
    fn test_pretty_output_keeps_accents() {
        let (table, _) = normalize(vec![
            RawRow::new(8128.0, "Belsőbáránd"),
            RawRow::new(1011.0, "Budapest"),
            RawRow::new(8128.0, "Aba"),
        ]);

        let expected = "{\n  \"1011\": [\n    \"Budapest\"\n  ],\n  \"8128\": [\n    \"Aba\",\n    \"Belsőbáránd\"\n  ]\n}\n";
        assert_eq!(to_json(&table).unwrap(), expected);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets").join("postal_codes.json");
        let (table, _) = normalize(vec![RawRow::new("2600", "Vác")]);

        write_json(&table, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: LookupTable = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_output_is_idempotent() {
        let rows = || {
            vec![
                RawRow::new("7400", "Kaposvár"),
                RawRow::new("1011", "Budapest"),
                RawRow::new("7400", "Kaposfüred"),
            ]
        };
        let first = to_json(&normalize(rows()).0).unwrap();
        let second = to_json(&normalize(rows()).0).unwrap();
        assert_eq!(first, second);
    }
}
