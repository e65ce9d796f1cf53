use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::ProductRecord;

// ---------------------------------------------------------------------------
// Errors and status
// ---------------------------------------------------------------------------

/// Why a catalog could not be read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog file not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("invalid catalog format in {}: top-level value must be an array", .path.display())]
    NotArray { path: PathBuf },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of the one-time startup load, shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded { path: PathBuf, count: usize },
    Failed { reason: String },
}

impl LoadStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded { path, count } => {
                write!(f, "Loaded {count} products from {}.", path.display())
            }
            LoadStatus::Failed { reason } => write!(f, "Failed to load catalog: {reason}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the product catalog. Never fails: any error becomes an empty record
/// list plus a [`LoadStatus::Failed`] describing it.
pub fn load_products(path: &Path) -> (Vec<ProductRecord>, LoadStatus) {
    match try_load(path) {
        Ok(records) => {
            log::info!("Loaded {} products from {}", records.len(), path.display());
            let status = LoadStatus::Loaded {
                path: path.to_path_buf(),
                count: records.len(),
            };
            (records, status)
        }
        Err(e) => {
            log::warn!("Catalog load failed: {e}");
            (
                Vec::new(),
                LoadStatus::Failed {
                    reason: e.to_string(),
                },
            )
        }
    }
}

/// Read the catalog, dispatching by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `series`, `model`, `watt`, ... columns
/// * otherwise  – JSON, `[{ "series": ..., "model": ..., "watt": ... }, ...]`
pub fn try_load(path: &Path) -> Result<Vec<ProductRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        _ => load_json(path),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records are kept verbatim: an element that is not an object is still
/// loaded and simply has no fields.
fn load_json(path: &Path) -> Result<Vec<ProductRecord>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match root {
        JsonValue::Array(items) => Ok(items.into_iter().map(ProductRecord::new).collect()),
        _ => Err(LoadError::NotArray {
            path: path.to_path_buf(),
        }),
    }
}

fn io_error(path: &Path, source: io::Error) -> LoadError {
    if source.kind() == io::ErrorKind::NotFound {
        LoadError::Missing {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Each row becomes an object of string values keyed by header. Empty cells
/// are left out so they read as missing, not as unparsable text.
fn load_csv(path: &Path) -> Result<Vec<ProductRecord>, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let mut records = Vec::new();

    for row in reader.deserialize::<BTreeMap<String, String>>() {
        let row = row.map_err(csv_error)?;
        let obj: serde_json::Map<String, JsonValue> = row
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k, JsonValue::String(v)))
            .collect();
        records.push(ProductRecord::new(JsonValue::Object(obj)));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Attribute, SERIES_KEY};
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let (records, status) = load_products(&path);
        assert!(records.is_empty());
        assert!(!status.is_ok());
        assert!(status.to_string().contains("nope.json"));
    }

    #[test]
    fn empty_array_is_success_with_zero_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.json", "[]");
        let (records, status) = load_products(&path);
        assert!(records.is_empty());
        assert!(status.is_ok());
        assert!(status.to_string().starts_with("Loaded 0 products"));
    }

    #[test]
    fn non_array_top_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for (i, body) in ["{\"series\": \"A\"}", "42", "\"text\"", "null"].iter().enumerate() {
            let path = write_file(&dir, &format!("bad{i}.json"), body);
            assert!(matches!(try_load(&path), Err(LoadError::NotArray { .. })));
            let (records, status) = load_products(&path);
            assert!(records.is_empty());
            assert!(status.to_string().contains("must be an array"));
        }
    }

    #[test]
    fn invalid_json_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "broken.json", "[{\"series\": ");
        assert!(matches!(try_load(&path), Err(LoadError::Parse { .. })));
        let (records, status) = load_products(&path);
        assert!(records.is_empty());
        assert!(status.to_string().contains("invalid JSON"));
    }

    #[test]
    fn directory_path_reports_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(try_load(dir.path()), Err(LoadError::Io { .. })));
        let (records, status) = load_products(dir.path());
        assert!(records.is_empty());
        assert!(status.to_string().contains("could not read"));
    }

    #[test]
    fn invalid_utf8_reports_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        std::fs::write(&path, [0xff, 0xfe]).unwrap();
        match try_load(&path) {
            Err(LoadError::Io { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData)
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
        let (records, status) = load_products(&path);
        assert!(records.is_empty());
        assert!(status.to_string().contains("could not read"));
    }

    #[test]
    fn records_are_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "catalog.json",
            r#"[{"series":"Track-100","model":"TR-1","watt":"30"}, 5, {"model":"X"}]"#,
        );
        let (records, status) = load_products(&path);
        assert_eq!(records.len(), 3);
        assert_eq!(
            status,
            LoadStatus::Loaded {
                path: path.clone(),
                count: 3
            }
        );
        assert_eq!(records[0].search_text(SERIES_KEY), "Track-100");
        assert_eq!(records[0].attribute_value(Attribute::Watt), 30.0);
        assert_eq!(records[1], ProductRecord::new(serde_json::json!(5)));
    }

    #[test]
    fn csv_rows_become_string_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "catalog.csv",
            "series,model,watt,cct,beam,lumen,price\nPanel,P-1,40,4000,,3600,1200\n",
        );
        let (records, status) = load_products(&path);
        assert!(status.is_ok());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attribute_value(Attribute::Watt), 40.0);
        assert_eq!(records[0].attribute_text(Attribute::Beam), "?");
    }

    #[test]
    fn extension_alone_picks_the_format() {
        let dir = tempfile::tempdir().unwrap();
        let upper = write_file(&dir, "CATALOG.CSV", "series,model\nPanel,P-1\n");
        let records = try_load(&upper).unwrap();
        assert_eq!(records[0].search_text(SERIES_KEY), "Panel");

        let txt = write_file(&dir, "catalog.txt", r#"[{"series":"Track"}]"#);
        let records = try_load(&txt).unwrap();
        assert_eq!(records[0].search_text(SERIES_KEY), "Track");
    }
}
