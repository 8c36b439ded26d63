//! Generic JSON loading for recorded benchmark results.
//!
//! The loader is shape-agnostic on purpose: it returns whatever the file
//! decodes to, and each chart script imposes its own expectations on the
//! result (see [`crate::models`]).

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::DataError;

/// Read a file and parse its full contents as JSON.
///
/// Returns the decoded value exactly as parsed, with no transformation,
/// filtering, or validation applied. Fails with [`DataError::Io`] if the
/// file cannot be opened and [`DataError::Json`] if its contents are not
/// valid JSON; the underlying error is preserved as the source either way.
pub fn read_json_data(path: impl AsRef<Path>) -> Result<Value, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "loaded benchmark data");
    Ok(value)
}

/// Write a JSON value to a file, pretty-printed.
///
/// Counterpart of [`read_json_data`] for recording results.
pub fn write_json_data(path: impl AsRef<Path>, value: &Value) -> Result<(), DataError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "recorded benchmark data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_a_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.json");
        let value = json!({"leanimt": [1, 2, 3], "smt": [2, 4, 9]});

        write_json_data(&path, &value).unwrap();
        assert_eq!(read_json_data(&path).unwrap(), value);
    }

    #[test]
    fn round_trips_a_sequence_of_mappings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timings.json");
        let value = json!([
            {"Function": "Add Member", "SMT (ms)": 1.5, "LeanIMT (ms)": 0.3},
            {"Function": "Update Member", "SMT (ms)": 1.7, "LeanIMT (ms)": 0.5},
        ]);

        write_json_data(&path, &value).unwrap();
        let loaded = read_json_data(&path).unwrap();
        assert_eq!(loaded.as_array().unwrap().len(), 2);
        assert_eq!(loaded, value);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json_data(dir.path().join("no-such-file.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"leanimt\": [1, 2").unwrap();

        let err = read_json_data(&path).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }
}
