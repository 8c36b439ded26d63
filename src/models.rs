//! Typed shapes of the recorded benchmark files.
//!
//! The loader in [`crate::data`] is shape-agnostic; these structs are where
//! each chart script's expectations live. A file that does not match its
//! expected shape fails to decode, and that failure propagates unmodified.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

use crate::data::read_json_data;
use crate::error::DataError;

/// Tree depths covered by the constraint-count benchmark.
///
/// The recorded file carries only the dependent values; the depth axis is
/// fixed by the circuit generation scripts.
pub const TREE_DEPTHS: std::ops::RangeInclusive<u32> = 2..=32;

/// Leaf counts covered by the browser tree-recreation benchmark.
pub const RECREATE_TREE_LEAVES: [u32; 4] = [128, 512, 1024, 2048];

/// Accumulator sizes of the recorded revocation-tree timings.
pub const REVOCATION_LABELS: [&str; 3] = ["10K", "100K", "1M"];

/// Circuit constraint counts per tree depth, aligned with [`TREE_DEPTHS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintCounts {
    pub leanimt: Vec<f64>,
    pub smt: Vec<f64>,
}

/// One averaged measurement from the Node.js benchmark suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionTiming {
    #[serde(rename = "Function")]
    pub function: String,
    #[serde(rename = "SMT (ms)")]
    pub smt_ms: f64,
    #[serde(rename = "LeanIMT (ms)")]
    pub leanimt_ms: f64,
}

/// Browser tree-recreation timings, aligned with [`RECREATE_TREE_LEAVES`].
///
/// The revocation timings record how long recreating a LeanIMT takes at
/// revocation-registry scale and align with [`REVOCATION_LABELS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecreateTreeTimings {
    pub leanimt: Vec<f64>,
    pub smt: Vec<f64>,
    #[serde(rename = "leanimt-revocation")]
    pub leanimt_revocation: Vec<f64>,
}

impl ConstraintCounts {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        decode(path.as_ref())
    }
}

impl FunctionTiming {
    /// Parse the full list of measurements from a recorded benchmark file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Vec<Self>, DataError> {
        decode(path.as_ref())
    }
}

impl RecreateTreeTimings {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        decode(path.as_ref())
    }
}

fn decode<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let value = read_json_data(path)?;
    serde_json::from_value(value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_constraint_counts() {
        let value = json!({"leanimt": [643, 883], "smt": [1760, 2491]});
        let counts: ConstraintCounts = serde_json::from_value(value).unwrap();
        assert_eq!(counts.leanimt, vec![643.0, 883.0]);
        assert_eq!(counts.smt, vec![1760.0, 2491.0]);
    }

    #[test]
    fn decodes_function_timings_with_original_column_names() {
        let value = json!([
            {"Function": "Add Member", "SMT (ms)": 1.52208, "LeanIMT (ms)": 0.33411},
        ]);
        let timings: Vec<FunctionTiming> = serde_json::from_value(value).unwrap();
        assert_eq!(timings.len(), 1);
        assert_eq!(timings[0].function, "Add Member");
        assert_eq!(timings[0].smt_ms, 1.52208);
        assert_eq!(timings[0].leanimt_ms, 0.33411);
    }

    #[test]
    fn decodes_recreate_tree_timings() {
        let value = json!({
            "leanimt": [21.4, 83.7],
            "smt": [412.6, 1649.8],
            "leanimt-revocation": [1628.4, 16493.1, 171224.6],
        });
        let timings: RecreateTreeTimings = serde_json::from_value(value).unwrap();
        assert_eq!(timings.leanimt_revocation.len(), 3);
    }

    #[test]
    fn mismatched_shape_is_rejected() {
        // A sequence where a mapping is expected.
        let value = json!([1, 2, 3]);
        assert!(serde_json::from_value::<ConstraintCounts>(value).is_err());
    }

    #[test]
    fn missing_key_is_rejected() {
        let value = json!({"leanimt": [1, 2, 3]});
        assert!(serde_json::from_value::<ConstraintCounts>(value).is_err());
    }
}
