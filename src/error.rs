use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    // File could not be opened, read, or written
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Contents are not well-formed JSON, or do not match the caller's shape
    #[error("Failed to decode {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Sequences compared by index must agree on length
    #[error("Sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
