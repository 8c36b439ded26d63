use std::path::PathBuf;

/// Get the path to the crate root directory.
pub fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the path to the recorded benchmark data directory.
pub fn data_dir() -> PathBuf {
    crate_dir().join("data")
}

/// Get the path to the charts directory, creating it if it doesn't exist.
pub fn charts_dir() -> PathBuf {
    let dir = crate_dir().join("charts");
    std::fs::create_dir_all(&dir).expect("Failed to create charts directory");
    dir
}

/// Get the path to the tables directory, creating it if it doesn't exist.
pub fn tables_dir() -> PathBuf {
    let dir = crate_dir().join("tables");
    std::fs::create_dir_all(&dir).expect("Failed to create tables directory");
    dir
}

/// Get a path in the data directory.
pub fn data_file(filename: &str) -> PathBuf {
    data_dir().join(filename)
}

/// Get a path in the charts directory.
pub fn charts_file(filename: &str) -> PathBuf {
    charts_dir().join(filename)
}

/// Get a path in the tables directory.
pub fn tables_file(filename: &str) -> PathBuf {
    tables_dir().join(filename)
}
