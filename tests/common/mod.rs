use std::path::PathBuf;

pub fn test_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

#[allow(dead_code)] // Avoid a false positive on the dead code analysis.
pub fn guests_dir() -> PathBuf {
    test_dir().join("guests")
}
