//! CLI runtime configuration.
//!
//! The dataset path is resolved once at startup and passed down
//! explicitly, rather than reading process-wide environment variables
//! during command handling.

use std::path::PathBuf;

/// Default dataset filename when neither a flag nor the environment
/// provides one.
pub const DEFAULT_DATA_FILE: &str = "listings.json";

/// Resolve the listings dataset path.
///
/// Precedence: explicit `--data` flag, then the `MEDDIR_DATA_FILE`
/// environment value, then [`DEFAULT_DATA_FILE`]. Empty or whitespace-only
/// environment values are ignored.
pub fn resolve_dataset_path(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    let env_value = env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    match env_value {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}
