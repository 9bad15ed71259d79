//! Read-only dataset loading.
//!
//! The CLI plays the record-source role: it reads a JSON array of listings
//! and hands the core a complete in-memory collection. Entries that fail to
//! parse are logged and skipped rather than failing the whole load, so one
//! bad record never hides the rest of the directory.

use std::fs;
use std::path::Path;

use anyhow::Context;
use meddir_core::Listing;

/// Loads all listings from the JSON dataset at `path`.
///
/// The file must contain a JSON array. Array entries that do not parse as
/// listings are skipped with a warning.
pub fn load_listings(path: &Path) -> anyhow::Result<Vec<Listing>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;

    let entries: Vec<serde_json::Value> = serde_json::from_str(&contents)
        .with_context(|| format!("dataset is not a JSON array: {}", path.display()))?;

    let mut listings = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Listing>(entry) {
            Ok(listing) => listings.push(listing),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed listing entry");
            }
        }
    }

    Ok(listings)
}
