use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use super::{parse::parse_guest_file, registry::JourneyRegistry};
use crate::error::Result;

const GUEST_EXTENSION: &str = "md";
const DRAFT_PREFIX: char = '_';

/// Parses every guest document in `dir`. Documents that fail to parse are logged and
/// skipped, and a missing directory yields no journeys.
pub fn load_all_guests(dir: impl AsRef<Path>) -> JourneyRegistry {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no guest directory, skipping guest documents");
        return JourneyRegistry::default();
    }

    let files = match guest_files(dir) {
        Ok(files) => files,
        Err(err) => {
            warn!(dir = %dir.display(), "unable to list guest directory: {err:#}");
            return JourneyRegistry::default();
        }
    };

    let mut registry = JourneyRegistry::default();

    for path in files {
        match parse_guest_file(&path) {
            Ok(journey) => {
                debug!(file = %path.display(), slug = %journey.slug(), "loaded guest journey");
                registry.insert(journey);
            }
            Err(err) => warn!(file = %path.display(), "skipping guest file: {err:#}"),
        }
    }

    debug!(dir = %dir.display(), journeys = registry.len(), "guest documents loaded");
    registry
}

/// Guest documents in `dir`, sorted by file name. Files starting with `_` are drafts.
fn guest_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_guest = path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == GUEST_EXTENSION)
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !name.starts_with(DRAFT_PREFIX));

        if is_guest {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
