//! Watchlist persistence: a UTF-8 JSON array of strings, read once at startup.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use super::list::NameList;

/// Default names.json path.
///
/// Tries in order:
/// 1. SCAMLIST_NAMES_PATH env var
/// 2. ~/.scamlist/names.json
/// 3. ./names.json
pub fn default_names_path() -> PathBuf {
    if let Ok(path) = std::env::var("SCAMLIST_NAMES_PATH") {
        return PathBuf::from(path);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".scamlist").join("names.json");
    }

    PathBuf::from("names.json")
}

/// Ways loading the names file can fail.
///
/// None of these are fatal to a host: [`load_or_init`] degrades every variant
/// to an empty list after logging a diagnostic.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("names file not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read names file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("names file {path} is not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("names file {path} must contain a JSON array of strings")]
    WrongShape { path: PathBuf },
}

/// Create an empty names file at `path` if none exists.
///
/// Parent directories are created as needed. Returns whether the file was
/// created; an existing file is never touched.
pub fn init_source(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    std::fs::write(path, "[]")
        .with_context(|| format!("Failed to write names file: {:?}", path))?;

    Ok(true)
}

/// Strict read of the names file.
///
/// Entries come back verbatim: order preserved, no de-duplication, no
/// trimming. Anything other than a JSON array of strings is an error and the
/// file is left as-is.
pub fn load(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(LoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let entries = value.as_array().ok_or_else(|| LoadError::WrongShape {
        path: path.to_path_buf(),
    })?;

    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str() {
            Some(s) => names.push(s.to_string()),
            None => {
                return Err(LoadError::WrongShape {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(names)
}

/// Load the names file, degrading every failure to an empty list.
///
/// A missing file is initialized via [`init_source`] so the next load is
/// well-formed. A malformed or wrong-shaped file is left untouched. Either
/// way the host stays operable; it just won't find anything.
pub fn load_or_init(path: &Path) -> Vec<String> {
    match load(path) {
        Ok(names) => names,
        Err(LoadError::Missing(_)) => {
            warn!("names file {:?} not found, creating an empty one", path);
            if let Err(e) = init_source(path) {
                warn!("could not create names file: {:#}", e);
            }
            Vec::new()
        }
        Err(e) => {
            warn!("{}; continuing with an empty list", e);
            Vec::new()
        }
    }
}

/// Convenience: load the file and build the lookup list in one step.
pub fn load_list(path: &Path) -> NameList {
    NameList::new(load_or_init(path))
}
