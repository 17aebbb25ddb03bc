//! Reading style trees and writing theme families.
//!
//! Loads are single-shot: the whole file is read, then parsed. Writes
//! serialize the complete document before the output file is opened, so a
//! failure never leaves a partial theme file behind.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, ThemeError};
use crate::tree::StyleTree;
use crate::variant::ThemeFamily;

/// Load a style tree from a JSON file whose top level is an object.
///
/// # Errors
///
/// Returns [`ThemeError::Read`] if the file cannot be read,
/// [`ThemeError::Parse`] if it is not valid JSON, and
/// [`ThemeError::NotAnObject`] if the top level is not an object.
pub fn load_style(path: &Path) -> Result<StyleTree> {
    let text = read(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(tree) => {
            debug!(path = %path.display(), keys = tree.len(), "loaded style tree");
            Ok(tree)
        }
        _ => Err(ThemeError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// Load a previously written theme family document.
///
/// # Errors
///
/// Returns [`ThemeError::Read`] or [`ThemeError::Parse`].
pub fn load_family(path: &Path) -> Result<ThemeFamily> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a family as pretty-printed JSON (2-space indentation).
///
/// # Errors
///
/// Returns [`ThemeError::Serialize`] if serialization fails.
pub fn to_pretty_json(family: &ThemeFamily) -> Result<String> {
    Ok(serde_json::to_string_pretty(family)?)
}

/// Write a family to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ThemeError::Serialize`], [`ThemeError::CreateDir`] or
/// [`ThemeError::Write`].
pub fn write_family(path: &Path, family: &ThemeFamily) -> Result<()> {
    let json = to_pretty_json(family)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ThemeError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "theme file written");
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
