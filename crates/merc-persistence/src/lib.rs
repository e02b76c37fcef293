#![deny(warnings)]

//! Save/load for Iron Lance campaigns.
//!
//! The entire save is one pretty-printed JSON document: a format version
//! tag, a timestamp, and the full company serialization. There are no
//! partial or incremental writes. Load failures are classified so the
//! presentation layer can message "no save found" and "save corrupted"
//! differently.

use chrono::{DateTime, Utc};
use merc_core::Company;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current save format version.
pub const SAVE_VERSION: &str = "1.0";

/// Default file name for the rolling autosave.
pub const AUTOSAVE_FILE: &str = "autosave.json";

/// The on-disk save document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: String,
    pub saved_at: DateTime<Utc>,
    pub company: Company,
}

/// Why a save could not be read. `NotFound` and `Corrupted` are distinct
/// on purpose: a missing file is routine, a corrupted one is worth a
/// louder message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("save file not found: {0}")]
    NotFound(PathBuf),
    #[error("corrupted save file: {0}")]
    Corrupted(String),
    #[error("io error reading save: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a save could not be written.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to serialize save: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error writing save: {0}")]
    Io(#[from] std::io::Error),
}

/// Lightweight save-slot description for listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub file_name: String,
    pub company_name: String,
    pub week: u32,
    pub c_bills: i64,
    pub reputation: i32,
    pub saved_at: DateTime<Utc>,
}

/// Default save directory: `.ironlance/saves` under the user's home, or
/// under the current directory when no home is set.
pub fn default_save_dir() -> PathBuf {
    let base = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(".ironlance").join("saves")
}

/// Path of the rolling autosave inside [`default_save_dir`].
pub fn autosave_path() -> PathBuf {
    default_save_dir().join(AUTOSAVE_FILE)
}

/// Write the company's full serialized form to `path`, stamping the
/// format version and the current time. Parent directories are created
/// as needed.
pub fn save_game(company: &Company, path: &Path) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let doc = SaveFile {
        version: SAVE_VERSION.to_string(),
        saved_at: Utc::now(),
        company: company.clone(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read a save document back into a company.
///
/// A missing file is [`LoadError::NotFound`]; unparseable JSON and a
/// document missing the company payload are both [`LoadError::Corrupted`]
/// with a human-readable reason.
pub fn load_game(path: &Path) -> Result<SaveFile, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| LoadError::Corrupted(format!("invalid JSON: {e}")))?;
    if value.get("company").is_none() {
        return Err(LoadError::Corrupted("missing company data".to_string()));
    }
    let doc: SaveFile = serde_json::from_value(value)
        .map_err(|e| LoadError::Corrupted(format!("malformed company data: {e}")))?;
    Ok(doc)
}

/// Peek at a save's headline numbers without deserializing the full
/// company. Returns `None` for missing or unreadable files.
pub fn save_metadata(path: &Path) -> Option<SaveMetadata> {
    let text = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&text).ok()?;
    let company = value.get("company")?;
    let saved_at = value
        .get("saved_at")
        .and_then(|v| serde_json::from_value::<DateTime<Utc>>(v.clone()).ok())?;
    Some(SaveMetadata {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        company_name: company
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string(),
        week: company.get("week").and_then(|v| v.as_u64()).unwrap_or(1) as u32,
        c_bills: company.get("c_bills").and_then(|v| v.as_i64()).unwrap_or(0),
        reputation: company
            .get("reputation")
            .and_then(|v| v.as_i64())
            .unwrap_or(0) as i32,
        saved_at,
    })
}

/// List every readable save in `dir`, newest first. Unreadable or
/// corrupted files are skipped; a missing directory is an empty list.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut saves: Vec<SaveMetadata> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
        .filter_map(|p| save_metadata(&p))
        .collect();
    saves.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    saves
}
