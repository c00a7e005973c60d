//! Durable storage for saved comparisons: one JSON file holding the whole
//! list, rewritten on every mutation.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::entities::{Item, SavedComparison, ValidationError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "UnitPriceComparer";
const APP_NAME: &str = "UnitPriceComparer";
const STORE_FILENAME: &str = "comparisons.json";

/// Handle to the saved-comparison file. Mutations are read-modify-write of
/// the entire list, serialized through the internal lock.
pub struct ComparisonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ComparisonStore {
    pub fn new() -> Result<Self, PersistError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(PersistError::StorageUnavailable)?;
        Ok(Self::with_path(dirs.config_dir().join(STORE_FILENAME)))
    }

    /// Store backed by an explicit file, used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// All saved comparisons in save order. A missing or unreadable file is
    /// treated as "no saved data", never as a fatal error.
    pub fn list_saved(&self) -> Vec<SavedComparison> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_all()
    }

    /// Validates and snapshots the working list. If any item is missing a
    /// field the whole save is rejected with one error per offending item and
    /// nothing is written.
    pub fn save(&self, items: &[Item]) -> Result<SavedComparison, SaveError> {
        let errors: Vec<ValidationError> = items
            .iter()
            .filter(|item| !item.is_complete())
            .map(|item| ValidationError::required_fields(item.id))
            .collect();
        if !errors.is_empty() {
            return Err(SaveError::Invalid(errors));
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut all = self.read_all();

        // Millisecond timestamp, bumped when the clock hasn't advanced past
        // the newest stored id so ids stay strictly increasing.
        let newest = all.iter().map(|saved| saved.id).max().unwrap_or(0);
        let id = now_millis().max(newest + 1);

        let saved = SavedComparison {
            id,
            items: items.to_vec(),
            date: human_timestamp(),
        };
        all.push(saved.clone());
        self.write_all(&all)?;
        Ok(saved)
    }

    /// Removes a saved comparison. Deleting an absent id is a no-op.
    pub fn delete(&self, id: i64) -> Result<(), PersistError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut all = self.read_all();
        let before = all.len();
        all.retain(|saved| saved.id != id);
        if all.len() == before {
            return Ok(());
        }
        self.write_all(&all)
    }

    /// Deep copy of a snapshot's items, for use as the new working list.
    pub fn load(&self, id: i64) -> Option<Vec<Item>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = self.read_all().into_iter().find(|saved| saved.id == id)?;
        let mut items = saved.items;
        for item in &mut items {
            item.normalize_unit();
        }
        Some(items)
    }

    fn read_all(&self) -> Vec<SavedComparison> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    fn write_all(&self, comparisons: &[SavedComparison]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(comparisons)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

fn human_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    now.format(&format).unwrap_or_else(|_| now.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("one or more items are missing required fields")]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Storage(#[from] PersistError),
}
