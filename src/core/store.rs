//! Local key-value persistence for courses and events
//!
//! Each key is stored as a JSON array in `<data_dir>/<key>.json`. Reads never
//! fail: a missing or unparseable file is treated as an empty collection.

use crate::core::models::{AcademicEvent, Course};
use crate::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Key of the course collection
pub const COURSES_KEY: &str = "courses";

/// Key of the event collection
pub const EVENTS_KEY: &str = "events";

/// File-backed key-value store
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Create a store rooted at `data_dir` (created lazily on first write)
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the collection files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File path for a key
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Read a collection, falling back to an empty one when absent or unparseable
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.path_for(key);
        let Ok(content) = fs::read_to_string(&path) else {
            debug!("No stored '{key}' at {}", path.display());
            return Vec::new();
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Ignoring unreadable '{key}' data at {}: {e}",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replace a collection
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created, or the
    /// records cannot be serialized or written.
    pub fn set<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(records)?;
        let path = self.path_for(key);
        fs::write(&path, json)?;
        debug!("Stored {} '{key}' record(s) at {}", records.len(), path.display());
        Ok(())
    }

    /// Load all courses
    #[must_use]
    pub fn load_courses(&self) -> Vec<Course> {
        self.get(COURSES_KEY)
    }

    /// Persist all courses
    ///
    /// # Errors
    /// See [`Store::set`].
    pub fn save_courses(&self, courses: &[Course]) -> Result<(), Box<dyn Error>> {
        self.set(COURSES_KEY, courses)
    }

    /// Load all events
    #[must_use]
    pub fn load_events(&self) -> Vec<AcademicEvent> {
        self.get(EVENTS_KEY)
    }

    /// Persist all events
    ///
    /// # Errors
    /// See [`Store::set`].
    pub fn save_events(&self, events: &[AcademicEvent]) -> Result<(), Box<dyn Error>> {
        self.set(EVENTS_KEY, events)
    }
}
