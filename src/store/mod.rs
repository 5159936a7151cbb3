//! Project persistence.
//!
//! The session core only depends on the [`ProjectStore`] trait; the SQLite
//! implementation backs normal runs and [`MemoryStore`] backs tests and
//! ephemeral sessions.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::domain::FileRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A project as the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub files: Vec<FileRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(String),

    #[error("project database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Persistence contract for the session.
///
/// `update` is called after every committed regeneration once a project is
/// bound; `create` the first time a new file set needs to survive the
/// session. File order and duplicate names are preserved as given.
pub trait ProjectStore {
    fn create(
        &mut self,
        name: &str,
        description: &str,
        files: &[FileRecord],
        owner_id: &str,
    ) -> Result<String, StoreError>;

    fn update(&mut self, project_id: &str, files: &[FileRecord]) -> Result<(), StoreError>;

    fn get(&self, project_id: &str) -> Result<StoredProject, StoreError>;

    fn list(&self, owner_id: &str) -> Result<Vec<StoredProject>, StoreError>;

    fn delete(&mut self, project_id: &str) -> Result<(), StoreError>;
}

impl<T: ProjectStore + ?Sized> ProjectStore for Box<T> {
    fn create(
        &mut self,
        name: &str,
        description: &str,
        files: &[FileRecord],
        owner_id: &str,
    ) -> Result<String, StoreError> {
        (**self).create(name, description, files, owner_id)
    }

    fn update(&mut self, project_id: &str, files: &[FileRecord]) -> Result<(), StoreError> {
        (**self).update(project_id, files)
    }

    fn get(&self, project_id: &str) -> Result<StoredProject, StoreError> {
        (**self).get(project_id)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<StoredProject>, StoreError> {
        (**self).list(owner_id)
    }

    fn delete(&mut self, project_id: &str) -> Result<(), StoreError> {
        (**self).delete(project_id)
    }
}
