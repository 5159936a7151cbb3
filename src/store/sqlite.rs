//! SQLite-backed project store.

use super::{ProjectStore, StoreError, StoredProject};
use crate::domain::{FileRecord, Language};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS projects (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    owner_id    TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS project_files (
    project_id  TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    seq         INTEGER NOT NULL,
    record_id   TEXT NOT NULL,
    name        TEXT NOT NULL,
    content     TEXT NOT NULL,
    language    TEXT NOT NULL,
    PRIMARY KEY (project_id, seq)
);
CREATE INDEX IF NOT EXISTS idx_projects_owner ON projects(owner_id);
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Private database for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn load_files(&self, project_id: &str) -> Result<Vec<FileRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, name, content, language
             FROM project_files WHERE project_id = ?1 ORDER BY seq",
        )?;
        let rows = stmt.query_map([project_id], |row| {
            Ok(FileRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                content: row.get(2)?,
                language: parse_language(&row.get::<_, String>(3)?),
            })
        })?;

        let mut files = Vec::new();
        for row in rows {
            files.push(row?);
        }
        Ok(files)
    }

    fn load_project_row(&self, project_id: &str) -> Result<StoredProject, StoreError> {
        self.conn
            .query_row(
                "SELECT id, name, description, owner_id, created_at, updated_at
                 FROM projects WHERE id = ?1",
                [project_id],
                |row| {
                    Ok(StoredProject {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        owner_id: row.get(3)?,
                        files: Vec::new(),
                        created_at: row.get::<_, DateTime<Utc>>(4)?,
                        updated_at: row.get::<_, DateTime<Utc>>(5)?,
                    })
                },
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => {
                    StoreError::NotFound(project_id.to_string())
                }
                other => StoreError::Database(other),
            })
    }
}

/// Stored tags are the canonical lowercase names; anything unrecognized
/// (hand-edited databases) degrades to plaintext rather than failing a load.
fn parse_language(tag: &str) -> Language {
    Language::from_fence_token(tag).unwrap_or(Language::Plaintext)
}

fn insert_files(
    tx: &rusqlite::Transaction<'_>,
    project_id: &str,
    files: &[FileRecord],
) -> Result<(), rusqlite::Error> {
    let mut stmt = tx.prepare(
        "INSERT INTO project_files (project_id, seq, record_id, name, content, language)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for (seq, file) in files.iter().enumerate() {
        stmt.execute(params![
            project_id,
            seq as i64,
            file.id,
            file.name,
            file.content,
            file.language.as_str()
        ])?;
    }
    Ok(())
}

impl ProjectStore for SqliteStore {
    fn create(
        &mut self,
        name: &str,
        description: &str,
        files: &[FileRecord],
        owner_id: &str,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO projects (id, name, description, owner_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, name, description, owner_id, now, now],
        )?;
        insert_files(&tx, &id, files)?;
        tx.commit()?;

        tracing::debug!(project = %id, files = files.len(), "project created");
        Ok(id)
    }

    fn update(&mut self, project_id: &str, files: &[FileRecord]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        let touched = tx.execute(
            "UPDATE projects SET updated_at = ?1 WHERE id = ?2",
            params![Utc::now(), project_id],
        )?;
        if touched == 0 {
            return Err(StoreError::NotFound(project_id.to_string()));
        }

        tx.execute("DELETE FROM project_files WHERE project_id = ?1", [project_id])?;
        insert_files(&tx, project_id, files)?;
        tx.commit()?;

        tracing::debug!(project = %project_id, files = files.len(), "project files replaced");
        Ok(())
    }

    fn get(&self, project_id: &str) -> Result<StoredProject, StoreError> {
        let mut project = self.load_project_row(project_id)?;
        project.files = self.load_files(project_id)?;
        Ok(project)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<StoredProject>, StoreError> {
        let ids: Vec<String> = {
            let mut stmt = self.conn.prepare(
                "SELECT id FROM projects WHERE owner_id = ?1 ORDER BY updated_at DESC, id",
            )?;
            let rows = stmt.query_map([owner_id], |row| row.get(0))?;
            let mut ids = Vec::new();
            for row in rows {
                ids.push(row?);
            }
            ids
        };

        ids.iter().map(|id| self.get(id)).collect()
    }

    fn delete(&mut self, project_id: &str) -> Result<(), StoreError> {
        let removed = self.conn.execute("DELETE FROM projects WHERE id = ?1", [project_id])?;
        if removed == 0 {
            return Err(StoreError::NotFound(project_id.to_string()));
        }
        Ok(())
    }
}
