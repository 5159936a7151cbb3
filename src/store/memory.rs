//! In-memory project store for tests and ephemeral sessions.

use super::{ProjectStore, StoreError, StoredProject};
use crate::domain::FileRecord;
use chrono::Utc;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    projects: Vec<StoredProject>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectStore for MemoryStore {
    fn create(
        &mut self,
        name: &str,
        description: &str,
        files: &[FileRecord],
        owner_id: &str,
    ) -> Result<String, StoreError> {
        let now = Utc::now();
        let project = StoredProject {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            owner_id: owner_id.to_string(),
            files: files.to_vec(),
            created_at: now,
            updated_at: now,
        };
        let id = project.id.clone();
        self.projects.push(project);
        Ok(id)
    }

    fn update(&mut self, project_id: &str, files: &[FileRecord]) -> Result<(), StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::NotFound(project_id.to_string()))?;
        project.files = files.to_vec();
        project.updated_at = Utc::now();
        Ok(())
    }

    fn get(&self, project_id: &str) -> Result<StoredProject, StoreError> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(project_id.to_string()))
    }

    fn list(&self, owner_id: &str) -> Result<Vec<StoredProject>, StoreError> {
        let mut projects: Vec<StoredProject> =
            self.projects.iter().filter(|p| p.owner_id == owner_id).cloned().collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    fn delete(&mut self, project_id: &str) -> Result<(), StoreError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != project_id);
        if self.projects.len() == before {
            return Err(StoreError::NotFound(project_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    #[test]
    fn test_crud_roundtrip() {
        let mut store = MemoryStore::new();
        let files = vec![FileRecord::new("index.html", "<p>x</p>", Language::Html)];
        let id = store.create("Site", "desc", &files, "alice").expect("create");

        let project = store.get(&id).expect("get");
        assert_eq!(project.files.len(), 1);

        store.update(&id, &[]).expect("update");
        assert!(store.get(&id).expect("get").files.is_empty());

        store.delete(&id).expect("delete");
        assert!(matches!(store.get(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.update("x", &[]), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete("x"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_is_scoped_to_owner() {
        let mut store = MemoryStore::new();
        store.create("A", "", &[], "alice").expect("create");
        store.create("B", "", &[], "bob").expect("create");
        assert_eq!(store.list("alice").expect("list").len(), 1);
    }
}
