//! Generation session: decides creation vs modification, builds the request,
//! and commits extracted output as the new authoritative file set.
//!
//! One cycle runs to completion before the next starts. The session owns the
//! only mutable state in the crate — the current file set and the bound
//! project identity — and mutates both solely at the end of a successful
//! cycle, so any model or persistence failure leaves the previous state
//! intact.

pub mod prompt;

pub use prompt::PromptProfile;

use crate::domain::FileRecord;
use crate::extract::extract_files;
use crate::model::{ModelError, TextGenerator};
use crate::store::{ProjectStore, StoreError, StoredProject};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("failed to persist project: {0}")]
    Store(#[from] StoreError),
}

/// What a committed cycle expects from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The bound project was updated in the store.
    AutoSaved,
    /// No project is bound yet; prompt the user for a name and call
    /// [`Session::save_as`] to persist the committed file set.
    NeedsName,
}

/// The payload handed to the model for one cycle.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
}

pub struct Session<M, S> {
    model: M,
    store: S,
    profile: PromptProfile,
    owner_id: String,
    files: Vec<FileRecord>,
    project_id: Option<String>,
}

impl<M: TextGenerator, S: ProjectStore> Session<M, S> {
    pub fn new(model: M, store: S, profile: PromptProfile, owner_id: impl Into<String>) -> Self {
        Self {
            model,
            store,
            profile,
            owner_id: owner_id.into(),
            files: Vec::new(),
            project_id: None,
        }
    }

    /// Current authoritative file set.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.project_id.is_some()
    }

    /// Resume work on a stored project.
    pub fn open(&mut self, project: StoredProject) {
        tracing::debug!(project = %project.id, files = project.files.len(), "project opened");
        self.files = project.files;
        self.project_id = Some(project.id);
    }

    /// Fetch a project from the store and resume work on it.
    pub fn load(&mut self, project_id: &str) -> Result<(), SessionError> {
        let project = self.store.get(project_id)?;
        self.open(project);
        Ok(())
    }

    /// Discard all session state ("new project").
    pub fn reset(&mut self) {
        self.files.clear();
        self.project_id = None;
    }

    /// Build the model payload for an instruction without running the cycle.
    ///
    /// Pure with respect to session state: a non-empty file set makes this a
    /// modification request carrying every current file, an empty one passes
    /// the instruction through alone.
    pub fn build_request(&self, instruction: &str) -> GenerationRequest {
        let modifying = !self.files.is_empty();
        GenerationRequest {
            prompt: prompt::build_user_prompt(&self.files, instruction),
            system_instruction: prompt::build_system_instruction(&self.profile, modifying),
        }
    }

    /// Run one full generation cycle.
    ///
    /// The extracted file set unconditionally replaces the current one — no
    /// merge, no preservation of files the model omitted. When a project is
    /// bound, the replacement is pushed to the store before the in-memory
    /// commit, so a persistence failure keeps the previous file set.
    pub fn generate(&mut self, instruction: &str) -> Result<CommitOutcome, SessionError> {
        let request = self.build_request(instruction);
        tracing::info!(
            modifying = !self.files.is_empty(),
            prior_files = self.files.len(),
            "starting generation cycle"
        );

        let raw = self.model.generate(&request.prompt, &request.system_instruction)?;
        let files = extract_files(&raw);

        if let Some(project_id) = &self.project_id {
            self.store.update(project_id, &files)?;
        }

        tracing::info!(files = files.len(), "generation cycle committed");
        self.files = files;

        Ok(if self.project_id.is_some() {
            CommitOutcome::AutoSaved
        } else {
            CommitOutcome::NeedsName
        })
    }

    /// Persist the committed file set as a new project and bind to it.
    pub fn save_as(&mut self, name: &str, description: &str) -> Result<String, SessionError> {
        let id = self.store.create(name, description, &self.files, &self.owner_id)?;
        self.project_id = Some(id.clone());
        Ok(id)
    }
}
