//! codeweave: reconstruct multi-file web projects from AI-generated responses
//!
//! A hosted language model answers website prompts with markdown-fenced code
//! blocks; this crate turns those loosely-structured responses into named,
//! typed file sets and runs the iterative-edit loop that feeds a project back
//! into the model and commits what comes out.

pub mod config;
pub mod domain;
pub mod extract;
pub mod model;
pub mod session;
pub mod store;

pub use config::{load_config, Config};
pub use domain::{FileRecord, Language};
pub use extract::{detect_language, extract_files};
pub use model::{ChatCompletionsClient, ModelError, TextGenerator};
pub use session::{CommitOutcome, GenerationRequest, PromptProfile, Session, SessionError};
pub use store::{MemoryStore, ProjectStore, SqliteStore, StoreError, StoredProject};
