//! Configuration loading and defaults
//!
//! Covers the model endpoint, persistence location, and system-prompt
//! overrides. Files are discovered in the working directory; an explicitly
//! provided path must parse, an auto-discovered one soft-fails to defaults.

pub mod loader;

pub use loader::load_config;

use crate::session::PromptProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the OpenAI-compatible inference endpoint.
    pub endpoint: String,
    /// Model id sent with every request.
    pub model: String,
    /// Environment variable holding the bearer token.
    pub token_env: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// Whole-request timeout for one generation round-trip.
    pub timeout_secs: u64,
    /// Owner id recorded on saved projects.
    pub owner: String,
    /// SQLite database location; defaults to `codeweave.sqlite` in the
    /// working directory.
    pub database: Option<PathBuf>,
    /// System-instruction overrides.
    pub prompt: PromptProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://models.inference.ai.azure.com".to_string(),
            model: "gpt-4o".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 4000,
            timeout_secs: 120,
            owner: "local".to_string(),
            database: None,
            prompt: PromptProfile::default(),
        }
    }
}

impl Config {
    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(|| PathBuf::from("codeweave.sqlite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_hosted_model_contract() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://models.inference.ai.azure.com");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.token_env, "GITHUB_TOKEN");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.database_path(), PathBuf::from("codeweave.sqlite"));
    }
}
