//! The closed set of language tags carried on file records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag for syntax highlighting and preview wiring.
///
/// The set is closed on purpose: the product only emits vanilla web files,
/// and everything else is coerced toward them by detection (see
/// `extract::detect`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Javascript,
    Typescript,
    Python,
    Json,
    Markdown,
    Yaml,
    Xml,
    Sql,
    Shell,
    Plaintext,
}

impl Language {
    /// Parse a fence tag (` ```html `, ` ```js `, ...) into a language.
    ///
    /// Returns `None` for tags outside the closed set; callers fall back to
    /// extension lookup or content detection.
    pub fn from_fence_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "javascript" | "js" => Some(Self::Javascript),
            "typescript" | "ts" => Some(Self::Typescript),
            "python" | "py" => Some(Self::Python),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "yaml" | "yml" => Some(Self::Yaml),
            "xml" => Some(Self::Xml),
            "sql" => Some(Self::Sql),
            "shell" | "sh" | "bash" => Some(Self::Shell),
            "plaintext" | "text" | "txt" => Some(Self::Plaintext),
            _ => None,
        }
    }

    /// Static extension → language lookup used when a block carries a
    /// filename but no usable tag.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" => Self::Javascript,
            "ts" | "tsx" => Self::Typescript,
            "py" => Self::Python,
            "html" | "htm" => Self::Html,
            "css" | "scss" => Self::Css,
            "json" => Self::Json,
            "md" => Self::Markdown,
            "yaml" | "yml" => Self::Yaml,
            "xml" => Self::Xml,
            "sql" => Self::Sql,
            "sh" | "bash" => Self::Shell,
            _ => Self::Plaintext,
        }
    }

    /// Canonical extension used when synthesizing a filename.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Javascript => "js",
            Self::Typescript => "ts",
            Self::Python => "py",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Sql => "sql",
            Self::Shell => "sh",
            Self::Plaintext => "txt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Python => "python",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Sql => "sql",
            Self::Shell => "shell",
            Self::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
