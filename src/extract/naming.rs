//! Filename synthesis for blocks that arrive without one.
//!
//! The first file of each web category gets the canonical name the live
//! preview expects (`index.html`, `styles.css`, `script.js`); later files in
//! the same category are numbered from 2. Languages without a canonical name
//! fall back to `file{N}.{ext}`.

use crate::domain::Language;
use std::collections::HashMap;

/// Per-language counters handing out canonical-then-numbered names.
#[derive(Default)]
pub(crate) struct NameAllocator {
    counts: HashMap<Language, usize>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self, language: Language) -> String {
        let slot = self.counts.entry(language).or_insert(0);
        let index = *slot;
        *slot += 1;

        match language {
            Language::Html if index == 0 => "index.html".to_string(),
            Language::Html => format!("page{}.html", index + 1),
            Language::Css if index == 0 => "styles.css".to_string(),
            Language::Css => format!("styles{}.css", index + 1),
            Language::Javascript if index == 0 => "script.js".to_string(),
            Language::Javascript => format!("script{}.js", index + 1),
            other => format!("file{}.{}", index + 1, other.extension()),
        }
    }
}

/// Name for the single whole-input record when no fenced block exists.
pub(crate) fn whole_input_name(language: Language) -> String {
    match language {
        Language::Html => "index.html".to_string(),
        Language::Css => "styles.css".to_string(),
        Language::Javascript => "script.js".to_string(),
        other => format!("generated-code.{}", other.extension()),
    }
}
