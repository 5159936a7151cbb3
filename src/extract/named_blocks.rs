//! Tier 1: fenced blocks whose fence line names the file explicitly.
//!
//! This is the format the system instruction asks the model for, so it is
//! tried first and wins outright when it matches anything.

use crate::domain::{FileRecord, Language};
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening fence with an optional language tag and a same-line filename token
/// ending in a recognized web extension, e.g. ```` ```index.html ```` or
/// ```` ```css styles.css ````.
static NAMED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?si)```(?:(\w+)[ \t]+)?([^\n]*\.(?:html?|css|js|txt))[ \t]*\r?\n(.*?)```")
        .expect("named block pattern")
});

pub(crate) fn extract(raw: &str) -> Vec<FileRecord> {
    let mut records = Vec::new();

    for caps in NAMED_BLOCK.captures_iter(raw) {
        let filename = caps[2].trim().to_string();
        let body = &caps[3];
        let language = caps
            .get(1)
            .and_then(|tag| Language::from_fence_token(tag.as_str()))
            .unwrap_or_else(|| language_from_name(&filename));
        records.push(FileRecord::new(filename, body, language));
    }

    records
}

fn language_from_name(filename: &str) -> Language {
    let ext = filename.rsplit('.').next().unwrap_or("");
    Language::from_extension(ext)
}
