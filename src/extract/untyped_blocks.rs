//! Tier 3: any fenced block, typed by its tag or by content detection.
//!
//! Runs only when neither filename-bearing nor web-tagged blocks exist.
//! Whatever language comes out, the record is named with the same
//! canonical-then-numbered scheme the typed tier uses.

use crate::domain::{FileRecord, Language};
use crate::extract::detect::detect_language;
use crate::extract::naming::NameAllocator;
use once_cell::sync::Lazy;
use regex::Regex;

static ANY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?[ \t]*\r?\n(.*?)```").expect("any block pattern"));

pub(crate) fn extract(raw: &str) -> Vec<FileRecord> {
    let mut namer = NameAllocator::new();
    let mut records = Vec::new();

    for caps in ANY_BLOCK.captures_iter(raw) {
        let body = &caps[2];
        let language = caps
            .get(1)
            .and_then(|tag| Language::from_fence_token(tag.as_str()))
            .unwrap_or_else(|| detect_language(body));
        records.push(FileRecord::new(namer.next_name(language), body, language));
    }

    records
}
