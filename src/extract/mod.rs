//! Generated-response extraction.
//!
//! Maps one raw model response to a non-empty, ordered set of file records.
//! Four matcher strategies are tried in strict priority order; the first one
//! that yields at least one record terminates the cascade, and the last tier
//! always yields exactly one record, so extraction cannot fail.

mod detect;
mod named_blocks;
mod naming;
mod typed_blocks;
mod untyped_blocks;

pub use detect::detect_language;

use crate::domain::FileRecord;

/// Extract file records from a raw model response.
///
/// Tier order: explicit-filename blocks, web-tagged blocks, any fenced block
/// with content detection, then a single whole-input record. Exactly one tier
/// produces the result; the returned vector is never empty.
pub fn extract_files(raw: &str) -> Vec<FileRecord> {
    let strategies: [(&str, fn(&str) -> Vec<FileRecord>); 3] = [
        ("named-blocks", named_blocks::extract),
        ("typed-blocks", typed_blocks::extract),
        ("untyped-blocks", untyped_blocks::extract),
    ];

    for (strategy, run) in strategies {
        let records = run(raw);
        if !records.is_empty() {
            tracing::debug!(strategy, files = records.len(), "extraction strategy matched");
            return records;
        }
    }

    tracing::debug!("no fenced blocks found, emitting whole-input record");
    vec![whole_input_record(raw)]
}

fn whole_input_record(raw: &str) -> FileRecord {
    let language = detect_language(raw);
    FileRecord::new(naming::whole_input_name(language), raw, language)
}
