//! Tier 2: fenced blocks tagged with a web language but no filename.
//!
//! Three independent scans over the whole input, one per category, assembled
//! in the fixed order HTML, CSS, JavaScript — so `index.html` always refers
//! to the first HTML block the model produced, wherever it sat in the
//! response.

use crate::domain::{FileRecord, Language};
use crate::extract::naming::NameAllocator;
use once_cell::sync::Lazy;
use regex::Regex;

static HTML_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)```html?[ \t]*\r?\n(.*?)```").expect("html block pattern"));

static CSS_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)```css[ \t]*\r?\n(.*?)```").expect("css block pattern"));

static JS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?si)```(?:javascript|js)[ \t]*\r?\n(.*?)```").expect("js block pattern")
});

pub(crate) fn extract(raw: &str) -> Vec<FileRecord> {
    let categories: [(&Regex, Language); 3] = [
        (&HTML_BLOCK, Language::Html),
        (&CSS_BLOCK, Language::Css),
        (&JS_BLOCK, Language::Javascript),
    ];

    let mut namer = NameAllocator::new();
    let mut records = Vec::new();

    for (pattern, language) in categories {
        for caps in pattern.captures_iter(raw) {
            records.push(FileRecord::new(namer.next_name(language), &caps[1], language));
        }
    }

    records
}
