//! Content-based language detection for untagged blocks.
//!
//! The heuristic is a fixed-priority substring scan that deliberately steers
//! ambiguous or off-target content toward the three supported web file types.
//! The check order is user-visible behavior: reordering it changes which file
//! an ambiguous block becomes.

use crate::domain::Language;

const HTML_SIGNALS: &[&str] = &["<!doctype html", "<html", "<div", "<body", "<head"];

const CSS_PROPERTY_SIGNALS: &[&str] =
    &["color:", "margin:", "padding:", "display:", "background:", "font-"];

const JS_SIGNALS: &[&str] = &[
    "function ",
    "const ",
    "let ",
    "var ",
    "document.",
    "console.",
    "=>",
    "addEventListener",
];

/// Detect the language of a block of generated text.
///
/// Checks run over the lower-cased trimmed input, first match wins:
/// HTML markup, CSS rules, vanilla JavaScript, then coercions for React/JSX
/// (to HTML), TypeScript and Python (to JavaScript), then JSON, and finally
/// an HTML default.
pub fn detect_language(content: &str) -> Language {
    let text = content.trim().to_lowercase();

    if HTML_SIGNALS.iter().any(|s| text.contains(s)) {
        return Language::Html;
    }

    if text.contains('{')
        && text.contains('}')
        && CSS_PROPERTY_SIGNALS.iter().any(|s| text.contains(s))
    {
        return Language::Css;
    }

    if JS_SIGNALS.iter().any(|s| text.contains(s)) {
        return Language::Javascript;
    }

    // Framework output the product does not want: bias toward plain HTML.
    if text.contains("import react") || text.contains("from react") || text.contains("jsx") {
        return Language::Html;
    }

    // TypeScript-looking content is served as JavaScript.
    if text.contains("interface ")
        || text.contains("type ")
        || text.contains(": string")
        || text.contains(": number")
    {
        return Language::Javascript;
    }

    // Scripting languages likewise.
    if text.contains("def ") || text.contains("import ") || text.contains("print(") {
        return Language::Javascript;
    }

    if text.starts_with('{') && text.contains('"') {
        return Language::Json;
    }

    Language::Html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_signals() {
        assert_eq!(detect_language("<!DOCTYPE html><html></html>"), Language::Html);
        assert_eq!(detect_language("  <div class=\"x\">hi</div>"), Language::Html);
        assert_eq!(detect_language("<body>"), Language::Html);
    }

    #[test]
    fn test_css_requires_braces_and_a_property() {
        assert_eq!(detect_language("body { margin: 0; }"), Language::Css);
        assert_eq!(detect_language(".card { font-weight: bold }"), Language::Css);
        // Braces without a CSS property are not CSS.
        assert_ne!(detect_language("{ foo }"), Language::Css);
        // A property without braces is not CSS.
        assert_ne!(detect_language("color: red"), Language::Css);
    }

    #[test]
    fn test_javascript_signals() {
        assert_eq!(detect_language("const x = 1;"), Language::Javascript);
        assert_eq!(detect_language("document.querySelector('#a')"), Language::Javascript);
        assert_eq!(detect_language("el.addEventListener('click', fn)"), Language::Javascript);
        assert_eq!(detect_language("(a) => a + 1"), Language::Javascript);
    }

    #[test]
    fn test_react_is_coerced_to_html() {
        assert_eq!(detect_language("import React from react"), Language::Html);
        assert_eq!(detect_language("some jsx fragment"), Language::Html);
    }

    #[test]
    fn test_typescript_and_python_are_coerced_to_javascript() {
        assert_eq!(detect_language("interface Props extends Base"), Language::Javascript);
        assert_eq!(detect_language("x: number"), Language::Javascript);
        assert_eq!(detect_language("def greet(): pass"), Language::Javascript);
        assert_eq!(detect_language("print(42)"), Language::Javascript);
    }

    #[test]
    fn test_json_only_when_leading_brace_and_quote() {
        assert_eq!(detect_language("{\"a\": 1}"), Language::Json);
        // No quote: falls through to the HTML default.
        assert_eq!(detect_language("{a: 1}"), Language::Html);
    }

    #[test]
    fn test_default_is_html() {
        assert_eq!(detect_language("hello there"), Language::Html);
        assert_eq!(detect_language(""), Language::Html);
    }

    #[test]
    fn test_priority_html_beats_css_and_js() {
        // Contains CSS and JS signals too, but the <div> wins.
        let mixed = "<div>{ color: red } const x = 1;";
        assert_eq!(detect_language(mixed), Language::Html);
    }

    #[test]
    fn test_priority_css_beats_js() {
        // `display:` plus braces outranks the arrow function below it.
        let mixed = ".a { display: flex } () => {}";
        assert_eq!(detect_language(mixed), Language::Css);
    }

    #[test]
    fn test_json_object_with_quoted_keys_containing_type_hits_js_first() {
        // ": number" is checked before the JSON rule, mirroring the shipped
        // heuristic order.
        assert_eq!(detect_language("{\"age\": number}"), Language::Javascript);
    }
}
