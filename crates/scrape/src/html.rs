//! HTML extraction helpers.
//!
//! `scraper::Html` is `!Send`, so every helper parses, extracts, and drops the
//! document before returning an owned value.  Callers can hold the results
//! across `.await` points.

use scraper::{ElementRef, Html, Selector};

/// Value of `attr` on the first element matching `selector`.
///
/// Returns `None` when nothing matches or when the first match lacks the
/// attribute; later matches are not consulted.
pub fn first_attr(html: &str, selector: &Selector, attr: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let el = doc.select(selector).next()?;
    el.value().attr(attr).map(str::to_string)
}

/// Stripped text of the first element matching `selector`.
pub fn first_text(html: &str, selector: &Selector) -> Option<String> {
    let doc = Html::parse_document(html);
    let el = doc.select(selector).next()?;
    Some(stripped_text(el))
}

/// Stripped text of the whole document.
pub fn page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    stripped_text(doc.root_element())
}

/// Concatenate every visible text node under `el`, each trimmed, with empty
/// nodes dropped and no separator between them.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| is_invisible(e.name()))
        });
        if hidden {
            continue;
        }
        out.push_str(text.trim());
    }
    out
}

/// Elements whose text content is never shown to a reader.
fn is_invisible(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "template")
}

/// First `limit` characters of `text` (Unicode scalar values, not bytes).
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
