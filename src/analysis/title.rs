//! Document title selection.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Document;

use super::OutlineOptions;

/// Choose a title for the document.
///
/// An explicit, non-blank metadata title wins. Otherwise the largest span
/// on the first page is used, skipping blank and digit-only spans; the
/// first of several equally large spans wins. Falls back to
/// `options.fallback_title`.
pub fn extract_title(doc: &Document, options: &OutlineOptions) -> String {
    if let Some(title) = doc.metadata.explicit_title() {
        return title.to_string();
    }

    first_page_title(doc)
        .map(str::to_string)
        .unwrap_or_else(|| options.fallback_title.clone())
}

/// Largest-font title candidate on the first page.
fn first_page_title(doc: &Document) -> Option<&str> {
    let page = doc.first_page()?;

    let mut best: Option<(f32, &str)> = None;
    for span in page.spans() {
        let text = span.trimmed();
        if !is_title_candidate(text) {
            continue;
        }
        // Strictly greater keeps the earliest span on ties
        if best.map_or(true, |(size, _)| span.size > size) {
            best = Some((span.size, text));
        }
    }

    best.map(|(_, text)| text)
}

// Decimal digits in any script plus superscript and subscript digits.
// Numeric letters and fractions (`Ⅻ`, `½`) are not digits.
static DIGITS_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn get_digits_regex() -> Option<&'static Regex> {
    DIGITS_REGEX
        .get_or_init(|| {
            Regex::new(r"^[\p{Nd}\x{00B2}\x{00B3}\x{00B9}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}]+$")
                .ok()
        })
        .as_ref()
}

fn is_digits(text: &str) -> bool {
    match get_digits_regex() {
        Some(re) => re.is_match(text),
        None => text.chars().all(|c| c.is_ascii_digit()),
    }
}

fn is_title_candidate(text: &str) -> bool {
    !text.is_empty() && !is_digits(text)
}
