//! Heading deduplication and outline assembly.

use std::collections::HashSet;

use crate::model::{Heading, Outline};

/// Drop repeated `(level, text, page)` headings, keeping first occurrences in order.
pub fn dedup_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut seen = HashSet::new();
    headings
        .into_iter()
        .filter(|h| seen.insert((h.level, h.text.clone(), h.page)))
        .collect()
}

/// Package a title and the classified heading stream into an outline.
pub fn assemble(title: String, headings: Vec<Heading>) -> Outline {
    Outline::new(title, dedup_headings(headings))
}
