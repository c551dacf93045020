//! Outline inference.
//!
//! Inference runs in two phases. A full pass over the document collects
//! font statistics and fixes the body size; a second pass classifies each
//! span against it. Headings are then deduplicated and packaged with the
//! title into an [`Outline`].

mod assemble;
mod heading;
mod options;
mod stats;
mod title;

pub use assemble::{assemble, dedup_headings};
pub use heading::{HeadingClassifier, HeadingSignals};
pub use options::{OutlineOptions, DEFAULT_FALLBACK_TITLE};
pub use stats::{body_size, FontSignature, FontStatistics};
pub use title::extract_title;

use crate::model::{Document, Heading, Outline};

/// Infers the outline of a document.
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    classifier: HeadingClassifier,
}

impl OutlineExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            classifier: HeadingClassifier::new(options),
        }
    }

    /// Get the extractor options.
    pub fn options(&self) -> &OutlineOptions {
        self.classifier.options()
    }

    /// Build the outline of a document. Never fails; a document without
    /// spans yields an empty outline and the fallback title.
    pub fn extract(&self, doc: &Document) -> Outline {
        let stats = FontStatistics::collect(doc);
        let title = extract_title(doc, self.options());
        let headings = self.detect_headings(doc, &stats);

        log::debug!(
            "Outline: {} spans, {} signatures, body size {:?}, {} headings",
            stats.span_count,
            stats.signature_count,
            stats.body_size(),
            headings.len()
        );

        assemble(title, headings)
    }

    /// Classify every span in document order, before deduplication.
    pub fn detect_headings(&self, doc: &Document, stats: &FontStatistics) -> Vec<Heading> {
        let Some(body_size) = stats.body_size() else {
            return Vec::new();
        };

        doc.spans()
            .filter_map(|(page, span)| self.classifier.classify(span, page, body_size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, Page, TextSpan};

    fn body_line(page: &mut Page) {
        page.add_span(TextSpan::new(
            "This is ordinary paragraph text in the body.",
            10.0,
            "Times-Roman",
        ));
    }

    #[test]
    fn test_extract_empty_document() {
        let outline = OutlineExtractor::default().extract(&Document::new());
        assert_eq!(outline.title, "Untitled Document");
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_extract_uses_metadata_title() {
        let mut doc = Document::with_title("Given Title");
        let mut page = Page::new(1);
        page.add_span(TextSpan::new("Large Text", 20.0, "Arial"));
        body_line(&mut page);
        body_line(&mut page);
        doc.add_page(page);

        let outline = OutlineExtractor::default().extract(&doc);
        assert_eq!(outline.title, "Given Title");
        assert_eq!(outline.headings.len(), 1);
        assert_eq!(outline.headings[0].level, HeadingLevel::H1);
    }

    #[test]
    fn test_detect_headings_preserves_page_order() {
        let mut doc = Document::new();
        for number in 1..=3 {
            let mut page = Page::new(number);
            page.add_span(TextSpan::new(format!("Chapter {number}"), 18.0, "Arial"));
            body_line(&mut page);
            body_line(&mut page);
            doc.add_page(page);
        }

        let extractor = OutlineExtractor::default();
        let stats = FontStatistics::collect(&doc);
        let pages: Vec<u32> = extractor
            .detect_headings(&doc, &stats)
            .iter()
            .map(|h| h.page)
            .collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_repeated_running_header_is_deduplicated_per_page() {
        let mut doc = Document::new();
        for number in 1..=2 {
            let mut page = Page::new(number);
            page.add_span(TextSpan::new("CONFIDENTIAL", 10.0, "Times-Roman"));
            page.add_span(TextSpan::new("CONFIDENTIAL", 10.0, "Times-Roman"));
            body_line(&mut page);
            doc.add_page(page);
        }

        let outline = OutlineExtractor::default().extract(&doc);
        let found: Vec<(&str, u32)> = outline
            .headings
            .iter()
            .map(|h| (h.text.as_str(), h.page))
            .collect();
        assert_eq!(found, vec![("CONFIDENTIAL", 1), ("CONFIDENTIAL", 2)]);
    }
}
