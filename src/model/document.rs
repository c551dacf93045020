//! Document-level types.

use super::{Page, TextSpan};
use serde::{Deserialize, Serialize};

/// Layout data for one document, as supplied by a fragment source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    #[serde(flatten)]
    pub metadata: Metadata,

    /// Pages in reading order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document carrying an explicit metadata title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: Some(title.into()),
            },
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Get the first page, if any.
    pub fn first_page(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Visit every span in page, block, line, span order.
    ///
    /// Each span is paired with the 1-indexed position of its page in
    /// `pages`; the page's own `number` field is not consulted. This order
    /// is observable: every first-seen tie-break depends on it.
    pub fn spans(&self) -> impl Iterator<Item = (u32, &TextSpan)> + '_ {
        self.pages.iter().enumerate().flat_map(|(index, page)| {
            let number = index as u32 + 1;
            page.spans().map(move |span| (number, span))
        })
    }

    /// Total number of spans across all pages.
    pub fn span_count(&self) -> usize {
        self.spans().count()
    }

    /// Renumber pages by position, starting at 1.
    pub fn number_pages(&mut self) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.number = index as u32 + 1;
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Explicit document title
    #[serde(default)]
    pub title: Option<String>,
}

impl Metadata {
    /// The explicit title, trimmed, when it is not blank.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.span_count(), 0);
        assert!(doc.first_page().is_none());
    }

    #[test]
    fn test_get_page() {
        let mut doc = Document::new();
        doc.add_page(Page::new(1));
        doc.add_page(Page::new(2));
        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(2).map(|p| p.number), Some(2));
        assert!(doc.get_page(3).is_none());
    }

    #[test]
    fn test_spans_carry_page_number() {
        let mut doc = Document::new();
        let mut p1 = Page::new(1);
        p1.add_span(TextSpan::new("one", 10.0, "F"));
        let mut p2 = Page::new(2);
        p2.add_span(TextSpan::new("two", 10.0, "F"));
        p2.add_span(TextSpan::new("three", 10.0, "F"));
        doc.add_page(p1);
        doc.add_page(p2);

        let visited: Vec<(u32, &str)> = doc.spans().map(|(n, s)| (n, s.text.as_str())).collect();
        assert_eq!(visited, vec![(1, "one"), (2, "two"), (2, "three")]);
    }

    #[test]
    fn test_spans_numbered_by_position() {
        let mut doc = Document::new();
        for number in [0, 7, 7] {
            let mut page = Page::new(number);
            page.add_span(TextSpan::new("text", 10.0, "F"));
            doc.add_page(page);
        }

        let pages: Vec<u32> = doc.spans().map(|(n, _)| n).collect();
        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_number_pages() {
        let mut doc = Document::new();
        doc.add_page(Page::default());
        doc.add_page(Page::default());
        doc.number_pages();
        assert_eq!(doc.pages[0].number, 1);
        assert_eq!(doc.pages[1].number, 2);
    }

    #[test]
    fn test_explicit_title() {
        let meta = Metadata {
            title: Some("  Annual Report ".to_string()),
        };
        assert_eq!(meta.explicit_title(), Some("Annual Report"));

        let blank = Metadata {
            title: Some("   ".to_string()),
        };
        assert_eq!(blank.explicit_title(), None);
        assert_eq!(Metadata::default().explicit_title(), None);
    }

    #[test]
    fn test_document_json_shape() {
        let doc: Document = serde_json::from_str(
            r#"{"title": "Doc", "pages": [{"blocks": [{"lines": [{"spans": [
                {"text": "Hello", "size": 12, "font": "Arial", "flags": 2}
            ]}]}]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Doc"));
        assert_eq!(doc.span_count(), 1);
    }
}
