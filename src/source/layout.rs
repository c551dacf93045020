//! Layout-dump fragment source.
//!
//! Reads the page → block → line → span structure an external text
//! extractor writes out as JSON:
//!
//! ```json
//! { "title": "Optional metadata title",
//!   "pages": [ { "blocks": [ { "lines": [ { "spans": [
//!       { "text": "1. Overview", "size": 10.0, "font": "Arial-Bold", "flags": 2 }
//!   ] } ] } ] } ] }
//! ```

use crate::error::{Error, Result};
use crate::model::Document;
use std::path::Path;

use super::FragmentSource;

/// Fragment source for JSON layout dumps.
#[derive(Debug, Clone, Default)]
pub struct LayoutJsonSource {
    _private: (),
}

impl LayoutJsonSource {
    /// Create a new layout source.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Parse a layout dump from a JSON string.
    pub fn parse_str(&self, json: &str) -> Result<Document> {
        let doc: Document = serde_json::from_str(json)?;
        Self::finish(doc)
    }

    /// Number pages by position and reject spans that break the size contract.
    fn finish(mut doc: Document) -> Result<Document> {
        doc.number_pages();

        for (page, span) in doc.spans() {
            if !span.size.is_finite() || span.size <= 0.0 {
                return Err(Error::InvalidLayout(format!(
                    "page {}: span {:?} has invalid size {}",
                    page, span.text, span.size
                )));
            }
        }

        Ok(doc)
    }
}

impl FragmentSource for LayoutJsonSource {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "layout"
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let data = std::fs::read(path)?;
        self.load_bytes(&data)
    }

    fn load_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let doc: Document = serde_json::from_slice(bytes)?;
        Self::finish(doc)
    }
}
