//! Page-level types.

use super::TextSpan;
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    #[serde(default)]
    pub number: u32,

    /// Layout blocks in reading order
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Add a single-line block holding the given spans.
    pub fn add_line(&mut self, spans: Vec<TextSpan>) {
        self.blocks.push(TextBlock::new(vec![TextLine::new(spans)]));
    }

    /// Add a block holding one line with one span.
    pub fn add_span(&mut self, span: TextSpan) {
        self.add_line(vec![span]);
    }

    /// Iterate spans in block, line, span order.
    pub fn spans(&self) -> impl Iterator<Item = &TextSpan> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| block.lines.iter())
            .flat_map(|line| line.spans.iter())
    }

    /// Check if the page carries no spans.
    pub fn is_empty(&self) -> bool {
        self.spans().next().is_none()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// A layout block. Image and drawing blocks carry no lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in the block
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Create a block from lines.
    pub fn new(lines: Vec<TextLine>) -> Self {
        Self { lines }
    }

    /// Check if this block holds text.
    pub fn is_text(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// A text line composed of spans on the same baseline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextLine {
    /// The spans in this line
    #[serde(default)]
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    /// Create a line from spans.
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(3);
        assert_eq!(page.number, 3);
        assert!(page.is_empty());
        assert_eq!(page.block_count(), 0);
    }

    #[test]
    fn test_page_span_order() {
        let mut page = Page::new(1);
        page.add_line(vec![
            TextSpan::new("a", 10.0, "F"),
            TextSpan::new("b", 10.0, "F"),
        ]);
        page.add_block(TextBlock::default());
        page.add_span(TextSpan::new("c", 10.0, "F"));

        let texts: Vec<&str> = page.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(page.block_count(), 3);
    }

    #[test]
    fn test_block_without_lines() {
        let block: TextBlock = serde_json::from_str(r#"{"type": 1}"#).unwrap();
        assert!(!block.is_text());
    }
}
