//! # layout-outline
//!
//! Infer a document outline (a title plus H1/H2/H3 headings tied to pages)
//! from the typographic layout of a paginated document.
//!
//! The input is a stream of styled text spans grouped into pages, blocks and
//! lines, as produced by a text extractor. Headings are judged relative to
//! the document's own body text size, so the same heuristic works for
//! documents set at any base size.
//!
//! ## Quick Start
//!
//! ```no_run
//! use layout_outline::{outline_file, render, JsonFormat};
//!
//! fn main() -> layout_outline::Result<()> {
//!     // Load a layout dump and infer its outline
//!     let outline = outline_file("report.json")?;
//!
//!     // Serialize to the outline JSON format
//!     let json = render::to_json(&outline, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building documents directly
//!
//! ```
//! use layout_outline::{extract_outline, Document, HeadingLevel, Page, TextSpan};
//!
//! let mut page = Page::new(1);
//! page.add_span(TextSpan::new("Annual Report", 24.0, "Helvetica"));
//! page.add_span(TextSpan::bold("1. Overview", 10.0, "Helvetica"));
//! page.add_span(TextSpan::new("This is body text.", 10.0, "Helvetica"));
//! page.add_span(TextSpan::new("More body text here.", 10.0, "Helvetica"));
//!
//! let mut doc = Document::new();
//! doc.add_page(page);
//!
//! let outline = extract_outline(&doc);
//! assert_eq!(outline.title, "Annual Report");
//! assert_eq!(outline.headings[1].level, HeadingLevel::H3);
//! ```
//!
//! ## Features
//!
//! - **Relative typography**: body size is the most frequent font signature
//! - **Deterministic**: every tie is broken by document reading order
//! - **Pluggable sources**: register a [`FragmentSource`] per input format
//! - **Batch processing**: one artifact per document, failures isolated,
//!   parallel with Rayon

pub mod analysis;
pub mod batch;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use analysis::{
    body_size, extract_title, FontStatistics, HeadingClassifier, HeadingSignals, OutlineExtractor,
    OutlineOptions,
};
pub use batch::{BatchOptions, BatchProcessor, BatchReport, DocumentReport, DocumentResult};
pub use error::{Error, Result};
pub use model::{
    Document, Heading, HeadingLevel, Metadata, Outline, Page, TextBlock, TextLine, TextSpan,
};
pub use render::JsonFormat;
pub use source::{FragmentSource, LayoutJsonSource, SourceRegistry};

use std::path::Path;

/// Infer the outline of a document with default options.
///
/// # Example
///
/// ```
/// use layout_outline::{extract_outline, Document};
///
/// let outline = extract_outline(&Document::new());
/// assert_eq!(outline.title, "Untitled Document");
/// assert!(outline.headings.is_empty());
/// ```
pub fn extract_outline(doc: &Document) -> Outline {
    OutlineExtractor::default().extract(doc)
}

/// Infer the outline of a document with custom options.
pub fn extract_outline_with_options(doc: &Document, options: OutlineOptions) -> Outline {
    OutlineExtractor::new(options).extract(doc)
}

/// Load a layout file with the default sources and infer its outline.
///
/// # Arguments
///
/// * `path` - Path to a file whose extension a default source handles
///
/// # Example
///
/// ```no_run
/// use layout_outline::outline_file;
///
/// let outline = outline_file("report.json").unwrap();
/// println!("{}: {} headings", outline.title, outline.headings.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    let doc = SourceRegistry::with_defaults().load(path.as_ref())?;
    Ok(extract_outline(&doc))
}

/// Load a layout file and infer its outline with custom options.
pub fn outline_file_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<Outline> {
    let doc = SourceRegistry::with_defaults().load(path.as_ref())?;
    Ok(extract_outline_with_options(&doc, options))
}

/// Infer the outline of a JSON layout dump held in memory.
pub fn outline_bytes(data: &[u8]) -> Result<Outline> {
    let doc = LayoutJsonSource::new().load_bytes(data)?;
    Ok(extract_outline(&doc))
}

/// Convert a layout file to outline JSON.
///
/// # Example
///
/// ```no_run
/// use layout_outline::{to_json, JsonFormat};
///
/// let json = to_json("report.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("outline.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let outline = outline_file(path)?;
    render::to_json(&outline, format)
}

/// Process every supported document in `input_dir` into `output_dir`
/// with default options.
pub fn run_batch<P: AsRef<Path>, Q: AsRef<Path>>(input_dir: P, output_dir: Q) -> Result<BatchReport> {
    BatchProcessor::with_defaults().run(input_dir.as_ref(), output_dir.as_ref())
}
