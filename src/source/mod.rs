//! Fragment sources: pluggable loaders that turn an input file into layout spans.
//!
//! Sources are registered by file extension and dispatched on the input
//! path, so the batch orchestrator never needs to know the input format.
//!
//! # Example
//!
//! ```no_run
//! use layout_outline::source::{LayoutJsonSource, SourceRegistry};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> layout_outline::Result<()> {
//!     let mut registry = SourceRegistry::new();
//!     registry.register(Arc::new(LayoutJsonSource::new()));
//!
//!     let doc = registry.load(Path::new("report.json"))?;
//!     println!("{} pages", doc.page_count());
//!     Ok(())
//! }
//! ```

mod layout;

pub use layout::LayoutJsonSource;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for fragment sources.
///
/// Implement this trait to feed another input format into outline inference.
pub trait FragmentSource: Send + Sync {
    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["json"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Load the document stored at the given path.
    fn load(&self, path: &Path) -> Result<Document>;

    /// Load a document from bytes.
    fn load_bytes(&self, bytes: &[u8]) -> Result<Document>;

    /// Check if this source supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for fragment sources.
///
/// The registry maps file extensions to sources and loads documents
/// through the matching one.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn FragmentSource>>,
    by_name: HashMap<String, Arc<dyn FragmentSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default sources (layout JSON).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LayoutJsonSource::new()));
        registry
    }

    /// Register a source for all its supported extensions.
    pub fn register(&mut self, source: Arc<dyn FragmentSource>) {
        for ext in source.supported_extensions() {
            self.sources.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn FragmentSource>> {
        self.sources.get(&ext.to_lowercase()).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn FragmentSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.sources.contains_key(&ext.to_lowercase())
    }

    /// Check if a path has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.sources.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Load a file using the source registered for its extension.
    pub fn load(&self, path: &Path) -> Result<Document> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        source.load(path)
    }

    /// Load bytes using the source registered for the given extension.
    pub fn load_bytes(&self, bytes: &[u8], ext: &str) -> Result<Document> {
        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        source.load_bytes(bytes)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
