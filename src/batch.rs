//! Batch outline extraction over a directory of documents.
//!
//! Every supported file in the input directory yields one JSON artifact in
//! the output directory, named after the input with its extension replaced.
//! Documents are independent: a document that fails to load or write is
//! reported in its own [`DocumentResult`] and never stops the others.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::{OutlineExtractor, OutlineOptions};
use crate::error::Result;
use crate::model::Outline;
use crate::render::{to_json, JsonFormat};
use crate::source::SourceRegistry;

/// Options for batch processing.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Outline inference options
    pub outline: OutlineOptions,

    /// JSON output format
    pub format: JsonFormat,

    /// Extension given to output files (without the dot)
    pub output_extension: String,

    /// Whether to process documents in parallel
    pub parallel: bool,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set outline inference options.
    pub fn with_outline_options(mut self, options: OutlineOptions) -> Self {
        self.outline = options;
        self
    }

    /// Set JSON output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output file extension.
    pub fn with_output_extension(mut self, ext: impl Into<String>) -> Self {
        self.output_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            outline: OutlineOptions::default(),
            format: JsonFormat::Pretty,
            output_extension: "json".to_string(),
            parallel: true,
        }
    }
}

/// Summary of one successfully processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Path of the written artifact
    pub output: PathBuf,
    /// Inferred title
    pub title: String,
    /// Number of headings in the outline
    pub heading_count: usize,
}

/// Outcome of processing one input document.
#[derive(Debug)]
pub struct DocumentResult {
    /// Input document path
    pub input: PathBuf,
    /// Report on success, or the reason the document failed
    pub outcome: Result<DocumentReport>,
}

impl DocumentResult {
    /// Check if the document was processed successfully.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-document results of a batch run, in discovery order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One result per discovered input
    pub results: Vec<DocumentResult>,
}

impl BatchReport {
    /// Number of documents attempted.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Check if no documents were found.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results of documents that succeeded.
    pub fn succeeded(&self) -> impl Iterator<Item = &DocumentResult> + '_ {
        self.results.iter().filter(|r| r.is_ok())
    }

    /// Results of documents that failed.
    pub fn failed(&self) -> impl Iterator<Item = &DocumentResult> + '_ {
        self.results.iter().filter(|r| !r.is_ok())
    }

    /// Number of documents that succeeded.
    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    /// Number of documents that failed.
    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }
}

/// Runs outline extraction over many documents.
pub struct BatchProcessor {
    registry: SourceRegistry,
    extractor: OutlineExtractor,
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a processor with the given sources and options.
    pub fn new(registry: SourceRegistry, options: BatchOptions) -> Self {
        Self {
            registry,
            extractor: OutlineExtractor::new(options.outline.clone()),
            options,
        }
    }

    /// Create a processor with default sources and options.
    pub fn with_defaults() -> Self {
        Self::new(SourceRegistry::with_defaults(), BatchOptions::default())
    }

    /// Get the batch options.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// List supported input files in a directory, sorted by path.
    pub fn discover(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();
        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();
            if path.is_file() && self.registry.supports_path(&path) {
                inputs.push(path);
            }
        }
        inputs.sort();
        Ok(inputs)
    }

    /// Artifact path for an input: its stem plus the output extension.
    pub fn output_path(&self, input: &Path, output_dir: &Path) -> PathBuf {
        let mut name = OsString::from(input.file_stem().unwrap_or_default());
        name.push(".");
        name.push(&self.options.output_extension);
        output_dir.join(name)
    }

    /// Load a document and infer its outline.
    pub fn outline_file(&self, input: &Path) -> Result<Outline> {
        let doc = self.registry.load(input)?;
        Ok(self.extractor.extract(&doc))
    }

    /// Process one document and write its artifact.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> Result<DocumentReport> {
        let outline = self.outline_file(input)?;
        let json = to_json(&outline, self.options.format)?;
        let output = self.output_path(input, output_dir);
        fs::write(&output, json)?;

        Ok(DocumentReport {
            output,
            title: outline.title,
            heading_count: outline.headings.len(),
        })
    }

    /// Process every supported document in `input_dir` into `output_dir`.
    ///
    /// Fails only when the input directory cannot be listed or the output
    /// directory cannot be created.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let inputs = self.discover(input_dir)?;
        self.run_files(&inputs, output_dir, |_| {})
    }

    /// Process the given inputs, calling `on_done` as each document finishes.
    pub fn run_files<F>(&self, inputs: &[PathBuf], output_dir: &Path, on_done: F) -> Result<BatchReport>
    where
        F: Fn(&DocumentResult) + Send + Sync,
    {
        fs::create_dir_all(output_dir)?;
        log::info!(
            "Processing {} documents into {}",
            inputs.len(),
            output_dir.display()
        );

        let process = |input: &PathBuf| {
            let result = self.process_logged(input, output_dir);
            on_done(&result);
            result
        };

        let results: Vec<DocumentResult> = if self.options.parallel {
            inputs.par_iter().map(process).collect()
        } else {
            inputs.iter().map(process).collect()
        };

        Ok(BatchReport { results })
    }

    fn process_logged(&self, input: &Path, output_dir: &Path) -> DocumentResult {
        let outcome = self.process_file(input, output_dir);
        let name = display_name(input);
        match &outcome {
            Ok(report) => log::info!("Processed {} -> {}", name, display_name(&report.output)),
            Err(e) => log::warn!("Failed to process {}: {}", name, e),
        }

        DocumentResult {
            input: input.to_path_buf(),
            outcome,
        }
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
