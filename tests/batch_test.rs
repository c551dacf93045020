//! Integration tests for batch processing.

use std::fs;
use std::path::Path;

use layout_outline::{
    run_batch, BatchOptions, BatchProcessor, Error, JsonFormat, Outline, SourceRegistry,
};
use tempfile::TempDir;

const REPORT: &str = r#"{"pages": [{"blocks": [
    {"lines": [{"spans": [{"text": "Annual Report", "size": 24, "font": "Helvetica"}]}]},
    {"lines": [{"spans": [{"text": "1. Overview", "size": 10, "font": "Helvetica", "flags": 2}]}]},
    {"lines": [{"spans": [{"text": "This is body text.", "size": 10, "font": "Helvetica"}]}]},
    {"lines": [{"spans": [{"text": "More body text.", "size": 10, "font": "Helvetica"}]}]}
]}]}"#;

const EMPTY: &str = r#"{"pages": []}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn read_outline(path: &Path) -> Outline {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn setup() -> (TempDir, TempDir) {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "report.json", REPORT);
    write(input.path(), "empty.json", EMPTY);
    write(input.path(), "broken.json", "{ not valid");
    write(input.path(), "notes.txt", "ignored");
    (input, output)
}

#[test]
fn test_batch_writes_one_artifact_per_document() {
    let (input, output) = setup();

    let report = run_batch(input.path(), output.path()).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);

    let outline = read_outline(&output.path().join("report.json"));
    assert_eq!(outline.title, "Annual Report");
    assert_eq!(outline.headings.len(), 2);

    let outline = read_outline(&output.path().join("empty.json"));
    assert_eq!(outline.title, "Untitled Document");
    assert!(outline.headings.is_empty());

    assert!(!output.path().join("broken.json").exists());
    assert!(!output.path().join("notes.json").exists());
}

#[test]
fn test_batch_failure_is_isolated() {
    let (input, output) = setup();

    let report = run_batch(input.path(), output.path()).unwrap();
    let failed: Vec<_> = report.failed().collect();

    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].input, input.path().join("broken.json"));
    assert!(matches!(failed[0].outcome, Err(Error::Json(_))));
}

#[test]
fn test_batch_results_in_discovery_order() {
    let (input, output) = setup();

    let report = run_batch(input.path(), output.path()).unwrap();
    let names: Vec<String> = report
        .results
        .iter()
        .map(|r| r.input.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["broken.json", "empty.json", "report.json"]);
}

#[test]
fn test_sequential_matches_parallel() {
    let (input, parallel_out) = setup();
    let sequential_out = tempfile::tempdir().unwrap();

    let processor = BatchProcessor::new(
        SourceRegistry::with_defaults(),
        BatchOptions::new().sequential(),
    );
    let sequential = processor.run(input.path(), sequential_out.path()).unwrap();
    let parallel = run_batch(input.path(), parallel_out.path()).unwrap();

    assert_eq!(sequential.success_count(), parallel.success_count());
    for name in ["report.json", "empty.json"] {
        let a = fs::read_to_string(sequential_out.path().join(name)).unwrap();
        let b = fs::read_to_string(parallel_out.path().join(name)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_batch_creates_output_dir() {
    let (input, output) = setup();
    let nested = output.path().join("nested").join("out");

    let report = run_batch(input.path(), &nested).unwrap();

    assert_eq!(report.success_count(), 2);
    assert!(nested.join("report.json").is_file());
}

#[test]
fn test_batch_missing_input_dir() {
    let output = tempfile::tempdir().unwrap();
    let result = run_batch(output.path().join("missing"), output.path());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_batch_empty_input_dir() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let report = run_batch(input.path(), output.path()).unwrap();
    assert!(report.is_empty());
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_batch_compact_format_and_extension() {
    let (input, output) = setup();
    let processor = BatchProcessor::new(
        SourceRegistry::with_defaults(),
        BatchOptions::new()
            .with_format(JsonFormat::Compact)
            .with_output_extension("outline.json"),
    );

    let report = processor.run(input.path(), output.path()).unwrap();
    assert_eq!(report.success_count(), 2);

    let written = fs::read_to_string(output.path().join("empty.outline.json")).unwrap();
    assert_eq!(written, r#"{"title":"Untitled Document","outline":[]}"#);
}

#[test]
fn test_run_files_reports_progress() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let (input, output) = setup();
    let processor = BatchProcessor::with_defaults();
    let inputs = processor.discover(input.path()).unwrap();
    let done = AtomicUsize::new(0);

    let report = processor
        .run_files(&inputs, output.path(), |_| {
            done.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(done.load(Ordering::SeqCst), inputs.len());
    assert_eq!(report.total(), inputs.len());
}

#[test]
fn test_document_report_fields() {
    let (input, output) = setup();
    let processor = BatchProcessor::with_defaults();

    let report = processor
        .process_file(&input.path().join("report.json"), output.path())
        .unwrap();

    assert_eq!(report.output, output.path().join("report.json"));
    assert_eq!(report.title, "Annual Report");
    assert_eq!(report.heading_count, 2);
}
