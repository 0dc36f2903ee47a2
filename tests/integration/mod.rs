// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use glossmatch::{Extraction, ExtractorConfig, GlossaryExtractor, Token, WhitespaceTokenizer};

/// Test fixture helper for creating temporary glossary and input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content relative to the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write glossary terms one per line
    pub fn create_glossary(&self, name: &str, terms: &[&str]) -> PathBuf {
        self.create_file(name, &terms.join("\n"))
    }
}

/// Whitespace-tokenize test input
pub fn tokens(text: &str) -> Vec<Token> {
    WhitespaceTokenizer::new().tokens(text)
}

/// Build an extractor over `terms` with the whitespace tokenizer
pub fn extractor(terms: &[&str], config: ExtractorConfig) -> GlossaryExtractor {
    GlossaryExtractor::new(terms.iter().copied(), config, &WhitespaceTokenizer::new())
        .expect("Extractor creation should succeed")
}

/// Render extractions one per line as value<TAB>(start,end)
pub fn format_extractions(extractions: &[Extraction]) -> String {
    extractions
        .iter()
        .map(|e| format!("{}\t({},{})", e.value, e.context.start, e.context.end))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\nActual:\n{}",
            context,
            expected_lines.len(),
            actual_lines.len(),
            actual
        );
    }

    for (i, (actual_line, expected_line)) in
        actual_lines.iter().zip(expected_lines.iter()).enumerate()
    {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context,
                i + 1,
                expected_line,
                actual_line
            );
        }
    }
}
