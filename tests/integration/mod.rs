// Integration test utilities and common code
// Helpers for driving the buffer path with strings and for writing rules files

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use humanize_ident::{humanize_buffer, Humanizer};

pub mod fixtures;

/// Temporary directory for rules files handed to the engine or the CLI
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a rules JSON file and return its path
    pub fn create_rules_file(&self, name: &str, json: &str) -> PathBuf {
        let path = self.root_path.join(name);
        fs::write(&path, json).expect("Failed to write rules file");
        path
    }
}

/// Run the shared buffer path on `text` and collect the result
pub fn humanize_via_buffer(text: &str) -> String {
    let mut buffer: Vec<char> = text.chars().collect();
    humanize_buffer(&mut buffer).iter().collect()
}

/// Run a specific engine's buffer path on `text`
pub fn humanize_via_engine_buffer(humanizer: &Humanizer, text: &str) -> String {
    let mut buffer: Vec<char> = text.chars().collect();
    humanizer.humanize_buffer(&mut buffer).iter().collect()
}

/// Compare two multi-line outputs line by line with a readable failure
pub fn assert_lines(actual: &str, expected: &[&str], context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();

    if actual_lines.len() != expected.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\n{}",
            context, expected.len(), actual_lines.len(), actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context, i + 1, expected_line, actual_line
            );
        }
    }
}
