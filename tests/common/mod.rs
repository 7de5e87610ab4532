/*!
 * Common test utilities for the bankdeck test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use bankdeck::{Item, Section, Suite};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A well-formed four-branch item for structural tests
pub fn sample_item(serial: &str, correct: usize) -> Item {
    Item {
        serial: serial.to_string(),
        question: format!("Question for {}", serial),
        branches: vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
            "fourth".to_string(),
        ],
        correct_branch_index: correct,
        reference: None,
        picture: None,
    }
}

/// A single-section suite around the given items
pub fn sample_suite(items: Vec<Item>) -> Suite {
    let mut section = Section::with_label("S1", "Sample section");
    section.items = items;
    Suite::new("A", "cn", "vTEST", 0, vec![section])
}

/// A marker-dialect source with `count` well-formed records
pub fn marker_fixture(count: usize) -> String {
    let mut text = String::new();
    for i in 1..=count {
        text.push_str(&format!("[I]LK{:04}\n", i));
        text.push_str(&format!("[Q]Question number {}?\n", i));
        text.push_str("[A]alpha\n");
        text.push_str("[B]bravo\n");
        text.push_str("[C]charlie\n");
        text.push_str("[D]delta\n");
        text.push_str("[P]\n");
    }
    text
}
