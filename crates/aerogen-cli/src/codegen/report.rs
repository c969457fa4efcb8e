//! Duplicate-column report.

use aerogen_core::duplicates::DuplicateEntry;

/// File name of the report
pub const DUPLICATES_FILE: &str = "Duplicates.txt";

/// Render the report: each property name, then one tab-indented line per source file
pub fn generate_duplicates(entries: &[DuplicateEntry]) -> String {
    let mut text = String::new();
    for entry in entries {
        text.push_str(&entry.property);
        text.push('\n');
        for file in &entry.files {
            text.push_str(&format!("\t{file}\n"));
        }
    }
    text
}
