//! Structure-description schema of a NASR data domain.
//!
//! The `<DOMAIN>_CSV_DATA_STRUCTURE.csv` file lists, for every data file and
//! column, the declared maximum length, data type and nullability.

use crate::loader::{self, CsvTable};
use crate::types::DataType;
use crate::{GenError, GenResult};
use std::collections::HashMap;
use std::path::Path;

/// Columns a structure CSV must carry (any order)
pub const STRUCTURE_HEADERS: [&str; 5] =
    ["CSV File", "Column Name", "Max Length", "Data Type", "Nullable"];

/// Lookup key: upper-cased file identifier and column name
///
/// The file identifier has any `.csv` extension removed, so `APT_BASE` and
/// `apt_base.csv` address the same file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaKey {
    pub file: String,
    pub column: String,
}

impl SchemaKey {
    pub fn new(file: &str, column: &str) -> Self {
        let file = file.trim().to_uppercase();
        let file = file.strip_suffix(".CSV").unwrap_or(&file).to_string();
        Self {
            file,
            column: column.trim().to_uppercase(),
        }
    }
}

/// Declared shape of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Raw max-length descriptor, e.g. `40` or `(5,2)`
    pub max_length: String,
    pub data_type: DataType,
    pub nullable: bool,
}

/// Read-only column schema, in structure-file row order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<(SchemaKey, SchemaEntry)>,
    index: HashMap<SchemaKey, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a repeated key replaces the earlier entry in place
    pub fn insert(&mut self, key: SchemaKey, entry: SchemaEntry) {
        match self.index.get(&key) {
            Some(&i) => {
                tracing::debug!(file = %key.file, column = %key.column, "duplicate structure row replaces earlier entry");
                self.entries[i].1 = entry;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    /// Entry for a column of a given data file
    pub fn get(&self, file: &str, column: &str) -> Option<&SchemaEntry> {
        let i = *self.index.get(&SchemaKey::new(file, column))?;
        Some(&self.entries[i].1)
    }

    /// First entry, in row order, for a column in any file
    pub fn first_for_column(&self, column: &str) -> Option<&SchemaEntry> {
        let column = column.trim().to_uppercase();
        self.entries
            .iter()
            .find(|(key, _)| key.column == column)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SchemaKey, &SchemaEntry)> {
        self.entries.iter().map(|(k, e)| (k, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check a structure table's columns and build the schema
pub fn parse_structure(table: &CsvTable) -> GenResult<Schema> {
    let missing: Vec<&str> = STRUCTURE_HEADERS
        .iter()
        .copied()
        .filter(|h| !table.headers.iter().any(|t| t == h))
        .collect();
    let unknown: Vec<&str> = table
        .headers
        .iter()
        .map(String::as_str)
        .filter(|t| !STRUCTURE_HEADERS.contains(t))
        .collect();

    if !missing.is_empty() || !unknown.is_empty() || table.headers.len() != STRUCTURE_HEADERS.len() {
        return Err(GenError::schema_format(
            &table.source,
            format!(
                "structure columns must be {} (missing: [{}], unknown: [{}])",
                STRUCTURE_HEADERS.join(", "),
                missing.join(", "),
                unknown.join(", ")
            ),
        ));
    }

    let mut schema = Schema::new();
    for row in table.records() {
        let key = SchemaKey::new(row.get("CSV File"), row.get("Column Name"));
        let entry = SchemaEntry {
            max_length: row.get("Max Length").trim().to_string(),
            data_type: DataType::from_structure(row.get("Data Type")),
            nullable: row.get("Nullable").trim().eq_ignore_ascii_case("yes"),
        };
        schema.insert(key, entry);
    }
    Ok(schema)
}

/// Load and validate a structure CSV
pub fn load_structure(path: &Path) -> GenResult<Schema> {
    let table = loader::load_table(path)?;
    let schema = parse_structure(&table)?;
    tracing::debug!(file = %table.source, entries = schema.len(), "loaded structure schema");
    Ok(schema)
}

#[cfg(test)]
#[path = "structure/structure_tests.rs"]
mod structure_tests;
