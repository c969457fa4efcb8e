//! CSV loading with encoding fallback
//!
//! FAA distribution CSVs are mostly UTF-8, but older files are saved as
//! Windows-1252. Text is decoded as UTF-8 first and re-decoded as
//! Windows-1252 only when that fails.

use crate::{GenError, GenResult};
use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

/// Text encoding a file was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Windows1252,
}

/// A CSV file held in memory, header order preserved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Name used in error messages (usually the file name)
    pub source: String,

    /// Header row, in file order
    pub headers: Vec<String>,

    /// Data rows, each padded or truncated to the header width
    pub rows: Vec<Vec<String>>,
}

/// One data row viewed through its table's header
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> CsvRow<'a> {
    /// Value of the named column, or `""` if the column does not exist
    pub fn get(&self, column: &str) -> &'a str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl CsvTable {
    /// Iterate data rows as header-keyed views
    pub fn records(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.rows.iter().map(|values| CsvRow {
            headers: &self.headers,
            values,
        })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode raw bytes, trying UTF-8 before Windows-1252
///
/// A leading byte-order mark is removed either way.
pub fn decode(bytes: &[u8]) -> (String, SourceEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (
            text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
            SourceEncoding::Utf8,
        ),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text.into_owned(), SourceEncoding::Windows1252)
        }
    }
}

/// Read a file as text using [`decode`]
pub fn read_text(path: &Path) -> GenResult<String> {
    if !path.exists() {
        return Err(GenError::MissingFile(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let (text, encoding) = decode(&bytes);
    if encoding == SourceEncoding::Windows1252 {
        tracing::debug!(path = %path.display(), "not valid UTF-8, decoded as Windows-1252");
    }
    Ok(text)
}

/// Parse CSV text into a [`CsvTable`]
///
/// Values are kept verbatim; short rows are padded with empty strings and
/// surplus values are dropped.
pub fn parse_table(source: &str, text: &str) -> GenResult<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut values: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        values.resize(width, String::new());
        rows.push(values);
    }

    Ok(CsvTable {
        source: source.to_string(),
        headers,
        rows,
    })
}

/// Load a CSV file from disk
pub fn load_table(path: &Path) -> GenResult<CsvTable> {
    let text = read_text(path)?;
    parse_table(&display_name(path), &text)
}

/// File name used to identify a source in messages and generated docs
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
