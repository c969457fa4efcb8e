//! Reference fixed-width record extraction.
//!
//! Mirrors the parser the CIFP generator emits, so a layout can be checked
//! against real data before the generated code is compiled anywhere:
//! lines that are blank or shorter than the minimum length are skipped, and
//! every field is the trimmed text at `[offset, offset + length)`.
//!
//! Positions count characters, not bytes.

/// A named slice of a fixed-width line
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlice {
    name: String,
    offset: usize,
    length: usize,
}

/// Field slices plus the short-line threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWidthLayout {
    fields: Vec<FieldSlice>,
    min_line_length: usize,
}

/// One parsed line: field values in layout order
///
/// A value is `None` when the line ends before the field does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<(String, Option<String>)>,
}

impl Record {
    /// Value of the named field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// `(field, value)` pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }
}

/// Trimmed text of `[offset, offset + length)`, or `None` if the line is too short
pub fn extract(line: &str, offset: usize, length: usize) -> Option<String> {
    let end = offset.checked_add(length)?;
    if line.chars().count() < end {
        return None;
    }
    let value: String = line.chars().skip(offset).take(length).collect();
    Some(value.trim().to_string())
}

impl FixedWidthLayout {
    pub fn new(min_line_length: usize) -> Self {
        Self {
            fields: Vec::new(),
            min_line_length,
        }
    }

    /// Append a field slice
    pub fn with_field(mut self, name: impl Into<String>, offset: usize, length: usize) -> Self {
        self.fields.push(FieldSlice {
            name: name.into(),
            offset,
            length,
        });
        self
    }

    /// Parse one line, or `None` if it should be skipped
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        if line.trim().is_empty() || line.chars().count() < self.min_line_length {
            return None;
        }

        let values = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), extract(line, f.offset, f.length)))
            .collect();
        Some(Record { values })
    }
}

/// Append-only collection of records parsed with one layout
///
/// Owned by the caller; nothing is shared between accumulators.
#[derive(Debug, Clone)]
pub struct RecordAccumulator {
    layout: FixedWidthLayout,
    records: Vec<Record>,
}

impl RecordAccumulator {
    pub fn new(layout: FixedWidthLayout) -> Self {
        Self {
            layout,
            records: Vec::new(),
        }
    }

    /// Parse a line and keep the record; returns whether one was produced
    pub fn push_line(&mut self, line: &str) -> bool {
        match self.layout.parse_line(line) {
            Some(record) => {
                self.records.push(record);
                true
            }
            None => false,
        }
    }

    /// Parse every line of a text
    pub fn push_text(&mut self, text: &str) -> usize {
        text.lines().filter(|line| self.push_line(line)).count()
    }

    /// Read-only view of the records parsed so far
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
