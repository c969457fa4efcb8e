//! Fixed-width section layouts.
//!
//! A section CSV describes one CIFP record type, one row per field:
//!
//! ```text
//! FieldName,PropertyName,ReferenceFieldId,Index,Length,DataType,Remarks
//! Record Type,RecordType,5.2,0,1,Alpha,
//! Reserved (Expansion),,,1,3,,
//! ```
//!
//! Rows are validated once, at load time, into [`FieldSpec`]s. A
//! [`SectionModel`] then pairs every field with the identifier the
//! renderers print.

use crate::fixed_width::FixedWidthLayout;
use crate::loader::{self, CsvRow, CsvTable};
use crate::naming::ReservedKind;
use crate::types::{ScalarType, TargetType};
use crate::{GenError, GenResult};
use std::fmt;
use std::path::Path;

/// Header a section CSV must carry, in this exact order
pub const SECTION_HEADERS: [&str; 7] = [
    "FieldName",
    "PropertyName",
    "ReferenceFieldId",
    "Index",
    "Length",
    "DataType",
    "Remarks",
];

/// Starting column of a field, optionally with a sub-index (`12:3`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIndex {
    pub offset: usize,
    pub sub_index: Option<String>,
}

impl FieldIndex {
    /// Parse `<offset>` or `<offset>:<sub-index>`
    pub fn parse(raw: &str) -> Option<Self> {
        let (offset, sub_index) = match raw.trim().split_once(':') {
            Some((offset, sub)) => (offset, Some(sub.trim().to_string())),
            None => (raw.trim(), None),
        };
        let offset = offset.trim().parse().ok()?;
        Some(Self { offset, sub_index })
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_index {
            Some(sub) => write!(f, "{}:{}", self.offset, sub),
            None => write!(f, "{}", self.offset),
        }
    }
}

/// One validated row of a section CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,

    /// Empty only for reserved fields
    pub property_name: String,

    pub reference_id: Option<String>,
    pub index: Option<FieldIndex>,
    pub length: Option<usize>,
    pub data_type: String,

    /// Fixed-width text fields are always nullable at the model layer
    pub nullable: bool,

    pub remarks: String,
    pub reserved: Option<ReservedKind>,
}

impl FieldSpec {
    /// Validate one section row
    pub fn from_row(file: &str, line: usize, row: &CsvRow<'_>) -> GenResult<Self> {
        let name = row.get("FieldName").trim().to_string();
        let property_name = row.get("PropertyName").trim().to_string();
        let reserved = ReservedKind::from_field_name(&name);

        if property_name.is_empty() && reserved.is_none() {
            return Err(GenError::schema_format(
                file,
                format!("missing PropertyName for non-reserved field '{name}' (row {line})"),
            ));
        }

        let raw_index = row.get("Index").trim();
        let index = if raw_index.is_empty() {
            None
        } else {
            Some(FieldIndex::parse(raw_index).ok_or_else(|| {
                GenError::schema_format(
                    file,
                    format!("invalid Index '{raw_index}' for field '{name}' (row {line})"),
                )
            })?)
        };

        let raw_length = row.get("Length").trim();
        let length = if raw_length.is_empty() {
            None
        } else {
            Some(raw_length.parse::<usize>().map_err(|_| {
                GenError::schema_format(
                    file,
                    format!("invalid Length '{raw_length}' for field '{name}' (row {line})"),
                )
            })?)
        };

        let reference_id = Some(row.get("ReferenceFieldId").trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            property_name,
            reference_id,
            index,
            length,
            data_type: row.get("DataType").trim().to_string(),
            nullable: true,
            remarks: row.get("Remarks").trim().to_string(),
            reserved,
        })
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved.is_some()
    }

    /// Property name, or the sentinel identifier for reserved fields
    pub fn identifier(&self) -> &str {
        match self.reserved {
            Some(kind) => kind.identifier(),
            None => &self.property_name,
        }
    }

    /// `(offset, length)` when both are declared
    pub fn slice(&self) -> Option<(usize, usize)> {
        Some((self.index.as_ref()?.offset, self.length?))
    }
}

/// Check a section table's header and validate every row
pub fn parse_section(table: &CsvTable) -> GenResult<Vec<FieldSpec>> {
    if table.headers != SECTION_HEADERS {
        return Err(GenError::schema_format(
            &table.source,
            format!(
                "CSV headers must match exactly: {} (found: {})",
                SECTION_HEADERS.join(", "),
                table.headers.join(", ")
            ),
        ));
    }

    table
        .records()
        .enumerate()
        .map(|(i, row)| FieldSpec::from_row(&table.source, i + 2, &row))
        .collect()
}

/// Load and validate a section CSV
pub fn load_section(path: &Path) -> GenResult<Vec<FieldSpec>> {
    let table = loader::load_table(path)?;
    let fields = parse_section(&table)?;
    tracing::debug!(file = %table.source, fields = fields.len(), "loaded section layout");
    Ok(fields)
}

/// A field as the section renderers see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionField {
    pub spec: FieldSpec,

    /// `None` for reserved fields, which are never declared
    pub ty: Option<TargetType>,
}

impl SectionField {
    pub fn identifier(&self) -> &str {
        self.spec.identifier()
    }

    pub fn is_live(&self) -> bool {
        self.ty.is_some()
    }
}

/// Intermediate representation of one fixed-width section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionModel {
    pub section_name: String,
    pub section_id: String,

    /// Fields in CSV row order
    pub fields: Vec<SectionField>,
}

impl SectionModel {
    /// Build the model for a named section
    pub fn build(section_name: &str, section_id: &str, specs: Vec<FieldSpec>) -> GenResult<Self> {
        let section_name = section_name.trim();
        if section_name.is_empty() {
            return Err(GenError::Config("section name cannot be empty".to_string()));
        }
        let section_id = section_id.trim();
        if section_id.is_empty() {
            return Err(GenError::Config("section id cannot be empty".to_string()));
        }

        let fields = specs
            .into_iter()
            .map(|spec| {
                let ty = (!spec.is_reserved()).then(|| TargetType::new(ScalarType::String, true));
                SectionField { spec, ty }
            })
            .collect();

        Ok(Self {
            section_name: section_name.to_string(),
            section_id: section_id.to_string(),
            fields,
        })
    }

    pub fn model_class(&self) -> String {
        format!("{}CifpDataModel", self.section_name)
    }

    pub fn parser_class(&self) -> String {
        format!("{}CifpParser", self.section_name)
    }

    /// Fields that become properties
    pub fn live_fields(&self) -> impl Iterator<Item = &SectionField> {
        self.fields.iter().filter(|f| f.is_live())
    }

    /// Fields with both an offset and a length, with their slice
    pub fn sliced_fields(&self) -> impl Iterator<Item = (&SectionField, usize, usize)> {
        self.fields.iter().filter_map(|field| {
            field
                .spec
                .slice()
                .map(|(offset, length)| (field, offset, length))
        })
    }

    /// Reference layout equivalent to the generated parser
    pub fn layout(&self, min_line_length: usize) -> FixedWidthLayout {
        self.sliced_fields()
            .filter(|(field, _, _)| field.is_live())
            .fold(
                FixedWidthLayout::new(min_line_length),
                |layout, (field, offset, length)| {
                    layout.with_field(field.identifier(), offset, length)
                },
            )
    }
}
