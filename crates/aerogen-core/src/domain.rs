//! Multi-file NASR data domains.
//!
//! A domain is a directory of data CSVs sharing a prefix (`APT_BASE.csv`,
//! `APT_RWY.csv`, ...) plus one structure-description CSV. Only the header
//! row of each data file matters: every column becomes a property of the
//! file's subtype class, typed from the structure schema.
//!
//! [`DomainModel::build`] is the derivation step. Columns it cannot type are
//! left out of the generated code and reported as [`GenerationWarning`]s.

use crate::duplicates::{
    ColumnSource, CommonFieldSet, DuplicateColumnRegistry, DuplicateEntry, ResolvedName,
};
use crate::loader;
use crate::naming::{class_name, domain_prefix, subtype_name, to_pascal_case};
use crate::structure::{self, Schema};
use crate::types::{Coercion, TargetType, resolve_type};
use crate::{GenError, GenResult};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Header of one data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtypeSource {
    pub file_name: String,
    pub subtype: String,
    pub columns: Vec<String>,

    /// Whether the file has at least one data row
    pub has_rows: bool,
}

/// Everything read from a domain directory
#[derive(Debug, Clone)]
pub struct DomainInput {
    pub domain: String,
    pub sources: Vec<SubtypeSource>,
    pub schema: Schema,
}

impl DomainInput {
    /// Read the structure file and every data file header in `dir`
    ///
    /// Data files are processed in file-name order so output is stable.
    pub fn discover(dir: &Path, structure_suffix: &str) -> GenResult<Self> {
        if !dir.is_dir() {
            return Err(GenError::MissingFile(dir.to_path_buf()));
        }

        let mut csv_files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let name = loader::display_name(&path);
            if path.is_file() && name.ends_with(".csv") {
                csv_files.push((name, path));
            }
        }
        csv_files.sort();

        let (structure_files, data_files): (Vec<_>, Vec<_>) = csv_files
            .into_iter()
            .partition(|(name, _)| name.ends_with(structure_suffix));

        let structure_file = structure_files
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| GenError::MissingFile(dir.join(format!("*{structure_suffix}"))))?;
        let schema = structure::load_structure(&structure_file)?;

        let domain = domain_prefix(data_files.iter().map(|(name, _)| name.as_str()));
        tracing::info!(
            domain = %domain,
            structure = %structure_file.display(),
            files = data_files.len(),
            "discovered data domain"
        );

        let mut sources = Vec::with_capacity(data_files.len());
        for (name, path) in &data_files {
            let table = loader::load_table(path)?;
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::debug!(file = %name, columns = table.headers.len(), rows = table.len(), "read data file header");
            sources.push(SubtypeSource {
                file_name: name.clone(),
                subtype: subtype_name(&stem, &domain),
                columns: table.headers.clone(),
                has_rows: !table.is_empty(),
            });
        }

        Ok(Self {
            domain,
            sources,
            schema,
        })
    }
}

/// Something left out of the generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// A data column has no structure entry
    UnmatchedColumn { file: String, column: String },
    /// A declared common field has no structure entry in any file
    UnmatchedCommonField { column: String },
    /// A data file has a header but no rows
    EmptySourceFile { file: String },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::UnmatchedColumn { file, column } => {
                write!(f, "{file}: column '{column}' has no structure entry and was skipped")
            }
            GenerationWarning::UnmatchedCommonField { column } => {
                write!(f, "common field '{column}' has no structure entry and was skipped")
            }
            GenerationWarning::EmptySourceFile { file } => {
                write!(f, "{file}: no data rows, no class generated")
            }
        }
    }
}

/// A declared property of a domain class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainProperty {
    pub identifier: String,

    /// Upper-cased column name
    pub column: String,

    /// Where the column comes from, for the doc comment
    pub source: String,

    pub max_length: String,
    pub ty: TargetType,

    /// Renamed to avoid a cross-file collision
    pub renamed: bool,
}

/// One assignment in a subtype's parse method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub identifier: String,

    /// Column name exactly as in the data file header
    pub column: String,

    pub coercion: Coercion,
}

/// Derived class of one data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtypeClass {
    pub subtype: String,
    pub class_name: String,
    pub file_name: String,

    /// Non-common properties declared on this class
    pub properties: Vec<DomainProperty>,

    /// Every typed column, common ones included, in header order
    pub assignments: Vec<FieldAssignment>,
}

/// Intermediate representation of a whole data domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainModel {
    pub domain: String,

    /// Properties of the shared base class
    pub common: Vec<DomainProperty>,

    pub subtypes: Vec<SubtypeClass>,
    pub duplicates: Vec<DuplicateEntry>,
    pub warnings: Vec<GenerationWarning>,
}

impl DomainModel {
    /// Derive classes, names and types for a domain
    pub fn build(
        domain: &str,
        sources: &[SubtypeSource],
        schema: &Schema,
        common_fields: &CommonFieldSet,
    ) -> Self {
        let mut warnings = Vec::new();

        let live: Vec<&SubtypeSource> = sources
            .iter()
            .filter(|source| {
                if !source.has_rows {
                    warnings.push(GenerationWarning::EmptySourceFile {
                        file: source.file_name.clone(),
                    });
                }
                source.has_rows
            })
            .collect();

        let registry = DuplicateColumnRegistry::build(
            live.iter().map(|s| ColumnSource {
                file_name: &s.file_name,
                columns: &s.columns,
            }),
            common_fields,
        );

        let mut common = Vec::new();
        let mut common_types: HashMap<String, TargetType> = HashMap::new();
        for column in common_fields.iter() {
            let column = column.to_uppercase();
            let Some(entry) = schema.first_for_column(&column) else {
                warnings.push(GenerationWarning::UnmatchedCommonField { column });
                continue;
            };
            let ty = resolve_type(entry.data_type, &entry.max_length, entry.nullable);
            common_types.insert(column.clone(), ty);
            common.push(DomainProperty {
                identifier: to_pascal_case(&column),
                source: format!("All {domain}_*.csv files({column})"),
                max_length: entry.max_length.clone(),
                column,
                ty,
                renamed: false,
            });
        }

        let mut subtypes = Vec::with_capacity(live.len());
        for source in live {
            let mut properties = Vec::new();
            let mut assignments = Vec::new();

            for column in &source.columns {
                let upper = column.trim().to_uppercase();
                let resolved = registry.resolve(&source.subtype, column);

                let ty = match &resolved {
                    ResolvedName::Common(_) => match common_types.get(&upper) {
                        Some(ty) => *ty,
                        None => {
                            warnings.push(GenerationWarning::UnmatchedColumn {
                                file: source.file_name.clone(),
                                column: column.clone(),
                            });
                            continue;
                        }
                    },
                    ResolvedName::Renamed(_) | ResolvedName::Plain(_) => {
                        let Some(entry) = schema.get(&source.file_name, column) else {
                            warnings.push(GenerationWarning::UnmatchedColumn {
                                file: source.file_name.clone(),
                                column: column.clone(),
                            });
                            continue;
                        };
                        let ty = resolve_type(entry.data_type, &entry.max_length, entry.nullable);
                        properties.push(DomainProperty {
                            identifier: resolved.identifier().to_string(),
                            column: upper.clone(),
                            source: format!("{}({upper})", source.file_name),
                            max_length: entry.max_length.clone(),
                            ty,
                            renamed: resolved.is_renamed(),
                        });
                        ty
                    }
                };

                assignments.push(FieldAssignment {
                    identifier: resolved.identifier().to_string(),
                    column: column.clone(),
                    coercion: ty.coercion(),
                });
            }

            subtypes.push(SubtypeClass {
                subtype: source.subtype.clone(),
                class_name: class_name(domain, &source.subtype),
                file_name: source.file_name.clone(),
                properties,
                assignments,
            });
        }

        tracing::debug!(
            domain,
            classes = subtypes.len(),
            warnings = warnings.len(),
            "built domain model"
        );

        Self {
            domain: domain.to_string(),
            common,
            subtypes,
            duplicates: registry.entries(),
            warnings,
        }
    }
}
