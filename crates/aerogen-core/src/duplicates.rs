//! Common fields and duplicate-column disambiguation.
//!
//! Every subtype class of a domain derives from one base class holding the
//! user-declared common fields. Any other column that appears in more than
//! one data file would collide through that shared ancestry, so each
//! occurrence is renamed with its subtype as a prefix.
//!
//! The decision is computed once per domain by [`DuplicateColumnRegistry`];
//! model and parser rendering both read it through
//! [`DuplicateColumnRegistry::resolve`], so they can never disagree.

use crate::naming::to_pascal_case;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Columns hoisted into the shared base class
///
/// Membership is case-insensitive; declaration order is kept for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonFieldSet {
    ordered: Vec<String>,
    upper: HashSet<String>,
}

impl CommonFieldSet {
    /// Parse a comma-separated list, ignoring blank entries and repeats
    pub fn parse(input: &str) -> Self {
        input.split(',').collect()
    }

    /// Whether a column is common
    pub fn contains(&self, column: &str) -> bool {
        self.upper.contains(&column.trim().to_uppercase())
    }

    /// Declared names, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for CommonFieldSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::default();
        for name in iter {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if set.upper.insert(name.to_uppercase()) {
                set.ordered.push(name.to_string());
            }
        }
        set
    }
}

/// Columns of one data file, as seen by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSource<'a> {
    pub file_name: &'a str,
    pub columns: &'a [String],
}

/// How a column is named in its subtype class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    /// Declared on the base class
    Common(String),
    /// Prefixed with the subtype because the column repeats across files
    Renamed(String),
    /// Used as-is
    Plain(String),
}

impl ResolvedName {
    pub fn identifier(&self) -> &str {
        match self {
            ResolvedName::Common(name) | ResolvedName::Renamed(name) | ResolvedName::Plain(name) => {
                name
            }
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, ResolvedName::Renamed(_))
    }
}

/// One line group of the duplicate report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// Upper-cased column name
    pub column: String,
    /// Property name before renaming
    pub property: String,
    /// Data files containing the column, sorted
    pub files: Vec<String>,
}

/// Registry of non-common columns shared by several data files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateColumnRegistry {
    common: CommonFieldSet,
    sources: BTreeMap<(String, String), BTreeSet<String>>,
    duplicates: BTreeSet<String>,
}

impl DuplicateColumnRegistry {
    /// Record every column of every source and classify them
    pub fn build<'a>(
        sources: impl IntoIterator<Item = ColumnSource<'a>>,
        common: &CommonFieldSet,
    ) -> Self {
        let mut by_column: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
        for source in sources {
            for column in source.columns {
                by_column
                    .entry((column.trim().to_uppercase(), to_pascal_case(column.trim())))
                    .or_default()
                    .insert(source.file_name.to_string());
            }
        }

        let duplicates = by_column
            .iter()
            .filter(|((column, _), files)| files.len() > 1 && !common.contains(column))
            .map(|((column, _), _)| column.clone())
            .collect();

        Self {
            common: common.clone(),
            sources: by_column,
            duplicates,
        }
    }

    /// Whether a column must be renamed in every subtype it appears in
    pub fn is_duplicate(&self, column: &str) -> bool {
        self.duplicates.contains(&column.trim().to_uppercase())
    }

    /// Name of a subtype's column; the single source of truth for both emitters
    pub fn resolve(&self, subtype: &str, column: &str) -> ResolvedName {
        let property = to_pascal_case(column.trim());
        if self.common.contains(column) {
            ResolvedName::Common(property)
        } else if self.is_duplicate(column) {
            ResolvedName::Renamed(format!("{}{}", to_pascal_case(subtype), property))
        } else {
            ResolvedName::Plain(property)
        }
    }

    /// Report entries, sorted by column then property
    pub fn entries(&self) -> Vec<DuplicateEntry> {
        self.sources
            .iter()
            .filter(|((column, _), files)| files.len() > 1 && !self.common.contains(column))
            .map(|((column, property), files)| DuplicateEntry {
                column: column.clone(),
                property: property.clone(),
                files: files.iter().cloned().collect(),
            })
            .collect()
    }
}
