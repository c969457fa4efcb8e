//! Naming convention utilities for code generation.
//!
//! This module converts FAA column and file names into C# identifiers.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `ARPT_NAME` | [`to_pascal_case`] | `ArptName` |
//! | `APT` | [`capitalize_word`] | `Apt` |
//! | `APT_BASE.csv`, ... | [`domain_prefix`] | `Apt` |
//! | `APT_BASE` + `Apt` | [`subtype_name`] | `BASE` |
//! | `Apt` + `BASE` | [`class_name`] | `AptBase` |
//! | `Reserved (Expansion)` | [`ReservedKind::identifier`] | `ReservedExpansion` |

/// Domain prefix used when no file name contains an underscore
pub const UNKNOWN_DOMAIN: &str = "Unknown";

/// Padding fields of a fixed-width layout
///
/// These occupy columns in the record but carry no data, so they are
/// documented in generated code without becoming live properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKind {
    /// `Reserved (Expansion)`
    Expansion,
    /// `Blank (Spacing)`
    Spacing,
}

impl ReservedKind {
    /// Recognise a reserved raw field name (exact match)
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "Reserved (Expansion)" => Some(ReservedKind::Expansion),
            "Blank (Spacing)" => Some(ReservedKind::Spacing),
            _ => None,
        }
    }

    /// Sentinel identifier used in disabled declarations
    pub fn identifier(&self) -> &'static str {
        match self {
            ReservedKind::Expansion => "ReservedExpansion",
            ReservedKind::Spacing => "BlankSpacing",
        }
    }
}

/// Upper-case the first character and lower-case the rest.
///
/// # Examples
///
/// ```
/// use aerogen_core::naming::capitalize_word;
///
/// assert_eq!(capitalize_word("APT"), "Apt");
/// assert_eq!(capitalize_word("base"), "Base");
/// assert_eq!(capitalize_word(""), "");
/// ```
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert an underscore-separated name to PascalCase.
///
/// Every segment is capitalized and the rest of it lower-cased, so
/// upper-case FAA column names come out readable. Empty segments from
/// doubled or edge underscores disappear.
///
/// # Examples
///
/// ```
/// use aerogen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("ARPT_NAME"), "ArptName");
/// assert_eq!(to_pascal_case("site_no"), "SiteNo");
/// assert_eq!(to_pascal_case("EFF_DATE"), "EffDate");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize_word).collect()
}

/// Infer the data-domain prefix from data file names.
///
/// The text before the first underscore of the first name that has one,
/// capitalized. Callers pass names in a stable order.
pub fn domain_prefix<'a>(file_names: impl IntoIterator<Item = &'a str>) -> String {
    file_names
        .into_iter()
        .find_map(|name| name.split_once('_').map(|(prefix, _)| prefix))
        .map(capitalize_word)
        .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string())
}

/// Subtype of a data file: its stem with every `<DOMAIN>_` removed.
///
/// # Examples
///
/// ```
/// use aerogen_core::naming::subtype_name;
///
/// assert_eq!(subtype_name("APT_RWY_END", "Apt"), "RWY_END");
/// ```
pub fn subtype_name(file_stem: &str, domain: &str) -> String {
    file_stem.replace(&format!("{}_", domain.to_uppercase()), "")
}

/// Generated class name for a subtype.
///
/// # Examples
///
/// ```
/// use aerogen_core::naming::class_name;
///
/// assert_eq!(class_name("Apt", "RWY_END"), "AptRwyEnd");
/// ```
pub fn class_name(domain: &str, subtype: &str) -> String {
    format!("{domain}{}", to_pascal_case(subtype))
}
