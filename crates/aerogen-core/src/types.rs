//! Target type resolution.
//!
//! Maps a declared `(data type, max length, nullable)` triple to a scalar
//! type and the coercion the generated parser applies to the raw text.
//!
//! # Type Mappings
//!
//! | Data type | Max length | Nullable | Target |
//! |-----------|------------|----------|--------|
//! | `string` | any | no / yes | `string` / `string?` |
//! | `int` | `(p,s)` with `s != 0` | no / yes | `double` / `double?` |
//! | `int` | anything else | no / yes | `int` / `int?` |

/// Declared data type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    String,
}

impl DataType {
    /// Map a structure-description `Data Type` value: `NUMBER` is an integer, everything else text
    pub fn from_structure(raw: &str) -> Self {
        if raw.trim() == "NUMBER" {
            DataType::Int
        } else {
            DataType::String
        }
    }
}

/// Scalar kind of a resolved target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Double,
    String,
}

/// A resolved target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetType {
    pub scalar: ScalarType,
    pub nullable: bool,
}

/// Conversion the generated parser applies to a raw field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercion {
    /// Assign the raw string
    Passthrough,
    Int,
    NullableInt,
    Double,
    NullableDouble,
}

impl TargetType {
    pub const fn new(scalar: ScalarType, nullable: bool) -> Self {
        Self { scalar, nullable }
    }

    /// Coercion matching this type
    ///
    /// Strings are passed through whether or not they are nullable.
    pub fn coercion(&self) -> Coercion {
        match (self.scalar, self.nullable) {
            (ScalarType::String, _) => Coercion::Passthrough,
            (ScalarType::Int, false) => Coercion::Int,
            (ScalarType::Int, true) => Coercion::NullableInt,
            (ScalarType::Double, false) => Coercion::Double,
            (ScalarType::Double, true) => Coercion::NullableDouble,
        }
    }
}

/// Resolve the target type of a column.
///
/// An integer column whose max length reads `(precision,scale)` with a
/// non-zero scale holds decimals and becomes a double. Every other integer
/// column is a whole number. Non-integer columns are strings.
///
/// The scale is compared as a number, so `(5, 0)` and `(5,00)` are whole
/// numbers too. This intentionally differs from a plain text comparison
/// against `"0"`, which would make both of them doubles.
///
/// # Examples
///
/// ```
/// use aerogen_core::types::{resolve_type, DataType, ScalarType};
///
/// assert_eq!(resolve_type(DataType::Int, "(5,2)", true).scalar, ScalarType::Double);
/// assert_eq!(resolve_type(DataType::Int, "(5,0)", false).scalar, ScalarType::Int);
/// assert_eq!(resolve_type(DataType::String, "40", false).scalar, ScalarType::String);
/// ```
pub fn resolve_type(data_type: DataType, max_length: &str, nullable: bool) -> TargetType {
    let scalar = match data_type {
        DataType::String => ScalarType::String,
        DataType::Int if has_fractional_scale(max_length) => ScalarType::Double,
        DataType::Int => ScalarType::Int,
    };
    TargetType::new(scalar, nullable)
}

/// Whether a max-length descriptor is `(precision,scale)` with a non-zero scale
fn has_fractional_scale(max_length: &str) -> bool {
    let Some(inner) = max_length
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [_, scale] => match scale.parse::<u32>() {
            Ok(value) => value != 0,
            Err(_) => *scale != "0",
        },
        _ => false,
    }
}
