//! C# type mappings for the generated models and parsers.
//!
//! # Type Mappings
//!
//! | Target scalar | Required | Nullable | Parser expression |
//! |---------------|----------|----------|-------------------|
//! | `String` | `string` | `string?` | `fields["COL"]` |
//! | `Int` | `int` | `int?` | `Helper.ParseInt` / `Helper.ParseNullableInt` |
//! | `Double` | `double` | `double?` | `Helper.ParseDouble` / `Helper.ParseNullableDouble` |

use aerogen_core::types::{Coercion, ScalarType, TargetType};

/// Keyword of a scalar type
pub fn scalar_keyword(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Int => "int",
        ScalarType::Double => "double",
        ScalarType::String => "string",
    }
}

/// Declared C# type, with `?` when nullable
pub fn csharp_type(ty: TargetType) -> String {
    let keyword = scalar_keyword(ty.scalar);
    if ty.nullable {
        format!("{keyword}?")
    } else {
        keyword.to_string()
    }
}

/// Name of the helper method applying a coercion, if any
pub fn helper_method(coercion: Coercion) -> Option<&'static str> {
    match coercion {
        Coercion::Passthrough => None,
        Coercion::Int => Some("ParseInt"),
        Coercion::NullableInt => Some("ParseNullableInt"),
        Coercion::Double => Some("ParseDouble"),
        Coercion::NullableDouble => Some("ParseNullableDouble"),
    }
}

/// Expression reading `column` from a parsed row
pub fn field_expression(coercion: Coercion, helper_class: &str, column: &str) -> String {
    let raw = format!("fields[\"{}\"]", escape_string(column));
    match helper_method(coercion) {
        Some(method) => format!("{helper_class}.{method}({raw})"),
        None => raw,
    }
}

/// Escape text for a C# regular string literal
pub fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

/// Append `text` as XML doc comment lines, one `///` per source line
pub fn push_doc_lines(code: &mut String, indent: &str, text: &str) {
    let mut lines = text.lines().peekable();
    if lines.peek().is_none() {
        code.push_str(&format!("{indent}/// \n"));
        return;
    }
    for line in lines {
        code.push_str(&format!("{indent}/// {}\n", line.trim_end_matches('\r')));
    }
}
