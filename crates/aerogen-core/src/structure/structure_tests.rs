#![allow(non_snake_case)]

use super::*;
use crate::loader::parse_table;
use test_case::test_case;

const HEADER: &str = "CSV File,Column Name,Max Length,Data Type,Nullable";

fn schema_from(rows: &[&str]) -> Schema {
    let mut text = format!("{HEADER}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let table = parse_table("APT_CSV_DATA_STRUCTURE.csv", &text).unwrap();
    parse_structure(&table).unwrap()
}

#[test]
fn SchemaKey___new___normalizes_case_and_extension() {
    assert_eq!(SchemaKey::new("apt_base.csv", "arpt_id"), SchemaKey::new("APT_BASE", "ARPT_ID"));
    assert_eq!(SchemaKey::new(" APT_BASE ", " ARPT_ID ").file, "APT_BASE");
}

#[test]
fn parse_structure___maps_types_and_nullability() {
    let schema = schema_from(&[
        "APT_BASE,ARPT_ID,4,VARCHAR,No",
        "APT_BASE,ELEV,\"(6,1)\",NUMBER,yes",
    ]);

    let id = schema.get("APT_BASE", "ARPT_ID").unwrap();
    assert_eq!(id.data_type, DataType::String);
    assert!(!id.nullable);
    assert_eq!(id.max_length, "4");

    let elev = schema.get("APT_BASE", "elev").unwrap();
    assert_eq!(elev.data_type, DataType::Int);
    assert!(elev.nullable);
    assert_eq!(elev.max_length, "(6,1)");
}

#[test]
fn parse_structure___columns_in_any_order___accepted() {
    let text = "Nullable,Data Type,Max Length,Column Name,CSV File\nNo,NUMBER,5,SITE_NO,APT_BASE\n";
    let table = parse_table("s.csv", text).unwrap();

    let schema = parse_structure(&table).unwrap();

    assert_eq!(schema.get("APT_BASE", "SITE_NO").unwrap().data_type, DataType::Int);
}

#[test_case("CSV File,Column Name,Max Length,Data Type"; "missing nullable")]
#[test_case("CSV File,Column Name,Max Length,Data Type,Nullable,Notes"; "unknown column")]
#[test_case("CSV File,Column,Max Length,Data Type,Nullable"; "renamed column")]
#[test_case("CSV File,Column Name,Max Length,Data Type,Nullable,Nullable"; "repeated column")]
fn parse_structure___bad_columns___schema_format_error(header: &str) {
    let table = parse_table("s.csv", &format!("{header}\n")).unwrap();

    let err = parse_structure(&table).unwrap_err();

    assert!(matches!(err, GenError::SchemaFormat { .. }));
}

#[test]
fn Schema___get___missing_key___returns_none() {
    let schema = schema_from(&["APT_BASE,ARPT_ID,4,VARCHAR,No"]);

    assert!(schema.get("APT_RWY", "ARPT_ID").is_none());
    assert!(schema.get("APT_BASE", "NOPE").is_none());
}

#[test]
fn Schema___first_for_column___uses_row_order() {
    let schema = schema_from(&[
        "APT_RWY,SITE_NO,9,VARCHAR,No",
        "APT_BASE,SITE_NO,9,NUMBER,No",
    ]);

    let entry = schema.first_for_column("site_no").unwrap();

    assert_eq!(entry.data_type, DataType::String);
}

#[test]
fn Schema___insert___repeated_key_replaces_in_place() {
    let schema = schema_from(&[
        "APT_BASE,SITE_NO,9,VARCHAR,No",
        "APT_BASE,STATE,2,VARCHAR,No",
        "APT_BASE,SITE_NO,9,NUMBER,Yes",
    ]);

    assert_eq!(schema.len(), 2);
    let (first_key, first_entry) = schema.iter().next().unwrap();
    assert_eq!(first_key.column, "SITE_NO");
    assert_eq!(first_entry.data_type, DataType::Int);
    assert!(first_entry.nullable);
}

#[test]
fn Schema___new___is_empty() {
    assert!(Schema::new().is_empty());
}
