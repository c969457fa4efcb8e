#![allow(non_snake_case)]

use super::*;

#[test]
fn GenError___missing_file___displays_path() {
    let err = GenError::MissingFile(PathBuf::from("data/APT_BASE.csv"));

    assert_eq!(err.to_string(), "input file not found: data/APT_BASE.csv");
}

#[test]
fn GenError___schema_format___displays_file_and_message() {
    let err = GenError::schema_format("Airport.csv", "missing PropertyName");

    assert_eq!(
        err.to_string(),
        "schema format error in Airport.csv: missing PropertyName"
    );
}

#[test]
fn GenError___from_io_error___converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");

    let err: GenError = io_err.into();

    assert!(matches!(err, GenError::Io(_)));
    assert!(err.to_string().contains("access denied"));
}

#[test]
fn GenError___from_toml_error___converts_to_config() {
    let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();

    let err: GenError = toml_err.into();

    assert!(matches!(err, GenError::Config(_)));
}
