//! Integration tests for the aerogen binary.
//!
//! Each test builds its inputs in a temporary directory and runs the binary
//! there, with stdin closed so an unexpected prompt fails instead of hanging.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const FOO_LAYOUT: &str = "\
FieldName,PropertyName,ReferenceFieldId,Index,Length,DataType,Remarks
Reserved (Expansion),,,0,3,,Spare
Bar Field,Bar,5.1,3,5,Alpha,Bar remarks
";

const APT_STRUCTURE: &str = "\
CSV File,Column Name,Max Length,Data Type,Nullable
APT_BASE,EFF_DATE,10,VARCHAR,No
APT_BASE,SITE_NO,9,VARCHAR,No
APT_BASE,ARPT_NAME,50,VARCHAR,No
APT_BASE,ELEV,\"(6,1)\",NUMBER,Yes
APT_RWY,EFF_DATE,10,VARCHAR,No
APT_RWY,SITE_NO,9,VARCHAR,No
APT_RWY,RWY_LEN,5,NUMBER,No
APT_RWY,ELEV,\"(6,1)\",NUMBER,Yes
";

fn aerogen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aerogen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// cifp
// =============================================================================

mod cifp {
    use super::*;

    #[test]
    fn cifp___foo_section___reserved_disabled_and_bar_sliced() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.csv"), FOO_LAYOUT).unwrap();

        let output = aerogen(
            dir.path(),
            &["cifp", "foo.csv", "--section-name", "Foo", "--section-id", "FX"],
        );

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let model = read(dir.path().join("FooCifpDataModel.cs"));
        let parser = read(dir.path().join("FooCifpParser.cs"));
        assert!(model.contains("// public string ReservedExpansion { get; set; }"));
        assert!(model.contains("public string? Bar { get; set; }"));
        assert!(parser.contains("Bar = line.Substring(3, 5).Trim(),"));
        assert!(parser.contains("line.Length < 4)"));
    }

    #[test]
    fn cifp___output_flag___writes_into_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.csv"), FOO_LAYOUT).unwrap();

        let output = aerogen(
            dir.path(),
            &["cifp", "foo.csv", "-n", "Foo", "-i", "FX", "--output", "generated"],
        );

        assert!(output.status.success());
        assert!(dir.path().join("generated/FooCifpParser.cs").exists());
    }

    #[test]
    fn cifp___config_namespaces___used_in_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.csv"), FOO_LAYOUT).unwrap();
        fs::write(
            dir.path().join("aerogen.toml"),
            "[cifp]\nmodel_namespace = \"Acme.Models\"\nmin_line_length = 8\n",
        )
        .unwrap();

        let output = aerogen(dir.path(), &["cifp", "foo.csv", "-n", "Foo", "-i", "FX"]);

        assert!(output.status.success());
        let parser = read(dir.path().join("FooCifpParser.cs"));
        assert!(parser.starts_with("using Acme.Models;"));
        assert!(parser.contains("line.Length < 8)"));
    }

    #[test]
    fn cifp___preview___prints_records() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.csv"), FOO_LAYOUT).unwrap();
        fs::write(dir.path().join("data.txt"), "SPAHELLO\nab\n").unwrap();

        let output = aerogen(
            dir.path(),
            &["cifp", "foo.csv", "-n", "Foo", "-i", "FX", "--preview", "data.txt"],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Bar = HELLO"));
        assert!(!stdout.contains("record 2"));
    }

    #[test]
    fn cifp___permuted_header___fails_without_output() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("foo.csv"),
            "PropertyName,FieldName,ReferenceFieldId,Index,Length,DataType,Remarks\nBar,Bar,,3,5,,\n",
        )
        .unwrap();

        let output = aerogen(dir.path(), &["cifp", "foo.csv", "-n", "Foo", "-i", "FX"]);

        assert!(!output.status.success());
        assert!(!dir.path().join("FooCifpDataModel.cs").exists());
        assert!(!dir.path().join("FooCifpParser.cs").exists());
    }

    #[test]
    fn cifp___missing_source___fails() {
        let dir = TempDir::new().unwrap();

        let output = aerogen(dir.path(), &["cifp", "absent.csv", "-n", "Foo", "-i", "FX"]);

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("absent.csv"));
    }

    #[test]
    fn cifp___closed_stdin_without_flags___fails_instead_of_waiting() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.csv"), FOO_LAYOUT).unwrap();

        let output = aerogen(dir.path(), &["cifp", "foo.csv"]);

        assert!(!output.status.success());
    }
}

// =============================================================================
// nasr
// =============================================================================

mod nasr {
    use super::*;

    fn apt_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("APT_CSV_DATA_STRUCTURE.csv"), APT_STRUCTURE).unwrap();
        fs::write(
            dir.path().join("APT_BASE.csv"),
            "EFF_DATE,SITE_NO,ARPT_NAME,ELEV\n2024/01/25,00128.,ADAK,18.3\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("APT_RWY.csv"),
            "EFF_DATE,SITE_NO,RWY_LEN,ELEV\n2024/01/25,00128.,7790,\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn nasr___apt_domain___generates_all_files() {
        let dir = apt_dir();

        let output = aerogen(dir.path(), &["nasr", "--common-fields", "EFF_DATE,SITE_NO"]);

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let models = read(dir.path().join("AptModels.cs"));
        let parser = read(dir.path().join("AptParser.cs"));
        let program = read(dir.path().join("Program.cs"));
        let report = read(dir.path().join("Duplicates.txt"));

        assert!(models.contains("public class AptRwy : CommonFields"));
        assert!(models.contains("public double? RwyElev { get; set; }"));
        assert!(parser.contains("RwyLen = FebCsvHelper.ParseInt(fields[\"RWY_LEN\"]),"));
        assert!(parser.contains("RwyElev = FebCsvHelper.ParseNullableDouble(fields[\"ELEV\"]),"));
        assert!(program.contains("aptCsvParser.ParseAptBase("));
        assert_eq!(report, "Elev\n\tAPT_BASE.csv\n\tAPT_RWY.csv\n");
    }

    #[test]
    fn nasr___dir_and_output_flags() {
        let input = apt_dir();
        let out = TempDir::new().unwrap();
        let input_dir = input.path().to_string_lossy().into_owned();
        let out_dir = out.path().to_string_lossy().into_owned();

        let output = aerogen(
            out.path(),
            &["nasr", "--dir", &input_dir, "--common-fields", "EFF_DATE", "-o", &out_dir],
        );

        assert!(output.status.success());
        assert!(out.path().join("AptParser.cs").exists());
        assert!(!input.path().join("AptParser.cs").exists());
    }

    #[test]
    fn nasr___no_structure_file___fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("APT_BASE.csv"), "EFF_DATE\n2024\n").unwrap();

        let output = aerogen(dir.path(), &["nasr", "--common-fields", "EFF_DATE"]);

        assert!(!output.status.success());
        assert!(!dir.path().join("Duplicates.txt").exists());
    }

    #[test]
    fn nasr___unknown_column___succeeds_with_warning_summary() {
        let dir = apt_dir();
        fs::write(
            dir.path().join("APT_RMK.csv"),
            "EFF_DATE,SITE_NO,REMARK\n2024/01/25,00128.,hello\n",
        )
        .unwrap();

        let output = aerogen(dir.path(), &["nasr", "--common-fields", "EFF_DATE,SITE_NO"]);

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("1 warning(s)"));
        assert!(String::from_utf8_lossy(&output.stderr).contains("REMARK"));
    }
}

// =============================================================================
// check-config
// =============================================================================

mod check_config {
    use super::*;

    #[test]
    fn check_config___valid_file___succeeds() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.toml"), "log_level = \"debug\"\n").unwrap();

        let output = aerogen(dir.path(), &["check-config", "--config", "custom.toml"]);

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
    }

    #[test]
    fn check_config___no_file___defaults_valid() {
        let dir = TempDir::new().unwrap();

        let output = aerogen(dir.path(), &["check-config"]);

        assert!(output.status.success());
    }

    #[test]
    fn check_config___explicit_missing_file___fails() {
        let dir = TempDir::new().unwrap();

        let output = aerogen(dir.path(), &["check-config", "--config", "absent.toml"]);

        assert!(!output.status.success());
    }

    #[test]
    fn check_config___bad_values___fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("aerogen.toml"), "[cifp]\nmin_line_length = 0\n").unwrap();

        let output = aerogen(dir.path(), &["check-config"]);

        assert!(!output.status.success());
    }
}
