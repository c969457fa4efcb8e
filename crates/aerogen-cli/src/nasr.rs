//! `aerogen nasr`: generate models and parsers for a CSV data domain

use crate::codegen::nasr::{generate_models, generate_parser, generate_program};
use crate::codegen::report::{DUPLICATES_FILE, generate_duplicates};
use crate::output::{self, OutputFile};
use crate::prompt::Prompter;
use aerogen_core::domain::{DomainInput, DomainModel};
use aerogen_core::duplicates::CommonFieldSet;
use aerogen_core::{GenError, GeneratorConfig};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Command-line values; the common fields are prompted for when missing
#[derive(Debug, Clone, Default)]
pub struct NasrOptions {
    pub dir: Option<PathBuf>,
    pub common_fields: Option<String>,
    pub output: Option<PathBuf>,
}

/// Generated files plus what was left out of them
#[derive(Debug)]
pub struct NasrOutcome {
    pub written: Vec<PathBuf>,
    pub model: DomainModel,
}

/// Run the domain generator
pub fn run<R: BufRead, W: Write>(
    options: NasrOptions,
    config: &GeneratorConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<NasrOutcome> {
    let dir = options.dir.unwrap_or_else(|| PathBuf::from("."));
    let input = DomainInput::discover(&dir, &config.nasr.structure_suffix)
        .with_context(|| format!("Failed to read data domain in {}", dir.display()))?;

    let common_fields = match options.common_fields {
        Some(list) => {
            let fields = CommonFieldSet::parse(&list);
            if fields.is_empty() {
                return Err(GenError::Config("common field list cannot be empty".to_string()).into());
            }
            fields
        }
        None => prompter.ask_until(
            "Enter common fields (comma-separated, no spaces): ",
            "Invalid input. Try again.",
            |answer| Some(CommonFieldSet::parse(answer)).filter(|fields| !fields.is_empty()),
        )?,
    };

    let model = DomainModel::build(&input.domain, &input.sources, &input.schema, &common_fields);
    let domain = &model.domain;

    let files = [
        OutputFile::new(DUPLICATES_FILE, generate_duplicates(&model.duplicates)),
        OutputFile::new(format!("{domain}Models.cs"), generate_models(&model, &config.nasr)),
        OutputFile::new(format!("{domain}Parser.cs"), generate_parser(&model, &config.nasr)),
        OutputFile::new("Program.cs", generate_program(&model)),
    ];

    let output_dir = options.output.unwrap_or_else(|| config.output_dir.clone());
    let written = output::write_all(&output_dir, &files)?;

    report_warnings(&model);
    Ok(NasrOutcome { written, model })
}

fn report_warnings(model: &DomainModel) {
    if model.warnings.is_empty() {
        return;
    }
    for warning in &model.warnings {
        tracing::warn!("{warning}");
    }
    tracing::warn!(
        count = model.warnings.len(),
        "some input was left out of the generated code"
    );
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use aerogen_core::GenerationWarning;
    use std::fs;
    use tempfile::TempDir;

    const STRUCTURE: &str = "\
CSV File,Column Name,Max Length,Data Type,Nullable
APT_BASE,EFF_DATE,10,VARCHAR,No
APT_BASE,SITE_NO,9,VARCHAR,No
APT_BASE,ELEV,\"(6,1)\",NUMBER,Yes
APT_RWY,EFF_DATE,10,VARCHAR,No
APT_RWY,SITE_NO,9,VARCHAR,No
APT_RWY,ELEV,\"(6,1)\",NUMBER,Yes
";

    fn domain_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("APT_CSV_DATA_STRUCTURE.csv"), STRUCTURE).unwrap();
        fs::write(dir.path().join("APT_BASE.csv"), "EFF_DATE,SITE_NO,ELEV\n2024,1,10.5\n").unwrap();
        fs::write(dir.path().join("APT_RWY.csv"), "EFF_DATE,SITE_NO,ELEV,LIGHTS\n2024,1,,Y\n").unwrap();
        dir
    }

    fn options(dir: &TempDir, common: Option<&str>) -> NasrOptions {
        NasrOptions {
            dir: Some(dir.path().to_path_buf()),
            common_fields: common.map(str::to_string),
            output: Some(dir.path().join("out")),
        }
    }

    #[test]
    fn run___writes_all_four_files() {
        let dir = domain_dir();
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let outcome = run(
            options(&dir, Some("EFF_DATE,SITE_NO")),
            &GeneratorConfig::default(),
            &mut prompter,
        )
        .unwrap();

        let out = dir.path().join("out");
        assert_eq!(outcome.written.len(), 4);
        for name in ["Duplicates.txt", "AptModels.cs", "AptParser.cs", "Program.cs"] {
            assert!(out.join(name).exists(), "{name} missing");
        }
        let report = fs::read_to_string(out.join("Duplicates.txt")).unwrap();
        assert_eq!(report, "Elev\n\tAPT_BASE.csv\n\tAPT_RWY.csv\n");
    }

    #[test]
    fn run___unknown_column___reported_as_warning() {
        let dir = domain_dir();
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let outcome = run(
            options(&dir, Some("EFF_DATE,SITE_NO")),
            &GeneratorConfig::default(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(
            outcome.model.warnings,
            vec![GenerationWarning::UnmatchedColumn {
                file: "APT_RWY.csv".to_string(),
                column: "LIGHTS".to_string(),
            }]
        );
    }

    #[test]
    fn run___common_fields_prompted_until_given() {
        let dir = domain_dir();
        let mut prompter = Prompter::new(&b"\nEFF_DATE\n"[..], Vec::new());

        let outcome = run(options(&dir, None), &GeneratorConfig::default(), &mut prompter).unwrap();

        assert_eq!(outcome.model.common.len(), 1);
    }

    #[test]
    fn run___prompted_separators_only___reasked() {
        let dir = domain_dir();
        let mut prompter = Prompter::new(&b",\nEFF_DATE\n"[..], Vec::new());

        let outcome = run(options(&dir, None), &GeneratorConfig::default(), &mut prompter).unwrap();

        assert_eq!(outcome.model.common.len(), 1);
        assert!(dir.path().join("out/AptModels.cs").exists());
    }

    #[test]
    fn run___blank_common_field_flag___config_error() {
        let dir = domain_dir();
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let result = run(options(&dir, Some(" , ")), &GeneratorConfig::default(), &mut prompter);

        assert!(result.is_err());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn run___no_structure_file___fails_before_prompting() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("APT_BASE.csv"), "EFF_DATE\n2024\n").unwrap();
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let err = run(options(&dir, None), &GeneratorConfig::default(), &mut prompter).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::MissingFile(_))
        ));
    }
}
