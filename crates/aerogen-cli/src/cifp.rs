//! `aerogen cifp`: generate a model and parser for one fixed-width section

use crate::codegen::cifp::{generate_model, generate_parser};
use crate::output::{self, OutputFile};
use crate::prompt::Prompter;
use aerogen_core::fixed_width::RecordAccumulator;
use aerogen_core::{GeneratorConfig, SectionModel, loader, section};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Records printed by `--preview`
const PREVIEW_RECORDS: usize = 3;

/// Command-line values; anything missing is prompted for
#[derive(Debug, Clone, Default)]
pub struct CifpOptions {
    pub source: Option<PathBuf>,
    pub section_name: Option<String>,
    pub section_id: Option<String>,
    pub output: Option<PathBuf>,
    pub preview: Option<PathBuf>,
}

/// Run the section generator
pub fn run<R: BufRead, W: Write>(
    options: CifpOptions,
    config: &GeneratorConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<PathBuf>> {
    let source = match options.source {
        Some(path) => path,
        None => PathBuf::from(
            prompter.ask("Enter the name of the source CSV file (including .csv): ")?,
        ),
    };
    let section_name = prompter.value_or_ask(options.section_name, "Enter the Cifp Section Name: ")?;
    let section_id = prompter.value_or_ask(options.section_id, "Enter the Cifp Section ID: ")?;

    let specs = section::load_section(&source)
        .with_context(|| format!("Failed to load section layout {}", source.display()))?;
    let model = SectionModel::build(&section_name, &section_id, specs)?;
    tracing::info!(
        section = %model.section_name,
        fields = model.fields.len(),
        live = model.live_fields().count(),
        "loaded section layout"
    );

    let source_name = loader::display_name(&source);
    let files = [
        OutputFile::new(
            format!("{}.cs", model.model_class()),
            generate_model(&model, &config.cifp, &source_name),
        ),
        OutputFile::new(
            format!("{}.cs", model.parser_class()),
            generate_parser(&model, &config.cifp),
        ),
    ];

    let output_dir = options.output.unwrap_or_else(|| config.output_dir.clone());
    let written = output::write_all(&output_dir, &files)?;

    if let Some(data) = options.preview {
        preview(&model, config.cifp.min_line_length, &data)?;
    }

    Ok(written)
}

/// Parse a sample data file with the section layout and show the first records
fn preview(model: &SectionModel, min_line_length: usize, data: &Path) -> Result<usize> {
    let text = loader::read_text(data)
        .with_context(|| format!("Failed to read preview data {}", data.display()))?;

    let mut records = RecordAccumulator::new(model.layout(min_line_length));
    let count = records.push_text(&text);
    tracing::info!(file = %data.display(), records = count, "previewed section data");

    for (i, record) in records.records().iter().take(PREVIEW_RECORDS).enumerate() {
        println!("record {}:", i + 1);
        for (name, value) in record.iter() {
            println!("  {name} = {}", value.unwrap_or("<line too short>"));
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LAYOUT: &str = "\
FieldName,PropertyName,ReferenceFieldId,Index,Length,DataType,Remarks
Reserved (Expansion),,,0,3,,
Bar Field,Bar,5.1,3,5,Alpha,
";

    fn layout_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("foo.csv");
        fs::write(&path, LAYOUT).unwrap();
        path
    }

    #[test]
    fn run___all_values_given___writes_both_files_without_prompting() {
        let dir = TempDir::new().unwrap();
        let options = CifpOptions {
            source: Some(layout_file(&dir)),
            section_name: Some("Foo".to_string()),
            section_id: Some("FX".to_string()),
            output: Some(dir.path().join("out")),
            preview: None,
        };
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let written = run(options, &GeneratorConfig::default(), &mut prompter).unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join("out/FooCifpDataModel.cs").exists());
        assert!(dir.path().join("out/FooCifpParser.cs").exists());
    }

    #[test]
    fn run___missing_values___prompted() {
        let dir = TempDir::new().unwrap();
        let source = layout_file(&dir);
        let answers = format!("{}\nFoo\nFX\n", source.display());
        let options = CifpOptions {
            output: Some(dir.path().to_path_buf()),
            ..CifpOptions::default()
        };
        let mut prompter = Prompter::new(answers.as_bytes(), Vec::new());

        run(options, &GeneratorConfig::default(), &mut prompter).unwrap();

        let model = fs::read_to_string(dir.path().join("FooCifpDataModel.cs")).unwrap();
        assert!(model.contains("FAACIFP18 File - Foo (FX) section data"));
    }

    #[test]
    fn run___missing_source___fails_before_writing() {
        let dir = TempDir::new().unwrap();
        let options = CifpOptions {
            source: Some(dir.path().join("absent.csv")),
            section_name: Some("Foo".to_string()),
            section_id: Some("FX".to_string()),
            output: Some(dir.path().join("out")),
            preview: None,
        };
        let mut prompter = Prompter::new(&b""[..], Vec::new());

        let result = run(options, &GeneratorConfig::default(), &mut prompter);

        assert!(result.is_err());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn preview___counts_records_of_long_enough_lines() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data.txt");
        fs::write(&data, "SPAHELLO\n\nab\nXYZWORLD\n").unwrap();
        let table = loader::parse_table("foo.csv", LAYOUT).unwrap();
        let model = SectionModel::build("Foo", "FX", section::parse_section(&table).unwrap()).unwrap();

        let count = preview(&model, 4, &data).unwrap();

        assert_eq!(count, 2);
    }
}
