//! aerogen CLI - C# model and parser generator for FAA data
//!
//! Commands:
//! - `aerogen cifp` - Generate a model and parser for a fixed-width CIFP section
//! - `aerogen nasr` - Generate models and parsers for a NASR CSV data domain
//! - `aerogen check-config` - Validate an aerogen.toml configuration file

use aerogen_core::GeneratorConfig;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod cifp;
mod codegen;
mod logging;
mod nasr;
mod output;
mod prompt;

#[derive(Parser)]
#[command(name = "aerogen")]
#[command(author, version, about = "C# model and parser generator for FAA CIFP and NASR data", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to aerogen.toml (default: ./aerogen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model and parser from a CIFP section layout CSV
    Cifp {
        /// Section layout CSV (prompted for when omitted)
        source: Option<PathBuf>,

        /// Section name used in class names, e.g. Airport
        #[arg(short = 'n', long)]
        section_name: Option<String>,

        /// Section identifier quoted in the class summary, e.g. PA
        #[arg(short = 'i', long)]
        section_id: Option<String>,

        /// Output directory (default: output_dir from the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed-width data file to parse with the layout after generating
        #[arg(short, long)]
        preview: Option<PathBuf>,
    },

    /// Generate models and parsers from a directory of NASR CSV files
    Nasr {
        /// Directory holding the data CSVs and the structure CSV (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Comma-separated columns shared by every file (prompted for when omitted)
        #[arg(long)]
        common_fields: Option<String>,

        /// Output directory (default: output_dir from the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an aerogen.toml configuration file
    CheckConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = GeneratorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init_logging(logging::effective_level(cli.verbose, config.level()?));

    match cli.command {
        Commands::Cifp {
            source,
            section_name,
            section_id,
            output,
            preview,
        } => {
            let options = cifp::CifpOptions {
                source,
                section_name,
                section_id,
                output,
                preview,
            };
            let written = cifp::run(options, &config, &mut prompt::Prompter::stdio())?;
            print_written(&written);
        }
        Commands::Nasr {
            dir,
            common_fields,
            output,
        } => {
            let options = nasr::NasrOptions {
                dir,
                common_fields,
                output,
            };
            let outcome = nasr::run(options, &config, &mut prompt::Prompter::stdio())?;
            print_written(&outcome.written);
            if !outcome.model.warnings.is_empty() {
                println!(
                    "{} warning(s): some columns were left out, see the log above",
                    outcome.model.warnings.len()
                );
            }
        }
        Commands::CheckConfig => {
            println!("✓ Configuration is valid");
            println!("  Log level: {}", config.log_level);
            println!("  Output directory: {}", config.output_dir.display());
            println!(
                "  CIFP namespaces: {} / {}",
                config.cifp.model_namespace, config.cifp.parser_namespace
            );
            println!(
                "  NASR namespaces: {} / {}",
                config.nasr.model_namespace, config.nasr.parser_namespace
            );
            println!("  NASR helper: {}", config.nasr.helper_class);
        }
    }

    Ok(())
}

fn print_written(paths: &[PathBuf]) {
    println!("Generated:");
    for path in paths {
        println!("  {}", path.display());
    }
}
