//! wirecode CLI
//!
//! Entry point for generating message-type sources from a service
//! declaration file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use config::Config;
use pipeline::GenerationReport;
use types::Lang;
use wirecode_cli::{describe_langs, log_options, pipeline_options, CliError, Overrides, Result};

/// Command-line interface configuration for wirecode.
#[derive(Parser, Debug)]
#[command(
    name = "wirecode",
    about = "Message-type code generator for multi-language codecs",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Configuration file (default: {config_dir}/wirecode/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available wirecode commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build models and write sources for every target language
    Generate(GenerateArgs),
    /// Load, validate and collision-check declarations without writing
    Check(CheckArgs),
    /// List supported language tags
    Langs,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Declaration file (JSON)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output root; each language writes to <output>/<tag>/
    #[arg(long)]
    output: Option<PathBuf>,
    /// Target language tag; repeat for several
    #[arg(long = "lang", value_name = "TAG")]
    langs: Vec<Lang>,
    /// Build and report without writing files
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Declaration file (JSON)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Target language tag; repeat for several
    #[arg(long = "lang", value_name = "TAG")]
    langs: Vec<Lang>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration and install logging.
fn setup(config_path: Option<&Path>, verbose: bool) -> Result<Config> {
    let config = Config::load(config_path)?;
    logging::init(&log_options(&config, verbose))?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let report = match cli.cmd {
        Commands::Langs => {
            for line in describe_langs() {
                println!("{}", line);
            }
            return Ok(());
        }
        Commands::Generate(args) => {
            let config = setup(cli.config.as_deref(), cli.verbose)?;
            let options = pipeline_options(
                &config,
                Overrides {
                    input: args.input,
                    output: args.output,
                    langs: args.langs,
                    dry_run: args.dry_run,
                },
            )?;
            tracing::debug!(?options, "resolved generation options");
            pipeline::run(&options)?
        }
        Commands::Check(args) => {
            let config = setup(cli.config.as_deref(), cli.verbose)?;
            let options = pipeline_options(
                &config,
                Overrides {
                    input: args.input,
                    langs: args.langs,
                    dry_run: true,
                    ..Default::default()
                },
            )?;
            pipeline::check(&options)?
        }
    };

    print_report(&report);
    if report.has_failures() {
        return Err(CliError::Failures(report.failures.len()));
    }
    Ok(())
}

fn print_report(report: &GenerationReport) {
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    for failure in &report.failures {
        eprintln!("failed: {}", failure);
    }
    for path in &report.files_written {
        println!("{}", path.display());
    }
    println!("{}", report.summary());
}
