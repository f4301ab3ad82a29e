//! @ai:module:intent CLI entry point for the annotation rewriter
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on config, runner, output

use autoannotate::{config, output, runner, Error, OutputFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "autoannotate")]
#[command(
    author,
    version,
    about = "Insert, replace, or strip metrics annotations on public methods"
)]
struct Cli {
    /// Path to the key=value configuration file
    config: PathBuf,

    /// Output format for the run summary
    #[arg(long, short, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Validation failures print every missing-key message and abort before
    // any file is touched.
    let config = match config::load_config(&cli.config) {
        Ok(config) => config,
        Err(e @ Error::MissingKeys { .. }) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    match runner::run(&config) {
        Ok(report) => {
            println!("{}", output::format_run_report(&report, cli.format.into()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
