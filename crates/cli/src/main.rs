// bideval CLI - compliance evaluation of vendor technical proposals

mod evaluate;
mod exit_codes;
mod logging;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "bideval")]
#[command(about = "Evaluate vendor proposals line by line against a specification template")]
#[command(version)]
struct Cli {
    /// Only log warnings and errors; suppress tables and summaries
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one or more extracted vendor tables
    #[command(after_help = "\
Verdicts:
  Y  complies (numeric within the strict band, or wording contained)
  A  acceptable alternative (numeric within the lenient band, or a recognized token)
  N  non-compliant
  C  clarification required (vendor value missing)

Examples:
  bideval run pump.eval.toml vendor_a.csv
  bideval run pump.eval.toml vendor_a.csv vendor_b.csv --json
  bideval run pump.eval.toml data/*.csv --output-dir out/
  bideval run pump.eval.toml vendor_b.csv --strict")]
    Run {
        /// Path to the .eval.toml config file
        config: PathBuf,

        /// Vendor CSV files, one per proposal document
        #[arg(required = true)]
        vendors: Vec<PathBuf>,

        /// Print one JSON array of evaluations to stdout
        #[arg(long)]
        json: bool,

        /// Write <vendor>_eval.csv and <vendor>_eval.json per document
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Exit 5 when any line is N or C
        #[arg(long)]
        strict: bool,
    },

    /// Validate a config and its spec table without evaluating
    #[command(after_help = "\
Examples:
  bideval validate pump.eval.toml")]
    Validate {
        /// Path to the .eval.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: bideval <command> [options]");
            eprintln!("       bideval --help for more information");
            Ok(())
        }
        Some(Commands::Run { config, vendors, json, output_dir, strict }) => {
            evaluate::cmd_run(evaluate::RunArgs {
                config,
                vendors,
                json,
                output_dir,
                strict,
                quiet: cli.quiet,
            })
        }
        Some(Commands::Validate { config }) => evaluate::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    /// Unspecified failure.
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
