//! Divide-by-seven emulator CLI.
//!
//! This binary provides a single entry point for the emulator. It performs:
//! 1. **Run:** Emulate `n / 7` for each dividend, printing the instruction trace.
//! 2. **Verify:** Check the emulator against native division over a range.
//! 3. **Listing:** Print the instruction program.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use div7_core::common::{ConfigError, EmuError, VerifyError};
use div7_core::config::{Config, TraceFormat};
use div7_core::isa::disasm::listing;
use div7_core::sim::{LogSink, TextSink, verify_range};
use div7_core::stats::ExecStats;
use div7_core::{DividerEmulator, divide_by_seven};

#[derive(Parser, Debug)]
#[command(
    name = "div7",
    author,
    version,
    about = "ARM divide-by-seven emulator",
    long_about = "Emulate the multiply/shift/correct sequence an ARM compiler emits for signed division by 7, printing every intermediate register.\n\nExamples:\n  div7 run 42 -13\n  div7 run --format json 100\n  div7 verify --start -100000 --end 100000\n  div7 listing"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Emulate dividend / 7 for each dividend.
    Run {
        /// Signed 32-bit dividends.
        #[arg(required = true, allow_negative_numbers = true)]
        dividends: Vec<i32>,

        /// Trace format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print quotients only.
        #[arg(short, long)]
        quiet: bool,

        /// Send the trace to the log instead of stdout.
        #[arg(long, conflicts_with = "format")]
        log: bool,
    },

    /// Compare the emulator with native division over [start, end).
    Verify {
        /// First dividend (overrides the config file).
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i32>,

        /// End of the range, exclusive (overrides the config file).
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i32>,
    },

    /// Print the instruction program.
    Listing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for TraceFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Emu(#[from] EmuError),
    #[error(transparent)]
    Verify(#[from] VerifyError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber so stdout carries only the trace.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &cli.command);
    config.validate()?;

    match cli.command {
        Commands::Run {
            dividends, log, ..
        } => cmd_run(&config, &dividends, log),
        Commands::Verify { .. } => cmd_verify(&config),
        Commands::Listing => {
            println!("{}", listing(DividerEmulator::new().program()));
            Ok(())
        }
    }
}

/// Layers command-line flags over the loaded config.
fn apply_overrides(config: &mut Config, command: &Commands) {
    match *command {
        Commands::Run { format, quiet, .. } => {
            if let Some(format) = format {
                config.general.format = format.into();
            }
            if quiet {
                config.general.trace = false;
            }
        }
        Commands::Verify { start, end } => {
            if let Some(start) = start {
                config.verify.start = start;
            }
            if let Some(end) = end {
                config.verify.end = end;
            }
        }
        Commands::Listing => {}
    }
}

/// Emulates each dividend and prints its trace in the configured format.
fn cmd_run(config: &Config, dividends: &[i32], log: bool) -> Result<(), CliError> {
    let emulator = DividerEmulator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = ExecStats::default();

    for &dividend in dividends {
        if !config.general.trace {
            writeln!(out, "{}", divide_by_seven(dividend))?;
            continue;
        }

        let division = if log {
            let division = emulator.run(dividend, &mut LogSink)?;
            writeln!(out, "{}", division.quotient)?;
            division
        } else {
            match config.general.format {
                TraceFormat::Text => {
                    let mut sink = TextSink::new(&mut out);
                    let division = emulator.run(dividend, &mut sink)?;
                    writeln!(out)?;
                    division
                }
                TraceFormat::Json => {
                    let division = emulator.evaluate(dividend);
                    serde_json::to_writer(&mut out, &division).map_err(EmuError::from)?;
                    writeln!(out)?;
                    division
                }
            }
        };
        total.merge(&division.stats);
    }

    out.flush()?;
    tracing::info!(dividends = dividends.len(), stats = %total, "run complete");
    Ok(())
}

/// Verifies the configured range and prints a one-line summary.
fn cmd_verify(config: &Config) -> Result<(), CliError> {
    let report = verify_range(config.verify.range())?;
    println!(
        "ok: {} dividends in [{}, {}) match n / 7",
        report.checked, report.start, report.end
    );
    Ok(())
}
