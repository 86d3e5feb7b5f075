//! fods CLI - build Flat OpenDocument Spreadsheets from JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fods::prelude::*;
use fods::NamedRangeResolver;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fods")]
#[command(
    author,
    version,
    about = "Generate Flat OpenDocument Spreadsheets from JSON rows"
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a .fods document from a JSON spreadsheet
    Build {
        /// Input JSON file (array of rows)
        input: PathBuf,

        /// Output .fods file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the sheet
        #[arg(long, default_value = "Sheet1")]
        sheet_name: String,

        /// Do not emit named ranges
        #[arg(long)]
        no_named_ranges: bool,
    },

    /// List the named ranges declared in a JSON spreadsheet
    Ranges {
        /// Input JSON file
        input: PathBuf,
    },

    /// Print the A1 address of a one-based column and row
    Address {
        /// Column index (1 = A)
        column: u32,

        /// Row index (1-based)
        row: u32,

        /// Absolute markers: none, column, row or both
        #[arg(short, long, default_value = "none")]
        absolute: Absolute,
    },
}

/// Minimal `log` backend writing to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    log::set_logger(&LOGGER)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    log::set_max_level(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });

    match cli.command {
        Commands::Build {
            input,
            output,
            sheet_name,
            no_named_ranges,
        } => {
            let mut options = FodsWriteOptions::default().with_sheet_name(sheet_name);
            if no_named_ranges {
                options = options.without_named_ranges();
            }
            build(&input, output.as_deref(), &options)
        }
        Commands::Ranges { input } => list_ranges(&input),
        Commands::Address {
            column,
            row,
            absolute,
        } => {
            let address = fods::address(column, row, absolute)
                .with_context(|| format!("Invalid address ({}, {})", column, row))?;
            println!("{}", address);
            Ok(())
        }
    }
}

fn build(input: &Path, output: Option<&Path>, options: &FodsWriteOptions) -> Result<()> {
    let sheet = Spreadsheet::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let document = FodsWriter::build(&sheet, options).context("Failed to build document")?;

    // Output
    if let Some(output_path) = output {
        std::fs::write(output_path, &document)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            sheet.row_count(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(document.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn list_ranges(input: &Path) -> Result<()> {
    let sheet = Spreadsheet::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let ranges = NamedRangeResolver::resolve(&sheet).context("Failed to resolve named ranges")?;
    for range in ranges {
        println!("{}\t{}", range.name(), range.to_a1_string());
    }

    Ok(())
}
