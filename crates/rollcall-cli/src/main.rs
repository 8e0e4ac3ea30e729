//! Rollcall CLI - character-mention analysis for tabular documents.
//!
//! Counts character-name mentions in a fixed table column of a document and
//! optionally exports a frequency report. Exit codes map 1:1 to the error
//! taxonomy: 2 not found, 3 invalid format, 4 write error, 5 validation.

use clap::{Parser, Subcommand};
use colored::Colorize;
use rollcall_backend::{source_for, writer_for};
use rollcall_core::{
    CharacterStat, DocumentProcessor, ProcessorOptions, RollcallError, TableData,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use unicode_width::UnicodeWidthStr;

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Count character-name mentions in tabular documents",
    long_about = "Reads every table of a document (DOCX, CSV, or XLSX), extracts the \
                  character-name column, and reports how often each character is mentioned."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document and print (or export) the mention counts
    Analyze {
        /// Input document (.docx, .csv, .xlsx)
        input: PathBuf,

        /// Zero-based index of the column holding character names
        #[arg(short, long, default_value_t = 1)]
        column: usize,

        /// Only report characters with at least this many mentions
        #[arg(short = 'm', long, default_value_t = 1)]
        min_mentions: usize,

        /// Merge names that differ only in case (first-seen casing wins)
        #[arg(short, long)]
        ignore_case: bool,

        /// Export a report to this path (.docx or .csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the stats as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Suppress everything except errors and requested output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the first rows of every table in a document
    Preview {
        /// Input document (.docx, .csv, .xlsx)
        input: PathBuf,

        /// Maximum rows to show per table
        #[arg(short, long, default_value_t = 5)]
        rows: usize,
    },

    /// List supported input and output formats
    Formats,
}

/// Map an error to its documented exit code.
const fn exit_code(error: &RollcallError) -> u8 {
    match error {
        RollcallError::NotFound(_) => 2,
        RollcallError::InvalidFormat(_) => 3,
        RollcallError::WriteError { .. } => 4,
        RollcallError::Validation(_) => 5,
    }
}

/// Render the stats as an aligned two-column table. Column width is the
/// display width, not the byte length, so non-ASCII names line up.
fn format_stats_table(stats: &[CharacterStat]) -> String {
    let name_width = stats
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0)
        .max("Character".width());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}  {}",
        "Character".bold(),
        " ".repeat(name_width - "Character".width()),
        "Mentions".bold()
    );
    for stat in stats {
        let _ = writeln!(
            out,
            "{}{}  {}",
            stat.name,
            " ".repeat(name_width - stat.name.width()),
            stat.count
        );
    }
    out
}

fn print_stats_table(stats: &[CharacterStat]) {
    if stats.is_empty() {
        println!("{}", "No characters found.".yellow());
        return;
    }
    print!("{}", format_stats_table(stats));
}

fn print_preview(tables: &[TableData]) {
    if tables.is_empty() {
        println!("{}", "No tables found.".yellow());
        return;
    }

    for (idx, table) in tables.iter().enumerate() {
        println!("{}", format!("Table {}", idx + 1).bold());
        for row in &table.rows {
            println!("  {}", row.join(" | "));
        }
    }
}

fn run_analyze(
    input: &PathBuf,
    options: ProcessorOptions,
    output: Option<&PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<(), RollcallError> {
    let processor = DocumentProcessor::with_options(options);
    let source = source_for(input)?;
    let result = processor.process(source.as_ref(), input)?;

    let stats = DocumentProcessor::summarise(&result.characters, options.ignore_case);
    let retained: Vec<CharacterStat> = stats
        .into_iter()
        .filter(|stat| stat.count >= options.minimum_mentions)
        .collect();

    if json {
        // Stable machine-readable output, independent of the quiet flag.
        let rendered = serde_json::to_string_pretty(&retained)
            .map_err(|e| RollcallError::Validation(format!("cannot encode stats as JSON: {e}")))?;
        println!("{rendered}");
    } else if !quiet {
        print_stats_table(&retained);
    }

    if let Some(output_path) = output {
        let writer = writer_for(output_path)?;
        let written = processor.export_report(writer.as_ref(), &result, output_path)?;
        if !quiet {
            println!("{} {}", "Report written to".green(), written.display());
        }
    }

    Ok(())
}

fn run_preview(input: &PathBuf, rows: usize) -> Result<(), RollcallError> {
    let processor = DocumentProcessor::new();
    let source = source_for(input)?;
    let tables = processor.table_preview(source.as_ref(), input, rows)?;
    print_preview(&tables);
    Ok(())
}

fn run_formats() {
    println!("{}", "Input formats:".bold());
    println!("  .docx  Microsoft Word tables");
    println!("  .csv   Comma/semicolon/tab separated values");
    println!("  .xlsx  Microsoft Excel worksheets");
    println!("{}", "Report formats:".bold());
    println!("  .docx  Full report (summary, frequency table, source tables)");
    println!("  .csv   Frequency table only");
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Analyze {
            input,
            column,
            min_mentions,
            ignore_case,
            output,
            json,
            quiet,
        } => {
            let options = ProcessorOptions::default()
                .with_column(*column)
                .with_minimum_mentions(*min_mentions)
                .with_ignore_case(*ignore_case);
            run_analyze(input, options, output.as_ref(), *json, *quiet)
        }
        Commands::Preview { input, rows } => run_preview(input, *rows),
        Commands::Formats => {
            run_formats();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            ExitCode::from(exit_code(&error))
        }
    }
}
