use std::path::PathBuf;

use anyhow::Context;
use clap::builder::TypedValueParser;
use clap::Args;

use crate::cli::OutputFormat;
use crate::merge::{annotate_and_merge_with, MergeOptions, MergeSummary};
use crate::parsing::fasta::DEFAULT_LINE_WIDTH;
use crate::parsing::report::parse_report;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Contig report from MOB-suite (tab-separated, with a header line)
    #[arg(short, long, required = true)]
    pub report: PathBuf,

    /// Plasmid FASTA files (.fasta or .fasta.gz), merged in the order given
    #[arg(short, long, required = true, num_args = 1..)]
    pub fastas: Vec<PathBuf>,

    /// Merged, annotated output FASTA file
    #[arg(short, long, default_value = "plasmid_all.fasta")]
    pub output: PathBuf,

    /// Bases per sequence line in the output
    #[arg(
        long,
        default_value_t = DEFAULT_LINE_WIDTH,
        value_parser = clap::value_parser!(u64).range(1..).map(|w| w as usize)
    )]
    pub line_width: usize,
}

/// Execute the annotate command
///
/// # Errors
///
/// Returns an error if the report cannot be read, the output cannot be
/// written, or an input is not valid FASTA.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = parse_report(&args.report)
        .with_context(|| format!("Failed to read report {}", args.report.display()))?;

    if table.is_empty() {
        tracing::warn!(
            "No plasmid rows in {}, no records will be annotated",
            args.report.display()
        );
    }

    let options = MergeOptions {
        line_width: args.line_width,
    };

    let summary = annotate_and_merge_with(&table, &args.fastas, &args.output, &options)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary, verbose),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &MergeSummary, verbose: bool) {
    println!("Annotation Summary");
    println!("{}", "=".repeat(60));
    println!("  Output: {}", summary.output.display());
    println!("  Annotated records: {}", summary.annotated);
    println!("  Files read: {}", summary.files_read);
    println!("  Missing files: {}", summary.missing_files());
    println!("  Unannotated records: {}", summary.unannotated_records());

    if verbose && !summary.skipped.is_empty() {
        println!("\nSkipped:");
        for skipped in &summary.skipped {
            println!("  {skipped}");
        }
    }
}

fn print_json_summary(summary: &MergeSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn print_tsv_summary(summary: &MergeSummary) {
    println!("output\tannotated\tfiles_read\tmissing_files\tunannotated_records");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        summary.output.display(),
        summary.annotated,
        summary.files_read,
        summary.missing_files(),
        summary.unannotated_records(),
    );
}
