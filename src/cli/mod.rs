//! Command-line interface for plasmid-annotator.
//!
//! The tool has a single command: parse a MOB-suite contig report, annotate
//! the plasmid records of one or more FASTA files and merge them into one
//! output file.
//!
//! ## Usage
//!
//! ```text
//! # Annotate and merge MOB-recon plasmid FASTA files
//! plasmid-annotator -r contig_report.txt -f plasmid_AA001.fasta plasmid_AA002.fasta.gz
//!
//! # Custom output path and JSON summary for scripting
//! plasmid-annotator -r contig_report.txt -f *.fasta -o merged.fasta --format json
//! ```

use clap::Parser;

pub mod annotate;

#[derive(Parser)]
#[command(name = "plasmid-annotator")]
#[command(version)]
#[command(
    about = "Annotate plasmid FASTA headers using a contig report and merge them into one FASTA file"
)]
#[command(
    long_about = "plasmid-annotator joins MOB-suite contig report rows with FASTA records by contig id.\n\nContig ids are normalized on both sides (run prefixes, bracket characters and _Circ suffixes are removed). Matching plasmid records keep their original header and gain /key=\"value\" qualifiers from the report. Records and files that cannot be annotated are skipped with a warning."
)]
pub struct Cli {
    #[command(flatten)]
    pub annotate: annotate::AnnotateArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
