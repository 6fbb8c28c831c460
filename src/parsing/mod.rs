//! Parsers for the tool's two input formats.
//!
//! - **MOB-suite contig reports**: tab-separated plasmid metadata keyed by contig
//! - **FASTA files**: plain or gzip compressed sequence records, read and
//!   written with noodles
//!
//! ## Example
//!
//! ```rust,no_run
//! use plasmid_annotator::parsing::report::parse_report;
//! use std::path::Path;
//!
//! let table = parse_report(Path::new("contig_report.txt")).unwrap();
//! println!("{} plasmid contigs", table.len());
//! ```

pub mod fasta;
pub mod report;
