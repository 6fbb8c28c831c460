//! # plasmid-annotator
//!
//! A library for annotating plasmid FASTA records with MOB-suite contig report
//! metadata and merging them into a single FASTA file.
//!
//! MOB-recon writes one FASTA file per reconstructed plasmid plus a
//! tab-separated contig report describing every contig (replicon and
//! relaxase types, mobility prediction, nearest neighbour, ...). This crate
//! joins the two by a normalized contig id and appends the report values to
//! each FASTA header as `/key="value"` qualifiers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plasmid_annotator::{annotate_and_merge, parse_report};
//! use std::path::Path;
//!
//! let table = parse_report(Path::new("contig_report.txt")).unwrap();
//! let summary = annotate_and_merge(
//!     &table,
//!     &["plasmid_AA001.fasta"],
//!     Path::new("plasmid_all.fasta"),
//! )
//! .unwrap();
//!
//! println!("annotated {} records", summary.annotated);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report fields, annotation records and contig id normalization
//! - [`parsing`]: Contig report parser and FASTA reading/writing
//! - [`merge`]: The annotate-and-merge pipeline
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod merge;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::annotation::{AnnotationRecord, AnnotationTable, Qualifiers, ReportField};
pub use core::contig_id::normalize_contig_id;
pub use merge::annotator::{
    annotate_and_merge, annotate_and_merge_with, AnnotateError, MergeOptions, MergeSummary,
    Skipped,
};
pub use parsing::fasta::{FastaError, HeaderRecord};
pub use parsing::report::{parse_report, parse_report_text, ParseError};
