//! Annotation and merging of plasmid FASTA records.
//!
//! The merge runs in two phases: the report is parsed into an
//! [`AnnotationTable`](crate::core::AnnotationTable), then every input FASTA
//! is streamed through it. Records whose normalized id is in the table are
//! written to one output file with their annotation qualifiers appended to
//! the header; everything else is reported in the [`MergeSummary`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use plasmid_annotator::merge::{annotate_and_merge, MergeSummary};
//! use plasmid_annotator::parsing::report::parse_report;
//! use std::path::Path;
//!
//! let table = parse_report(Path::new("contig_report.txt")).unwrap();
//! let summary: MergeSummary = annotate_and_merge(
//!     &table,
//!     &["plasmid_AA001.fasta", "plasmid_AA002.fasta.gz"],
//!     Path::new("plasmid_all.fasta"),
//! )
//! .unwrap();
//!
//! for skipped in &summary.skipped {
//!     eprintln!("{skipped}");
//! }
//! ```

pub mod annotator;

pub use annotator::{
    annotate_and_merge, annotate_and_merge_with, annotate_record, annotate_report, AnnotateError,
    MergeOptions, MergeSummary, Skipped,
};
