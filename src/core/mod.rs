//! Core data types for plasmid annotation.
//!
//! - [`ReportField`]: the fixed set of MOB-suite report columns
//! - [`AnnotationRecord`]: the values of one plasmid row
//! - [`AnnotationTable`]: plasmid rows keyed by normalized contig id
//! - [`Qualifiers`]: the `/key="value"` suffix written to FASTA headers
//!
//! ## Contig Identifiers
//!
//! Reports and FASTA files spell the same contig differently:
//!
//! | Source | Example |
//! |--------|---------|
//! | Report `contig_id` | `25PS-151M00028\|Contig_28` |
//! | Assembly FASTA | `Contig_28 [topology=circular]` |
//! | Circularised output | `Contig_28_Circ` |
//!
//! Both sides go through [`contig_id::normalize_contig_id`] before joining.

pub mod annotation;
pub mod contig_id;

pub use annotation::{AnnotationRecord, AnnotationTable, Qualifiers, ReportField, MISSING_VALUE};
pub use contig_id::normalize_contig_id;
