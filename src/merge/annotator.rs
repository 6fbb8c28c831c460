use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use noodles::fasta;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::annotation::{AnnotationRecord, AnnotationTable};
use crate::core::contig_id::normalize_contig_id;
use crate::parsing::fasta::{
    create_output, is_fasta_file, open_records, writer_with_line_width, FastaError, HeaderRecord,
    DEFAULT_LINE_WIDTH,
};
use crate::parsing::report::{parse_report, ParseError};

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Failed to read report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to create output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse FASTA record in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FastaError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options controlling the merged output
#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    /// Bases per sequence line in the output FASTA
    pub line_width: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Why an input file or record was left out of the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Skipped {
    /// The input path does not exist
    MissingFile { path: PathBuf },
    /// The record's normalized id has no plasmid entry in the report
    Unannotated { record_id: String, source: PathBuf },
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skipped::MissingFile { path } => write!(f, "missing file: {}", path.display()),
            Skipped::Unannotated { record_id, source } => {
                write!(f, "no annotation for {record_id} in {}", source.display())
            }
        }
    }
}

/// Outcome of a merge run
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    /// Number of annotated records written
    pub annotated: usize,
    /// Number of input files that were read
    pub files_read: usize,
    /// Merged FASTA path
    pub output: PathBuf,
    /// Files and records left out, in encounter order
    pub skipped: Vec<Skipped>,
}

impl MergeSummary {
    fn new(output: &Path) -> Self {
        Self {
            annotated: 0,
            files_read: 0,
            output: output.to_path_buf(),
            skipped: Vec::new(),
        }
    }

    pub fn missing_files(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s, Skipped::MissingFile { .. }))
            .count()
    }

    pub fn unannotated_records(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s, Skipped::Unannotated { .. }))
            .count()
    }
}

/// Parse a report and merge the annotated FASTA records in one step.
///
/// # Errors
///
/// Returns `AnnotateError::Report` if the report cannot be read, otherwise
/// the errors of [`annotate_and_merge_with`].
pub fn annotate_report<P: AsRef<Path>>(
    report: &Path,
    fasta_paths: &[P],
    output: &Path,
    options: &MergeOptions,
) -> Result<MergeSummary, AnnotateError> {
    let table = parse_report(report).map_err(|source| AnnotateError::Report {
        path: report.to_path_buf(),
        source,
    })?;

    annotate_and_merge_with(&table, fasta_paths, output, options)
}

/// Annotate records from `fasta_paths` and write them all to `output`,
/// using the default options.
///
/// # Errors
///
/// See [`annotate_and_merge_with`].
pub fn annotate_and_merge<P: AsRef<Path>>(
    table: &AnnotationTable,
    fasta_paths: &[P],
    output: &Path,
) -> Result<MergeSummary, AnnotateError> {
    annotate_and_merge_with(table, fasta_paths, output, &MergeOptions::default())
}

/// Annotate records from `fasta_paths` and write them all to `output`.
///
/// Inputs are read in order. Missing inputs and records without a plasmid
/// entry are logged and recorded in [`MergeSummary::skipped`]; neither stops
/// the run.
///
/// # Errors
///
/// Returns `AnnotateError::Output` if the output cannot be created,
/// `AnnotateError::Read` if an existing input cannot be opened,
/// `AnnotateError::Parse` if an input is not valid FASTA, or
/// `AnnotateError::Write` if writing the output fails.
pub fn annotate_and_merge_with<P: AsRef<Path>>(
    table: &AnnotationTable,
    fasta_paths: &[P],
    output: &Path,
    options: &MergeOptions,
) -> Result<MergeSummary, AnnotateError> {
    let write_error = |source| AnnotateError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut sink = create_output(output).map_err(|source| AnnotateError::Output {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = merge_into(&mut sink, table, fasta_paths, output, options)?;

    // BufWriter ignores flush errors on drop
    sink.flush().map_err(write_error)?;

    info!("Annotated {} plasmid contigs", summary.annotated);
    info!("Output written to: {}", output.display());

    Ok(summary)
}

/// Stream every input through the table into `sink`
fn merge_into<P: AsRef<Path>, W: Write>(
    sink: W,
    table: &AnnotationTable,
    fasta_paths: &[P],
    output: &Path,
    options: &MergeOptions,
) -> Result<MergeSummary, AnnotateError> {
    let write_error = |source| AnnotateError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = writer_with_line_width(sink, options.line_width);
    let mut summary = MergeSummary::new(output);

    for path in fasta_paths {
        let path = path.as_ref();

        if !path.exists() {
            warn!("Skipping missing file: {}", path.display());
            summary.skipped.push(Skipped::MissingFile {
                path: path.to_path_buf(),
            });
            continue;
        }

        if !is_fasta_file(path) {
            warn!(
                "{} does not have a FASTA extension, reading it anyway",
                path.display()
            );
        }

        let records = open_records(path).map_err(|source| AnnotateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        summary.files_read += 1;

        let mut file_annotated = 0usize;

        for result in records {
            let record = result.map_err(|source| AnnotateError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

            let record_id = record.name();
            let contig_id = normalize_contig_id(&record_id);

            let Some(annotation) = table.get(&contig_id) else {
                warn!(
                    "No annotation found for {record_id} in {}",
                    path.display()
                );
                summary.skipped.push(Skipped::Unannotated {
                    record_id,
                    source: path.to_path_buf(),
                });
                continue;
            };

            let annotated = annotate_record(&record, annotation);
            writer.write_record(&annotated).map_err(write_error)?;

            file_annotated += 1;
            summary.annotated += 1;
        }

        debug!(
            "Annotated {file_annotated} records from {}",
            path.display()
        );
    }

    Ok(summary)
}

/// Build the output record for `record`: its header exactly as read,
/// a space, then the annotation qualifiers. The sequence is unchanged.
pub fn annotate_record(record: &HeaderRecord, annotation: &AnnotationRecord) -> fasta::Record {
    record.with_header_suffix(&annotation.qualifiers().to_string())
}
