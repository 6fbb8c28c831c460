//! Parser for MOB-suite contig reports.
//!
//! The report is tab-separated with a header line naming its columns. Columns
//! are looked up by name, so their order does not matter and extra columns are
//! ignored. Known columns that are absent read as `-`.
//!
//! Only rows whose `molecule_type` is `plasmid` (case-insensitive) are kept.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::annotation::{AnnotationRecord, AnnotationTable, ReportField, MISSING_VALUE};
use crate::core::contig_id::normalize_contig_id;

/// Molecule type kept by the parser
const PLASMID: &str = "plasmid";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a contig report file into a table of plasmid annotations
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn parse_report(path: &Path) -> Result<AnnotationTable, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let table = parse_report_text(&content);

    info!(
        "Parsed {} plasmid entries from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}

/// Parse contig report text into a table of plasmid annotations.
///
/// Malformed rows (fewer fields than the header) are skipped. A report with
/// no plasmid rows produces an empty table.
pub fn parse_report_text(text: &str) -> AnnotationTable {
    let mut table = AnnotationTable::new();
    let mut lines = text.lines();

    let Some(header_line) = lines.next() else {
        return table;
    };

    let header: Vec<&str> = header_line.trim().split('\t').collect();
    let columns = map_columns(&header);

    for field in [ReportField::MoleculeType, ReportField::ContigId] {
        if !columns.contains_key(&field) {
            warn!("Report header has no '{field}' column, values default to '{MISSING_VALUE}'");
        }
    }

    // Line numbers are 1-based and count the header
    for (i, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < header.len() {
            debug!(
                "Skipping line {}: {} fields, header has {}",
                i + 2,
                fields.len(),
                header.len()
            );
            continue;
        }

        let value = |field: ReportField| {
            columns
                .get(&field)
                .and_then(|&idx| fields.get(idx))
                .map_or(MISSING_VALUE, |s| s.trim())
        };

        if value(ReportField::MoleculeType).to_lowercase() != PLASMID {
            continue;
        }

        let contig_id = normalize_contig_id(value(ReportField::ContigId));

        let mut record = AnnotationRecord::new();
        for field in ReportField::ALL {
            record.set(field, value(field));
        }

        table.insert(contig_id, record);
    }

    table
}

/// Map each known column to its index in the header. The first occurrence of
/// a duplicated column wins.
fn map_columns(header: &[&str]) -> HashMap<ReportField, usize> {
    let mut columns = HashMap::new();
    for (idx, name) in header.iter().enumerate() {
        if let Some(field) = ReportField::from_name(name) {
            columns.entry(field).or_insert(idx);
        }
    }
    columns
}
