//! FASTA reading and writing using noodles.
//!
//! Inputs may be plain or gzip compressed; compression is chosen from the
//! file name (`.gz` suffix), not by sniffing content. Output is always plain
//! FASTA.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid definition line '{line}': {source}")]
    InvalidDefinition {
        line: String,
        #[source]
        source: fasta::record::definition::ParseError,
    },
}

/// Line width used by Biopython's FASTA writer
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
pub fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}

/// Open a file for buffered reading, decompressing `.gz` files on the fly.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    // A directory opens fine on Unix and only fails on the first read
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }

    let file = File::open(path)?;

    if is_gzipped(path) {
        // bgzip output is multi-member gzip
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Open a FASTA file (plain or gzip) as a noodles reader.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened.
pub fn open_reader(path: &Path) -> io::Result<fasta::io::Reader<Box<dyn BufRead>>> {
    open_input(path).map(fasta::io::Reader::new)
}

/// Open a FASTA file (plain or gzip) and iterate over its records with
/// their header lines kept verbatim.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened.
pub fn open_records(path: &Path) -> io::Result<HeaderRecords<Box<dyn BufRead>>> {
    open_reader(path).map(HeaderRecords::new)
}

/// A FASTA record that remembers its header line exactly as read.
///
/// noodles splits a definition into name and description and rejoins them
/// with a single space. Annotated headers must keep the original separators,
/// so the line is stored alongside the parsed definition.
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    header: String,
    definition: fasta::record::Definition,
    sequence: fasta::record::Sequence,
}

impl HeaderRecord {
    /// Parse a header line (with its leading `>`) and attach a sequence
    ///
    /// # Errors
    ///
    /// Returns `FastaError::InvalidDefinition` if the line has no `>` or no name.
    pub fn new(
        line: &str,
        sequence: impl Into<fasta::record::Sequence>,
    ) -> Result<Self, FastaError> {
        let line = line.trim_end();
        let definition = line
            .parse::<fasta::record::Definition>()
            .map_err(|source| FastaError::InvalidDefinition {
                line: line.to_string(),
                source,
            })?;

        Ok(Self {
            header: line.strip_prefix('>').unwrap_or(line).to_string(),
            definition,
            sequence: sequence.into(),
        })
    }

    /// Record name (first token of the header)
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.definition.name()).into_owned()
    }

    /// Header line without the leading `>`, trailing whitespace removed
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &fasta::record::Sequence {
        &self.sequence
    }

    /// Build a noodles record whose header is this header followed by a
    /// space and `suffix`.
    pub fn with_header_suffix(&self, suffix: &str) -> fasta::Record {
        // The writer emits `>{name} {description}`; the verbatim header
        // stands in for the name so its separators survive.
        let definition =
            fasta::record::Definition::new(self.header.as_str(), Some(suffix.into()));
        fasta::Record::new(definition, self.sequence.clone())
    }
}

/// Iterator over [`HeaderRecord`]s from a noodles reader
pub struct HeaderRecords<R> {
    reader: fasta::io::Reader<R>,
    line: String,
}

impl<R: BufRead> HeaderRecords<R> {
    pub fn new(reader: fasta::io::Reader<R>) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    fn read_record(&mut self) -> Result<HeaderRecord, FastaError> {
        let mut sequence = Vec::new();
        self.reader.read_sequence(&mut sequence)?;
        HeaderRecord::new(&self.line, sequence)
    }
}

impl<R: BufRead> Iterator for HeaderRecords<R> {
    type Item = Result<HeaderRecord, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line.clear();

        match self.reader.read_definition(&mut self.line) {
            Ok(0) => None,
            Ok(_) => Some(self.read_record()),
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Create the output file behind a buffered writer.
///
/// # Errors
///
/// Returns an IO error if the file cannot be created.
pub fn create_output(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}

/// Wrap any sink in a FASTA writer that wraps sequence lines at `line_width`
pub fn writer_with_line_width<W: Write>(inner: W, line_width: usize) -> fasta::io::Writer<W> {
    fasta::io::writer::Builder::default()
        .set_line_base_count(line_width)
        .build_from_writer(inner)
}
