use std::collections::HashMap;
use std::fmt;

/// Placeholder used for any value absent from the report
pub const MISSING_VALUE: &str = "-";

/// A known column of a MOB-suite contig report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    SampleId,
    MoleculeType,
    PrimaryClusterId,
    SecondaryClusterId,
    ContigId,
    Size,
    Gc,
    Md5,
    CircularityStatus,
    RepTypes,
    RepTypeAccessions,
    RelaxaseTypes,
    RelaxaseTypeAccessions,
    MpfType,
    MpfTypeAccessions,
    OritTypes,
    OritAccessions,
    PredictedMobility,
    MashNearestNeighbor,
    MashNeighborDistance,
    MashNeighborIdentification,
    RepetitiveDnaId,
    RepetitiveDnaType,
    FilteringReason,
}

impl ReportField {
    /// Every known column, in report order
    pub const ALL: [ReportField; 24] = [
        ReportField::SampleId,
        ReportField::MoleculeType,
        ReportField::PrimaryClusterId,
        ReportField::SecondaryClusterId,
        ReportField::ContigId,
        ReportField::Size,
        ReportField::Gc,
        ReportField::Md5,
        ReportField::CircularityStatus,
        ReportField::RepTypes,
        ReportField::RepTypeAccessions,
        ReportField::RelaxaseTypes,
        ReportField::RelaxaseTypeAccessions,
        ReportField::MpfType,
        ReportField::MpfTypeAccessions,
        ReportField::OritTypes,
        ReportField::OritAccessions,
        ReportField::PredictedMobility,
        ReportField::MashNearestNeighbor,
        ReportField::MashNeighborDistance,
        ReportField::MashNeighborIdentification,
        ReportField::RepetitiveDnaId,
        ReportField::RepetitiveDnaType,
        ReportField::FilteringReason,
    ];

    /// Columns written to the FASTA header, in output order
    pub const QUALIFIERS: [ReportField; 18] = [
        ReportField::PrimaryClusterId,
        ReportField::SecondaryClusterId,
        ReportField::CircularityStatus,
        ReportField::RepTypes,
        ReportField::RepTypeAccessions,
        ReportField::RelaxaseTypes,
        ReportField::RelaxaseTypeAccessions,
        ReportField::MpfType,
        ReportField::MpfTypeAccessions,
        ReportField::OritTypes,
        ReportField::OritAccessions,
        ReportField::PredictedMobility,
        ReportField::MashNearestNeighbor,
        ReportField::MashNeighborDistance,
        ReportField::MashNeighborIdentification,
        ReportField::RepetitiveDnaId,
        ReportField::RepetitiveDnaType,
        ReportField::FilteringReason,
    ];

    /// Column name as it appears in the report header
    pub fn name(self) -> &'static str {
        match self {
            ReportField::SampleId => "sample_id",
            ReportField::MoleculeType => "molecule_type",
            ReportField::PrimaryClusterId => "primary_cluster_id",
            ReportField::SecondaryClusterId => "secondary_cluster_id",
            ReportField::ContigId => "contig_id",
            ReportField::Size => "size",
            ReportField::Gc => "gc",
            ReportField::Md5 => "md5",
            ReportField::CircularityStatus => "circularity_status",
            ReportField::RepTypes => "rep_type(s)",
            ReportField::RepTypeAccessions => "rep_type_accession(s)",
            ReportField::RelaxaseTypes => "relaxase_type(s)",
            ReportField::RelaxaseTypeAccessions => "relaxase_type_accession(s)",
            ReportField::MpfType => "mpf_type",
            ReportField::MpfTypeAccessions => "mpf_type_accession(s)",
            ReportField::OritTypes => "orit_type(s)",
            ReportField::OritAccessions => "orit_accession(s)",
            ReportField::PredictedMobility => "predicted_mobility",
            ReportField::MashNearestNeighbor => "mash_nearest_neighbor",
            ReportField::MashNeighborDistance => "mash_neighbor_distance",
            ReportField::MashNeighborIdentification => "mash_neighbor_identification",
            ReportField::RepetitiveDnaId => "repetitive_dna_id",
            ReportField::RepetitiveDnaType => "repetitive_dna_type",
            ReportField::FilteringReason => "filtering_reason",
        }
    }

    /// Look up a field by its exact column name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Annotation values for one plasmid contig, one per [`ReportField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    values: [String; 24],
}

impl Default for AnnotationRecord {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| MISSING_VALUE.to_string()),
        }
    }
}

impl AnnotationRecord {
    /// Create a record with every field set to the missing placeholder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ReportField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: ReportField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, field: ReportField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate over `(field, value)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (ReportField, &str)> {
        ReportField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Build the header qualifiers for this record
    pub fn qualifiers(&self) -> Qualifiers {
        let mut qualifiers = Qualifiers::new();
        for field in ReportField::QUALIFIERS {
            qualifiers.push(field.name(), self.get(field));
        }
        qualifiers
    }
}

/// Ordered `/key="value"` tokens appended to a FASTA description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifiers {
    entries: Vec<(String, String)>,
}

impl Qualifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "/{key}=\"{value}\"")?;
        }
        Ok(())
    }
}

/// Plasmid annotations keyed by normalized contig id
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    records: HashMap<String, AnnotationRecord>,
}

impl AnnotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record with the same key
    pub fn insert(&mut self, contig_id: impl Into<String>, record: AnnotationRecord) {
        self.records.insert(contig_id.into(), record);
    }

    pub fn get(&self, contig_id: &str) -> Option<&AnnotationRecord> {
        self.records.get(contig_id)
    }

    pub fn contains(&self, contig_id: &str) -> bool {
        self.records.contains_key(contig_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}
