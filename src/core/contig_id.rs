//! Contig identifier normalization.
//!
//! MOB-suite reports and the FASTA files they describe rarely spell a contig
//! the same way. Headers may carry a run/sample prefix (`25PS-151M00028|Contig_28`),
//! an inline topology tag (`Contig_36 [topology=circular]`) or a `_Circ` suffix.
//! [`normalize_contig_id`] reduces every spelling to one join key.

/// Suffix some assemblers append to circularised contigs
const CIRCULAR_SUFFIX: &str = "_Circ";

/// Normalize a raw contig identifier into the key used to join report rows
/// with FASTA records.
///
/// The steps run in a fixed order:
///
/// 1. Keep the first whitespace-delimited token
/// 2. Remove every `[` and `]`
/// 3. Drop everything up to and including the last `|`
/// 4. Strip a trailing `_Circ`
/// 5. Trim surrounding whitespace
///
/// # Examples
///
/// ```
/// use plasmid_annotator::core::contig_id::normalize_contig_id;
///
/// assert_eq!(normalize_contig_id("25PS-151M00028|Contig_28"), "Contig_28");
/// assert_eq!(normalize_contig_id("Contig_36_74.9631 [topology=circular]"), "Contig_36_74.9631");
/// assert_eq!(normalize_contig_id("Contig_5_Circ"), "Contig_5");
/// ```
#[must_use]
pub fn normalize_contig_id(raw: &str) -> String {
    let token = raw.split_whitespace().next().unwrap_or_default();

    let unbracketed: String = token.chars().filter(|c| !matches!(c, '[' | ']')).collect();

    let unprefixed = match unbracketed.rfind('|') {
        Some(idx) => &unbracketed[idx + 1..],
        None => unbracketed.as_str(),
    };

    let stripped = unprefixed
        .strip_suffix(CIRCULAR_SUFFIX)
        .unwrap_or(unprefixed);

    stripped.trim().to_string()
}
