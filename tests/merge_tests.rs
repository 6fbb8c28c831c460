//! Annotate-and-merge tests against real files on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use plasmid_annotator::merge::annotate_report;
use plasmid_annotator::{
    annotate_and_merge, annotate_and_merge_with, parse_report_text, AnnotateError,
    AnnotationTable, MergeOptions, ReportField, Skipped,
};
use tempfile::TempDir;

const REPORT: &str = "\
sample_id\tmolecule_type\tprimary_cluster_id\tsecondary_cluster_id\tcontig_id\tsize\tgc\tmd5\tcircularity_status\trep_type(s)\trep_type_accession(s)\trelaxase_type(s)\trelaxase_type_accession(s)\tmpf_type\tmpf_type_accession(s)\torit_type(s)\torit_accession(s)\tpredicted_mobility\tmash_nearest_neighbor\tmash_neighbor_distance\tmash_neighbor_identification\trepetitive_dna_id\trepetitive_dna_type\tfiltering_reason
S1\tplasmid\tAA001\tAA001_1\t25PS-151M00028|Contig_1\t4000\t0.51\tabc\tcircular\tIncFII\tCP1\tMOBF\tNC_1\tMPF_F\tNC_2\tMOBF\tNC_3\tconjugative\tCP00001\t0.01\tEscherichia coli\t-\t-\tnone
S1\tchromosome\t-\t-\t25PS-151M00028|Contig_9\t5000000\t0.50\tdef\tincomplete\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\tnone
S1\tplasmid\tAB002\tAB002_3\tContig_3_Circ\t2000\t0.45\tghi\tcircular\tColRNAI\tCP2\t-\t-\t-\t-\t-\t-\tnon-mobilizable\tCP00002\t0.02\tKlebsiella\t-\t-\tnone
";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_gz(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn headers(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| line.starts_with('>'))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unmatched_record_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n>Contig_2\nGGGG\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&fasta], &output).unwrap();

    assert_eq!(summary.annotated, 1);
    assert_eq!(summary.files_read, 1);
    assert_eq!(
        summary.skipped,
        vec![Skipped::Unannotated {
            record_id: "Contig_2".to_string(),
            source: fasta.clone(),
        }]
    );

    let headers = headers(&output);
    assert_eq!(headers.len(), 1);
    assert!(headers[0].starts_with(">Contig_1 /primary_cluster_id=\"AA001\""));
}

#[test]
fn test_header_keeps_original_text() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let fasta = write_file(
        &dir,
        "a.fasta",
        ">run7|Contig_3_Circ length=2000 [topology=circular]\nACGTACGT\n",
    );
    let output = dir.path().join("out.fasta");

    annotate_and_merge(&table, &[&fasta], &output).unwrap();

    let expected = ">run7|Contig_3_Circ length=2000 [topology=circular] \
/primary_cluster_id=\"AB002\" /secondary_cluster_id=\"AB002_3\" /circularity_status=\"circular\" \
/rep_type(s)=\"ColRNAI\" /rep_type_accession(s)=\"CP2\" /relaxase_type(s)=\"-\" \
/relaxase_type_accession(s)=\"-\" /mpf_type=\"-\" /mpf_type_accession(s)=\"-\" \
/orit_type(s)=\"-\" /orit_accession(s)=\"-\" /predicted_mobility=\"non-mobilizable\" \
/mash_nearest_neighbor=\"CP00002\" /mash_neighbor_distance=\"0.02\" \
/mash_neighbor_identification=\"Klebsiella\" /repetitive_dna_id=\"-\" \
/repetitive_dna_type=\"-\" /filtering_reason=\"none\"";

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, format!("{expected}\nACGTACGT\n"));
}

#[test]
fn test_header_separators_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\tlen=4  circ\nACGT\n");
    let output = dir.path().join("out.fasta");

    annotate_and_merge(&table, &[&fasta], &output).unwrap();

    let headers = headers(&output);
    assert!(
        headers[0].starts_with(">Contig_1\tlen=4  circ /primary_cluster_id=\"AA001\""),
        "{}",
        headers[0]
    );
}

#[test]
fn test_files_merged_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let second = write_file(&dir, "b.fasta", ">Contig_1\nAAAA\n");
    let first = write_file(&dir, "a.fasta", ">Contig_3\nCCCC\n>Contig_2\nTTTT\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&first, &second], &output).unwrap();
    assert_eq!(summary.annotated, 2);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with(">Contig_3 "));
    assert_eq!(lines[1], "CCCC");
    assert!(lines[2].starts_with(">Contig_1 "));
    assert_eq!(lines[3], "AAAA");
}

#[test]
fn test_gzipped_and_plain_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let plain = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let gzipped = write_gz(&dir, "b.fasta.gz", ">Contig_3\nGGCC\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&plain, &gzipped], &output).unwrap();

    assert_eq!(summary.annotated, 2);
    let headers = headers(&output);
    assert!(headers[1].starts_with(">Contig_3 /primary_cluster_id=\"AB002\""));

    // Output is never compressed
    assert!(fs::read_to_string(&output).unwrap().contains("GGCC"));
}

#[test]
fn test_missing_input_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let missing = dir.path().join("missing.fasta");
    let present = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&missing, &present], &output).unwrap();

    assert_eq!(summary.annotated, 1);
    assert_eq!(summary.files_read, 1);
    assert_eq!(summary.missing_files(), 1);
    assert_eq!(summary.skipped[0], Skipped::MissingFile { path: missing });
}

#[test]
fn test_missing_orit_column_emits_placeholder() {
    let report = "\
molecule_type\tcontig_id\tprimary_cluster_id\trep_type(s)
plasmid\tContig_1\tAA001\tIncFII
plasmid\tContig_2\tAA002\tColRNAI
";
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(report);
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n>Contig_2\nACGT\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&fasta], &output).unwrap();
    assert_eq!(summary.annotated, 2);

    for header in headers(&output) {
        assert!(header.contains("orit_type(s)=\"-\""), "{header}");
    }
}

#[test]
fn test_empty_table_writes_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let table = AnnotationTable::new();
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n>Contig_2\nGGGG\n>Contig_3\nC\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&fasta], &output).unwrap();

    assert_eq!(summary.annotated, 0);
    assert_eq!(summary.unannotated_records(), 3);
    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_sequence_wrapping() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let sequence = "ACGT".repeat(25);
    let fasta = write_file(&dir, "a.fasta", &format!(">Contig_1\n{sequence}\n"));

    let default_output = dir.path().join("default.fasta");
    annotate_and_merge(&table, &[&fasta], &default_output).unwrap();
    let content = fs::read_to_string(&default_output).unwrap();
    let lengths: Vec<usize> = content.lines().skip(1).map(str::len).collect();
    assert_eq!(lengths, vec![60, 40]);

    let wide_output = dir.path().join("wide.fasta");
    let options = MergeOptions { line_width: 80 };
    annotate_and_merge_with(&table, &[&fasta], &wide_output, &options).unwrap();
    let content = fs::read_to_string(&wide_output).unwrap();
    let lengths: Vec<usize> = content.lines().skip(1).map(str::len).collect();
    assert_eq!(lengths, vec![80, 20]);
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let output = dir.path().join("no_such_dir").join("out.fasta");

    let result = annotate_and_merge(&table, &[&fasta], &output);
    assert!(matches!(result, Err(AnnotateError::Output { .. })));
}

#[test]
fn test_malformed_fasta_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let good = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let bad = write_file(&dir, "b.fasta", "> desc\nACGT\n");
    let output = dir.path().join("out.fasta");

    let result = annotate_and_merge(&table, &[&good, &bad], &output);

    match result {
        Err(AnnotateError::Parse { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let input = dir.path().join("contigs.fasta");
    fs::create_dir(&input).unwrap();
    let output = dir.path().join("out.fasta");

    let result = annotate_and_merge(&table, &[&input], &output);

    match result {
        Err(AnnotateError::Read { path, .. }) => assert_eq!(path, input),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn test_non_fasta_extension_still_read() {
    let dir = tempfile::tempdir().unwrap();
    let table = parse_report_text(REPORT);
    let reads = write_file(&dir, "reads.txt", ">Contig_1\nACGT\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_and_merge(&table, &[&reads], &output).unwrap();

    assert_eq!(summary.annotated, 1);
    assert_eq!(summary.files_read, 1);
    assert!(headers(&output)[0].starts_with(">Contig_1 /primary_cluster_id=\"AA001\""));
}

#[test]
fn test_annotate_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_file(&dir, "contig_report.txt", REPORT);
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let output = dir.path().join("out.fasta");

    let summary = annotate_report(&report, &[&fasta], &output, &MergeOptions::default()).unwrap();
    assert_eq!(summary.annotated, 1);
    assert_eq!(summary.output, output);
}

#[test]
fn test_annotate_report_missing_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write_file(&dir, "a.fasta", ">Contig_1\nACGT\n");
    let output = dir.path().join("out.fasta");

    let result = annotate_report(
        &dir.path().join("missing.txt"),
        &[&fasta],
        &output,
        &MergeOptions::default(),
    );
    assert!(matches!(result, Err(AnnotateError::Report { .. })));
    assert!(!output.exists());
}

#[test]
fn test_report_fixture_parses() {
    let table = parse_report_text(REPORT);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("Contig_1").unwrap().get(ReportField::PredictedMobility),
        "conjugative"
    );
}
