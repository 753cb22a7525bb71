//! Test utilities and helpers for unit tests
//!
//! Builders for in-memory tables and writers for the text inputs of a
//! dereplication run (binary table, skDER clustering, scaffold map, summary).

use cagecleaner::common::{HitAttributeTable, HitAttributes, HitStatus, StatusTable};
use std::fs;
use std::path::{Path, PathBuf};

pub const QUERY_GENES: [&str; 2] = ["QBX1.1", "QBX2.1"];

pub const GCF_1: &str = "GCF_000000001.1";
pub const GCF_2: &str = "GCF_000000002.1";
pub const GCF_3: &str = "GCF_000000003.1";

/// Hit attribute table over two query genes
pub fn attributes(rows: &[(&str, [u32; 2], f64)]) -> HitAttributeTable {
    let mut table = HitAttributeTable::new(QUERY_GENES.iter().map(|g| g.to_string()).collect()).unwrap();
    for (hit, counts, score) in rows {
        table
            .insert(HitAttributes::new(*hit, counts.to_vec(), *score))
            .unwrap();
    }
    table
}

/// Status table from (hit, representative, status) rows
pub fn status_table(rows: &[(&str, &str, HitStatus)]) -> StatusTable {
    let mut table = StatusTable::new();
    for (hit, representative, status) in rows {
        table
            .insert(hit.to_string(), representative.to_string(), *status)
            .unwrap();
    }
    table
}

/// Hits of `table` that are not redundant, sorted
pub fn retained_set(table: &StatusTable) -> Vec<String> {
    let mut hits: Vec<String> = table
        .iter()
        .filter(|(_, e)| e.status.is_retained())
        .map(|(h, _)| h.clone())
        .collect();
    hits.sort();
    hits
}

/// Binary table row: (organism, scaffold, score, counts)
pub type BinaryFixtureRow<'a> = (&'a str, &'a str, f64, [u32; 2]);

/// cblaster binary table text, columns separated by two spaces
pub fn binary_text(rows: &[BinaryFixtureRow]) -> String {
    let mut text = format!(
        "Organism  Scaffold  Start  End  Score  {}  {}\n",
        QUERY_GENES[0], QUERY_GENES[1]
    );
    for (i, (organism, scaffold, score, counts)) in rows.iter().enumerate() {
        let start = 1000 * (i + 1);
        text.push_str(&format!(
            "{}  {}  {}  {}  {:.1}  {}  {}\n",
            organism,
            scaffold,
            start,
            start + 900,
            score,
            counts[0],
            counts[1]
        ));
    }
    text
}

/// skDER clustering text from (assembly, representative, label) rows
pub fn clustering_text(rows: &[(&str, &str, &str)]) -> String {
    let mut text = String::from(
        "assembly\trepresentative\tdereplication_ani\tdereplication_af\tclustering_status\n",
    );
    for (assembly, representative, label) in rows {
        text.push_str(&format!(
            "genomes/{}_genomic.fna.gz\tgenomes/{}_genomic.fna.gz\t99.5\t0.95\t{}\n",
            assembly, representative, label
        ));
    }
    text
}

/// Scaffold map TSV with header
pub fn scaffold_map_text(rows: &[(&str, &str)]) -> String {
    let mut text = String::from("scaffold\tassembly\n");
    for (scaffold, assembly) in rows {
        text.push_str(&format!("{}\t{}\n", scaffold, assembly));
    }
    text
}

/// cblaster summary text with one cluster per (organism, scaffold, cluster number)
pub fn summary_text(rows: &[(&str, &str, u32)]) -> String {
    let mut text = String::new();
    for (organism, scaffold, cluster) in rows {
        text.push_str(&format!(
            "{}\n{}\n{}\n{}\nCluster {}, 1000-9000, score: 5.0\nQuery  Subject  Identity\nQBX1.1  WP_000001.1  88.0\n\n",
            organism,
            "=".repeat(organism.len()),
            scaffold,
            "-".repeat(scaffold.len()),
            cluster
        ));
    }
    text
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Non-blank lines of a text file
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect()
}
