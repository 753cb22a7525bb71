//! Unit tests for mapping/genomes.rs

use cagecleaner::algorithm::mapping::{self, discover_genomes, map_scaffolds, read_scaffold_ids, MapArgs};
use cagecleaner::input::ScaffoldMap;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};
use super::super::helpers::{binary_text, write_file, GCF_1, GCF_2};

fn write_gz(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

/// Two genomes (one gzipped) and a file without an accession
fn genome_dir(dir: &Path) {
    write_gz(
        dir,
        &format!("{}_ASM1v1_genomic.fna.gz", GCF_1),
        ">NZ_CP000001.1 Streptomyces sp. A1 chromosome\nACGTACGT\n>NZ_CP000099.1 plasmid\nACGT\n",
    );
    write_file(
        dir,
        &format!("{}.fasta", GCF_2),
        ">CP000002.1 Streptomyces sp. B2\nACGTACGT\nACGT\n",
    );
    write_file(dir, "README.txt", "not a genome\n");
}

#[test]
fn test_discover_genomes() {
    let dir = tempfile::tempdir().unwrap();
    genome_dir(dir.path());
    let genomes = discover_genomes(dir.path()).unwrap();
    let accessions: Vec<&str> = genomes.iter().map(|g| g.assembly.as_str()).collect();
    assert_eq!(accessions, vec![GCF_1, GCF_2]);
}

#[test]
fn test_read_gzipped_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gz(dir.path(), "g.fna.gz", ">a desc\nAC\n>b\nGT\n");
    assert_eq!(read_scaffold_ids(&path).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_map_ignores_accession_prefix() {
    let dir = tempfile::tempdir().unwrap();
    genome_dir(dir.path());
    let genomes = discover_genomes(dir.path()).unwrap();
    let hits = vec![
        "NZ_CP000001.1".to_string(),
        "NZ_CP000002.1".to_string(),
        "NZ_CP000077.1".to_string(),
    ];
    let map = map_scaffolds(&hits, &genomes).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.assembly_of("NZ_CP000001.1"), Some(GCF_1));
    assert_eq!(map.assembly_of("NZ_CP000002.1"), Some(GCF_2));
    assert_eq!(map.assembly_of("NZ_CP000077.1"), None);
}

#[test]
fn test_map_command_writes_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let genomes = dir.path().join("genomes");
    std::fs::create_dir(&genomes).unwrap();
    genome_dir(&genomes);
    let binary = write_file(
        dir.path(),
        "binary.txt",
        &binary_text(&[
            ("Org one", "NZ_CP000001.1", 5.0, [1, 1]),
            ("Org two", "CP000002.1", 4.0, [1, 0]),
        ]),
    );
    let out = dir.path().join("scaffold_map.tsv");

    mapping::run(MapArgs {
        binary,
        genomes,
        out: out.clone(),
        num_threads: 2,
    })
    .unwrap();

    let map = ScaffoldMap::read_tsv(&out).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.assembly_of("CP000002.1"), Some(GCF_2));
}
