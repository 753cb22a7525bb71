use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::common::{AssemblyId, HitId};
use crate::error::{CleanerError, Result};
use crate::input::clustering::find_accession;
use crate::input::ScaffoldMap;

/// Drop the accession prefix of a nucleotide ID (`NZ_CP012345.1` -> `CP012345.1`).
///
/// Scaffold IDs resolved through NCBI and those in downloaded FASTA headers
/// do not always agree on the prefix, so matching ignores it.
pub fn split_off_prefix(id: &str) -> &str {
    match id.split_once('_') {
        Some((_, rest)) => rest,
        None => id,
    }
}

/// A downloaded genome and the assembly accession in its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeFile {
    pub assembly: AssemblyId,
    pub path: PathBuf,
}

/// List genome files in `dir`, sorted by accession.
///
/// Files without an accession in their name are skipped, as are further
/// files for an accession already seen.
pub fn discover_genomes(dir: &Path) -> Result<Vec<GenomeFile>> {
    let mut genomes = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CleanerError::io(dir, e))? {
        let entry = entry.map_err(|e| CleanerError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match find_accession(&name) {
            Some(assembly) => genomes.push(GenomeFile { assembly, path }),
            None => debug!("Skipping {}: no assembly accession in file name", path.display()),
        }
    }
    genomes.sort_by(|a, b| a.assembly.cmp(&b.assembly).then(a.path.cmp(&b.path)));

    let mut seen: FxHashSet<AssemblyId> = FxHashSet::default();
    genomes.retain(|g| {
        let first = seen.insert(g.assembly.clone());
        if !first {
            warn!("Ignoring duplicate genome file {} for {}", g.path.display(), g.assembly);
        }
        first
    });
    Ok(genomes)
}

/// Record IDs of a FASTA file; `.gz` files are decompressed on the fly
pub fn read_scaffold_ids(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| CleanerError::io(path, e))?;
    let gzipped = path.extension().map_or(false, |ext| ext == "gz");
    let reader: Box<dyn Read> = if gzipped {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut ids = Vec::new();
    for (idx, record) in fasta::Reader::new(reader).records().enumerate() {
        let record = record.map_err(|e| {
            CleanerError::input_format(path.display().to_string(), idx + 1, format!("FASTA record: {}", e))
        })?;
        ids.push(record.id().to_string());
    }
    Ok(ids)
}

/// Link every hit scaffold to the genome that contains it
pub fn map_scaffolds(scaffolds: &[HitId], genomes: &[GenomeFile]) -> Result<ScaffoldMap> {
    // prefixless ID -> hit scaffold; the first scaffold wins on collisions
    let mut wanted: FxHashMap<&str, &str> = FxHashMap::default();
    for scaffold in scaffolds {
        wanted.entry(split_off_prefix(scaffold)).or_insert(scaffold.as_str());
    }

    let bar = ProgressBar::new(genomes.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} genomes")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let links = genomes
        .par_iter()
        .map(|genome| -> Result<Vec<(HitId, AssemblyId)>> {
            let ids = read_scaffold_ids(&genome.path)?;
            let found: Vec<_> = ids
                .iter()
                .filter_map(|id| wanted.get(split_off_prefix(id)))
                .map(|hit| (hit.to_string(), genome.assembly.clone()))
                .collect();
            if found.is_empty() {
                debug!("No hit scaffolds in {}", genome.assembly);
            }
            bar.inc(1);
            Ok(found)
        })
        .collect::<Result<Vec<Vec<(HitId, AssemblyId)>>>>()?;
    bar.finish_and_clear();

    let mut map = ScaffoldMap::new();
    for (hit, assembly) in links.into_iter().flatten() {
        if let Some(existing) = map.assembly_of(&hit) {
            if existing != assembly {
                warn!("Scaffold {} found in both {} and {}; keeping {}", hit, existing, assembly, existing);
            }
            continue;
        }
        map.insert(hit, assembly)?;
    }

    let unmapped = scaffolds
        .iter()
        .filter(|s| map.assembly_of(s).is_none())
        .count();
    if unmapped > 0 {
        warn!("{} hit scaffolds were not found in any genome", unmapped);
    }
    Ok(map)
}
