//! Linking hit scaffolds to the genome assemblies they come from
//!
//! Scaffold IDs are read from the FASTA headers of downloaded genomes and
//! matched against the hit table with their accession prefix removed.

pub mod args;
pub mod genomes;

pub use args::MapArgs;
pub use genomes::{discover_genomes, map_scaffolds, read_scaffold_ids, split_off_prefix, GenomeFile};

use anyhow::{Context, Result};
use tracing::info;

use crate::input::read_binary_table;

pub fn run(args: MapArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to build thread pool")?;

    let binary = read_binary_table(&args.binary)
        .with_context(|| format!("Failed to read binary table {}", args.binary.display()))?;
    let scaffolds: Vec<String> = binary.scaffolds().into_iter().map(String::from).collect();
    info!("Extracted {} scaffold IDs", scaffolds.len());

    let genomes = discover_genomes(&args.genomes)?;
    info!("Found {} genome files in {}", genomes.len(), args.genomes.display());

    let map = pool.install(|| map_scaffolds(&scaffolds, &genomes))?;
    info!("Found {} scaffold-assembly links", map.len());

    map.write_tsv_file(&args.out)?;
    info!("Scaffold map written to {}", args.out.display());
    Ok(())
}
