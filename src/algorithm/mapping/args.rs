use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MapArgs {
    /// cblaster binary output table
    #[arg(short, long)]
    pub binary: PathBuf,
    /// Directory of downloaded genome FASTA files (optionally gzipped);
    /// file names must contain the assembly accession
    #[arg(short, long)]
    pub genomes: PathBuf,
    /// Output scaffold-to-assembly TSV
    #[arg(short, long)]
    pub out: PathBuf,
    /// Worker threads (0 = all cores)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
}
