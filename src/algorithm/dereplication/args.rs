use clap::Args;
use std::path::PathBuf;

use crate::config::{OutputPaths, RecoveryPolicy};
use crate::stats::Deviation;

#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// cblaster binary output table
    #[arg(short, long)]
    pub binary: PathBuf,
    /// skDER clustering table (skDER_Clustering.txt)
    #[arg(short, long, required_unless_present = "base_status")]
    pub clustering: Option<PathBuf>,
    /// Scaffold-to-assembly TSV written by `cagecleaner map`
    #[arg(short = 'm', long, required_unless_present = "base_status")]
    pub scaffold_map: Option<PathBuf>,
    /// Re-run recovery on a previously written genome_cluster_status.txt
    /// instead of building it from the clustering
    #[arg(long, conflicts_with_all = ["clustering", "scaffold_map"])]
    pub base_status: Option<PathBuf>,
    /// cblaster summary file; enables clusters.txt
    #[arg(short, long)]
    pub summary: Option<PathBuf>,
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
    /// Do not recover hits by gene cluster content (also disables score recovery)
    #[arg(long, default_value_t = false)]
    pub no_content_revisit: bool,
    /// Do not recover hits with outlier scores
    #[arg(long, default_value_t = false)]
    pub no_score_revisit: bool,
    /// Minimum absolute z-score for a score outlier
    #[arg(long, default_value_t = 2.0)]
    pub min_z_score: f64,
    /// Minimum difference between an outlier score and the modal score
    #[arg(long, default_value_t = 0.1)]
    pub min_score_diff: f64,
    /// Standard deviation used for z-scores: 'sample' or 'population'
    #[arg(long, default_value = "sample")]
    pub deviation: Deviation,
    /// Validate the binary and summary files before running (needs --summary)
    #[arg(long, default_value_t = false)]
    pub validate_inputs: bool,
    /// Worker threads (0 = all cores)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
}

impl RecoverArgs {
    pub fn policy(&self) -> RecoveryPolicy {
        RecoveryPolicy {
            by_content: !self.no_content_revisit,
            by_score: !self.no_score_revisit,
            outlier_z: self.min_z_score,
            min_score_diff: self.min_score_diff,
            deviation: self.deviation,
        }
    }

    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::in_dir(&self.output)
    }
}
