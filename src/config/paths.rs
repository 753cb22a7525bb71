use std::path::{Path, PathBuf};

use crate::error::{CleanerError, Result};

pub const STATUS_TABLE: &str = "genome_cluster_status.txt";
pub const CLUSTER_SIZES: &str = "genome_cluster_sizes.txt";
pub const CLEANED_BINARY: &str = "cleaned_binary.txt";
pub const CLUSTER_LABELS: &str = "clusters.txt";

/// Locations of the report files written by a dereplication run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub status_table: PathBuf,
    pub cluster_sizes: PathBuf,
    pub cleaned_binary: PathBuf,
    pub cluster_labels: PathBuf,
}

impl OutputPaths {
    /// Standard report file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            status_table: dir.join(STATUS_TABLE),
            cluster_sizes: dir.join(CLUSTER_SIZES),
            cleaned_binary: dir.join(CLEANED_BINARY),
            cluster_labels: dir.join(CLUSTER_LABELS),
            dir,
        }
    }

    pub fn create_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| CleanerError::io(&self.dir, e))
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
