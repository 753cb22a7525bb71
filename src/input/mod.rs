//! Readers for the flat text tables consumed by the pipeline
//!
//! - `binary` - cblaster binary hit table (hit attributes)
//! - `clustering` - skDER secondary clustering table
//! - `scaffold_map` - scaffold to assembly accession map
//! - `summary` - cblaster summary file (cluster labels per scaffold)

pub mod binary;
pub mod clustering;
pub mod scaffold_map;
pub mod summary;

pub use binary::{read_binary_table, BinaryRow, BinaryTable};
pub use clustering::{extract_accession, read_clustering, ClusteringRecord, RawClusterLabel};
pub use scaffold_map::ScaffoldMap;
pub use summary::SummaryIndex;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{CleanerError, Result};

/// Open a text file for buffered line reading
pub(crate) fn open_text(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| CleanerError::io(path, e))?;
    Ok(BufReader::new(file))
}
