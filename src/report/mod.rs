//! Report writers
//!
//! - `tables` - status table and genome cluster sizes
//! - `cleaned` - cleaned binary table and cluster labels of retained hits

pub mod cleaned;
pub mod tables;

pub use cleaned::{cleaned_lines, cluster_labels, write_lines};
pub use tables::{read_status_file, read_status_table, write_cluster_sizes, write_status_table};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{CleanerError, Result};

/// Create `path` and run `write` against a buffered writer for it
pub fn write_to_path<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| CleanerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| CleanerError::io(path, e))
}
