//! Output restricted to retained hits
//!
//! Lines are looked up by scaffold in the already parsed tables; a retained
//! hit without a line is an error rather than a silently shorter report.

use std::io::{self, Write};

use crate::common::HitId;
use crate::error::{CleanerError, Result};
use crate::input::{BinaryTable, SummaryIndex};

/// Original binary table lines of the retained hits, in retained order
pub fn cleaned_lines<'a>(table: &'a BinaryTable, retained: &[HitId]) -> Result<Vec<&'a str>> {
    let index = table.line_index();
    retained
        .iter()
        .map(|hit| {
            index.get(hit.as_str()).copied().ok_or_else(|| {
                CleanerError::InvariantViolation(format!("retained hit {} is not in the binary table", hit))
            })
        })
        .collect()
}

/// cblaster cluster label of each retained hit, in retained order
pub fn cluster_labels<'a>(summary: &'a SummaryIndex, retained: &[HitId]) -> Result<Vec<&'a str>> {
    retained
        .iter()
        .map(|hit| {
            summary.label(hit).ok_or_else(|| {
                CleanerError::input_format(
                    "cblaster summary",
                    0,
                    format!("no cluster listed for retained scaffold {}", hit),
                )
            })
        })
        .collect()
}

/// Write an optional header followed by one line per entry
pub fn write_lines<W: Write>(mut writer: W, header: Option<&str>, lines: &[&str]) -> io::Result<()> {
    if let Some(header) = header {
        writeln!(writer, "{}", header)?;
    }
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
