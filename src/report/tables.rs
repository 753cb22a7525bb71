use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::common::{AssemblyId, HitStatus, StatusTable};
use crate::error::{CleanerError, Result};
use crate::input::open_text;

pub const STATUS_HEADER: [&str; 3] = ["scaffold", "representative", "dereplication_status"];
pub const SIZES_HEADER: [&str; 2] = ["representative", "size"];

/// Write the per-hit status table, rows ordered by (representative, status, scaffold)
pub fn write_status_table<W: Write>(mut writer: W, table: &StatusTable) -> io::Result<()> {
    writeln!(writer, "{}", STATUS_HEADER.join("\t"))?;
    for (hit, entry) in table.sorted_rows() {
        writeln!(writer, "{}\t{}\t{}", hit, entry.representative, entry.status)?;
    }
    Ok(())
}

/// Write the number of member hits per genome cluster
pub fn write_cluster_sizes<W: Write>(mut writer: W, sizes: &BTreeMap<AssemblyId, usize>) -> io::Result<()> {
    writeln!(writer, "{}", SIZES_HEADER.join("\t"))?;
    for (representative, size) in sizes {
        writeln!(writer, "{}\t{}", representative, size)?;
    }
    Ok(())
}

/// Read a status table written by [`write_status_table`].
///
/// Status labels of older reports (`dereplication_representative`,
/// `readded_by_cluster_content`, `readded_by_outlier_score`) are accepted.
pub fn read_status_table<R: BufRead>(reader: R, input: &str) -> Result<StatusTable> {
    let mut table = StatusTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| CleanerError::input_format(input, line_no, e.to_string()))?;
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() == 1 && fields[0].trim().is_empty() {
            continue;
        }
        if fields.len() != STATUS_HEADER.len() {
            return Err(CleanerError::input_format(
                input,
                line_no,
                format!("expected {} tab-separated columns, found {}", STATUS_HEADER.len(), fields.len()),
            ));
        }
        if fields == STATUS_HEADER {
            continue;
        }
        let status: HitStatus = fields[2]
            .parse()
            .map_err(|e: String| CleanerError::input_format(input, line_no, e))?;
        table.insert(fields[0].to_string(), fields[1].to_string(), status)?;
    }
    Ok(table)
}

/// Read a status table file written by a previous run
pub fn read_status_file(path: &Path) -> Result<StatusTable> {
    let reader = open_text(path)?;
    read_status_table(reader, &path.display().to_string())
}
