//! Genome dereplication of cblaster hits
//!
//! Pipeline, leaves first:
//! - `cluster_table` - assembly clustering expanded to a per-hit status table
//! - `content` - hits of a genome cluster grouped by homolog counts
//! - `recovery` - content and score-outlier recovery within content groups
//! - `retained` - final list of kept scaffolds
//! - `run` - file-level driver behind `cagecleaner recover`

pub mod args;
pub mod cluster_table;
pub mod content;
pub mod recovery;
pub mod retained;
pub mod run;

pub use args::RecoverArgs;
pub use cluster_table::build_status_table;
pub use content::{group_by_content, ContentGroup};
pub use recovery::{is_outlier, recover_cluster, recover_group, recover_hits, Upgrade};
pub use retained::retained_hits;
pub use run::{dereplicate, recover_from_status, run, write_reports, DereplicationOutcome};
