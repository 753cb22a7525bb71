//! Input validation for cblaster binary and summary files
//!
//! Every rule is checked and every failure reported, so a user sees all
//! problems with their inputs at once.

pub mod args;
pub mod rules;

pub use args::ValidateArgs;
pub use rules::{validate_inputs, ValidationIssue, ValidationReport};

use anyhow::Result;
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    let report = validate_inputs(&args.binary, &args.summary);
    if !report.is_ok() {
        return Err(crate::error::CleanerError::Validation(report).into());
    }
    info!("Binary and summary files passed validation");
    Ok(())
}
