use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// cblaster binary output table
    #[arg(short, long)]
    pub binary: PathBuf,
    /// cblaster summary output file
    #[arg(short, long)]
    pub summary: PathBuf,
}
