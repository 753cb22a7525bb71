//! Run configuration
//!
//! Plain values built from the command line and threaded through the
//! pipeline; nothing here reads the environment or the working directory.

pub mod paths;
pub mod policy;

pub use paths::OutputPaths;
pub use policy::RecoveryPolicy;
