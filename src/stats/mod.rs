pub mod mode;
pub mod zscore;

pub use mode::*;
pub use zscore::*;
