//! Unit tests for input readers

pub mod binary;
pub mod scaffold_map;
