//! Unit tests for scaffold mapping

pub mod args;
pub mod genomes;
