pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod stats;
