//! Unit tests for common types and statistics
