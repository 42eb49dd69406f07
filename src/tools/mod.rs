//! The tools module provides the helpers around the huffzip coding core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Symbol frequency analysis, the first pass of compression.
//!
pub mod cli;
pub mod freq_count;
