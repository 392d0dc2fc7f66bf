//! PGN chapter merger.
//!
//! Cuts a multi-game PGN into games, groups them into chapters and merges
//! each chapter into one variation tree using `pgn-core`.

pub mod app;
pub mod chapter;
pub mod config;
pub mod error;
pub mod writer;

pub use app::{run, RunSummary};
pub use config::{Cli, MergeConfig, OutputFormat};
pub use error::MergeError;
