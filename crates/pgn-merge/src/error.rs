//! Merge pipeline error types

use std::path::PathBuf;

use pgn_core::VariationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Invalid splitter '{0}': expected 'w', 'b', 'a' or counts like '5:2:4'")]
    InvalidSplitter(String),

    #[error("Splitter needs {needed} games but the file has {available}")]
    NotEnoughGames { needed: usize, available: usize },

    #[error("Game {index} has no {header} header to group by")]
    MissingPlayer { index: usize, header: &'static str },

    #[error("Game {index}: {source}")]
    Variation {
        index: usize,
        #[source]
        source: VariationError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MergeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}
