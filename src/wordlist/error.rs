use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to open word list {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line} of word list")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}
