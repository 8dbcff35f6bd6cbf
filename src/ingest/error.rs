//! Error types for walk ingestion.

use thiserror::Error;

/// Failure while ingesting a single walk source.
///
/// The path is attached by the caller, which knows which file it handed in.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Cannot open walk file: {source}")]
    Open {
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type IngestResult<T> = Result<T, IngestError>;
