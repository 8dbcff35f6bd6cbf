use std::path::PathBuf;
use thiserror::Error;

use crate::ingest::IngestError;

/// Errors that end a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("The specified walk file or directory does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Cannot list walk directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There was a problem writing the file specified: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A walk file that was skipped because it could not be read to the end.
#[derive(Error, Debug)]
#[error("Problem processing file {}: {error}", path.display())]
pub struct FileFailure {
    pub path: PathBuf,
    #[source]
    pub error: IngestError,
}

pub type ConvertResult<T> = Result<T, ConvertError>;
