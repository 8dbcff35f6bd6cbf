//! Process exit codes.

use crate::convert::{ConvertError, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Output could not be written, or settings could not be loaded
    GeneralError = 1,
    UsageError = 2,
    InputNotFound = 3,
    /// Output written, but files were skipped or labels dropped
    PartialSuccess = 4,
}

impl ExitCode {
    pub fn from_report(report: &RunReport) -> Self {
        if report.is_success() {
            Self::Success
        } else {
            Self::PartialSuccess
        }
    }

    pub fn from_error(error: &ConvertError) -> Self {
        match error {
            ConvertError::InputNotFound { .. } => Self::InputNotFound,
            ConvertError::DirectoryRead { .. } | ConvertError::Write { .. } => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
