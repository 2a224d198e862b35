//! Error taxonomy for a single evaluation.
//!
//! Every variant is fatal: the caller prints it and exits with
//! [`crate::exit_codes::HALT`]. Nothing here is retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluateError {
    /// Missing or unusable feature id argument.
    #[error("{0}")]
    Usage(String),

    /// Feature directory or status document absent.
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Status document without usable phase headings.
    #[error("malformed status document {}: {reason}", .path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// Verification report without a recognizable PASS/FAIL status.
    #[error("malformed verification report {}: {reason}", .path.display())]
    MalformedReport { path: PathBuf, reason: String },

    /// Read failure (permissions, I/O, encoding) at a known path.
    #[error("cannot read {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type EvaluateResult<T> = Result<T, EvaluateError>;

impl EvaluateError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn not_found(what: &'static str, path: &Path) -> Self {
        Self::NotFound {
            what,
            path: path.to_path_buf(),
        }
    }

    pub fn malformed_document(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn malformed_report(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedReport {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}
