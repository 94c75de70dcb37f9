//! Error taxonomy for a single import run.
//!
//! Every variant is terminal for the run. The binary maps them onto exit
//! statuses; `hint()` carries the remediation text shown under the error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Input path does not exist (checked before any read)
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Endpoint answered with anything other than 200
    #[error("Server responded with status {status}\n   {body}")]
    Rejected { status: u16, body: String },

    /// Endpoint answered 200 but the body was not a summary object
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),

    /// Connection refused, DNS failure, timeout, ...
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ImportError {
    /// Remediation text printed after the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ImportError::Network(_) => Some("Make sure the backend is running!"),
            _ => None,
        }
    }

    /// True when no request ever left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound { .. } | ImportError::Read { .. } | ImportError::Parse { .. }
        )
    }
}
