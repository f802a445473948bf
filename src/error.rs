use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use thiserror::Error;

/// Everything that can stop a case or the run
#[derive(Debug, Error)]
pub enum SuiteError {
    /// The server answered, but not the way the case expects
    #[error("assertion failed: {check}: expected {expected}, got {actual}")]
    Assertion {
        check: String,
        expected: String,
        actual: String,
    },

    /// The request never produced a complete reply
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: String,
        url: String,
        message: String,
    },

    /// A JSON body was needed but the reply could not be parsed as one
    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write report to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SuiteError {
    pub fn assertion(
        check: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::Assertion {
            check: check.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn transport(method: impl Into<String>, url: impl Into<String>, error: impl fmt::Display) -> Self {
        Self::Transport {
            method: method.into(),
            url: url.into(),
            message: error.to_string(),
        }
    }

    /// Assertion failures fail a case; every other variant errors it
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. })
    }
}

pub type Result<T, E = SuiteError> = std::result::Result<T, E>;
