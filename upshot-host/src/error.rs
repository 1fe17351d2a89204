//! Host error record with call-site provenance

use std::panic::Location;
use thiserror::Error;

/// Error record in the host environment's reporting convention
///
/// Carries an optional human-readable message plus the file and line of the
/// call site that synthesized it. The provenance always names the *caller* of
/// the capturing constructor, never a location inside this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{} ({}:{})", .message.as_deref().unwrap_or("unspecified failure"), .file, .line)]
pub struct HostError {
    message: Option<String>,
    file: String,
    line: u32,
}

impl HostError {
    /// Error carrying `message`, located at the caller
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(Some(message.into()), Location::caller())
    }

    /// Error with no message, located at the caller
    ///
    /// A call site that later gains a message must not change shape in any
    /// other way, so this and [`HostError::new`] differ only in the message
    /// field.
    #[track_caller]
    pub fn unspecified() -> Self {
        Self::at(None, Location::caller())
    }

    /// Error with provenance supplied explicitly by the caller
    ///
    /// For callers adapting foreign diagnostics that already carry their own
    /// file/line information.
    pub fn located(message: Option<String>, file: impl Into<String>, line: u32) -> Self {
        HostError {
            message,
            file: file.into(),
            line,
        }
    }

    fn at(message: Option<String>, location: &Location<'_>) -> Self {
        HostError {
            message,
            file: location.file().to_string(),
            line: location.line(),
        }
    }

    /// The human-readable message, if one was given
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Source identifier of the originating call site
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number of the originating call site
    pub fn line(&self) -> u32 {
        self.line
    }
}
