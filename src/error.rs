//! Error types
//!
//! Library code reports typed errors; the CLI wraps them with `anyhow`.
//! Wrapped causes are exposed through `source()` only, never repeated in
//! the outer message.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while loading or writing a declaration document
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write library file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse library document")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode source")]
    Serialize(#[from] toml::ser::Error),

    #[error(
        "in the source named '{source_name}': the number of names ({names}) \
         does not match the number of timestamps ({timestamps})"
    )]
    Validation {
        source_name: String,
        names: usize,
        timestamps: usize,
    },

    #[error("the source named {source_name:?} has no {field}")]
    Incomplete {
        source_name: String,
        field: &'static str,
    },
}

/// Errors raised by an external tool adapter
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{program} was not found on PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to read or write tags")]
    Tag(#[from] id3::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Errors raised while bringing one source up to date
///
/// Every variant names the source and the stage that failed. Any of these
/// aborts the current source immediately; nothing is rolled back.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch '{name}' from {url}")]
    Fetch {
        name: String,
        url: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to transcode '{name}'")]
    Transcode {
        name: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to split section '{section}' out of '{name}'")]
    Split {
        name: String,
        section: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to tag section '{section}' of '{name}'")]
    Tag {
        name: String,
        section: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to {action} {path:?} for '{name}'")]
    Io {
        name: String,
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to sync '{name}'")]
    Invalid {
        name: String,
        #[source]
        source: LibraryError,
    },

    #[error("failed to remove {path:?} after processing '{name}'")]
    Cleanup {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Name of the source this error belongs to
    pub fn source_name(&self) -> &str {
        match self {
            SyncError::Fetch { name, .. }
            | SyncError::Transcode { name, .. }
            | SyncError::Split { name, .. }
            | SyncError::Tag { name, .. }
            | SyncError::Io { name, .. }
            | SyncError::Invalid { name, .. }
            | SyncError::Cleanup { name, .. } => name,
        }
    }
}

/// Render an error and all of its causes on one line
pub fn display_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
