//! Error types for ifalias-persist.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! Errors fall into two groups. Request errors ([`Error::MalformedOid`],
//! [`Error::NotFound`], [`Error::NoNextElement`]) are local to a single command
//! group and are answered with `NONE`. Everything else ends the command loop.

use std::path::PathBuf;

use crate::directory::InterfaceIndex;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// OID text lacks the leading dot.
    MissingLeadingDot,
    /// Invalid arc value (empty, non-decimal, or out of range).
    InvalidArc,
    /// OID is not rooted at the ifAlias column.
    OutsideBase,
    /// More than one arc follows the base.
    TooManyArcs { count: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::MissingLeadingDot => write!(f, "OID must start with '.'"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::OutsideBase => write!(f, "OID does not start with the ifAlias base"),
            Self::TooManyArcs { count } => {
                write!(f, "expected one index arc after the base, got {}", count)
            }
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// OID could not be mapped to an interface index.
    #[error("malformed OID{}: {kind}", input.as_ref().map(|s| format!(" {:?}", s)).unwrap_or_default())]
    MalformedOid {
        kind: OidErrorKind,
        input: Option<Box<str>>,
    },

    /// No interface with this index currently exists.
    #[error("no interface with index {index}")]
    NotFound { index: InterfaceIndex },

    /// GETNEXT probe has no greater interface index.
    #[error("no interface index after {index}")]
    NoNextElement { index: InterfaceIndex },

    /// Command token outside the pass_persist vocabulary.
    #[error("unknown command {command:?}")]
    UnknownCommand { command: Box<str> },

    /// The interface directory could not be read.
    #[error("interface directory unavailable at {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on the command stream.
    #[error("I/O error on command stream: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed OID error with the input string that failed.
    pub fn malformed_oid(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::MalformedOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create a directory error for `path`.
    pub fn directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Directory {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors scoped to one command group.
    ///
    /// These are answered with `NONE`; all other errors terminate the loop.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedOid { .. } | Self::NotFound { .. } | Self::NoNextElement { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
