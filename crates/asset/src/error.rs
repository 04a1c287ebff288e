//! Error types for OBJ loading.
//!
//! [`ObjError`] aborts a load. [`LineError`] only costs the offending line and
//! is reported back as a [`ParseWarning`].

use std::{io, num::ParseFloatError, path::PathBuf, str::Utf8Error};

use thiserror::Error;

use crate::attributes::AttributeKind;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("Failed to open OBJ file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("Face on line {line} references missing data: {source}")]
    IndexOutOfRange {
        line: usize,
        #[source]
        source: LineError,
    },
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("'{directive}' expects {expected} tokens, found {found}")]
    Arity {
        directive: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid number '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Line is not valid UTF-8: {source}")]
    InvalidEncoding {
        #[source]
        source: Utf8Error,
    },
    #[error("Malformed face reference '{token}': {reason}")]
    MalformedFaceReference { token: String, reason: &'static str },
    #[error("{attribute} index {index} out of range (have {len})")]
    IndexOutOfRange {
        attribute: AttributeKind,
        index: u32,
        len: usize,
    },
}

impl LineError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// A line that was skipped, kept for diagnostics.
#[derive(Debug, Error)]
#[error("line {line}: {error} ('{content}')")]
pub struct ParseWarning {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    #[source]
    pub error: LineError,
}

pub type ObjResult<T> = Result<T, ObjError>;
