//! Error types shared by every layer of the registrar.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::records::{RecordId, RollNumber};

/// Errors raised by the record store, the collections and the enrollment rules.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("could not open {} for record storage: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt record line skipped: {line} ({reason})")]
    CorruptRecord { line: String, reason: CorruptReason },

    #[error("course {course_id} is already full ({capacity} seats), enrollment failed")]
    CourseFull { course_id: RecordId, capacity: u32 },

    #[error("no {kind} with id {id}")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("roll numbers exhausted after {last}")]
    RollsExhausted { last: RollNumber },
}

impl RecordError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(line: &str, reason: CorruptReason) -> Self {
        Self::CorruptRecord {
            line: line.to_string(),
            reason,
        }
    }

    /// `true` for lines that never looked like a record in the first place.
    pub fn is_malformed_shape(&self) -> bool {
        matches!(
            self,
            Self::CorruptRecord {
                reason: CorruptReason::TooFewFields { .. },
                ..
            }
        )
    }
}

/// Why a stored line could not be turned back into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptReason {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("field `{field}` is not an integer: {source}")]
    BadInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("{enrolled} enrolled exceeds capacity {capacity}")]
    OverCapacity { enrolled: u32, capacity: u32 },

    #[error("roll number {roll} leaves no room for later rolls")]
    RollOutOfRange { roll: RollNumber },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Course,
    Faculty,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Student => "student",
            RecordKind::Course => "course",
            RecordKind::Faculty => "faculty member",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
