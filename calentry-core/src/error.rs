//! Error types for calentry operations.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Rejection of a malformed event record before it enters the store.
///
/// Always recoverable: the caller corrects the input and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("event ends at {end} but starts later, at {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Failure to encode a record sequence as an ICS document.
///
/// The document is all-or-nothing: on error nothing is emitted, the store is
/// untouched, and export can be retried after the offending record is fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// A record with `start > end` bypassed store validation.
    #[error("record {index}: start is after end")]
    InvalidRecord { index: usize },

    /// The description holds a control character that TEXT escaping cannot
    /// represent. Rejected rather than silently stripped.
    #[error("record {index}: description contains control character {codepoint:?}")]
    ControlCharacter { index: usize, codepoint: char },
}
