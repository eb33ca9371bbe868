//! Layered error definitions
//!
//! Categorized by source: stream (fatal) / sentence (per-frame, recoverable)

use thiserror::Error;

use crate::SentenceKind;

/// Byte-stream error
///
/// Every variant is fatal to the ingestion loop: the loop halts and the
/// process exits non-zero. Per-frame decode problems are *not* stream
/// errors, see [`SentenceError`].
#[derive(Debug, Error)]
pub enum StreamError {
    /// Byte source reached end of stream on a frame boundary
    #[error("byte source exhausted (eof)")]
    Exhausted,

    /// End of stream in the middle of a frame
    #[error("truncated frame at end of stream: {bytes} bytes without terminator")]
    TruncatedFrame { bytes: usize },

    /// Read error from the underlying source
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-frame decode error
///
/// Carried inside `DecodeOutcome::Malformed`; the Display text is the
/// operator-facing cause logged at warn level before the frame is dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SentenceError {
    /// Frame bytes are not ASCII text
    #[error("frame is not ascii text")]
    NotText,

    /// Frame does not start with the '$' delimiter
    #[error("missing '$' start delimiter")]
    MissingStart,

    /// Checksum field is present but not two hex digits
    #[error("bad checksum field {field:?}: expected two hex digits")]
    BadChecksumField { field: String },

    /// Declared checksum does not match the computed one
    #[error("checksum mismatch: computed {computed:02X}, declared {declared:02X}")]
    ChecksumMismatch { computed: u8, declared: u8 },

    /// Sentence carries fewer data fields than the kind requires
    #[error("{kind} sentence: expected at least {expected} fields, got {got}")]
    FieldCount {
        kind: SentenceKind,
        expected: usize,
        got: usize,
    },

    /// A field that must be numeric failed to parse
    #[error("{kind} field '{field}': cannot parse {value:?} as a number")]
    NumericField {
        kind: SentenceKind,
        field: &'static str,
        value: String,
    },

    /// RMC status field is neither 'A' nor 'V'
    #[error("RMC status field: {value:?} is neither 'A' nor 'V'")]
    Status { value: String },

    /// Hemisphere field is not one of the two letters the field allows
    #[error("{kind} field '{field}': {value:?} is not a valid hemisphere")]
    Hemisphere {
        kind: SentenceKind,
        field: &'static str,
        value: String,
    },
}

impl SentenceError {
    /// Create field-count error
    pub fn field_count(kind: SentenceKind, expected: usize, got: usize) -> Self {
        Self::FieldCount {
            kind,
            expected,
            got,
        }
    }

    /// Create numeric-field error
    pub fn numeric(kind: SentenceKind, field: &'static str, value: impl Into<String>) -> Self {
        Self::NumericField {
            kind,
            field,
            value: value.into(),
        }
    }

    /// Create hemisphere error
    pub fn hemisphere(kind: SentenceKind, field: &'static str, value: impl Into<String>) -> Self {
        Self::Hemisphere {
            kind,
            field,
            value: value.into(),
        }
    }
}
