//! Error types for `scwkit`

use thiserror::Error;

/// The error type for `scwkit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Container Format Errors ====================
    /// The file is not a valid SCW container (missing "Scw4.x" magic).
    #[error("invalid SCW magic: expected Scw4.x, found {0:?}")]
    InvalidScwMagic(String),

    /// The file is shorter than the fixed 0x1C4-byte header.
    #[error("truncated header: expected {expected} bytes, got {actual}")]
    TruncatedHeader {
        /// Required header length in bytes.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// A header count or size field that drives region layout is negative.
    #[error("negative header field {field}: {value}")]
    NegativeField {
        /// The offending header field.
        field: &'static str,
        /// Its declared value.
        value: i32,
    },

    /// The index table declares more entries than there are bytes for.
    #[error("truncated index table: expected {expected} bytes, got {actual}")]
    TruncatedIndex {
        /// Bytes required by the declared entry counts.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The content region is shorter than the header's `content_length`.
    #[error("truncated content region: expected {expected} bytes, got {actual}")]
    TruncatedContent {
        /// Declared content length.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The declared region sizes do not fit inside the content region.
    #[error("regions overflow content: need {needed} bytes, have {available}")]
    RegionOverflow {
        /// Sum of index table + command + string + addon sizes.
        needed: usize,
        /// Available content bytes.
        available: usize,
    },

    /// A string index entry reaches past the end of the string region.
    #[error("string entry {index} out of range: {start}+{length} exceeds region of {region} bytes")]
    StringOutOfRange {
        /// Zero-based position within the string group.
        index: usize,
        /// Entry start offset.
        start: u32,
        /// Entry length.
        length: u32,
        /// String region size in bytes.
        region: usize,
    },

    // ==================== Text Document Errors ====================
    /// The document has no `[Header]` block or it lacks a required key.
    #[error("document missing header field: {0}")]
    MissingHeaderField(&'static str),

    /// A `[Header]` value could not be parsed as a number.
    #[error("invalid document header value for {field}: {value}")]
    InvalidHeaderValue {
        /// The header key.
        field: &'static str,
        /// The unparseable value.
        value: String,
    },

    /// An `[Index=N]` section appeared out of order (gap, duplicate, or wrong start).
    #[error("document index out of order: expected [Index={expected}], found [Index={found}]")]
    IndexOutOfOrder {
        /// The next acceptable 1-based position.
        expected: usize,
        /// The position actually declared.
        found: usize,
    },

    /// A document section header could not be parsed.
    #[error("malformed section header: {0}")]
    MalformedSection(String),

    // ==================== Repack Errors ====================
    /// Document and container disagree on string or text counts.
    #[error("{field} mismatch: container declares {expected}, document has {found}")]
    CountMismatch {
        /// Which count disagrees (`STRING_COUNT` or `TEXT_COUNT`).
        field: &'static str,
        /// The container header's value.
        expected: i32,
        /// The document's value.
        found: i32,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `scwkit` operations.
pub type Result<T> = std::result::Result<T, Error>;
