use thiserror::Error;

/// Errors that can occur while decoding a gift card.
///
/// Decoding is all-or-nothing: any of these discards the partially
/// built card.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file size on disk ({actual}) does not match size in header ({header})")]
    SizeMismatch { header: u32, actual: u64 },

    #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("unknown record type {record_type} at offset {offset}")]
    UnknownRecordType { record_type: u32, offset: usize },

    #[error("number of records reported in file ({declared}) does not match number actually read ({actual})")]
    RecordCountMismatch { declared: u32, actual: usize },
}
