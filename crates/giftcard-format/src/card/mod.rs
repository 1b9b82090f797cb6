//! Gift card data model and its binary encoding.
//!
//! Wire layout (all integers little-endian):
//! Card header (72 bytes) → Record*
//!
//! Each record starts with an 8-byte header (size, type) followed by a
//! payload whose shape depends on the record type.

mod decode;
mod encode;
mod error;
mod header;
mod reader;
mod record;

#[cfg(test)]
mod record_tests;

pub use decode::{decode, decode_from};
pub use encode::encode;
pub use error::DecodeError;
pub use header::{CardHeader, RecordHeader};
pub use record::{AmountChange, GiftCard, Message, Program, Record, RecordKind};

pub const MERCHANT_ID_SIZE: usize = 32;
pub const CUSTOMER_ID_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 32;
pub const PROGRAM_MESSAGE_SIZE: usize = 32;
pub const PROGRAM_CODE_SIZE: usize = 256;

/// Record header size: `record_size` (4) + `record_type` (4).
pub const RECORD_HEADER_SIZE: usize = 8;

/// Card header size: total size, merchant id, customer id, record count.
pub const CARD_HEADER_SIZE: usize = 4 + MERCHANT_ID_SIZE + CUSTOMER_ID_SIZE + 4;
