//! Decoded gift card records.

use std::fs::File;
use std::path::Path;

use super::{
    CUSTOMER_ID_SIZE, DecodeError, MERCHANT_ID_SIZE, PROGRAM_CODE_SIZE, PROGRAM_MESSAGE_SIZE,
    SIGNATURE_SIZE,
};

/// Record type tag as stored in the record header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    AmountChange,
    Message,
    Program,
}

impl RecordKind {
    /// Decode from the wire tag. Unknown tags return `None`.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(Self::AmountChange),
            2 => Some(Self::Message),
            3 => Some(Self::Program),
            _ => None,
        }
    }

    /// Encode to the wire tag.
    pub fn tag(self) -> u32 {
        match self {
            Self::AmountChange => 1,
            Self::Message => 2,
            Self::Program => 3,
        }
    }
}

/// A signed change to the card value, in the smallest currency unit.
///
/// Credits (`amount >= 0`) carry a 32-byte merchant signature on the wire.
/// Debits carry none: the field occupies zero bytes and is `None` here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountChange {
    pub amount: i32,
    pub signature: Option<[u8; SIGNATURE_SIZE]>,
}

impl AmountChange {
    pub fn credit(amount: i32, signature: [u8; SIGNATURE_SIZE]) -> Self {
        debug_assert!(amount >= 0, "credit with negative amount: {amount}");
        Self {
            amount,
            signature: Some(signature),
        }
    }

    pub fn debit(amount: i32) -> Self {
        debug_assert!(amount < 0, "debit with non-negative amount: {amount}");
        Self {
            amount,
            signature: None,
        }
    }

    /// Whether a signature is part of the encoding.
    pub fn has_signature_field(&self) -> bool {
        self.amount >= 0
    }
}

/// Free-form message record.
///
/// Holds exactly the bytes read from the stream, with the last byte forced
/// to NUL by the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    bytes: Vec<u8>,
}

impl Message {
    /// Wrap raw payload bytes. The encoder writes them verbatim.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Build a message from text, appending the terminator.
    pub fn from_text(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self { bytes }
    }

    /// Payload bytes as stored (terminator included).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Message text: payload up to the first NUL.
    pub fn text(&self) -> &[u8] {
        until_nul(&self.bytes)
    }
}

/// Animated message: a text buffer plus the program that animates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub message: [u8; PROGRAM_MESSAGE_SIZE],
    pub code: [u8; PROGRAM_CODE_SIZE],
}

impl Program {
    pub fn new(message: [u8; PROGRAM_MESSAGE_SIZE], code: [u8; PROGRAM_CODE_SIZE]) -> Self {
        Self { message, code }
    }

    /// Message text: buffer up to the first NUL.
    pub fn text(&self) -> &[u8] {
        until_nul(&self.message)
    }
}

/// One record of a gift card body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    AmountChange(AmountChange),
    Message(Message),
    Program(Program),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::AmountChange(_) => RecordKind::AmountChange,
            Self::Message(_) => RecordKind::Message,
            Self::Program(_) => RecordKind::Program,
        }
    }
}

/// A fully decoded gift card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GiftCard {
    pub merchant_id: [u8; MERCHANT_ID_SIZE],
    pub customer_id: [u8; CUSTOMER_ID_SIZE],
    /// Records in stream order.
    pub records: Vec<Record>,
}

impl GiftCard {
    pub fn new(merchant_id: [u8; MERCHANT_ID_SIZE], customer_id: [u8; CUSTOMER_ID_SIZE]) -> Self {
        Self {
            merchant_id,
            customer_id,
            records: Vec::new(),
        }
    }

    /// Open and decode a gift card file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        super::decode_from(file)
    }

    /// Decode from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        super::decode(bytes)
    }

    /// Encode to the binary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        super::encode(self)
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Sum of all amount changes.
    ///
    /// Accumulated in 64 bits: the record count is bounded by the stream
    /// length, so no realistic card can overflow it.
    pub fn total_value(&self) -> i64 {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::AmountChange(a) => Some(i64::from(a.amount)),
                _ => None,
            })
            .sum()
    }

    /// Program records, for in-place execution.
    pub fn programs_mut(&mut self) -> impl Iterator<Item = &mut Program> {
        self.records.iter_mut().filter_map(|r| match r {
            Record::Program(p) => Some(p),
            _ => None,
        })
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}
