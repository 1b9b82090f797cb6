//! Fixed-size headers: the card header (72 bytes) and record header (8 bytes).
//!
//! Card header layout:
//! - 0-3: total_size (u32)
//! - 4-35: merchant_id
//! - 36-67: customer_id
//! - 68-71: record_count (u32)

use super::{CARD_HEADER_SIZE, CUSTOMER_ID_SIZE, MERCHANT_ID_SIZE, RECORD_HEADER_SIZE};

/// Card header - first 72 bytes of a gift card file.
///
/// Both counts are as reported by the producer and are checked by the
/// decoder against what the stream actually contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardHeader {
    /// Total file size in bytes, this field included.
    pub total_size: u32,
    pub merchant_id: [u8; MERCHANT_ID_SIZE],
    pub customer_id: [u8; CUSTOMER_ID_SIZE],
    /// Number of records that follow.
    pub record_count: u32,
}

const MERCHANT_START: usize = 4;
const CUSTOMER_START: usize = MERCHANT_START + MERCHANT_ID_SIZE;
const COUNT_START: usize = CUSTOMER_START + CUSTOMER_ID_SIZE;

const _: () = assert!(COUNT_START + 4 == CARD_HEADER_SIZE);

impl CardHeader {
    /// Decode header from 72 bytes.
    pub fn from_bytes(bytes: &[u8; CARD_HEADER_SIZE]) -> Self {
        let mut merchant_id = [0u8; MERCHANT_ID_SIZE];
        merchant_id.copy_from_slice(&bytes[MERCHANT_START..CUSTOMER_START]);
        let mut customer_id = [0u8; CUSTOMER_ID_SIZE];
        customer_id.copy_from_slice(&bytes[CUSTOMER_START..COUNT_START]);

        Self {
            total_size: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            merchant_id,
            customer_id,
            record_count: u32::from_le_bytes([
                bytes[COUNT_START],
                bytes[COUNT_START + 1],
                bytes[COUNT_START + 2],
                bytes[COUNT_START + 3],
            ]),
        }
    }

    /// Encode header to 72 bytes.
    pub fn to_bytes(&self) -> [u8; CARD_HEADER_SIZE] {
        let mut bytes = [0u8; CARD_HEADER_SIZE];
        bytes[0..MERCHANT_START].copy_from_slice(&self.total_size.to_le_bytes());
        bytes[MERCHANT_START..CUSTOMER_START].copy_from_slice(&self.merchant_id);
        bytes[CUSTOMER_START..COUNT_START].copy_from_slice(&self.customer_id);
        bytes[COUNT_START..].copy_from_slice(&self.record_count.to_le_bytes());
        bytes
    }
}

/// Record header - first 8 bytes of every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Record size in bytes, these 8 header bytes included.
    pub size: u32,
    /// Raw type tag (see `RecordKind::from_tag`).
    pub record_type: u32,
}

impl RecordHeader {
    pub fn from_bytes(bytes: &[u8; RECORD_HEADER_SIZE]) -> Self {
        Self {
            size: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            record_type: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_HEADER_SIZE] {
        let mut bytes = [0u8; RECORD_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.size.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.record_type.to_le_bytes());
        bytes
    }

    /// Payload size claimed by the header. Sizes below 8 claim nothing.
    pub fn claimed_payload(&self) -> usize {
        (self.size as usize).saturating_sub(RECORD_HEADER_SIZE)
    }
}
