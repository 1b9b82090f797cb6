//! Gift card decoder.
//!
//! Declared sizes are never trusted over the bytes actually available:
//! the total size must match the medium, message payloads are clamped to
//! what remains, and the declared record count is checked at the end.

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use super::DecodeError;
use super::header::{CardHeader, RecordHeader};
use super::reader::ByteReader;
use super::record::{AmountChange, GiftCard, Message, Program, Record, RecordKind};

/// Decode a gift card from an in-memory buffer.
///
/// The buffer length is the authoritative file size.
pub fn decode(bytes: &[u8]) -> Result<GiftCard, DecodeError> {
    Decoder::new(bytes).decode()
}

/// Decode a gift card from a seekable source.
///
/// The size is taken from the medium (seek to end) and checked against the
/// size field before anything past it is read.
pub fn decode_from<R: Read + Seek>(mut source: R) -> Result<GiftCard, DecodeError> {
    let file_size = source.seek(SeekFrom::End(0))?;
    source.rewind()?;

    let mut bytes = Vec::with_capacity(SIZE_FIELD_LEN);
    source
        .by_ref()
        .take(SIZE_FIELD_LEN as u64)
        .read_to_end(&mut bytes)?;
    let Ok(size_field) = <[u8; SIZE_FIELD_LEN]>::try_from(bytes.as_slice()) else {
        // Too short to hold the size field; the decoder reports the truncation.
        return decode(&bytes);
    };

    let total_size = u32::from_le_bytes(size_field);
    if u64::from(total_size) != file_size {
        return Err(DecodeError::SizeMismatch {
            header: total_size,
            actual: file_size,
        });
    }

    bytes.reserve((total_size as usize).saturating_sub(SIZE_FIELD_LEN));
    source
        .take(file_size.saturating_sub(SIZE_FIELD_LEN as u64))
        .read_to_end(&mut bytes)?;
    let read = bytes.len() as u64;
    if read < file_size {
        return Err(DecodeError::TruncatedInput {
            offset: bytes.len(),
            needed: (file_size - read) as usize,
            available: 0,
        });
    }

    decode(&bytes)
}

/// Width of the leading `total_size` field.
const SIZE_FIELD_LEN: usize = 4;

struct Decoder<'a> {
    reader: ByteReader<'a>,
    file_size: u64,
}

impl<'a> Decoder<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(bytes),
            file_size: bytes.len() as u64,
        }
    }

    fn decode(mut self) -> Result<GiftCard, DecodeError> {
        let header = self.decode_header()?;
        debug!(
            total_size = header.total_size,
            record_count = header.record_count,
            "decoded card header"
        );

        let mut card = GiftCard::new(header.merchant_id, header.customer_id);
        while !self.reader.is_exhausted() {
            let record = self.decode_record()?;
            card.push(record);
        }

        if card.record_count() != header.record_count as usize {
            return Err(DecodeError::RecordCountMismatch {
                declared: header.record_count,
                actual: card.record_count(),
            });
        }

        Ok(card)
    }

    fn decode_header(&mut self) -> Result<CardHeader, DecodeError> {
        // Size check precedes every other field.
        let total_size = self.reader.read_u32_le()?;
        if u64::from(total_size) != self.file_size {
            return Err(DecodeError::SizeMismatch {
                header: total_size,
                actual: self.file_size,
            });
        }

        Ok(CardHeader {
            total_size,
            merchant_id: self.reader.read_array()?,
            customer_id: self.reader.read_array()?,
            record_count: self.reader.read_u32_le()?,
        })
    }

    fn decode_record(&mut self) -> Result<Record, DecodeError> {
        let start = self.reader.offset();
        let header = RecordHeader::from_bytes(&self.reader.read_array()?);

        let Some(kind) = RecordKind::from_tag(header.record_type) else {
            return Err(DecodeError::UnknownRecordType {
                record_type: header.record_type,
                offset: start,
            });
        };

        let record = match kind {
            RecordKind::AmountChange => Record::AmountChange(self.decode_amount()?),
            RecordKind::Message => Record::Message(self.decode_message(header)?),
            RecordKind::Program => Record::Program(Program::new(
                self.reader.read_array()?,
                self.reader.read_array()?,
            )),
        };

        let consumed = self.reader.offset() - start;
        if consumed != header.size as usize {
            debug!(
                offset = start,
                declared = header.size,
                consumed,
                "record size disagrees with payload"
            );
        }
        debug!(offset = start, ?kind, consumed, "decoded record");

        Ok(record)
    }

    fn decode_amount(&mut self) -> Result<AmountChange, DecodeError> {
        let amount = self.reader.read_i32_le()?;
        let signature = if amount >= 0 {
            Some(self.reader.read_array()?)
        } else {
            None
        };
        Ok(AmountChange { amount, signature })
    }

    fn decode_message(&mut self, header: RecordHeader) -> Result<Message, DecodeError> {
        let len = header.claimed_payload().min(self.reader.remaining());
        let mut bytes = self.reader.read_slice(len)?.to_vec();
        // Termination is enforced here, whatever the last byte was.
        if let Some(last) = bytes.last_mut() {
            *last = 0;
        }
        Ok(Message::from_bytes(bytes))
    }
}
