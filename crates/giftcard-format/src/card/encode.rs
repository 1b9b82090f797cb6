//! Gift card encoder.
//!
//! Computes every size field from the payloads, so any card built in
//! memory encodes to a stream the decoder accepts.

use super::header::{CardHeader, RecordHeader};
use super::record::{AmountChange, GiftCard, Record};
use super::{
    CARD_HEADER_SIZE, PROGRAM_CODE_SIZE, PROGRAM_MESSAGE_SIZE, RECORD_HEADER_SIZE,
    SIGNATURE_SIZE,
};

/// Encode a gift card to its binary form.
///
/// # Panics
///
/// Panics if the encoded card, a record, or the record count does not fit
/// the format's 32-bit size fields.
pub fn encode(card: &GiftCard) -> Vec<u8> {
    let body_size: usize = card.records.iter().map(encoded_record_size).sum();
    let total_size = CARD_HEADER_SIZE + body_size;

    let header = CardHeader {
        total_size: size_field(total_size),
        merchant_id: card.merchant_id,
        customer_id: card.customer_id,
        record_count: size_field(card.records.len()),
    };

    let mut out = Vec::with_capacity(total_size);
    out.extend_from_slice(&header.to_bytes());
    for record in &card.records {
        encode_record(&mut out, record);
    }
    debug_assert_eq!(out.len(), total_size);
    out
}

fn encoded_record_size(record: &Record) -> usize {
    RECORD_HEADER_SIZE
        + match record {
            Record::AmountChange(a) => amount_payload_size(a),
            Record::Message(m) => m.as_bytes().len(),
            Record::Program(_) => PROGRAM_MESSAGE_SIZE + PROGRAM_CODE_SIZE,
        }
}

fn amount_payload_size(a: &AmountChange) -> usize {
    if a.has_signature_field() {
        4 + SIGNATURE_SIZE
    } else {
        4
    }
}

fn encode_record(out: &mut Vec<u8>, record: &Record) {
    let header = RecordHeader {
        size: size_field(encoded_record_size(record)),
        record_type: record.kind().tag(),
    };
    out.extend_from_slice(&header.to_bytes());

    match record {
        Record::AmountChange(a) => {
            out.extend_from_slice(&a.amount.to_le_bytes());
            if a.has_signature_field() {
                // A credit built without a signature still needs the field.
                out.extend_from_slice(&a.signature.unwrap_or([0; SIGNATURE_SIZE]));
            }
        }
        Record::Message(m) => out.extend_from_slice(m.as_bytes()),
        Record::Program(p) => {
            out.extend_from_slice(&p.message);
            out.extend_from_slice(&p.code);
        }
    }
}

/// `n` as a wire size field.
pub(super) fn size_field(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("size {n} does not fit a 32-bit size field"))
}
