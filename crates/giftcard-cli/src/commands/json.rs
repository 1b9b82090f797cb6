//! JSON card listing.
//!
//! Programs are not executed; their code is emitted as lowercase hex.

use std::fmt::Write as _;

use giftcard_format::{GiftCard, Record};
use serde::Serialize;

use super::text::kind_label;

#[derive(Debug, Serialize)]
pub struct CardJson {
    pub merchant_id: String,
    pub customer_id: String,
    pub total_value: i64,
    pub records: Vec<RecordJson>,
}

#[derive(Debug, Serialize)]
pub struct RecordJson {
    pub record_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_added: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl CardJson {
    pub fn from_card(card: &GiftCard) -> Self {
        Self {
            merchant_id: ascii_text(&card.merchant_id),
            customer_id: ascii_text(&card.customer_id),
            total_value: card.total_value(),
            records: card.records.iter().map(RecordJson::from_record).collect(),
        }
    }
}

impl RecordJson {
    fn from_record(record: &Record) -> Self {
        let mut out = Self {
            record_type: kind_label(record.kind()),
            amount_added: None,
            signature: None,
            message: None,
            program: None,
        };
        match record {
            Record::AmountChange(change) => {
                out.amount_added = Some(change.amount);
                if change.amount > 0 {
                    out.signature = Some(ascii_text(&change.signature.unwrap_or_default()));
                }
            }
            Record::Message(message) => out.message = Some(ascii_text(message.text())),
            Record::Program(program) => {
                out.message = Some(ascii_text(program.text()));
                out.program = Some(hex(&program.code));
            }
        }
        out
    }
}

/// Render `card` as pretty-printed JSON.
pub fn render_json(card: &GiftCard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CardJson::from_card(card))
}

/// Bytes up to the first NUL, with non-ASCII bytes dropped.
fn ascii_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect()
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(out, "{b:02x}").unwrap();
    }
    out
}
