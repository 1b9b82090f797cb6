//! Plain-text card listing.
//!
//! ```text
//!    Merchant ID:                    merchant-0001
//!    Customer ID:                            alice
//!    Num records: 1
//!       record:type: amount_change
//!       amount_added: 2000
//!       signature:                      [signature]
//!   Total value: 2000
//! ```
//! Animated messages run their program while the listing is built; each
//! displayed frame becomes one line after `[running embedded program]`.

use std::fmt::Write as _;

use giftcard_format::{GiftCard, Program, Record, RecordKind};

use super::c_str;

/// Label printed for a record kind.
pub fn kind_label(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::AmountChange => "amount_change",
        RecordKind::Message => "message",
        RecordKind::Program => "animated message",
    }
}

/// Render `card`, calling `run` on every program record in order.
///
/// `run` returns the displayed frames as text and may mutate the program's
/// message buffer.
pub fn render_text<F>(card: &mut GiftCard, mut run: F) -> String
where
    F: FnMut(&mut Program) -> Vec<String>,
{
    let mut out = String::new();
    writeln!(out, "   Merchant ID: {:>32}", c_str(&card.merchant_id)).unwrap();
    writeln!(out, "   Customer ID: {:>32}", c_str(&card.customer_id)).unwrap();
    writeln!(out, "   Num records: {}", card.record_count()).unwrap();

    let total = card.total_value();
    for record in &mut card.records {
        writeln!(out, "      record:type: {}", kind_label(record.kind())).unwrap();
        match record {
            Record::AmountChange(change) => {
                writeln!(out, "      amount_added: {}", change.amount).unwrap();
                if change.amount > 0 {
                    let signature = change.signature.unwrap_or_default();
                    writeln!(out, "      signature: {:>32}", c_str(&signature)).unwrap();
                }
            }
            Record::Message(message) => {
                writeln!(out, "      message: {}", c_str(message.text())).unwrap();
            }
            Record::Program(program) => {
                writeln!(out, "      message: {}", c_str(program.text())).unwrap();
                writeln!(out, "  [running embedded program]").unwrap();
                for frame in run(program) {
                    writeln!(out, "{frame}").unwrap();
                }
            }
        }
    }

    writeln!(out, "  Total value: {total}").unwrap();
    writeln!(out).unwrap();
    out
}
