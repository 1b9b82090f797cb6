//! Tests for the record model.

use super::*;

#[test]
fn record_kind_tags() {
    assert_eq!(RecordKind::from_tag(1), Some(RecordKind::AmountChange));
    assert_eq!(RecordKind::from_tag(2), Some(RecordKind::Message));
    assert_eq!(RecordKind::from_tag(3), Some(RecordKind::Program));
    assert_eq!(RecordKind::from_tag(0), None);
    assert_eq!(RecordKind::from_tag(4), None);
    assert_eq!(RecordKind::Program.tag(), 3);
}

#[test]
fn total_value_is_signed_sum() {
    let mut card = GiftCard::new([0; 32], [0; 32]);
    card.push(Record::AmountChange(AmountChange::credit(2000, [0; 32])));
    card.push(Record::Message(Message::from_text("hi")));
    card.push(Record::AmountChange(AmountChange::debit(-500)));

    assert_eq!(card.total_value(), 1500);
}

#[test]
fn total_value_does_not_overflow() {
    let mut card = GiftCard::new([0; 32], [0; 32]);
    card.push(Record::AmountChange(AmountChange::credit(i32::MAX, [0; 32])));
    card.push(Record::AmountChange(AmountChange::credit(i32::MAX, [0; 32])));

    assert_eq!(card.total_value(), 2 * i64::from(i32::MAX));
}

#[test]
fn message_text_stops_at_nul() {
    let m = Message::from_bytes(b"abc\0def\0".to_vec());

    assert_eq!(m.text(), b"abc");
    assert_eq!(m.as_bytes().len(), 8);
}

#[test]
fn message_without_nul_uses_all_bytes() {
    let m = Message::from_bytes(b"abc".to_vec());
    assert_eq!(m.text(), b"abc");
}

#[test]
fn programs_mut_yields_only_programs() {
    let mut card = GiftCard::new([0; 32], [0; 32]);
    card.push(Record::Message(Message::from_text("hi")));
    card.push(Record::Program(Program::new([b'a'; 32], [0; 256])));

    for program in card.programs_mut() {
        program.message[0] = b'Z';
    }

    let Record::Program(p) = &card.records[1] else {
        panic!("expected program");
    };
    assert_eq!(p.message[0], b'Z');
}
