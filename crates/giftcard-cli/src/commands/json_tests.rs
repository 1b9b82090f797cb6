use giftcard_format::{AmountChange, GiftCard, Message, PROGRAM_CODE_SIZE, Program, Record};

use super::json::render_json;

fn id<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf[..bytes.len()].copy_from_slice(bytes);
    buf
}

#[test]
fn amounts_and_messages() {
    let mut card = GiftCard::new(id(b"merchant-0001"), id(b"alice"));
    card.push(Record::AmountChange(AmountChange::credit(2000, id(b"sig-abc"))));
    card.push(Record::AmountChange(AmountChange::debit(-500)));
    card.push(Record::AmountChange(AmountChange::credit(0, id(b"hidden"))));
    card.push(Record::Message(Message::from_text("Happy Birthday!")));

    insta::assert_snapshot!(render_json(&card).unwrap(), @r#"
    {
      "merchant_id": "merchant-0001",
      "customer_id": "alice",
      "total_value": 1500,
      "records": [
        {
          "record_type": "amount_change",
          "amount_added": 2000,
          "signature": "sig-abc"
        },
        {
          "record_type": "amount_change",
          "amount_added": -500
        },
        {
          "record_type": "amount_change",
          "amount_added": 0
        },
        {
          "record_type": "message",
          "message": "Happy Birthday!"
        }
      ]
    }
    "#);
}

#[test]
fn program_is_hex_and_not_run() {
    let mut code = [0u8; PROGRAM_CODE_SIZE];
    code[..6].copy_from_slice(&[0x04, 0x5a, 0x00, 0x02, 0x00, 0x00]);
    let mut card = GiftCard::new(id(b"m"), id(b"c"));
    card.push(Record::Program(Program::new(id(b"A"), code)));

    let json = render_json(&card).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value["records"][0];

    assert_eq!(record["record_type"], "animated message");
    assert_eq!(record["message"], "A");
    let hex = record["program"].as_str().unwrap();
    assert_eq!(hex.len(), PROGRAM_CODE_SIZE * 2);
    assert!(hex.starts_with("045a00020000"));
    assert!(hex[12..].bytes().all(|b| b == b'0'));
}

#[test]
fn strings_drop_high_bytes_and_escape() {
    let mut card = GiftCard::new(id(b"caf\xe9 \"bar\"\n"), id(b"tab\there\0ignored"));
    card.push(Record::Message(Message::from_bytes(b"\xff\xfeok\\\0".to_vec())));

    let json = render_json(&card).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(json.contains(r#""merchant_id": "caf \"bar\"\n""#));
    assert_eq!(value["merchant_id"], "caf \"bar\"\n");
    assert_eq!(value["customer_id"], "tab\there");
    assert_eq!(value["records"][0]["message"], "ok\\");
}

#[test]
fn empty_card_has_empty_records() {
    let card = GiftCard::new(id(b""), id(b""));

    let value: serde_json::Value = serde_json::from_str(&render_json(&card).unwrap()).unwrap();

    assert_eq!(value["merchant_id"], "");
    assert_eq!(value["total_value"], 0);
    assert_eq!(value["records"], serde_json::json!([]));
}
