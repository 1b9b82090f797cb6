//! Gift card record format.
//!
//! This crate contains:
//! - The decoded data model (GiftCard, Record and its payloads)
//! - The binary decoder and encoder for the length-prefixed record stream
//! - Program bytecode definitions (Opcode, Instruction) with an assembler
//!   and disassembler

pub mod card;
pub mod program;

// Re-export commonly used items at crate root
pub use card::{
    AmountChange, CARD_HEADER_SIZE, CUSTOMER_ID_SIZE, CardHeader, DecodeError, GiftCard,
    MERCHANT_ID_SIZE, Message, PROGRAM_CODE_SIZE, PROGRAM_MESSAGE_SIZE, Program,
    RECORD_HEADER_SIZE, Record, RecordHeader, RecordKind, SIGNATURE_SIZE, decode, decode_from,
    encode,
};
pub use program::{
    AsmError, INSTRUCTION_SIZE, Instruction, Opcode, Operand, REGISTER_COUNT, assemble,
    assemble_program, disassemble,
};
