//! Human-readable program listing.
//!
//! Format, one line per instruction:
//! ```text
//!    L0:
//! 00:    04 41 00    mov 0x41, r0
//! 03:    09 fd 00    jmp L0
//! ```
//! Jump targets get an `L{index}` label line; trailing zero padding is
//! omitted.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use super::{INSTRUCTION_SIZE, Instruction, Opcode};

/// Disassemble program bytes into a listing.
pub fn disassemble(code: &[u8]) -> String {
    let slots = decode_slots(code);

    let targets: BTreeSet<i64> = slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            let instr = slot.instruction.filter(|ins| ins.opcode.is_jump())?;
            Some(jump_target(i, instr))
        })
        .collect();

    let mut out = String::new();
    for (i, slot) in slots.iter().enumerate() {
        if targets.contains(&(i as i64)) {
            writeln!(out, "   L{i}:").unwrap();
        }
        let [b0, b1, b2] = slot.bytes;
        let text = match slot.instruction {
            Some(instr) if instr.opcode.is_jump() => {
                format!("{} L{}", instr.opcode.mnemonic(), jump_target(i, instr))
            }
            Some(instr) => instr.to_string(),
            None => format!("invalid {b0:#04x}"),
        };
        writeln!(
            out,
            "{:02x}:    {b0:02x} {b1:02x} {b2:02x}    {text}",
            i * INSTRUCTION_SIZE
        )
        .unwrap();
    }
    out
}

struct Slot {
    bytes: [u8; INSTRUCTION_SIZE],
    instruction: Option<Instruction>,
}

fn decode_slots(code: &[u8]) -> Vec<Slot> {
    let nop = Opcode::Nop.to_byte();
    let used = code.iter().rposition(|&b| b != nop).map_or(0, |p| p + 1);

    code[..used]
        .chunks(INSTRUCTION_SIZE)
        .map(|chunk| {
            let mut bytes = [nop; INSTRUCTION_SIZE];
            bytes[..chunk.len()].copy_from_slice(chunk);
            Slot {
                bytes,
                instruction: Instruction::from_bytes(bytes),
            }
        })
        .collect()
}

/// Instruction index a jump at `index` lands on. Offsets that are not a
/// multiple of 3 land mid-instruction and round toward negative infinity.
fn jump_target(index: usize, instr: Instruction) -> i64 {
    let next = (index as i64 + 1) * INSTRUCTION_SIZE as i64;
    (next + i64::from(instr.jump_offset())).div_euclid(INSTRUCTION_SIZE as i64)
}
