//! Text assembler for program bytecode.
//!
//! Syntax, one instruction per line:
//! ```text
//! ; comment
//! loop:
//!     mov 0x01, r1
//!     getch r0
//!     add r0, r1
//!     putch r0
//!     disp
//!     jmp loop
//! ```
//! Constants are hex. Jump targets are labels or numeric byte offsets,
//! both relative to the end of the jumping instruction.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use super::{INSTRUCTION_SIZE, Instruction, Opcode, Operand, REGISTER_COUNT};
use crate::card::PROGRAM_CODE_SIZE;

/// Errors that can occur while assembling. Line numbers are 1-based.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: unknown opcode: {name}")]
    UnknownOpcode { line: usize, name: String },

    #[error("line {line}: wrong number of arguments for opcode {name} (expected {expected}, got {got})")]
    WrongArgCount {
        line: usize,
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: expected register, got {arg}")]
    ExpectedRegister { line: usize, arg: String },

    #[error("line {line}: invalid constant: {arg}")]
    InvalidConstant { line: usize, arg: String },

    #[error("line {line}: undefined label: {label}")]
    UndefinedLabel { line: usize, label: String },

    #[error("line {line}: duplicate label: {label}")]
    DuplicateLabel { line: usize, label: String },

    #[error("line {line}: jump offset {offset} does not fit in a signed byte")]
    OffsetOutOfRange { line: usize, offset: i64 },

    #[error("assembled program is {len} bytes, limit is {limit}")]
    ProgramTooLong { len: usize, limit: usize },
}

/// Instruction waiting for its label to be resolved.
struct Pending<'s> {
    instr: Instruction,
    label: Option<&'s str>,
    line: usize,
}

/// Assemble source text into raw bytecode (no padding).
pub fn assemble(source: &str) -> Result<Vec<u8>, AsmError> {
    let mut labels: HashMap<&str, usize> = HashMap::new();
    let mut pending = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let code = raw.split(';').next().unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }
        if let Some(name) = label_definition(code) {
            if labels.insert(name, pending.len()).is_some() {
                return Err(AsmError::DuplicateLabel {
                    line,
                    label: name.to_string(),
                });
            }
            continue;
        }
        pending.push(parse_instruction(code, line)?);
    }

    let mut out = Vec::with_capacity(pending.len() * INSTRUCTION_SIZE);
    for (index, p) in pending.iter().enumerate() {
        let mut instr = p.instr;
        if let Some(label) = p.label {
            let Some(&target) = labels.get(label) else {
                return Err(AsmError::UndefinedLabel {
                    line: p.line,
                    label: label.to_string(),
                });
            };
            instr.arg1 = relative_offset(index, target, p.line)?;
        }
        out.extend_from_slice(&instr.to_bytes());
    }
    Ok(out)
}

/// Assemble into a full program buffer, padded with `nop`.
pub fn assemble_program(source: &str) -> Result<[u8; PROGRAM_CODE_SIZE], AsmError> {
    let bytes = assemble(source)?;
    if bytes.len() > PROGRAM_CODE_SIZE {
        return Err(AsmError::ProgramTooLong {
            len: bytes.len(),
            limit: PROGRAM_CODE_SIZE,
        });
    }
    let mut program = [Opcode::Nop.to_byte(); PROGRAM_CODE_SIZE];
    program[..bytes.len()].copy_from_slice(&bytes);
    Ok(program)
}

fn label_definition(code: &str) -> Option<&str> {
    let name = code.strip_suffix(':')?;
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_word.then_some(name)
}

fn parse_instruction(code: &str, line: usize) -> Result<Pending<'_>, AsmError> {
    let mut parts = code
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let opcode = Opcode::from_mnemonic(name).ok_or_else(|| AsmError::UnknownOpcode {
        line,
        name: name.to_string(),
    })?;

    let (a1, a2) = opcode.operands();
    let expected = usize::from(a1.is_present()) + usize::from(a2.is_present());
    if args.len() != expected {
        return Err(AsmError::WrongArgCount {
            line,
            name: opcode.mnemonic().to_string(),
            expected,
            got: args.len(),
        });
    }

    let mut values = [0u8; 2];
    let mut label = None;
    for (slot, (arg, kind)) in args.iter().zip([a1, a2]).enumerate() {
        match kind {
            Operand::Reg => values[slot] = parse_register(arg, line)?,
            Operand::Const => values[slot] = parse_constant(arg, line)?,
            Operand::Label => match parse_int_auto(arg) {
                Some(n) => {
                    values[slot] = to_byte(n).ok_or_else(|| AsmError::InvalidConstant {
                        line,
                        arg: arg.to_string(),
                    })?;
                    if n % INSTRUCTION_SIZE as i64 != 0 {
                        warn!(line, offset = n, "numeric jump offset is not a multiple of 3");
                    }
                }
                None => label = Some(*arg),
            },
            Operand::Empty => {}
        }
    }

    Ok(Pending {
        instr: Instruction::new(opcode, values[0], values[1]),
        label,
        line,
    })
}

fn parse_register(arg: &str, line: usize) -> Result<u8, AsmError> {
    let reg = arg
        .strip_prefix('r')
        .and_then(|n| n.parse::<u8>().ok())
        .ok_or_else(|| AsmError::ExpectedRegister {
            line,
            arg: arg.to_string(),
        })?;
    if usize::from(reg) >= REGISTER_COUNT {
        warn!(line, register = reg, "register number too high");
    }
    Ok(reg)
}

fn parse_constant(arg: &str, line: usize) -> Result<u8, AsmError> {
    let (negative, digits) = split_sign(arg);
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    i64::from_str_radix(digits, 16)
        .ok()
        .filter(|_| !digits.starts_with(['+', '-']))
        .and_then(|n| to_byte(if negative { -n } else { n }))
        .ok_or_else(|| AsmError::InvalidConstant {
            line,
            arg: arg.to_string(),
        })
}

/// Integer with an optional sign and radix prefix (`0x`, `0o`, `0b`).
fn parse_int_auto(arg: &str) -> Option<i64> {
    let (negative, digits) = split_sign(arg);
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };
    if body.is_empty() || body.starts_with(['+', '-']) {
        return None;
    }
    let n = i64::from_str_radix(body, radix).ok()?;
    Some(if negative { -n } else { n })
}

fn split_sign(arg: &str) -> (bool, &str) {
    match arg.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, arg.strip_prefix('+').unwrap_or(arg)),
    }
}

/// Signed or unsigned value as a raw byte.
fn to_byte(n: i64) -> Option<u8> {
    match n {
        -128..=-1 => Some(n as i8 as u8),
        0..=255 => Some(n as u8),
        _ => None,
    }
}

fn relative_offset(index: usize, target: usize, line: usize) -> Result<u8, AsmError> {
    let offset = (target as i64 - index as i64 - 1) * INSTRUCTION_SIZE as i64;
    i8::try_from(offset)
        .map(|o| o as u8)
        .map_err(|_| AsmError::OffsetOutOfRange { line, offset })
}
