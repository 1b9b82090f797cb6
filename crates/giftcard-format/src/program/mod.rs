//! Program bytecode for animated message records.
//!
//! A program is a flat array of 3-byte instructions: opcode, arg1, arg2.
//! Arithmetic instructions set the zero flag; jumps are relative to the end
//! of the jumping instruction.

mod asm;
mod disasm;

#[cfg(test)]
mod disasm_tests;

pub use asm::{AsmError, assemble, assemble_program};
pub use disasm::disassemble;

/// Size of one encoded instruction.
pub const INSTRUCTION_SIZE: usize = 3;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 16;

/// Program opcodes. Byte values outside this set are invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// No-op; also the padding after the last instruction.
    Nop,
    /// `reg[arg1] = message[cursor]`
    Get,
    /// `message[cursor] = reg[arg1]`
    Put,
    /// `cursor += arg1` (signed)
    Move,
    /// `reg[arg2] = arg1`
    LoadConst,
    /// `reg[arg1] ^= reg[arg2]`
    Xor,
    /// `reg[arg1] += reg[arg2]` (wrapping)
    Add,
    /// Emit the whole message buffer.
    Display,
    End,
    /// `pc += arg1` (signed, from the next instruction)
    Jump,
    /// Jump when the zero flag is set.
    JumpIfZero,
}

impl Opcode {
    pub const ALL: [Opcode; 11] = [
        Self::Nop,
        Self::Get,
        Self::Put,
        Self::Move,
        Self::LoadConst,
        Self::Xor,
        Self::Add,
        Self::Display,
        Self::End,
        Self::Jump,
        Self::JumpIfZero,
    ];

    /// Decode from bytecode byte. Unassigned values return `None`.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Self::Nop),
            0x01 => Some(Self::Get),
            0x02 => Some(Self::Put),
            0x03 => Some(Self::Move),
            0x04 => Some(Self::LoadConst),
            0x05 => Some(Self::Xor),
            0x06 => Some(Self::Add),
            0x07 => Some(Self::Display),
            0x08 => Some(Self::End),
            0x09 => Some(Self::Jump),
            0x10 => Some(Self::JumpIfZero),
            _ => None,
        }
    }

    /// Encode for bytecode.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Nop => 0x00,
            Self::Get => 0x01,
            Self::Put => 0x02,
            Self::Move => 0x03,
            Self::LoadConst => 0x04,
            Self::Xor => 0x05,
            Self::Add => 0x06,
            Self::Display => 0x07,
            Self::End => 0x08,
            Self::Jump => 0x09,
            Self::JumpIfZero => 0x10,
        }
    }

    /// Assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Get => "getch",
            Self::Put => "putch",
            Self::Move => "movcurs",
            Self::LoadConst => "mov",
            Self::Xor => "xor",
            Self::Add => "add",
            Self::Display => "disp",
            Self::End => "end",
            Self::Jump => "jmp",
            Self::JumpIfZero => "jz",
        }
    }

    /// Case-insensitive mnemonic lookup.
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
    }

    /// Operand shapes `(arg1, arg2)`.
    pub fn operands(self) -> (Operand, Operand) {
        match self {
            Self::Nop | Self::Display | Self::End => (Operand::Empty, Operand::Empty),
            Self::Get | Self::Put => (Operand::Reg, Operand::Empty),
            Self::Move => (Operand::Const, Operand::Empty),
            Self::LoadConst => (Operand::Const, Operand::Reg),
            Self::Xor | Self::Add => (Operand::Reg, Operand::Reg),
            Self::Jump | Self::JumpIfZero => (Operand::Label, Operand::Empty),
        }
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Self::Jump | Self::JumpIfZero)
    }
}

/// Operand kind as written in assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Empty,
    /// Register `rN`.
    Reg,
    /// Hex constant.
    Const,
    /// Jump target: label or numeric offset.
    Label,
}

impl Operand {
    pub fn is_present(self) -> bool {
        self != Self::Empty
    }
}

/// One decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub arg1: u8,
    pub arg2: u8,
}

impl Instruction {
    pub fn new(opcode: Opcode, arg1: u8, arg2: u8) -> Self {
        Self { opcode, arg1, arg2 }
    }

    /// Decode from 3 bytes. Returns `None` for an invalid opcode.
    pub fn from_bytes(bytes: [u8; INSTRUCTION_SIZE]) -> Option<Self> {
        let opcode = Opcode::from_byte(bytes[0])?;
        Some(Self::new(opcode, bytes[1], bytes[2]))
    }

    pub fn to_bytes(self) -> [u8; INSTRUCTION_SIZE] {
        [self.opcode.to_byte(), self.arg1, self.arg2]
    }

    /// `arg1` as a signed offset (jumps and cursor moves).
    pub fn jump_offset(self) -> i8 {
        self.arg1 as i8
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a1, a2) = self.opcode.operands();
        write!(f, "{}", self.opcode.mnemonic())?;
        if a1.is_present() {
            write!(f, " {}", format_operand(self.arg1, a1))?;
        }
        if a2.is_present() {
            write!(f, ", {}", format_operand(self.arg2, a2))?;
        }
        Ok(())
    }
}

fn format_operand(value: u8, operand: Operand) -> String {
    match operand {
        Operand::Reg => format!("r{value}"),
        Operand::Const | Operand::Label => format!("{value:#x}"),
        Operand::Empty => String::new(),
    }
}
