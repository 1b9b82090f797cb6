//! Execution outcome types.

use std::fmt;

use super::DisplayLog;

/// Why execution stopped.
///
/// None of these is an error for the host: an invalid opcode only ends
/// this program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// An `end` instruction.
    End,
    /// The program counter does not address a whole instruction.
    /// This is the normal way for a program without `end` to finish.
    OutOfCode { pc: i64 },
    /// The step ceiling was reached.
    StepLimit { limit: u32 },
    /// Unassigned opcode byte.
    InvalidOpcode { pc: usize, opcode: u8 },
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(f, "end of program"),
            Self::OutOfCode { pc } => write!(f, "program counter {pc} outside code"),
            Self::StepLimit { limit } => write!(f, "step limit of {limit} reached"),
            Self::InvalidOpcode { pc, opcode } => {
                write!(f, "invalid opcode {opcode:#04x} at offset {pc:#04x}")
            }
        }
    }
}

/// Guard failure that turned an instruction into a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// Register index not below 16.
    Register(u8),
    /// Cursor is outside the message buffer.
    Cursor(usize),
    /// A move would leave the message buffer.
    Move { cursor: usize, offset: i8 },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(r) => write!(f, "register r{r} out of range"),
            Self::Cursor(c) => write!(f, "cursor {c} outside message"),
            Self::Move { cursor, offset } => {
                write!(f, "move by {offset} from cursor {cursor} leaves message")
            }
        }
    }
}

/// Result of running one program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    pub displays: DisplayLog,
    pub halt: Halt,
    /// Instructions executed.
    pub steps: u32,
}

impl Execution {
    /// Whether the program stopped on its own (`end` or running off the code).
    pub fn finished(&self) -> bool {
        matches!(self.halt, Halt::End | Halt::OutOfCode { .. })
    }
}
