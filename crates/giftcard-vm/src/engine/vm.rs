//! Virtual machine for gift card animation programs.
//!
//! Programs come from untrusted card producers. The VM only touches the
//! message buffer and code buffer it is given:
//! - register indices are checked against `REGISTER_COUNT`
//! - message accesses are checked against the buffer length
//! - the program counter must address a whole instruction before fetch
//! - total executed instructions are capped by `StepLimits`
//!
//! Failed guards on data instructions turn them into no-ops. Only the
//! conditions in `Halt` stop execution.

use giftcard_format::{INSTRUCTION_SIZE, Instruction, Opcode, REGISTER_COUNT};
use tracing::warn;

use super::display::DisplayLog;
use super::halt::{Execution, Halt, Skip};
use super::trace::{NoopTracer, Tracer};

/// Default step ceiling.
pub const DEFAULT_MAX_STEPS: u32 = 100_000;

/// Runtime limits for program execution.
#[derive(Clone, Copy, Debug)]
pub struct StepLimits {
    /// Maximum executed instructions (default: 100,000).
    pub(crate) max_steps: u32,
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl StepLimits {
    /// Create new step limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step ceiling.
    pub fn max_steps(mut self, steps: u32) -> Self {
        self.max_steps = steps;
        self
    }

    pub fn get_max_steps(&self) -> u32 {
        self.max_steps
    }
}

/// Program interpreter.
///
/// Holds only configuration; each `execute` call starts from a fresh
/// machine state.
#[derive(Clone, Copy, Debug, Default)]
pub struct VM {
    limits: StepLimits,
}

impl VM {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: StepLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> StepLimits {
        self.limits
    }

    /// Run `code` against `message`, mutating it in place.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn execute(&self, message: &mut [u8], code: &[u8]) -> Execution {
        self.execute_with(message, code, &mut NoopTracer)
    }

    /// Run with a tracer for debugging.
    pub fn execute_with<T: Tracer>(
        &self,
        message: &mut [u8],
        code: &[u8],
        tracer: &mut T,
    ) -> Execution {
        let mut machine = Machine::new(message);
        let halt = machine.run(code, self.limits.max_steps, tracer);
        tracer.trace_halt(&halt, machine.steps);

        Execution {
            displays: machine.displays,
            halt,
            steps: machine.steps,
        }
    }
}

/// Run a program with default limits and return the displayed text.
pub fn run_program(message: &mut [u8], code: &[u8]) -> Vec<String> {
    VM::new().execute(message, code).displays.to_strings()
}

/// Outcome of a single instruction.
enum Flow {
    /// Continue at this program counter.
    Next(i64),
    Halt(Halt),
}

/// Mutable machine state for one run.
struct Machine<'m> {
    message: &'m mut [u8],
    registers: [u8; REGISTER_COUNT],
    /// Index into `message`.
    cursor: usize,
    zero_flag: bool,
    steps: u32,
    displays: DisplayLog,
}

impl<'m> Machine<'m> {
    fn new(message: &'m mut [u8]) -> Self {
        Self {
            message,
            registers: [0; REGISTER_COUNT],
            cursor: 0,
            zero_flag: false,
            steps: 0,
            displays: DisplayLog::new(),
        }
    }

    fn run<T: Tracer>(&mut self, code: &[u8], max_steps: u32, tracer: &mut T) -> Halt {
        let mut pc: i64 = 0;
        loop {
            let Some((addr, bytes)) = fetch(code, pc) else {
                return Halt::OutOfCode { pc };
            };

            if self.steps >= max_steps {
                return Halt::StepLimit { limit: max_steps };
            }
            self.steps += 1;

            let Some(instr) = Instruction::from_bytes(bytes) else {
                let opcode = bytes[0];
                warn!(
                    "invalid opcode {:#04x} at offset {:#04x} encountered in gift card program",
                    opcode, addr
                );
                return Halt::InvalidOpcode { pc: addr, opcode };
            };

            tracer.trace_instruction(addr, &instr);
            let flow = self.exec(addr, instr, tracer);
            tracer.trace_state(&self.registers, self.cursor, self.zero_flag);

            match flow {
                Flow::Next(next) => pc = next,
                Flow::Halt(halt) => return halt,
            }
        }
    }

    fn exec<T: Tracer>(&mut self, pc: usize, instr: Instruction, tracer: &mut T) -> Flow {
        let next = (pc + INSTRUCTION_SIZE) as i64;
        let guard = match instr.opcode {
            Opcode::Nop => Ok(()),
            Opcode::Get => self.get(instr.arg1),
            Opcode::Put => self.put(instr.arg1),
            Opcode::Move => self.move_cursor(instr.jump_offset()),
            Opcode::LoadConst => register(instr.arg2).map(|r| self.registers[r] = instr.arg1),
            Opcode::Xor => self.arith(instr.arg1, instr.arg2, |a, b| a ^ b),
            Opcode::Add => self.arith(instr.arg1, instr.arg2, u8::wrapping_add),
            Opcode::Display => {
                self.displays.push(&self.message[..]);
                tracer.trace_display(&self.message[..]);
                Ok(())
            }
            Opcode::End => return Flow::Halt(Halt::End),
            Opcode::Jump => return Flow::Next(next + i64::from(instr.jump_offset())),
            Opcode::JumpIfZero => {
                let offset = if self.zero_flag { instr.jump_offset() } else { 0 };
                return Flow::Next(next + i64::from(offset));
            }
        };

        if let Err(skip) = guard {
            tracer.trace_skip(pc, &instr, skip);
        }
        Flow::Next(next)
    }

    fn cursor_index(&self) -> Result<usize, Skip> {
        if self.cursor < self.message.len() {
            Ok(self.cursor)
        } else {
            Err(Skip::Cursor(self.cursor))
        }
    }

    fn get(&mut self, reg: u8) -> Result<(), Skip> {
        let r = register(reg)?;
        let c = self.cursor_index()?;
        self.registers[r] = self.message[c];
        Ok(())
    }

    fn put(&mut self, reg: u8) -> Result<(), Skip> {
        let r = register(reg)?;
        let c = self.cursor_index()?;
        self.message[c] = self.registers[r];
        Ok(())
    }

    /// The cursor only moves if it lands inside the buffer.
    fn move_cursor(&mut self, offset: i8) -> Result<(), Skip> {
        match self.cursor.checked_add_signed(isize::from(offset)) {
            Some(c) if c < self.message.len() => {
                self.cursor = c;
                Ok(())
            }
            _ => Err(Skip::Move {
                cursor: self.cursor,
                offset,
            }),
        }
    }

    fn arith(&mut self, dst: u8, src: u8, op: impl Fn(u8, u8) -> u8) -> Result<(), Skip> {
        let d = register(dst)?;
        let s = register(src)?;
        let result = op(self.registers[d], self.registers[s]);
        self.registers[d] = result;
        self.zero_flag = result == 0;
        Ok(())
    }
}

fn register(index: u8) -> Result<usize, Skip> {
    let r = usize::from(index);
    if r < REGISTER_COUNT {
        Ok(r)
    } else {
        Err(Skip::Register(index))
    }
}

/// Fetch the instruction at `pc` if all 3 bytes are inside `code`.
fn fetch(code: &[u8], pc: i64) -> Option<(usize, [u8; INSTRUCTION_SIZE])> {
    let addr = usize::try_from(pc).ok()?;
    let end = addr.checked_add(INSTRUCTION_SIZE)?;
    let bytes = code.get(addr..end)?;
    Some((addr, [bytes[0], bytes[1], bytes[2]]))
}
