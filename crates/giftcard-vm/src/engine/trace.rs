//! Execution tracing.
//!
//! The VM is generic over `Tracer`, so `NoopTracer` calls compile away
//! while `PrintTracer` collects a readable log of the run.

use giftcard_format::{Instruction, REGISTER_COUNT};

use super::display::frame_text;
use super::{Halt, Skip};

/// Hooks called by the VM during execution.
pub trait Tracer {
    /// Before executing the instruction at `pc`.
    fn trace_instruction(&mut self, pc: usize, instr: &Instruction);

    /// The instruction at `pc` failed a guard and did nothing.
    fn trace_skip(&mut self, pc: usize, instr: &Instruction, skip: Skip);

    /// A `display` instruction emitted `frame`.
    fn trace_display(&mut self, frame: &[u8]);

    /// Machine state after an instruction.
    fn trace_state(&mut self, registers: &[u8; REGISTER_COUNT], cursor: usize, zero_flag: bool);

    /// Execution stopped.
    fn trace_halt(&mut self, halt: &Halt, steps: u32);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _pc: usize, _instr: &Instruction) {}

    #[inline(always)]
    fn trace_skip(&mut self, _pc: usize, _instr: &Instruction, _skip: Skip) {}

    #[inline(always)]
    fn trace_display(&mut self, _frame: &[u8]) {}

    #[inline(always)]
    fn trace_state(
        &mut self,
        _registers: &[u8; REGISTER_COUNT],
        _cursor: usize,
        _zero_flag: bool,
    ) {
    }

    #[inline(always)]
    fn trace_halt(&mut self, _halt: &Halt, _steps: u32) {}
}

/// Trace detail level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Instructions, skips, displays and the halt reason.
    #[default]
    Default,
    /// Also register state after every instruction.
    Verbose,
}

/// Tracer that collects human-readable lines.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the collected trace to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_instruction(&mut self, pc: usize, instr: &Instruction) {
        let [b0, b1, b2] = instr.to_bytes();
        self.lines
            .push(format!("{pc:02x}:    {b0:02x} {b1:02x} {b2:02x}    {instr}"));
    }

    fn trace_skip(&mut self, _pc: usize, _instr: &Instruction, skip: Skip) {
        self.lines.push(format!("       skipped: {skip}"));
    }

    fn trace_display(&mut self, frame: &[u8]) {
        self.lines.push(format!("       display: {:?}", frame_text(frame)));
    }

    fn trace_state(&mut self, registers: &[u8; REGISTER_COUNT], cursor: usize, zero_flag: bool) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let regs: Vec<String> = registers.iter().map(|r| format!("{r:02x}")).collect();
        self.lines.push(format!(
            "       regs [{}] cursor {cursor} zf {}",
            regs.join(" "),
            u8::from(zero_flag)
        ));
    }

    fn trace_halt(&mut self, halt: &Halt, steps: u32) {
        self.lines.push(format!("halt: {halt} after {steps} steps"));
    }
}
