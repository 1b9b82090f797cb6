//! Runtime VM for gift card animation programs.
//!
//! This crate provides the sandboxed interpreter that executes a program
//! record's bytecode against its own message buffer, producing the list of
//! displayed frames.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    DEFAULT_MAX_STEPS, DisplayLog, Execution, Halt, NoopTracer, PrintTracer, Skip, StepLimits,
    Tracer, VM, Verbosity, run_program,
};
