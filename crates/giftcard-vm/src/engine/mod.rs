//! Runtime engine for gift card programs.
//!
//! The VM runs bytecode against a fixed message buffer and records every
//! displayed frame. Execution always terminates: the step ceiling bounds
//! loops, and every memory access is range-checked.

mod display;
mod halt;
mod trace;
mod vm;


pub use display::DisplayLog;
pub use halt::{Execution, Halt, Skip};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{DEFAULT_MAX_STEPS, StepLimits, VM, run_program};
