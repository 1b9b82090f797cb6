//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use giftcard_vm::DEFAULT_MAX_STEPS;

/// Output mode (positional).
pub fn mode_arg() -> Arg {
    Arg::new("mode")
        .value_name("MODE")
        .required(true)
        .value_parser(["1", "2", "text", "json"])
        .hide_possible_values(true)
        .help("Output mode: 1 or text, 2 or json")
}

/// Gift card file (positional).
pub fn card_path_arg() -> Arg {
    Arg::new("card_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Gift card file to read")
}

/// Interpreter step ceiling (--max-steps).
pub fn max_steps_arg() -> Arg {
    Arg::new("max_steps")
        .long("max-steps")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help(format!(
            "Maximum instructions executed per program [default: {DEFAULT_MAX_STEPS}]"
        ))
}

/// Trace program execution (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print an execution trace of each program to stderr")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Include register state in the trace")
}

/// Assembly source or program binary (positional).
pub fn asm_input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Assembly file to (dis)assemble")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .default_value("a.out")
        .value_parser(value_parser!(PathBuf))
        .help("Output file to write to")
}

/// Disassemble instead of assemble (-d/--disassemble).
pub fn disassemble_arg() -> Arg {
    Arg::new("disassemble")
        .short('d')
        .long("disassemble")
        .action(ArgAction::SetTrue)
        .help("Disassemble instead of assemble")
}
