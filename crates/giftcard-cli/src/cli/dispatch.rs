//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use giftcard_vm::{DEFAULT_MAX_STEPS, Verbosity};

use super::OutputMode;
use crate::commands::asm::AsmArgs;
use crate::commands::read::ReadArgs;

pub struct ReadParams {
    pub mode: OutputMode,
    pub card_path: PathBuf,
    pub max_steps: u32,
    pub trace: bool,
    pub verbose: u8,
}

impl ReadParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            mode: parse_mode(m),
            card_path: m.get_one::<PathBuf>("card_path").cloned().unwrap_or_default(),
            max_steps: m.get_one::<u32>("max_steps").copied().unwrap_or(DEFAULT_MAX_STEPS),
            trace: m.get_flag("trace"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ReadParams> for ReadArgs {
    fn from(p: ReadParams) -> Self {
        Self {
            mode: p.mode,
            card_path: p.card_path,
            max_steps: p.max_steps,
            trace: p.trace.then(|| verbosity(p.verbose)),
        }
    }
}

pub struct AsmParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub disassemble: bool,
}

impl AsmParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("a.out")),
            disassemble: m.get_flag("disassemble"),
        }
    }
}

impl From<AsmParams> for AsmArgs {
    fn from(p: AsmParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            disassemble: p.disassemble,
        }
    }
}

fn parse_mode(m: &ArgMatches) -> OutputMode {
    m.get_one::<String>("mode")
        .and_then(|s| OutputMode::parse(s))
        .unwrap_or_default()
}

fn verbosity(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        _ => Verbosity::Verbose,
    }
}
