//! Read a gift card and print it.

use std::path::PathBuf;

use giftcard_format::{GiftCard, Program};
use giftcard_vm::{PrintTracer, StepLimits, VM, Verbosity};
use tracing::{debug, info};

use super::json::render_json;
use super::text::render_text;
use crate::cli::OutputMode;

pub struct ReadArgs {
    pub mode: OutputMode,
    pub card_path: PathBuf,
    pub max_steps: u32,
    /// Trace programs at this verbosity.
    pub trace: Option<Verbosity>,
}

pub fn run(args: ReadArgs) {
    let mut card = match GiftCard::from_path(&args.card_path) {
        Ok(card) => card,
        Err(e) => {
            eprintln!("error: {}: {}", args.card_path.display(), e);
            std::process::exit(1);
        }
    };
    debug!(records = card.record_count(), "decoded gift card");

    match args.mode {
        OutputMode::Text => {
            let vm = VM::with_limits(StepLimits::new().max_steps(args.max_steps));
            let out = render_text(&mut card, |program| execute_program(&vm, program, args.trace));
            print!("{out}");
        }
        OutputMode::Json => match render_json(&card) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Execute one program record, printing its trace to stderr if requested.
pub fn execute_program(vm: &VM, program: &mut Program, trace: Option<Verbosity>) -> Vec<String> {
    let execution = match trace {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity);
            let execution = vm.execute_with(&mut program.message, &program.code, &mut tracer);
            tracer.print();
            execution
        }
        None => vm.execute(&mut program.message, &program.code),
    };

    if !execution.finished() {
        info!(steps = execution.steps, "program stopped: {}", execution.halt);
    }
    execution.displays.to_strings()
}
