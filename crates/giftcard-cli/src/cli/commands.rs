//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the gift card reader.
pub fn build_cli() -> Command {
    Command::new("giftcard")
        .about("Read a gift card file and print its contents")
        .override_usage("giftcard <1|2> <FILE> [--max-steps <N>] [--trace] [-v]")
        .after_help(
            r#"EXAMPLES:
  giftcard 1 card.gft                 # text output, runs embedded programs
  giftcard json card.gft              # JSON output
  giftcard 1 card.gft --trace -v      # trace programs with register dumps"#,
        )
        .arg(mode_arg())
        .arg(card_path_arg())
        .arg(max_steps_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
}

/// Build the program assembler.
pub fn build_gcasm_cli() -> Command {
    Command::new("gcasm")
        .about("Assemble a file of assembly code into gift card program bytes")
        .arg(asm_input_arg())
        .arg(output_file_arg())
        .arg(disassemble_arg())
}
