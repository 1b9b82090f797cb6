//! Assemble or disassemble a gift card program.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use giftcard_format::{AsmError, assemble_program, disassemble};
use thiserror::Error;
use tracing::debug;

pub struct AsmArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub disassemble: bool,
}

#[derive(Debug, Error)]
pub enum AsmCommandError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Assemble { path: PathBuf, source: AsmError },
}

pub fn run(args: AsmArgs) {
    let result = if args.disassemble {
        disassemble_file(&args.input).map(|listing| print!("{listing}"))
    } else {
        assemble_file(&args.input, &args.output)
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Assemble `input` into a full program buffer written to `output`.
pub fn assemble_file(input: &Path, output: &Path) -> Result<(), AsmCommandError> {
    let source = fs::read_to_string(input).map_err(|source| AsmCommandError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let program = assemble_program(&source).map_err(|source| AsmCommandError::Assemble {
        path: input.to_path_buf(),
        source,
    })?;
    fs::write(output, program).map_err(|source| AsmCommandError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(output = %output.display(), "wrote program");
    Ok(())
}

/// Listing of the program binary at `input`.
pub fn disassemble_file(input: &Path) -> Result<String, AsmCommandError> {
    let code = fs::read(input).map_err(|source| AsmCommandError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(disassemble(&code))
}
