//! Command-line front ends for gift cards.
//!
//! Shared by the `giftcard` reader and the `gcasm` assembler binaries.

pub mod cli;
pub mod commands;
pub mod logging;
