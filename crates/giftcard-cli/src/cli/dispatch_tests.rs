//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use giftcard_vm::{DEFAULT_MAX_STEPS, Verbosity};

use super::*;
use crate::commands::asm::AsmArgs;
use crate::commands::read::ReadArgs;

#[test]
fn numeric_and_named_modes() {
    for (mode, expected) in [
        ("1", OutputMode::Text),
        ("text", OutputMode::Text),
        ("2", OutputMode::Json),
        ("json", OutputMode::Json),
    ] {
        let m = build_cli()
            .try_get_matches_from(["giftcard", mode, "card.gft"])
            .unwrap();
        let params = ReadParams::from_matches(&m);
        assert_eq!(params.mode, expected, "mode {mode}");
        assert_eq!(params.card_path, PathBuf::from("card.gft"));
    }
}

#[test]
fn invalid_mode_is_usage_error() {
    let result = build_cli().try_get_matches_from(["giftcard", "3", "card.gft"]);
    assert!(result.is_err());
}

#[test]
fn missing_file_is_usage_error() {
    let result = build_cli().try_get_matches_from(["giftcard", "1"]);
    assert!(result.is_err());
}

#[test]
fn extra_argument_is_usage_error() {
    let result = build_cli().try_get_matches_from(["giftcard", "1", "a.gft", "b.gft"]);
    assert!(result.is_err());
}

#[test]
fn read_defaults() {
    let m = build_cli()
        .try_get_matches_from(["giftcard", "1", "card.gft"])
        .unwrap();
    let args: ReadArgs = ReadParams::from_matches(&m).into();

    assert_eq!(args.max_steps, DEFAULT_MAX_STEPS);
    assert_eq!(args.trace, None);
}

#[test]
fn trace_flags() {
    let m = build_cli()
        .try_get_matches_from(["giftcard", "1", "card.gft", "--trace", "--max-steps", "50"])
        .unwrap();
    let args: ReadArgs = ReadParams::from_matches(&m).into();

    assert_eq!(args.max_steps, 50);
    assert_eq!(args.trace, Some(Verbosity::Default));

    let m = build_cli()
        .try_get_matches_from(["giftcard", "1", "card.gft", "--trace", "-v"])
        .unwrap();
    let args: ReadArgs = ReadParams::from_matches(&m).into();
    assert_eq!(args.trace, Some(Verbosity::Verbose));
}

#[test]
fn verbose_without_trace_does_not_trace() {
    let m = build_cli()
        .try_get_matches_from(["giftcard", "1", "card.gft", "-vv"])
        .unwrap();
    let args: ReadArgs = ReadParams::from_matches(&m).into();

    assert_eq!(args.trace, None);
}

#[test]
fn gcasm_defaults() {
    let m = build_gcasm_cli()
        .try_get_matches_from(["gcasm", "anim.s"])
        .unwrap();
    let args: AsmArgs = AsmParams::from_matches(&m).into();

    assert_eq!(args.input, PathBuf::from("anim.s"));
    assert_eq!(args.output, PathBuf::from("a.out"));
    assert!(!args.disassemble);
}

#[test]
fn gcasm_flags() {
    let m = build_gcasm_cli()
        .try_get_matches_from(["gcasm", "-d", "prog.bin", "-o", "listing.s"])
        .unwrap();
    let params = AsmParams::from_matches(&m);

    assert!(params.disassemble);
    assert_eq!(params.input, PathBuf::from("prog.bin"));
    assert_eq!(params.output, PathBuf::from("listing.s"));
}

#[test]
fn help_shows_step_default() {
    let mut cmd = build_cli();
    let help = cmd.render_help().to_string();
    assert!(help.contains(&format!("[default: {DEFAULT_MAX_STEPS}]")));
}

#[test]
fn help_mentions_modes() {
    let mut cmd = build_cli();
    let help = cmd.render_help().to_string();
    assert!(help.contains("1 or text, 2 or json"));
}
