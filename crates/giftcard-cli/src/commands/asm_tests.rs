use std::fs;

use giftcard_format::PROGRAM_CODE_SIZE;
use indoc::indoc;

use super::asm::{AsmCommandError, assemble_file, disassemble_file};

#[test]
fn assemble_then_disassemble() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("anim.s");
    let output = dir.path().join("anim.bin");
    fs::write(
        &source,
        indoc! {"
            ; blink
            mov 0x1, r1
        loop:
            getch r0
            xor r0, r1
            putch r0
            disp
            jmp loop
        "},
    )
    .unwrap();

    assemble_file(&source, &output).unwrap();

    let program = fs::read(&output).unwrap();
    assert_eq!(program.len(), PROGRAM_CODE_SIZE);
    assert_eq!(&program[..3], &[0x04, 0x01, 0x01]);

    insta::assert_snapshot!(disassemble_file(&output).unwrap(), @r"
    00:    04 01 01    mov 0x1, r1
       L1:
    03:    01 00 00    getch r0
    06:    05 00 01    xor r0, r1
    09:    02 00 00    putch r0
    0c:    07 00 00    disp
    0f:    09 f1 00    jmp L1
    ");
}

#[test]
fn assembler_error_names_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bad.s");
    fs::write(&source, "disp\nhalt\n").unwrap();

    let err = assemble_file(&source, &dir.path().join("out.bin")).unwrap_err();

    assert!(matches!(err, AsmCommandError::Assemble { .. }));
    assert!(err.to_string().ends_with("bad.s: line 2: unknown opcode: halt"));
    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();

    let err = disassemble_file(&dir.path().join("nope.bin")).unwrap_err();

    assert!(matches!(err, AsmCommandError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read "));
}
