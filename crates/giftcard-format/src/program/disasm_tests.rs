//! Tests for the program disassembler.

use indoc::indoc;

use super::*;

#[test]
fn loop_listing() {
    let program = assemble_program(indoc! {"
            mov 0x1, r1
        loop:
            getch r0
            add r0, r1
            putch r0
            disp
            jmp loop
    "})
    .unwrap();

    insta::assert_snapshot!(disassemble(&program), @r"
    00:    04 01 01    mov 0x1, r1
       L1:
    03:    01 00 00    getch r0
    06:    06 00 01    add r0, r1
    09:    02 00 00    putch r0
    0c:    07 00 00    disp
    0f:    09 f1 00    jmp L1
    ");
}

#[test]
fn invalid_opcode_and_partial_tail() {
    let code = [0x11, 0x00, 0x00, 0x08];

    insta::assert_snapshot!(disassemble(&code), @r"
    00:    11 00 00    invalid 0x11
    03:    08 00 00    end
    ");
}

#[test]
fn all_nops_is_empty() {
    assert_eq!(disassemble(&[0u8; 256]), "");
}

#[test]
fn listing_reassembles() {
    let source = indoc! {"
        top:
            mov 0x2, r3
            xor r3, r3
            jz top
            end
    "};
    let program = assemble_program(source).unwrap();
    let listing = disassemble(&program);

    // Strip offsets and raw bytes, keep labels and instruction text.
    let text: String = listing
        .lines()
        .map(|l| l.split("    ").last().unwrap_or(l).trim().to_string() + "\n")
        .collect();

    assert_eq!(assemble_program(&text.replace("L0", "top")).unwrap(), program);
}
