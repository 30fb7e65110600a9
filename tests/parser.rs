use leds_rs::parser::{parse_line, Line, ParseError};
use leds_rs::{Instruction, LabelTable};

fn parse(line: &str) -> Result<Line, ParseError> {
    parse_line(line, &LabelTable::new())
}

#[test]
fn blank_and_whitespace_lines() {
    assert_eq!(parse(""), Ok(Line::Blank));
    assert_eq!(parse("   \t "), Ok(Line::Blank));
}

#[test]
fn fixed_mnemonics_after_leading_whitespace() {
    assert_eq!(parse("rlca"), Ok(Line::Instruction(Instruction::Rlca)));
    assert_eq!(parse("  rrca"), Ok(Line::Instruction(Instruction::Rrca)));
    assert_eq!(parse("\tout (0),a"), Ok(Line::Instruction(Instruction::Out)));
    // exact match only: trailing junk is not an instruction
    assert!(matches!(parse("rlca x"), Err(ParseError::Unrecognized { .. })));
}

#[test]
fn loads_accept_full_byte_range() {
    assert_eq!(parse("ld a,0"), Ok(Line::Instruction(Instruction::LoadA(0))));
    assert_eq!(parse("  ld a,255"), Ok(Line::Instruction(Instruction::LoadA(255))));
    assert_eq!(parse("ld b,3"), Ok(Line::Instruction(Instruction::LoadB(3))));
}

#[test]
fn bad_immediates_are_parse_errors() {
    assert_eq!(
        parse("  ld a,300"),
        Err(ParseError::ImmediateOutOfRange { line: "  ld a,300".into(), value: 300 })
    );
    assert!(matches!(parse("ld b,-1"), Err(ParseError::ImmediateOutOfRange { value: -1, .. })));
    assert!(matches!(parse("ld a,x"), Err(ParseError::BadImmediate { .. })));
    assert!(matches!(parse("ld a,"), Err(ParseError::BadImmediate { .. })));
}

#[test]
fn djnz_resolves_against_labels_seen_so_far() {
    let mut labels = LabelTable::new();
    assert_eq!(
        parse_line("djnz loop", &labels),
        Err(ParseError::UndefinedLabel { line: "djnz loop".into(), label: "loop".into() })
    );
    labels.define("loop", 2);
    assert_eq!(
        parse_line("  djnz loop", &labels),
        Ok(Line::Instruction(Instruction::Djnz { target: 2 }))
    );
}

#[test]
fn colon_lines_define_labels() {
    assert_eq!(parse("loop:"), Ok(Line::Label("loop".into())));
    assert_eq!(parse("  triple: ignored"), Ok(Line::Label("triple".into())));
    assert_eq!(parse("a:b:"), Ok(Line::Label("a".into())));
}

#[test]
fn errors_keep_original_text() {
    let err = parse("  halt").unwrap_err();
    assert_eq!(err.line(), "  halt");
    assert_eq!(err.to_string(), "unrecognized line `  halt`");
}
