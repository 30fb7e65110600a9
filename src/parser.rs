//! Single-line parser.
//!
//! Grammar, after leading whitespace is dropped:
//!
//! ```text
//! <line>        : <instruction> | <label> ':' ... | <empty>
//! <instruction> : ld a,<num> | ld b,<num> | out (0),a | rlca | rrca | djnz <labelref>
//! ```
//!
//! `djnz` is resolved against the labels seen so far, so jumps only go backwards.

use crate::instructions::Instruction;
use crate::labels::LabelTable;

/// What a well-formed source line contributes to the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Instruction(Instruction),
    Label(String),
    Blank,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("immediate {value} out of range 0..=255 in `{line}`")]
    ImmediateOutOfRange { line: String, value: i64 },
    #[error("malformed immediate in `{line}`")]
    BadImmediate { line: String },
    #[error("undefined label `{label}` in `{line}`")]
    UndefinedLabel { line: String, label: String },
    #[error("unrecognized line `{line}`")]
    Unrecognized { line: String },
}

impl ParseError {
    /// Original text of the rejected line.
    pub fn line(&self) -> &str {
        match self {
            ParseError::ImmediateOutOfRange { line, .. }
            | ParseError::BadImmediate { line }
            | ParseError::UndefinedLabel { line, .. }
            | ParseError::Unrecognized { line } => line,
        }
    }
}

pub fn parse_line(line: &str, labels: &LabelTable) -> Result<Line, ParseError> {
    let s = line.trim_start();
    if s.is_empty() {
        return Ok(Line::Blank);
    }
    match s {
        "rlca" => return Ok(Line::Instruction(Instruction::Rlca)),
        "rrca" => return Ok(Line::Instruction(Instruction::Rrca)),
        "out (0),a" => return Ok(Line::Instruction(Instruction::Out)),
        _ => {}
    }
    if let Some(rest) = s.strip_prefix("ld a,") {
        return parse_imm(rest, line).map(|v| Line::Instruction(Instruction::LoadA(v)));
    }
    if let Some(rest) = s.strip_prefix("ld b,") {
        return parse_imm(rest, line).map(|v| Line::Instruction(Instruction::LoadB(v)));
    }
    if let Some(label) = s.strip_prefix("djnz ") {
        let target = labels.resolve(label).ok_or_else(|| ParseError::UndefinedLabel {
            line: line.to_string(),
            label: label.to_string(),
        })?;
        return Ok(Line::Instruction(Instruction::Djnz { target }));
    }
    if let Some((name, _)) = s.split_once(':') {
        return Ok(Line::Label(name.to_string()));
    }
    Err(ParseError::Unrecognized { line: line.to_string() })
}

fn parse_imm(text: &str, line: &str) -> Result<u8, ParseError> {
    let value = text.parse::<i64>().map_err(|_| ParseError::BadImmediate {
        line: line.to_string(),
    })?;
    u8::try_from(value).map_err(|_| ParseError::ImmediateOutOfRange {
        line: line.to_string(),
        value,
    })
}
