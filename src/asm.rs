//! Assembling source text into a [`Program`].
//!
//! Lines are parsed one at a time and labels are bound as they appear, so a
//! `djnz` can only reach labels defined above it. Lines that fail to parse are
//! logged, collected as [`Diagnostic`]s and skipped; they never stop assembly.
//! An `End` is always appended after the last line.

use serde::{Deserialize, Serialize};

use crate::instructions::Instruction;
use crate::labels::LabelTable;
use crate::parser::{parse_line, Line, ParseError};

/// An assembled instruction sequence plus the labels that were bound while building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: LabelTable,
}

impl Program {
    /// Build a program from raw parts. Nothing is validated here: a program
    /// without a trailing `End`, or with a jump past its end, traps when run.
    pub fn from_parts(instructions: Vec<Instruction>, labels: LabelTable) -> Self {
        Self { instructions, labels }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn get(&self, pc: usize) -> Option<Instruction> {
        self.instructions.get(pc).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A skipped source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line number.
    pub line_no: usize,
    pub error: ParseError,
}

#[derive(Debug, Clone)]
pub struct Assembly {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct Assembler {
    instructions: Vec<Instruction>,
    labels: LabelTable,
    diagnostics: Vec<Diagnostic>,
    line_no: usize,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        self.line_no += 1;
        match parse_line(line, &self.labels) {
            Ok(Line::Instruction(insn)) => self.instructions.push(insn),
            Ok(Line::Label(name)) => self.labels.define(name, self.instructions.len()),
            Ok(Line::Blank) => {}
            Err(error) => {
                tracing::warn!(line_no = self.line_no, %error, "skipping line");
                self.diagnostics.push(Diagnostic {
                    line_no: self.line_no,
                    error,
                });
            }
        }
    }

    pub fn finish(mut self) -> Assembly {
        self.instructions.push(Instruction::End);
        tracing::debug!(
            instructions = self.instructions.len(),
            labels = self.labels.len(),
            skipped = self.diagnostics.len(),
            "assembled"
        );
        Assembly {
            program: Program::from_parts(self.instructions, self.labels),
            diagnostics: self.diagnostics,
        }
    }
}

pub fn assemble_lines<I, S>(lines: I) -> Assembly
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut asm = Assembler::new();
    for line in lines {
        asm.feed_line(line.as_ref());
    }
    asm.finish()
}

pub fn assemble(src: &str) -> Assembly {
    assemble_lines(src.lines())
}
