use serde::Serialize;
use std::fmt::Write;

use leds_rs::disasm::fmt_instruction;
use leds_rs::{Assembly, Instruction, Program};

/// A `djnz` back-edge: the body runs from `to` through `from` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Loop {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub index: usize,
    pub labels: Vec<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelOut {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagOut {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub rows: Vec<Row>,
    pub labels: Vec<LabelOut>,
    pub diagnostics: Vec<DiagOut>,
    pub loops: Vec<Loop>,
}

pub fn find_loops(program: &Program) -> Vec<Loop> {
    program
        .instructions()
        .iter()
        .enumerate()
        .filter_map(|(from, insn)| match insn {
            Instruction::Djnz { target } if *target <= from => Some(Loop { from, to: *target }),
            _ => None,
        })
        .collect()
}

pub fn analyze(asm: &Assembly) -> Report {
    let program = &asm.program;
    let labels = program.labels();
    let rows = program
        .instructions()
        .iter()
        .enumerate()
        .map(|(index, insn)| Row {
            index,
            labels: labels.names_at(index).into_iter().map(String::from).collect(),
            text: fmt_instruction(insn, labels),
        })
        .collect();
    Report {
        rows,
        labels: labels
            .iter()
            .map(|(name, index)| LabelOut { name: name.to_string(), index })
            .collect(),
        diagnostics: asm
            .diagnostics
            .iter()
            .map(|d| DiagOut { line: d.line_no, message: d.error.to_string() })
            .collect(),
        loops: find_loops(program),
    }
}

impl Report {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for l in &row.labels {
                let _ = writeln!(out, "{l}:");
            }
            let _ = writeln!(out, "  {:4}  {}", row.index, row.text);
        }
        if !self.loops.is_empty() {
            let _ = writeln!(out, "\nloops:");
            for lp in &self.loops {
                let _ = writeln!(out, "  {} -> {} ({} instructions)", lp.from, lp.to, lp.from - lp.to + 1);
            }
        }
        if !self.diagnostics.is_empty() {
            let _ = writeln!(out, "\nskipped:");
            for d in &self.diagnostics {
                let _ = writeln!(out, "  line {}: {}", d.line, d.message);
            }
        }
        out
    }
}
