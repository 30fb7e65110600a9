use serde::{Deserialize, Serialize};
use std::fmt;

/// One instruction of the LED language.
///
/// Operands live on the variants that use them, so an `Out` has no immediate
/// to misread and a `Djnz` always carries a resolved target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    LoadA(u8),
    LoadB(u8),
    Out,
    Rlca,
    Rrca,
    /// Decrement B and jump to `target` (an instruction index) while B stays nonzero.
    Djnz { target: usize },
    End,
}

impl Instruction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::LoadA(_) | Instruction::LoadB(_) => "ld",
            Instruction::Out => "out",
            Instruction::Rlca => "rlca",
            Instruction::Rrca => "rrca",
            Instruction::Djnz { .. } => "djnz",
            Instruction::End => "end",
        }
    }

    /// Value loaded by `ld a,N` / `ld b,N`.
    pub fn immediate(&self) -> Option<u8> {
        match *self {
            Instruction::LoadA(v) | Instruction::LoadB(v) => Some(v),
            _ => None,
        }
    }

    pub fn jump_target(&self) -> Option<usize> {
        match *self {
            Instruction::Djnz { target } => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadA(v) => write!(f, "ld a,{v}"),
            Instruction::LoadB(v) => write!(f, "ld b,{v}"),
            Instruction::Out => f.write_str("out (0),a"),
            Instruction::Rlca => f.write_str("rlca"),
            Instruction::Rrca => f.write_str("rrca"),
            Instruction::Djnz { target } => write!(f, "djnz @{target}"),
            Instruction::End => f.write_str("end"),
        }
    }
}
