use crate::asm::Program;
use crate::instructions::Instruction;
use crate::labels::LabelTable;

/// Format one instruction, naming the jump target when a label is bound to it.
pub fn fmt_instruction(insn: &Instruction, labels: &LabelTable) -> String {
    match insn {
        Instruction::Djnz { target } => match labels.names_at(*target).first() {
            Some(name) => format!("djnz {name}"),
            None => insn.to_string(),
        },
        _ => insn.to_string(),
    }
}

/// Render a program back to source text.
///
/// The trailing `End` the assembler appends is left out, so the listing of an
/// assembled program assembles to the same program again (unless a label was
/// redefined after a jump to it, in which case the jump prints as `djnz @N`).
pub fn source_listing(program: &Program) -> String {
    let labels = program.labels();
    let insns = program.instructions();
    let mut out = String::new();
    for (i, insn) in insns.iter().enumerate() {
        for name in labels.names_at(i) {
            out.push_str(name);
            out.push_str(":\n");
        }
        if i + 1 == insns.len() && *insn == Instruction::End {
            break;
        }
        out.push_str("  ");
        out.push_str(&fmt_instruction(insn, labels));
        out.push('\n');
    }
    out
}
