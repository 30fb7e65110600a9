pub mod asm;
pub mod cpu;
pub mod disasm;
pub mod exec;
pub mod instructions;
pub mod labels;
pub mod leds;
pub mod parser;
pub mod port;

pub use asm::{assemble, assemble_lines, Assembler, Assembly, Diagnostic, Program};
pub use cpu::{Cpu, CpuConfig, Trap};
pub use instructions::Instruction;
pub use labels::LabelTable;
pub use leds::{leds_to_string, parse_leds, Leds};
pub use port::{LedPanel, Port, Recorder};

use exec::LedExecutor;

/// Run `program` from reset to `End` and hand back the final machine state.
pub fn execute<P: Port>(program: &Program, cfg: CpuConfig, port: &mut P) -> Result<Cpu, Trap> {
    let mut cpu = Cpu::new(cfg);
    cpu.run(program, port, &LedExecutor)?;
    Ok(cpu)
}
