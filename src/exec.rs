use crate::cpu::{Cpu, Trap};
use crate::instructions::Instruction;
use crate::port::Port;

pub trait Executor {
    fn exec<P: Port>(&self, cpu: &mut Cpu, port: &mut P, insn: Instruction) -> Result<(), Trap>;
}

pub struct LedExecutor;
impl Executor for LedExecutor {
    fn exec<P: Port>(&self, cpu: &mut Cpu, port: &mut P, insn: Instruction) -> Result<(), Trap> {
        match insn {
            Instruction::LoadA(v) => cpu.a = v,
            Instruction::LoadB(v) => cpu.b = v,
            Instruction::Out => {
                port.write(cpu.a).map_err(|source| Trap::Port { source })?;
            }
            Instruction::Rlca => cpu.a = cpu.a.rotate_left(1),
            Instruction::Rrca => cpu.a = cpu.a.rotate_right(1),
            Instruction::Djnz { target } => {
                // B == 0 is not decremented, so it never wraps and never jumps
                if cpu.b > 0 {
                    cpu.b -= 1;
                }
                if cpu.b > 0 {
                    cpu.pc = target;
                }
            }
            Instruction::End => cpu.halted = true,
        }
        Ok(())
    }
}
