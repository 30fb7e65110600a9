use anyhow::Error;
use crate::asm::Program;
use crate::exec::Executor;
use crate::port::Port;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    pub reset_a: u8, // A before the first `ld a`
    pub reset_b: u8,
    pub step_limit: Option<u64>, // None runs until `End`, however long that takes
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_a: 0,
            reset_b: 0,
            step_limit: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpu {
    pub pc: usize, // index of the next instruction
    pub a: u8,     // LED register
    pub b: u8,     // djnz counter
    pub halted: bool,
    pub steps: u64,
    pub cfg: CpuConfig,
}

#[derive(thiserror::Error, Debug)]
pub enum Trap {
    #[error("Instruction pointer {pc} outside program of {len} instructions")]
    PcOutOfRange { pc: usize, len: usize },
    #[error("Step limit of {limit} reached at pc {pc}")]
    StepLimit { limit: u64, pc: usize },
    #[error("Port write failed: {source}")]
    Port { #[source] source: Error },
}

impl Cpu {
    pub fn new(cfg: CpuConfig) -> Self {
        Self {
            pc: 0,
            a: cfg.reset_a,
            b: cfg.reset_b,
            halted: false,
            steps: 0,
            cfg,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.cfg);
    }

    /// Fetch, advance `pc`, execute. A halted cpu stays put.
    pub fn step<P: Port, X: Executor>(
        &mut self,
        program: &Program,
        port: &mut P,
        exec: &X,
    ) -> Result<(), Trap> {
        if self.halted {
            return Ok(());
        }
        if let Some(limit) = self.cfg.step_limit {
            if self.steps >= limit {
                return Err(Trap::StepLimit { limit, pc: self.pc });
            }
        }
        let pc = self.pc;
        let insn = program.get(pc).ok_or(Trap::PcOutOfRange {
            pc,
            len: program.len(),
        })?;
        // djnz relies on pc already pointing past itself
        self.pc = pc + 1;
        self.steps += 1;
        tracing::trace!(pc, %insn, a = self.a, b = self.b, "step");
        exec.exec(self, port, insn)
    }

    /// Step until `End`. Returns the number of instructions executed.
    pub fn run<P: Port, X: Executor>(
        &mut self,
        program: &Program,
        port: &mut P,
        exec: &X,
    ) -> Result<u64, Trap> {
        while !self.halted {
            self.step(program, port, exec)?;
        }
        tracing::info!(steps = self.steps, "halted");
        Ok(self.steps)
    }
}
