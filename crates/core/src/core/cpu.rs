//! CPU state and instruction execution.
//!
//! The CPU retires one instruction at a time against its register file. Each
//! retirement produces a [`TraceEvent`] describing the registers it wrote, so
//! callers can observe intermediate state without the CPU knowing how it is
//! presented.

use crate::common::RegisterFile;
use crate::core::alu::{Alu, arithmetic};
use crate::isa::Instruction;
use crate::sim::trace::{RegWrite, TraceEvent};
use crate::stats::ExecStats;

/// Emulated CPU: sixteen 32-bit registers plus retirement statistics.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// Architectural register state.
    pub regs: RegisterFile,
    /// Counts of retired instructions.
    pub stats: ExecStats,
}

impl Cpu {
    /// Creates a CPU with cleared registers and statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one instruction and returns what it did.
    pub fn step(&mut self, inst: &Instruction) -> TraceEvent {
        let step = self.stats.instructions_retired as usize;
        let mut product = None;

        let writes = match *inst {
            Instruction::Ldr { rd, imm } => vec![RegWrite { reg: rd, value: imm }],
            Instruction::Smull { rd_lo, rd_hi, rn, rm } => {
                let a = self.regs.read(rn);
                let b = self.regs.read(rm);
                let (lo, hi) = arithmetic::smull(a, b);
                product = Some(arithmetic::smull_product(a, b));
                vec![
                    RegWrite { reg: rd_lo, value: lo },
                    RegWrite { reg: rd_hi, value: hi },
                ]
            }
            Instruction::Add { rd, rn, rm } => {
                let value = arithmetic::add(self.regs.read(rn), self.regs.read(rm));
                vec![RegWrite { reg: rd, value }]
            }
            Instruction::Mov { rd, rm, shift } => {
                let value = Alu::shift(self.regs.read(rm), shift);
                vec![RegWrite { reg: rd, value }]
            }
            Instruction::Rsb { rd, rn, rm, shift } => {
                let operand2 = Alu::shift(self.regs.read(rm), shift);
                let value = arithmetic::rsb(self.regs.read(rn), operand2);
                vec![RegWrite { reg: rd, value }]
            }
        };

        // Operands are all read above, so rd may alias a source.
        for write in &writes {
            self.regs.write(write.reg, write.value);
        }
        self.stats.record(inst);

        let asm = inst.to_string();
        tracing::trace!(step, %asm, "retire");

        TraceEvent {
            step,
            asm,
            instruction: *inst,
            product,
            writes,
        }
    }

    /// Executes `program` from the first instruction to the last, passing
    /// each event to `on_step` as it retires.
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by `on_step`; instructions already
    /// retired keep their effects.
    pub fn execute<E>(
        &mut self,
        program: &[Instruction],
        mut on_step: impl FnMut(&TraceEvent) -> Result<(), E>,
    ) -> Result<Vec<TraceEvent>, E> {
        let mut events = Vec::with_capacity(program.len());
        for inst in program {
            let event = self.step(inst);
            on_step(&event)?;
            events.push(event);
        }
        Ok(events)
    }
}
