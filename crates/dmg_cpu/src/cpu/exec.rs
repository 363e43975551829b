mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::opcodes::{self, Handler, Slot};
use super::{Bus, Cpu, CpuError, Result};

impl Cpu {
    /// Execute one primary instruction and return the T-cycles it took.
    ///
    /// `operands` holds immediate bytes the caller has already fetched (for
    /// 0xCB, the second opcode byte). Any immediates not supplied are read
    /// at PC, advancing it. Illegal opcodes fail before any state changes.
    pub fn execute<B: Bus>(&mut self, bus: &mut B, opcode: u8, operands: &[u8]) -> Result<u32> {
        let instr = match opcodes::primary(opcode) {
            Slot::Defined(instr) => instr,
            Slot::Illegal => return Err(self.illegal(opcode, self.regs.pc)),
        };

        self.operands.load(operands);
        let cycles = self.run_instruction(bus, instr.handler, opcode);
        self.operands.clear();

        log::trace!(
            "GB CPU exec op=0x{:02X} {} cycles={} {}",
            opcode,
            instr.mnemonic,
            cycles,
            self.regs
        );

        Ok(cycles)
    }

    /// Execute the CB-prefixed instruction selected by `cb`. The returned
    /// cost excludes the 4 cycles of the prefix fetch.
    pub fn execute_extended<B: Bus>(&mut self, bus: &mut B, cb: u8) -> Result<u32> {
        let cycles = self.run_instruction(bus, opcodes::extended(cb), cb);
        log::trace!(
            "GB CPU exec cb=0x{:02X} {} cycles={} {}",
            cb,
            opcodes::extended_mnemonic(cb),
            cycles,
            self.regs
        );
        Ok(cycles)
    }

    /// Run one handler as a whole instruction and apply the state that
    /// changes at instruction boundaries.
    fn run_instruction(&mut self, bus: &mut dyn Bus, handler: Handler, byte: u8) -> u32 {
        let enable_ime_after = self.ime_enable_pending;
        let halt_bug_armed = self.halt_bug;

        let cycles = handler(self, bus, byte);

        // The HALT bug only affects the instruction right after HALT, even
        // when that instruction never read from PC.
        if halt_bug_armed {
            self.halt_bug = false;
        }
        // EI armed before this instruction; DI in between cancels it.
        if enable_ime_after && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }

        cycles
    }

    pub(in crate::cpu) fn illegal(&self, opcode: u8, pc: u16) -> CpuError {
        log::error!(
            "GB CPU illegal opcode 0x{:02X} at pc=0x{:04X} sp=0x{:04X} {}",
            opcode,
            pc,
            self.regs.sp,
            self.regs
        );
        CpuError::IllegalOpcode { opcode, pc }
    }
}
