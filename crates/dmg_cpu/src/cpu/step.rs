use super::{opcodes, Bus, Cpu, Result};
use crate::interrupt::Interrupt;

/// STOP is followed by a padding byte that the fetch stage skips.
const STOP_OPCODE: u8 = 0x10;

/// T-cycles reported while the CPU idles in HALT or STOP.
const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Run one fetch-decode-execute step and return the T-cycles consumed.
    ///
    /// Order of events:
    /// 1. STOP idles until a joypad interrupt is requested.
    /// 2. HALT idles until an interrupt is enabled and requested.
    /// 3. A pending interrupt is serviced if IME is set.
    /// 4. Otherwise the opcode at PC is fetched and executed.
    ///
    /// An illegal opcode leaves PC pointing at it and returns an error.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        if self.stopped {
            if !self.interrupts.is_pending(Interrupt::Joypad) {
                return Ok(IDLE_CYCLES);
            }
            self.resume();
        }

        if self.halted {
            if !self.should_wake_from_halt() {
                return Ok(IDLE_CYCLES);
            }
            log::debug!("GB CPU wake from HALT at pc=0x{:04X}", self.regs.pc);
            self.halted = false;
        }

        let serviced = self.service_interrupts(bus);
        if serviced > 0 {
            return Ok(serviced);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        if opcodes::is_illegal(opcode) {
            self.regs.pc = pc;
            return Err(self.illegal(opcode, pc));
        }

        let cycles = self.execute(bus, opcode, &[])?;
        if opcode == STOP_OPCODE {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        Ok(cycles)
    }
}
