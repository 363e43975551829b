use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        4
    }

    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        if self.config.halt_bug && !self.ime && self.interrupts.has_pending() {
            // The CPU does not halt and the next opcode byte is fetched
            // without advancing PC.
            log::debug!("GB CPU HALT bug at pc=0x{:04X}", self.regs.pc);
            self.halt_bug = true;
        } else {
            log::debug!("GB CPU HALT at pc=0x{:04X}", self.regs.pc);
            self.halted = true;
        }
        4
    }

    /// STOP enters the deepest low-power state. The padding byte that
    /// follows the opcode is left to the fetch stage.
    pub(in crate::cpu) fn exec_stop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        log::debug!("GB CPU STOP at pc=0x{:04X}", self.regs.pc);
        self.halted = true;
        self.stopped = true;
        4
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        4
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        if self.config.ei_delay {
            // Applied by `execute` once the following instruction is done.
            self.ime_enable_pending = true;
        } else {
            self.ime = true;
        }
        4
    }
}
