use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Register pair for PUSH/POP, where slot 3 is AF rather than SP.
    fn stack_pair(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            3 => self.regs.af(),
            index => self.read_reg16(index),
        }
    }

    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.stack_pair(opcode);
        self.push_u16(bus, value);
        16
    }

    /// POP AF drops the low nibble of F.
    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            3 => self.regs.set_af(value),
            index => self.write_reg16(index, value),
        }
        12
    }
}
