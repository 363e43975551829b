use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_inc_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x04);
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, index, result);
        if index == HL_INDIRECT { 12 } else { 4 }
    }

    pub(in crate::cpu) fn exec_dec_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x05);
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, index, result);
        if index == HL_INDIRECT { 12 } else { 4 }
    }

    /// `INC rr` (0x03 + 0x10n) and `DEC rr` (0x0B + 0x10n). No flags.
    pub(in crate::cpu) fn exec_incdec_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x03);
        let index = opcode >> 4;
        let value = self.read_reg16(index);
        let result = if opcode & 0x08 == 0 {
            value.wrapping_add(1)
        } else {
            value.wrapping_sub(1)
        };
        self.write_reg16(index, result);
        8
    }
}
