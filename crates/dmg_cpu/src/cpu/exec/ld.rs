use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu};

/// Base of the high IO page addressed by LDH and `LD (C),A`.
const IO_PAGE: u16 = 0xFF00;

impl Cpu {
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
        if dst == HL_INDIRECT || src == HL_INDIRECT { 8 } else { 4 }
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x06);
        let dst = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.write_reg8(bus, dst, value);
        if dst == HL_INDIRECT { 12 } else { 8 }
    }

    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(bus);
        self.write_reg16(opcode >> 4, value);
        12
    }

    /// Address for the `(BC)`, `(DE)`, `(HL+)` and `(HL-)` forms, applying
    /// the HL post-increment/decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match opcode >> 4 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        8
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        8
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        let [hi, lo] = self.regs.sp.to_be_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
        20
    }

    /// `LDH (a8),A` (0xE0) and `LDH A,(a8)` (0xF0).
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = IO_PAGE | self.fetch8(bus) as u16;
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        12
    }

    /// `LD (C),A` (0xE2) and `LD A,(C)` (0xF2).
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = IO_PAGE | self.regs.c as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        8
    }

    /// `LD (a16),A` (0xEA) and `LD A,(a16)` (0xFA).
    pub(in crate::cpu) fn exec_ld_a16(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        16
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_e8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        let value = self.alu_sp_offset(imm);
        self.regs.set_hl(value);
        12
    }
}
