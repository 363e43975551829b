use super::{Bus, Cpu, Flag};

/// Operand names in opcode encoding order: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L,
/// 6=(HL), 7=A.
pub(in crate::cpu) const R8_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];

/// Operand index of the `(HL)` memory form.
pub(in crate::cpu) const HL_INDIRECT: u8 = 6;

impl Cpu {
    /// Read an 8-bit operand by encoding index (see [`R8_NAMES`]).
    #[inline]
    pub(in crate::cpu) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    #[inline]
    pub(in crate::cpu) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit register by encoding index with SP in slot 3
    /// (`LD rr,d16`, `INC rr`, `ADD HL,rr`).
    #[inline]
    pub(in crate::cpu) fn read_reg16(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(in crate::cpu) fn write_reg16(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Next immediate byte: taken from the caller-supplied operands if any
    /// remain, otherwise read at PC.
    #[inline]
    pub(in crate::cpu) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        if let Some(value) = self.operands.take() {
            return value;
        }
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    /// Little-endian 16-bit immediate.
    #[inline]
    pub(in crate::cpu) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// High byte goes to SP-1, low byte to SP-2.
    #[inline]
    pub(in crate::cpu) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(in crate::cpu) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate condition `cc` (bits 4..3 of the opcode).
    #[inline]
    pub(in crate::cpu) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    /// JR: the displacement is relative to the address after the operand.
    pub(in crate::cpu) fn jr(&mut self, bus: &mut dyn Bus, taken: bool) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
            12
        } else {
            8
        }
    }

    /// JP: the address is fetched even when the jump is not taken.
    pub(in crate::cpu) fn jp(&mut self, bus: &mut dyn Bus, taken: bool) -> u32 {
        let addr = self.fetch16(bus);
        if taken {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    pub(in crate::cpu) fn call(&mut self, bus: &mut dyn Bus, taken: bool) -> u32 {
        let addr = self.fetch16(bus);
        if taken {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            24
        } else {
            12
        }
    }

    pub(in crate::cpu) fn ret(&mut self, bus: &mut dyn Bus) {
        self.regs.pc = self.pop_u16(bus);
    }
}
