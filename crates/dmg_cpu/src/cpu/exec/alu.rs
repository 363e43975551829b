use crate::cpu::alu::{AluOp, ShiftOp};
use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(in crate::cpu) fn exec_alu_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.alu(AluOp::from_opcode(opcode), value);
        if src == HL_INDIRECT { 8 } else { 4 }
    }

    pub(in crate::cpu) fn exec_alu_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC6);
        let value = self.fetch8(bus);
        self.alu(AluOp::from_opcode(opcode), value);
        8
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_reg16(opcode >> 4);
        self.alu_add16_hl(value);
        8
    }

    pub(in crate::cpu) fn exec_add_sp_e8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_sp_offset(imm);
        16
    }

    /// RLCA, RRCA, RLA, RRA. Same rotation as the CB forms but Z is
    /// always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let op = ShiftOp::from_opcode(opcode);
        self.regs.a = self.alu_shift(op, self.regs.a);
        self.set_flag(Flag::Z, false);
        4
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.alu_daa();
        4
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
