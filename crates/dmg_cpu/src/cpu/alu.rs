use super::{Cpu, Flag};

/// The eight accumulator operations, in opcode order (bits 5..3 of
/// `0x80..=0xBF` and of the `0xC6 + 8n` immediate forms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cpu) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub(in crate::cpu) const ALL: [AluOp; 8] = [
        AluOp::Add,
        AluOp::Adc,
        AluOp::Sub,
        AluOp::Sbc,
        AluOp::And,
        AluOp::Xor,
        AluOp::Or,
        AluOp::Cp,
    ];

    #[inline]
    pub(in crate::cpu) fn from_opcode(opcode: u8) -> AluOp {
        Self::ALL[((opcode >> 3) & 0x07) as usize]
    }
}

/// Rotate/shift/swap operations of the first four CB rows (bits 5..3 of
/// `0x00..=0x3F`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cpu) enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub(in crate::cpu) const ALL: [ShiftOp; 8] = [
        ShiftOp::Rlc,
        ShiftOp::Rrc,
        ShiftOp::Rl,
        ShiftOp::Rr,
        ShiftOp::Sla,
        ShiftOp::Sra,
        ShiftOp::Swap,
        ShiftOp::Srl,
    ];

    #[inline]
    pub(in crate::cpu) fn from_opcode(opcode: u8) -> ShiftOp {
        Self::ALL[((opcode >> 3) & 0x07) as usize]
    }

    pub(in crate::cpu) fn name(self) -> &'static str {
        match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        }
    }
}

impl Cpu {
    /// Apply `op` to A and `value`. CP leaves A untouched.
    pub(in crate::cpu) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => {
                self.regs.a &= value;
                self.set_flags(self.regs.a == 0, false, true, false);
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.get_flag(Flag::C)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, false, half > 0x0F, full > 0xFF);
    }

    /// Subtract `value` (and the carry for SBC) from A and set flags.
    /// Returns the difference without storing it, so CP can share it.
    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = (use_carry && self.get_flag(Flag::C)) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.set_flags(result == 0, true, half < 0, full < 0);
        result
    }

    /// Decimal-adjust A after a BCD add or subtract. N picks the direction,
    /// H and C select the correction. N is preserved, H is cleared.
    pub(in crate::cpu) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }
        if carry {
            adjust |= 0x60;
        }

        if self.get_flag(Flag::N) {
            a = a.wrapping_sub(adjust);
        } else {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
                carry = true;
            }
            a = a.wrapping_add(adjust);
        }

        self.regs.a = a;
        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(in crate::cpu) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(in crate::cpu) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z preserved, H from bit 11, C from bit 15.
    pub(in crate::cpu) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed immediate, shared by `ADD SP,e8` and `LD HL,SP+e8`.
    /// H and C come from the unsigned low-byte addition; Z and N are cleared.
    pub(in crate::cpu) fn alu_sp_offset(&mut self, imm: u8) -> u16 {
        let sp = self.regs.sp;
        let offset = imm as i8 as i16 as u16;
        self.set_flags(
            false,
            false,
            (sp & 0x000F) + (offset & 0x000F) > 0x000F,
            (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF,
        );
        sp.wrapping_add(offset)
    }

    /// Rotate/shift `value` and set Z, N, H, C the way the CB table does.
    pub(in crate::cpu) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C) as u8;
        let (result, carry) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry);
        result
    }

    /// `BIT b,x`: Z is the complement of the tested bit, C is preserved.
    #[inline]
    pub(in crate::cpu) fn alu_bit(&mut self, bit: u8, value: u8) {
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }
}
