use super::alu::ShiftOp;
use super::helpers::HL_INDIRECT;
use super::{opcodes, Bus, Cpu};

/// Cost of fetching the 0xCB escape byte, added on top of the extended
/// handler's own cost.
pub(in crate::cpu) const PREFIX_CYCLES: u32 = 4;

impl Cpu {
    /// 0xCB: fetch the second byte and run it through the extended table.
    pub(in crate::cpu) fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let cb = self.fetch8(bus);
        let handler = opcodes::extended(cb);
        handler(self, bus, cb) + PREFIX_CYCLES
    }

    /// Rows 0x00..=0x3F: RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL.
    pub(in crate::cpu) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!(cb < 0x40);
        let index = cb & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_shift(ShiftOp::from_opcode(cb), value);
        self.write_reg8(bus, index, result);
        if index == HL_INDIRECT { 16 } else { 8 }
    }

    /// `BIT b,x` only reads its operand, so the `(HL)` form is cheaper than
    /// the read-modify-write rows.
    pub(in crate::cpu) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&cb));
        let index = cb & 0x07;
        let value = self.read_reg8(bus, index);
        self.alu_bit((cb >> 3) & 0x07, value);
        if index == HL_INDIRECT { 12 } else { 8 }
    }

    pub(in crate::cpu) fn exec_cb_res(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&cb));
        let mask = !(1u8 << ((cb >> 3) & 0x07));
        self.cb_update(bus, cb, |value| value & mask)
    }

    pub(in crate::cpu) fn exec_cb_set(&mut self, bus: &mut dyn Bus, cb: u8) -> u32 {
        debug_assert!(cb >= 0xC0);
        let mask = 1u8 << ((cb >> 3) & 0x07);
        self.cb_update(bus, cb, |value| value | mask)
    }

    /// Read-modify-write of the operand in bits 2..0 without touching flags.
    fn cb_update(&mut self, bus: &mut dyn Bus, cb: u8, f: impl FnOnce(u8) -> u8) -> u32 {
        let index = cb & 0x07;
        let value = self.read_reg8(bus, index);
        self.write_reg8(bus, index, f(value));
        if index == HL_INDIRECT { 16 } else { 8 }
    }
}
