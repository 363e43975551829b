use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_jr_e8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jr(bus, true)
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let taken = self.condition(opcode);
        self.jr(bus, taken)
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jp(bus, true)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let taken = self.condition(opcode);
        self.jp(bus, taken)
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.call(bus, true)
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let taken = self.condition(opcode);
        self.call(bus, taken)
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ret(bus);
        16
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        if self.condition(opcode) {
            self.ret(bus);
            20
        } else {
            8
        }
    }

    /// RETI enables IME immediately, even with `ei_delay`.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ret(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        16
    }

    /// RST n: the target is bits 5..3 of the opcode times 8.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC7);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        16
    }
}
