use super::{Bus, Cpu};

/// T-cycles taken by the interrupt entry sequence.
pub(in crate::cpu) const INTERRUPT_CYCLES: u32 = 20;

impl Cpu {
    /// Take the highest-priority interrupt that is enabled and pending, if
    /// IME allows it.
    ///
    /// Entry clears IME and the IF bit, pushes PC, jumps to the vector and
    /// leaves HALT. Returns the cycles spent: 20 when an interrupt was
    /// taken, 0 otherwise.
    pub fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if !self.ime {
            return 0;
        }
        let Some(interrupt) = self.interrupts.highest_priority() else {
            return 0;
        };

        self.ime = false;
        self.interrupts.clear(interrupt);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();
        self.halted = false;

        log::debug!(
            "GB CPU interrupt: {} idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IE=0x{:02X} IF=0x{:02X}",
            interrupt,
            interrupt.bit(),
            interrupt.vector(),
            pc,
            self.regs.sp,
            self.interrupts.interrupt_enable(),
            self.interrupts.interrupt_flag(),
        );

        INTERRUPT_CYCLES
    }

    /// Whether a halted CPU should resume. Any interrupt that is both
    /// enabled and requested wakes HALT, even with IME clear; in that case
    /// execution continues without entering the handler.
    pub fn should_wake_from_halt(&self) -> bool {
        self.halted && self.interrupts.has_pending()
    }
}
