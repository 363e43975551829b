use super::operands::Operands;
use super::{BootState, Cpu, CpuConfig, Registers};
use crate::interrupt::InterruptController;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            interrupts: InterruptController::new(),
            config,
            ime_enable_pending: false,
            halt_bug: false,
            operands: Operands::default(),
        };
        cpu.reset();
        cpu
    }

    /// Reset the CPU (and its interrupt controller) to power-on state.
    /// The configuration is kept.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.halt_bug = false;
        self.operands.clear();
        self.interrupts.reset();
        if self.config.boot_state == BootState::Dmg {
            self.apply_dmg_boot_state();
        }
    }

    /// Registers as the DMG boot ROM leaves them when it hands control to
    /// the cartridge at 0x0100 (Pan Docs, "Power Up Sequence").
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z=1 N=0 H=1 C=1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}
