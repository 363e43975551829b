mod alu;
mod bus;
mod cb;
mod config;
mod error;
mod exec;
mod helpers;
mod init;
mod interrupts;
pub mod opcodes;
mod operands;
mod regs;
mod step;


pub use bus::Bus;
pub use config::{BootState, CpuConfig};
pub use error::{CpuError, Result};
pub use regs::{Flag, Registers};

use crate::interrupt::{Interrupt, InterruptController};
use operands::Operands;

/// Escape byte that selects the CB-prefixed (extended) opcode table.
pub const PREFIX_CB: u8 = 0xCB;

/// Game Boy CPU core (SM83).
///
/// Owns the register file, the execution-state flags and the interrupt
/// controller. Memory is borrowed per call through [`Bus`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    ime: bool,
    halted: bool,
    /// STOP low-power state. Cleared by [`Cpu::resume`] or a joypad request.
    stopped: bool,
    interrupts: InterruptController,
    config: CpuConfig,
    /// EI was executed with `ei_delay`; IME turns on after the next
    /// instruction completes.
    ime_enable_pending: bool,
    /// Armed by HALT when the HALT bug triggers; the next opcode fetch
    /// does not advance PC.
    halt_bug: bool,
    /// Immediate bytes the caller already fetched for the instruction
    /// currently being executed.
    operands: Operands,
}

impl Cpu {
    /// Interrupt master enable.
    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
        if !enabled {
            self.ime_enable_pending = false;
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave HALT/STOP without servicing anything, e.g. when the host
    /// observes a joypad line going low.
    pub fn resume(&mut self) {
        if self.halted || self.stopped {
            log::debug!("GB CPU resume at pc=0x{:04X}", self.regs.pc);
        }
        self.halted = false;
        self.stopped = false;
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    pub fn interrupts_mut(&mut self) -> &mut InterruptController {
        &mut self.interrupts
    }

    /// Raise an interrupt request (set its IF bit).
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupts.request(interrupt);
    }
}
