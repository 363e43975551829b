//! Instruction core of the Game Boy (DMG) CPU.
//!
//! The crate models the SM83 register file, the 256-entry primary and
//! CB-prefixed opcode tables, and the interrupt entry sequence. Memory is
//! reached through the [`Bus`] trait; everything above a single instruction
//! (PPU, timers, frame pacing) is left to the host.

pub mod cpu;
pub mod interrupt;
pub mod memory;

pub use cpu::opcodes;
pub use cpu::{
    BootState, Bus, Cpu, CpuConfig, CpuError, Flag, Registers, Result, PREFIX_CB,
};
pub use interrupt::{Interrupt, InterruptController, InterruptFlags};
pub use memory::FlatMemory;
