//! Interrupt enable (IE) and request (IF) registers.
//!
//! The controller only keeps the two bit sets and resolves priority. Mapping
//! IE/IF onto `$FFFF`/`$FF0F` is the memory subsystem's job; it should
//! forward those accesses to [`InterruptController::interrupt_enable`] and
//! friends on the CPU-owned instance.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bit layout shared by IE and IF. Only the low five bits exist.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Bits 5–7 of IF are unused and always read back as 1.
const IF_UNUSED_BITS: u8 = 0xE0;

/// The five maskable interrupt sources, ordered by priority (highest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    /// All sources in priority order.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit index in IE/IF.
    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.bit())
    }

    /// Service routine address: 0x0040 + 8 * index.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self.bit() as u16) * 8
    }

    pub fn from_index(index: u8) -> Option<Interrupt> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Interrupt::VBlank => "V-Blank",
            Interrupt::LcdStat => "LCD Status",
            Interrupt::Timer => "Timer",
            Interrupt::Serial => "Serial",
            Interrupt::Joypad => "Joypad",
        }
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterruptController {
    enable: InterruptFlags,
    requested: InterruptFlags,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Power-on state: nothing enabled, nothing pending.
    pub fn reset(&mut self) {
        self.enable = InterruptFlags::empty();
        self.requested = InterruptFlags::empty();
    }

    pub fn request(&mut self, interrupt: Interrupt) {
        self.requested.insert(interrupt.flag());
    }

    pub fn clear(&mut self, interrupt: Interrupt) {
        self.requested.remove(interrupt.flag());
    }

    /// Raw IE value.
    #[inline]
    pub fn interrupt_enable(&self) -> u8 {
        self.enable.bits()
    }

    #[inline]
    pub fn set_interrupt_enable(&mut self, value: u8) {
        self.enable = InterruptFlags::from_bits_truncate(value);
    }

    /// Raw IF value as the CPU would read it (unused bits set).
    #[inline]
    pub fn interrupt_flag(&self) -> u8 {
        self.requested.bits() | IF_UNUSED_BITS
    }

    #[inline]
    pub fn set_interrupt_flag(&mut self, value: u8) {
        self.requested = InterruptFlags::from_bits_truncate(value);
    }

    pub fn enabled(&self) -> InterruptFlags {
        self.enable
    }

    pub fn requested(&self) -> InterruptFlags {
        self.requested
    }

    pub fn set_enabled(&mut self, interrupt: Interrupt, enabled: bool) {
        self.enable.set(interrupt.flag(), enabled);
    }

    pub fn is_enabled(&self, interrupt: Interrupt) -> bool {
        self.enable.contains(interrupt.flag())
    }

    pub fn is_pending(&self, interrupt: Interrupt) -> bool {
        self.requested.contains(interrupt.flag())
    }

    /// Interrupts that are both enabled and requested.
    #[inline]
    pub fn serviceable(&self) -> InterruptFlags {
        self.enable & self.requested
    }

    pub fn has_pending(&self) -> bool {
        !self.serviceable().is_empty()
    }

    /// Highest-priority interrupt that is both enabled and pending. Lower
    /// bit index (lower vector address) wins.
    pub fn highest_priority(&self) -> Option<Interrupt> {
        let pending = self.serviceable().bits();
        if pending == 0 {
            return None;
        }
        Interrupt::from_index(pending.trailing_zeros() as u8)
    }
}

impl fmt::Display for InterruptController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InterruptController{{IE: 0x{:02X}, IF: 0x{:02X}}}",
            self.interrupt_enable(),
            self.interrupt_flag()
        )
    }
}
